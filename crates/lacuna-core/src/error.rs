//! Error types for lacuna operations.
//!
//! Search failures never show up here: they are folded into an absent
//! result at the [`SearchClient`](crate::traits::SearchClient) seam. Everything
//! else that can go wrong while classifying, summarizing or configuring is a
//! [`LacunaError`] with a structured [`ErrorCode`].

use thiserror::Error;

/// Result type alias for lacuna operations.
pub type LacunaResult<T> = Result<T, LacunaError>;

/// Main error type for all lacuna operations.
#[derive(Error, Debug)]
pub enum LacunaError {
    /// Input validation failed.
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        code: ErrorCode,
        suggestion: Option<String>,
    },

    /// Zero-shot classification failed.
    #[error("Classification error: {message}")]
    Classification {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Summarization failed.
    #[error("Summarization error: {message}")]
    Summarization {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Authentication with a provider failed.
    #[error("Authentication error: {message}")]
    Authentication {
        message: String,
        code: ErrorCode,
    },

    /// Provider rate limit exceeded.
    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        message: String,
        code: ErrorCode,
        retry_after: Option<u64>,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network error.
    #[error("Network error: {message}")]
    Network {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation (VAL_xxx)
    ValInvalidInput,

    // Classification (CLS_xxx)
    ClsRequestFailed,
    ClsNoLabels,
    ClsInvalidResponse,

    // Summarization (SUM_xxx)
    SumRequestFailed,
    SumEmptySummary,
    SumInvalidResponse,

    // Authentication (AUTH_xxx)
    AuthInvalidKey,

    // Rate Limit (RATE_xxx)
    RateLimitExceeded,

    // Network (NET_xxx)
    NetConnectionFailed,

    // Internal
    Internal,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValInvalidInput => "VAL_001",
            ErrorCode::ClsRequestFailed => "CLS_001",
            ErrorCode::ClsNoLabels => "CLS_002",
            ErrorCode::ClsInvalidResponse => "CLS_003",
            ErrorCode::SumRequestFailed => "SUM_001",
            ErrorCode::SumEmptySummary => "SUM_002",
            ErrorCode::SumInvalidResponse => "SUM_003",
            ErrorCode::AuthInvalidKey => "AUTH_001",
            ErrorCode::RateLimitExceeded => "RATE_001",
            ErrorCode::NetConnectionFailed => "NET_001",
            ErrorCode::Internal => "INT_001",
        }
    }
}

impl LacunaError {
    /// Create a classification error.
    pub fn classification(message: impl Into<String>) -> Self {
        Self::Classification {
            message: message.into(),
            code: ErrorCode::ClsRequestFailed,
            source: None,
        }
    }

    /// The classifier answered but ranked no labels.
    pub fn no_labels() -> Self {
        Self::Classification {
            message: "classifier returned no labels".to_string(),
            code: ErrorCode::ClsNoLabels,
            source: None,
        }
    }

    /// Create a summarization error.
    pub fn summarization(message: impl Into<String>) -> Self {
        Self::Summarization {
            message: message.into(),
            code: ErrorCode::SumRequestFailed,
            source: None,
        }
    }

    /// Create a network error, keeping the underlying cause.
    pub fn network<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: message.into(),
            code: ErrorCode::NetConnectionFailed,
            source: Some(Box::new(source)),
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { code, .. } => *code,
            Self::Classification { code, .. } => *code,
            Self::Summarization { code, .. } => *code,
            Self::Authentication { code, .. } => *code,
            Self::RateLimit { code, .. } => *code,
            Self::Network { code, .. } => *code,
            _ => ErrorCode::Internal,
        }
    }

    /// Get a user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::Authentication { .. } => {
                Some("Please check your API token (HF_TOKEN or api_key in config)")
            }
            Self::RateLimit { .. } => Some("Please wait before making more requests"),
            Self::Validation { suggestion, .. } => suggestion.as_deref(),
            Self::Classification { .. } => Some("Please check your classifier configuration"),
            Self::Summarization { .. } => Some("Please check your summarizer configuration"),
            Self::Network { .. } => Some("Please check that the inference endpoint is reachable"),
            _ => None,
        }
    }

    /// Convert a non-success provider response into an error.
    ///
    /// `fallback` builds the error for statuses without a dedicated variant,
    /// so a classifier failure stays a classification error.
    pub fn from_http_status(status: u16, body: &str, fallback: fn(String) -> Self) -> Self {
        match status {
            400 | 422 => Self::Validation {
                message: body.to_string(),
                code: ErrorCode::ValInvalidInput,
                suggestion: Some("Please check your request parameters".to_string()),
            },
            401 | 403 => Self::Authentication {
                message: body.to_string(),
                code: ErrorCode::AuthInvalidKey,
            },
            429 => Self::RateLimit {
                message: body.to_string(),
                code: ErrorCode::RateLimitExceeded,
                retry_after: None,
            },
            _ => fallback(format!("HTTP {}: {}", status, body)),
        }
    }
}

impl From<toml::de::Error> for LacunaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<serde_yaml::Error> for LacunaError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}
