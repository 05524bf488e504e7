//! Search client trait and configuration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Core SearchClient trait - the single seam for external lookups.
///
/// Implementations fold every failure mode (transport error, non-success
/// status, empty or malformed body) into `None`. Callers cannot tell
/// "unreachable" apart from "nothing exists".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Return the text of the first result for `query`, if any.
    async fn search(&self, query: &str) -> Option<String>;
}

/// Search service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Endpoint receiving `GET <endpoint>?q=<query>`.
    #[serde(default = "default_search_endpoint")]
    pub endpoint: String,
    /// Bearer token (if not using environment variable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_search_endpoint() -> String {
    "https://api.perplexity.ai/search".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_search_endpoint(),
            api_key: None,
        }
    }
}
