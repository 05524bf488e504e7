//! Summarizer trait and configuration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LacunaResult;
use crate::types::SummaryOptions;

/// Core Summarizer trait - all summarization providers implement this.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce a single summary of `text` within the given bounds.
    async fn summarize(&self, text: &str, options: &SummaryOptions) -> LacunaResult<String>;

    /// Get the model name.
    fn model_name(&self) -> &str;
}

/// Summarizer provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerProvider {
    #[default]
    HuggingFace,
}

/// Summarizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Provider type.
    #[serde(default)]
    pub provider: SummarizerProvider,
    /// Model name/identifier.
    #[serde(default = "default_summarizer_model")]
    pub model: String,
    /// API key (if not using environment variable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL for API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_summarizer_model() -> String {
    "sshleifer/distilbart-cnn-12-6".to_string()
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            provider: SummarizerProvider::default(),
            model: default_summarizer_model(),
            api_key: None,
            base_url: None,
        }
    }
}
