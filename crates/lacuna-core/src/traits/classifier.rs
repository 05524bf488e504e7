//! Zero-shot classifier trait and configuration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LacunaResult;
use crate::types::Classification;

/// Core Classifier trait - all zero-shot classification providers implement this.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Rank `candidate_labels` by how well they describe `text`.
    ///
    /// An empty label set is passed to the provider as-is.
    async fn classify(
        &self,
        text: &str,
        candidate_labels: &[String],
    ) -> LacunaResult<Classification>;

    /// Get the model name.
    fn model_name(&self) -> &str;
}

/// Classifier provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierProvider {
    #[default]
    HuggingFace,
}

/// Classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Provider type.
    #[serde(default)]
    pub provider: ClassifierProvider,
    /// Model name/identifier.
    #[serde(default = "default_classifier_model")]
    pub model: String,
    /// API key (if not using environment variable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL for API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_classifier_model() -> String {
    "facebook/bart-large-mnli".to_string()
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            provider: ClassifierProvider::default(),
            model: default_classifier_model(),
            api_key: None,
            base_url: None,
        }
    }
}
