//! Hugging Face summarizer.

use async_trait::async_trait;
use serde::Deserialize;

use lacuna_core::error::{ErrorCode, LacunaError, LacunaResult};
use lacuna_core::traits::{Summarizer, SummarizerConfig};
use lacuna_core::types::SummaryOptions;

use crate::hf_client::HfClient;

/// Summarizer backed by the Hugging Face Inference API.
pub struct HuggingFaceSummarizer {
    client: HfClient,
    config: SummarizerConfig,
}

#[derive(Debug, Deserialize)]
struct SummaryItem {
    summary_text: String,
}

impl HuggingFaceSummarizer {
    /// Create a new Hugging Face summarizer.
    pub fn new(config: SummarizerConfig) -> LacunaResult<Self> {
        let client = HfClient::new(config.api_key.clone(), config.base_url.clone())?;

        let mut config = config;
        if config.model.is_empty() {
            config.model = SummarizerConfig::default().model;
        }

        Ok(Self { client, config })
    }
}

/// Take the first `summary_text` from a summarization response body.
pub(crate) fn parse_summary(body: &str) -> LacunaResult<String> {
    let items: Vec<SummaryItem> =
        serde_json::from_str(body).map_err(|e| LacunaError::Summarization {
            message: format!("Failed to parse response: {}", e),
            code: ErrorCode::SumInvalidResponse,
            source: Some(Box::new(e)),
        })?;

    items
        .into_iter()
        .next()
        .map(|item| item.summary_text)
        .ok_or_else(|| LacunaError::Summarization {
            message: "summarizer returned no summaries".to_string(),
            code: ErrorCode::SumEmptySummary,
            source: None,
        })
}

#[async_trait]
impl Summarizer for HuggingFaceSummarizer {
    async fn summarize(&self, text: &str, options: &SummaryOptions) -> LacunaResult<String> {
        let body = self
            .client
            .infer(&self.config.model, text, options, LacunaError::summarization)
            .await?;

        let summary = parse_summary(&body)?;
        tracing::debug!(model = %self.config.model, chars = summary.len(), "Summarized text");
        Ok(summary)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_summary() {
        let body = r#"[{"summary_text": "Quantum computing evolves."}, {"summary_text": "ignored"}]"#;
        assert_eq!(parse_summary(body).unwrap(), "Quantum computing evolves.");
    }

    #[test]
    fn test_parse_empty_list() {
        let err = parse_summary("[]").unwrap_err();
        assert_eq!(err.code(), ErrorCode::SumEmptySummary);
    }

    #[test]
    fn test_parse_error_object() {
        let err = parse_summary(r#"{"error": "Model is loading"}"#).unwrap_err();
        assert_eq!(err.code(), ErrorCode::SumInvalidResponse);
    }

    #[test]
    fn test_options_serialize_as_parameters() {
        let json = serde_json::to_value(SummaryOptions::default()).unwrap();
        assert_eq!(json["min_length"], 25);
        assert_eq!(json["max_length"], 50);
        assert_eq!(json["do_sample"], false);
    }
}
