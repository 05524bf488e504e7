//! Hugging Face zero-shot classifier.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use lacuna_core::error::{ErrorCode, LacunaError, LacunaResult};
use lacuna_core::traits::{Classifier, ClassifierConfig};
use lacuna_core::types::Classification;

use crate::hf_client::HfClient;

/// Zero-shot classifier backed by the Hugging Face Inference API.
pub struct HuggingFaceClassifier {
    client: HfClient,
    config: ClassifierConfig,
}

#[derive(Debug, Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: &'a [String],
    multi_label: bool,
}

/// Either the pipeline shape or the flat `[{label, score}]` shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ZeroShotResponse {
    Ranked { labels: Vec<String>, scores: Vec<f32> },
    Scored(Vec<ScoredLabel>),
}

#[derive(Debug, Deserialize)]
struct ScoredLabel {
    label: String,
    score: f32,
}

impl HuggingFaceClassifier {
    /// Create a new Hugging Face classifier.
    pub fn new(config: ClassifierConfig) -> LacunaResult<Self> {
        let client = HfClient::new(config.api_key.clone(), config.base_url.clone())?;

        let mut config = config;
        if config.model.is_empty() {
            config.model = ClassifierConfig::default().model;
        }

        Ok(Self { client, config })
    }
}

/// Parse a zero-shot response body into a ranked classification.
pub(crate) fn parse_zero_shot(body: &str) -> LacunaResult<Classification> {
    let response: ZeroShotResponse =
        serde_json::from_str(body).map_err(|e| LacunaError::Classification {
            message: format!("Failed to parse response: {}", e),
            code: ErrorCode::ClsInvalidResponse,
            source: Some(Box::new(e)),
        })?;

    let pairs = match response {
        ZeroShotResponse::Ranked { labels, scores } => {
            if labels.len() != scores.len() {
                return Err(LacunaError::Classification {
                    message: format!(
                        "Mismatched response: {} labels, {} scores",
                        labels.len(),
                        scores.len()
                    ),
                    code: ErrorCode::ClsInvalidResponse,
                    source: None,
                });
            }
            labels.into_iter().zip(scores).collect()
        }
        ZeroShotResponse::Scored(items) => items.into_iter().map(|s| (s.label, s.score)).collect(),
    };

    Ok(Classification::from_scored(pairs))
}

#[async_trait]
impl Classifier for HuggingFaceClassifier {
    async fn classify(
        &self,
        text: &str,
        candidate_labels: &[String],
    ) -> LacunaResult<Classification> {
        let parameters = ZeroShotParameters {
            candidate_labels,
            multi_label: false,
        };

        let body = self
            .client
            .infer(&self.config.model, text, parameters, LacunaError::classification)
            .await?;

        let classification = parse_zero_shot(&body)?;
        tracing::debug!(
            model = %self.config.model,
            top = ?classification.top_label(),
            "Zero-shot classification"
        );
        Ok(classification)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
