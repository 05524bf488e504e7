//! Shared HTTP plumbing for the Hugging Face Inference API.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use lacuna_core::error::{LacunaError, LacunaResult};

pub(crate) const HF_INFERENCE_URL: &str = "https://api-inference.huggingface.co";

/// Authenticated client for `POST {base_url}/models/{model}`.
pub(crate) struct HfClient {
    client: Client,
    base_url: String,
    token: Option<SecretString>,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a, P: Serialize> {
    inputs: &'a str,
    parameters: P,
    options: InferenceOptions,
}

impl HfClient {
    /// Build a client; the token falls back to `HF_TOKEN` / `HUGGINGFACE_API_KEY`.
    pub(crate) fn new(api_key: Option<String>, base_url: Option<String>) -> LacunaResult<Self> {
        let token = api_key
            .or_else(|| std::env::var("HF_TOKEN").ok())
            .or_else(|| std::env::var("HUGGINGFACE_API_KEY").ok())
            .map(SecretString::new);

        if token.is_none() {
            tracing::warn!("No Hugging Face token configured; using anonymous inference");
        }

        let client = Client::builder()
            .build()
            .map_err(|e| LacunaError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = base_url
            .unwrap_or_else(|| HF_INFERENCE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Run one inference call and return the raw response body.
    ///
    /// Transport failures are network errors. Non-success statuses go through
    /// [`LacunaError::from_http_status`], with `on_error` as the fallback kind.
    pub(crate) async fn infer<P: Serialize>(
        &self,
        model: &str,
        inputs: &str,
        parameters: P,
        on_error: fn(String) -> LacunaError,
    ) -> LacunaResult<String> {
        let request = InferenceRequest {
            inputs,
            parameters,
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let mut builder = self
            .client
            .post(format!("{}/models/{}", self.base_url, model))
            .json(&request);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token.expose_secret());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| LacunaError::network(format!("Hugging Face request to {} failed", model), e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| on_error(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(LacunaError::from_http_status(status.as_u16(), &body, on_error));
        }

        Ok(body)
    }
}
