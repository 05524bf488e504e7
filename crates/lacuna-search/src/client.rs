//! HTTP search client.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use lacuna_core::error::{LacunaError, LacunaResult};
use lacuna_core::traits::{SearchClient, SearchConfig};

/// Search client issuing `GET <endpoint>?q=<query>`.
///
/// Every failure is reported as `None`; the cause is only logged.
pub struct HttpSearchClient {
    client: Client,
    endpoint: Url,
    api_key: Option<SecretString>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<serde_json::Value>,
}

impl HttpSearchClient {
    /// Create a new search client.
    ///
    /// The token falls back to `LACUNA_SEARCH_API_KEY`. An unparsable endpoint
    /// is a configuration error, not a folded search failure.
    pub fn new(config: SearchConfig) -> LacunaResult<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            LacunaError::Configuration(format!("Invalid search endpoint '{}': {}", config.endpoint, e))
        })?;

        let api_key = config
            .api_key
            .or_else(|| std::env::var("LACUNA_SEARCH_API_KEY").ok())
            .map(SecretString::new);

        let client = Client::builder()
            .build()
            .map_err(|e| LacunaError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// The request URL for `query`, with the query percent-encoded.
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", query);
        url
    }

    async fn fetch(&self, query: &str) -> Result<String, reqwest::Error> {
        let mut request = self.client.get(self.request_url(query));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }
        request.send().await?.error_for_status()?.text().await
    }
}

/// First result's text from a search response body, if there is one.
///
/// Only `results[0]` is inspected; later entries may have any shape.
pub(crate) fn first_result_text(body: &str) -> Option<String> {
    let response = match serde_json::from_str::<SearchResponse>(body) {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("Malformed search response: {}", e);
            return None;
        }
    };

    let first = response.results.into_iter().next()?;
    match first.get("text").and_then(serde_json::Value::as_str) {
        Some(text) => Some(text.to_string()),
        None => {
            tracing::debug!("First search result has no text");
            None
        }
    }
}

#[async_trait]
impl SearchClient for HttpSearchClient {
    async fn search(&self, query: &str) -> Option<String> {
        let body = match self.fetch(query).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(query = %query, "Search request failed: {}", e);
                return None;
            }
        };

        let result = first_result_text(&body);
        if result.is_none() {
            tracing::debug!(query = %query, "Search returned no results");
        }
        result
    }
}
