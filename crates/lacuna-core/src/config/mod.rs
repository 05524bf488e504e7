//! Configuration system for lacuna.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{LacunaError, LacunaResult};
use crate::traits::{ClassifierConfig, SearchConfig, SummarizerConfig};
use crate::types::{Gap, SummaryOptions};

/// Labels, bounds and templates used by the ingestion pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestionConfig {
    /// Class every ingested summary is filed under.
    pub class_label: String,
    /// Task label for summaries and search results.
    pub task_label: String,
    /// Search query template; `{class}` and `{domain}` are substituted.
    pub query_template: String,
    /// Candidate domains offered to the classifier when none are given.
    pub candidate_labels: Vec<String>,
    /// Summarizer bounds.
    pub summary: SummaryOptions,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            class_label: "General".to_string(),
            task_label: "Summary".to_string(),
            query_template: "Missing information about {class} in {domain}".to_string(),
            candidate_labels: vec![
                "Quantum Computing".to_string(),
                "Machine Learning".to_string(),
                "Healthcare".to_string(),
                "Cryptography".to_string(),
            ],
            summary: SummaryOptions::default(),
        }
    }
}

impl IngestionConfig {
    /// Render the search query for a gap.
    ///
    /// Placeholders are expanded in one left-to-right pass, so braces inside
    /// the substituted labels are copied through verbatim.
    pub fn query_for(&self, gap: &Gap) -> String {
        let mut query = String::with_capacity(self.query_template.len());
        let mut rest = self.query_template.as_str();

        while let Some(start) = rest.find('{') {
            query.push_str(&rest[..start]);
            let tail = &rest[start..];
            if let Some(after) = tail.strip_prefix("{class}") {
                query.push_str(&gap.class);
                rest = after;
            } else if let Some(after) = tail.strip_prefix("{domain}") {
                query.push_str(&gap.domain);
                rest = after;
            } else {
                query.push('{');
                rest = &tail[1..];
            }
        }
        query.push_str(rest);
        query
    }
}

/// Main lacuna configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LacunaConfig {
    /// Zero-shot classifier configuration.
    pub classifier: ClassifierConfig,
    /// Summarizer configuration.
    pub summarizer: SummarizerConfig,
    /// Search service configuration.
    pub search: SearchConfig,
    /// Pipeline labels and bounds.
    pub ingestion: IngestionConfig,
}

impl LacunaConfig {
    /// Default config location: `~/.lacuna/config.toml`.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".lacuna"))
            .unwrap_or_else(|| PathBuf::from(".lacuna"))
            .join("config.toml")
    }

    /// Load configuration from a file (TOML, JSON, or YAML).
    pub fn from_file(path: impl AsRef<Path>) -> LacunaResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        match ext {
            Some("toml") => Ok(toml::from_str(&content)?),
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| LacunaError::Configuration(e.to_string())),
            Some("yaml" | "yml") => Ok(serde_yaml::from_str(&content)?),
            _ => Err(LacunaError::Configuration(
                "Unsupported config file format. Use .toml, .json, or .yaml".to_string(),
            )),
        }
    }

    /// Load configuration from environment variables on top of the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Override fields from environment variables.
    ///
    /// A set variable always wins over the value loaded from a file:
    /// `LACUNA_CLASSIFIER_MODEL`, `LACUNA_SUMMARIZER_MODEL`, `HF_TOKEN`
    /// (or `HUGGINGFACE_API_KEY`, used for both models),
    /// `LACUNA_SEARCH_ENDPOINT` and `LACUNA_SEARCH_API_KEY`.
    pub fn apply_env(&mut self) {
        if let Ok(model) = std::env::var("LACUNA_CLASSIFIER_MODEL") {
            self.classifier.model = model;
        }
        if let Ok(model) = std::env::var("LACUNA_SUMMARIZER_MODEL") {
            self.summarizer.model = model;
        }
        if let Ok(token) = std::env::var("HF_TOKEN").or_else(|_| std::env::var("HUGGINGFACE_API_KEY"))
        {
            self.classifier.api_key = Some(token.clone());
            self.summarizer.api_key = Some(token);
        }

        if let Ok(endpoint) = std::env::var("LACUNA_SEARCH_ENDPOINT") {
            self.search.endpoint = endpoint;
        }
        if let Ok(api_key) = std::env::var("LACUNA_SEARCH_API_KEY") {
            self.search.api_key = Some(api_key);
        }
    }

    /// Serialize as TOML.
    pub fn to_toml(&self) -> LacunaResult<String> {
        toml::to_string_pretty(self).map_err(|e| LacunaError::Internal(e.to_string()))
    }

    /// Build configuration using builder pattern.
    pub fn builder() -> LacunaConfigBuilder {
        LacunaConfigBuilder::default()
    }
}

/// Builder for LacunaConfig.
#[derive(Default)]
pub struct LacunaConfigBuilder {
    config: LacunaConfig,
}

impl LacunaConfigBuilder {
    /// Set classifier configuration.
    pub fn classifier(mut self, config: ClassifierConfig) -> Self {
        self.config.classifier = config;
        self
    }

    /// Set summarizer configuration.
    pub fn summarizer(mut self, config: SummarizerConfig) -> Self {
        self.config.summarizer = config;
        self
    }

    /// Set search configuration.
    pub fn search(mut self, config: SearchConfig) -> Self {
        self.config.search = config;
        self
    }

    /// Set ingestion configuration.
    pub fn ingestion(mut self, config: IngestionConfig) -> Self {
        self.config.ingestion = config;
        self
    }

    /// Replace the default candidate labels.
    pub fn candidate_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.ingestion.candidate_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> LacunaConfig {
        self.config
    }
}
