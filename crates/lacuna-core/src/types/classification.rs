//! Classifier and summarizer payload types.

use serde::{Deserialize, Serialize};

/// Ranked output of a zero-shot classifier.
///
/// `labels` and `scores` are parallel and ordered by descending confidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub labels: Vec<String>,
    pub scores: Vec<f32>,
}

impl Classification {
    /// Build a classification from unordered (label, score) pairs.
    pub fn from_scored(mut pairs: Vec<(String, f32)>) -> Self {
        pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        let (labels, scores) = pairs.into_iter().unzip();
        Self { labels, scores }
    }

    /// The highest-confidence label, if any.
    pub fn top_label(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }
}

/// Length bounds and decoding mode for summarization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    /// Minimum summary length in model tokens.
    pub min_length: u32,
    /// Maximum summary length in model tokens.
    pub max_length: u32,
    /// Sample instead of greedy decoding.
    pub do_sample: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            min_length: 25,
            max_length: 50,
            do_sample: false,
        }
    }
}
