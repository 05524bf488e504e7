//! Gap and novel-idea records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A (domain, class) pair whose class has no recorded task content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gap {
    pub domain: String,
    pub class: String,
}

impl Gap {
    /// Create a new gap.
    pub fn new(domain: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            class: class.into(),
        }
    }
}

impl fmt::Display for Gap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.domain, self.class)
    }
}

/// A gap for which an external search found nothing.
///
/// Identical records may coexist; resolution removes all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NovelIdea {
    pub domain: String,
    pub class: String,
}

impl NovelIdea {
    /// Create a new novel idea record.
    pub fn new(domain: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            class: class.into(),
        }
    }

    /// Whether this record refers to the given pair.
    pub fn matches(&self, domain: &str, class: &str) -> bool {
        self.domain == domain && self.class == class
    }
}

/// What happened to a gap after one search attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapOutcome {
    /// The search returned content; it was stored and matching ideas resolved.
    Filled,
    /// Nothing was found; a novel idea was recorded.
    Unresolved,
}

/// Result of one `process_knowledge_gaps` pass, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapReport {
    pub filled: Vec<Gap>,
    pub unresolved: Vec<Gap>,
}

impl GapReport {
    /// Record the outcome for a gap.
    pub fn record(&mut self, gap: Gap, outcome: GapOutcome) {
        match outcome {
            GapOutcome::Filled => self.filled.push(gap),
            GapOutcome::Unresolved => self.unresolved.push(gap),
        }
    }

    /// Number of gaps processed.
    pub fn total(&self) -> usize {
        self.filled.len() + self.unresolved.len()
    }
}
