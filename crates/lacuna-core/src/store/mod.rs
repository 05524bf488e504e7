//! In-memory knowledge store.
//!
//! Content lives in a three-level map, domain → class → task → entries.
//! Writes create missing levels; reads never do, so looking something up
//! cannot turn a missing class into an empty one (and therefore into a gap).
//! Every level iterates in insertion order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{Gap, NovelIdea};

/// Task label → ordered content entries.
pub type TaskMap = IndexMap<String, Vec<String>>;

/// Class label → tasks.
pub type ClassMap = IndexMap<String, TaskMap>;

/// Nested knowledge store plus the list of open novel ideas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeStore {
    data: IndexMap<String, ClassMap>,
    novel_ideas: Vec<NovelIdea>,
}

impl KnowledgeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `content` under (domain, class, task), creating missing levels.
    ///
    /// Duplicates are kept; entries stay in arrival order.
    pub fn add_knowledge(
        &mut self,
        domain: impl Into<String>,
        class: impl Into<String>,
        task: impl Into<String>,
        content: impl Into<String>,
    ) {
        self.data
            .entry(domain.into())
            .or_default()
            .entry(class.into())
            .or_default()
            .entry(task.into())
            .or_default()
            .push(content.into());
    }

    /// Register a class with no tasks yet.
    ///
    /// Leaves an existing class untouched.
    pub fn declare_class(&mut self, domain: impl Into<String>, class: impl Into<String>) {
        self.data
            .entry(domain.into())
            .or_default()
            .entry(class.into())
            .or_default();
    }

    /// Every (domain, class) whose task map is empty, in store order.
    pub fn get_gaps(&self) -> Vec<Gap> {
        self.data
            .iter()
            .flat_map(|(domain, classes)| {
                classes
                    .iter()
                    .filter(|(_, tasks)| tasks.is_empty())
                    .map(move |(class, _)| Gap::new(domain.as_str(), class.as_str()))
            })
            .collect()
    }

    /// Record an unresolved gap. No uniqueness check.
    pub fn add_novel_idea(&mut self, domain: impl Into<String>, class: impl Into<String>) {
        self.novel_ideas.push(NovelIdea::new(domain, class));
    }

    /// Remove every novel idea matching (domain, class).
    pub fn resolve_novel_idea(&mut self, domain: &str, class: &str) {
        self.novel_ideas.retain(|idea| !idea.matches(domain, class));
    }

    /// Open novel ideas in insertion order.
    pub fn novel_ideas(&self) -> &[NovelIdea] {
        &self.novel_ideas
    }

    /// Entries stored under (domain, class, task), if that task exists.
    pub fn entries(&self, domain: &str, class: &str, task: &str) -> Option<&[String]> {
        self.data
            .get(domain)?
            .get(class)?
            .get(task)
            .map(Vec::as_slice)
    }

    /// Domain labels in insertion order.
    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Classes of a domain; `None` if the domain is unknown.
    pub fn classes(&self, domain: &str) -> Option<&ClassMap> {
        self.data.get(domain)
    }

    /// Tasks of a class; `None` if domain or class is unknown.
    pub fn tasks(&self, domain: &str, class: &str) -> Option<&TaskMap> {
        self.data.get(domain)?.get(class)
    }

    /// True when no domain has been recorded.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Total number of stored content strings.
    pub fn entry_count(&self) -> usize {
        self.data
            .values()
            .flat_map(IndexMap::values)
            .flat_map(IndexMap::values)
            .map(Vec::len)
            .sum()
    }
}
