//! Gap orchestration: ingest, detect gaps, try to fill them.

use std::sync::Arc;

use crate::config::IngestionConfig;
use crate::error::{LacunaError, LacunaResult};
use crate::store::KnowledgeStore;
use crate::traits::{Classifier, SearchClient, Summarizer};
use crate::types::{Gap, GapOutcome, GapReport};

/// Drives the classify → summarize → store → search pipeline.
///
/// Owns its [`KnowledgeStore`] exclusively. Every provider call is awaited
/// before the next one is issued.
pub struct GapOrchestrator {
    classifier: Arc<dyn Classifier>,
    summarizer: Arc<dyn Summarizer>,
    search: Arc<dyn SearchClient>,
    options: IngestionConfig,
    store: KnowledgeStore,
}

impl GapOrchestrator {
    /// Create an orchestrator with default labels and summary bounds.
    pub fn new(
        classifier: Arc<dyn Classifier>,
        summarizer: Arc<dyn Summarizer>,
        search: Arc<dyn SearchClient>,
    ) -> Self {
        Self::with_options(classifier, summarizer, search, IngestionConfig::default())
    }

    /// Create an orchestrator with explicit ingestion options.
    pub fn with_options(
        classifier: Arc<dyn Classifier>,
        summarizer: Arc<dyn Summarizer>,
        search: Arc<dyn SearchClient>,
        options: IngestionConfig,
    ) -> Self {
        Self {
            classifier,
            summarizer,
            search,
            options,
            store: KnowledgeStore::new(),
        }
    }

    /// Read access to the store.
    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    /// Write access to the store, e.g. to declare expected classes.
    pub fn store_mut(&mut self) -> &mut KnowledgeStore {
        &mut self.store
    }

    /// Consume the orchestrator and return its store.
    pub fn into_store(self) -> KnowledgeStore {
        self.store
    }

    /// Classify `text` and return the highest-confidence label.
    pub async fn categorize_text(
        &self,
        text: &str,
        candidate_labels: &[String],
    ) -> LacunaResult<String> {
        let classification = self.classifier.classify(text, candidate_labels).await?;
        classification
            .top_label()
            .map(str::to_string)
            .ok_or_else(LacunaError::no_labels)
    }

    /// Classify, summarize and store each text in order.
    ///
    /// The first provider error aborts the call; texts handled before it
    /// stay in the store.
    pub async fn ingest_data(
        &mut self,
        texts: &[String],
        candidate_labels: &[String],
    ) -> LacunaResult<()> {
        for (index, text) in texts.iter().enumerate() {
            let domain = self.categorize_text(text, candidate_labels).await?;
            let summary = self
                .summarizer
                .summarize(text, &self.options.summary)
                .await?;

            tracing::debug!(index, domain = %domain, "Ingested text");
            self.store.add_knowledge(
                domain,
                self.options.class_label.as_str(),
                self.options.task_label.as_str(),
                summary,
            );
        }

        tracing::info!(count = texts.len(), "Ingestion complete");
        Ok(())
    }

    /// Current gaps, recomputed from the store.
    pub fn identify_gaps(&self) -> Vec<Gap> {
        self.store.get_gaps()
    }

    /// One search request; `None` covers every kind of failure.
    pub async fn search_missing_information(&self, query: &str) -> Option<String> {
        self.search.search(query).await
    }

    /// Try to fill one gap.
    ///
    /// A present, non-empty result is stored under the task label and clears
    /// all matching novel ideas. Anything else appends one novel idea.
    pub async fn process_gap(&mut self, domain: &str, class: &str) -> GapOutcome {
        let query = self.options.query_for(&Gap::new(domain, class));
        tracing::debug!(query = %query, "Searching for missing information");

        match self.search_missing_information(&query).await {
            Some(result) if !result.is_empty() => {
                self.store.add_knowledge(
                    domain,
                    class,
                    self.options.task_label.as_str(),
                    result,
                );
                self.store.resolve_novel_idea(domain, class);
                GapOutcome::Filled
            }
            _ => {
                self.store.add_novel_idea(domain, class);
                GapOutcome::Unresolved
            }
        }
    }

    /// Process every gap present when the call starts.
    ///
    /// Gaps that appear while processing are left for the next call.
    pub async fn process_knowledge_gaps(&mut self) -> GapReport {
        let gaps = self.identify_gaps();
        tracing::info!(gaps = gaps.len(), "Processing knowledge gaps");

        let mut report = GapReport::default();
        for gap in gaps {
            let outcome = self.process_gap(&gap.domain, &gap.class).await;
            tracing::debug!(gap = %gap, ?outcome, "Gap processed");
            report.record(gap, outcome);
        }

        tracing::info!(
            filled = report.filled.len(),
            unresolved = report.unresolved.len(),
            "Gap processing complete"
        );
        report
    }
}
