//! End-to-end tests for the ingest → gap → search pipeline.
//!
//! Providers are replaced by fixed stand-ins so every run is deterministic.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lacuna_core::{
    Classification, Classifier, Gap, GapOrchestrator, LacunaResult, NovelIdea, SearchClient,
    SummaryOptions, Summarizer,
};

/// Classifies by keyword; falls back to the first candidate.
struct KeywordClassifier {
    keywords: Vec<(&'static str, &'static str)>,
}

#[async_trait]
impl Classifier for KeywordClassifier {
    async fn classify(
        &self,
        text: &str,
        candidate_labels: &[String],
    ) -> LacunaResult<Classification> {
        let winner = self
            .keywords
            .iter()
            .find(|(keyword, _)| text.contains(keyword))
            .map(|(_, label)| label.to_string())
            .or_else(|| candidate_labels.first().cloned());

        let pairs = candidate_labels
            .iter()
            .map(|label| {
                let score = if Some(label) == winner.as_ref() { 0.9 } else { 0.1 };
                (label.clone(), score)
            })
            .collect();
        Ok(Classification::from_scored(pairs))
    }

    fn model_name(&self) -> &str {
        "keyword"
    }
}

/// Returns a canned summary per input text.
struct CannedSummarizer {
    summaries: HashMap<&'static str, &'static str>,
}

#[async_trait]
impl Summarizer for CannedSummarizer {
    async fn summarize(&self, text: &str, _options: &SummaryOptions) -> LacunaResult<String> {
        Ok(self.summaries.get(text).copied().unwrap_or("").to_string())
    }

    fn model_name(&self) -> &str {
        "canned"
    }
}

/// Pops scripted answers and records the queries it saw.
#[derive(Default)]
struct ScriptedSearch {
    answers: Mutex<VecDeque<Option<String>>>,
    queries: Mutex<Vec<String>>,
}

impl ScriptedSearch {
    fn new(answers: Vec<Option<&str>>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().map(|a| a.map(str::to_string)).collect()),
            queries: Mutex::new(Vec::new()),
        }
    }

    fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchClient for ScriptedSearch {
    async fn search(&self, query: &str) -> Option<String> {
        self.queries.lock().unwrap().push(query.to_string());
        self.answers.lock().unwrap().pop_front().flatten()
    }
}

const QUANTUM_TEXT: &str =
    "Quantum computing is a rapidly evolving field with applications in cryptography.";
const HEALTH_TEXT: &str =
    "Machine learning techniques are widely used in healthcare for predictive analysis.";

fn candidate_labels() -> Vec<String> {
    ["Quantum Computing", "Machine Learning", "Healthcare", "Cryptography"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn orchestrator(search: Arc<ScriptedSearch>) -> GapOrchestrator {
    let classifier = KeywordClassifier {
        keywords: vec![("Quantum", "Quantum Computing"), ("healthcare", "Healthcare")],
    };
    let summarizer = CannedSummarizer {
        summaries: HashMap::from([
            (QUANTUM_TEXT, "Quantum computing evolves quickly."),
            (HEALTH_TEXT, "ML supports predictive healthcare."),
        ]),
    };
    GapOrchestrator::new(Arc::new(classifier), Arc::new(summarizer), search)
}

#[tokio::test]
async fn test_ingest_two_domains() {
    let search = Arc::new(ScriptedSearch::default());
    let mut orch = orchestrator(search.clone());

    let texts = vec![QUANTUM_TEXT.to_string(), HEALTH_TEXT.to_string()];
    orch.ingest_data(&texts, &candidate_labels()).await.unwrap();

    let store = orch.store();
    assert_eq!(
        store.domains().collect::<Vec<_>>(),
        vec!["Quantum Computing", "Healthcare"]
    );
    for (domain, summary) in [
        ("Quantum Computing", "Quantum computing evolves quickly."),
        ("Healthcare", "ML supports predictive healthcare."),
    ] {
        let classes = store.classes(domain).unwrap();
        assert_eq!(classes.keys().collect::<Vec<_>>(), vec!["General"]);
        assert_eq!(store.entries(domain, "General", "Summary").unwrap(), [summary]);
    }

    // Ingestion alone never produces a gap, so no search is issued.
    let report = orch.process_knowledge_gaps().await;
    assert_eq!(report.total(), 0);
    assert!(search.queries().is_empty());
}

#[tokio::test]
async fn test_gaps_from_one_snapshot_only() {
    let search = Arc::new(ScriptedSearch::new(vec![None, Some("Shor's algorithm.")]));
    let mut orch = orchestrator(search.clone());

    orch.store_mut().declare_class("Healthcare", "Diagnostics");
    orch.store_mut().declare_class("Quantum Computing", "Algorithms");

    let report = orch.process_knowledge_gaps().await;

    assert_eq!(report.unresolved, vec![Gap::new("Healthcare", "Diagnostics")]);
    assert_eq!(report.filled, vec![Gap::new("Quantum Computing", "Algorithms")]);
    assert_eq!(
        search.queries(),
        vec![
            "Missing information about Diagnostics in Healthcare",
            "Missing information about Algorithms in Quantum Computing",
        ]
    );
    assert_eq!(
        orch.store().novel_ideas(),
        [NovelIdea::new("Healthcare", "Diagnostics")]
    );
}

#[tokio::test]
async fn test_novel_idea_resolved_on_later_success() {
    let search = Arc::new(ScriptedSearch::new(vec![None, None, Some("Biomarkers.")]));
    let mut orch = orchestrator(search.clone());
    orch.store_mut().declare_class("Healthcare", "Diagnostics");

    orch.process_knowledge_gaps().await;
    orch.process_knowledge_gaps().await;
    assert_eq!(orch.store().novel_ideas().len(), 2);

    let report = orch.process_knowledge_gaps().await;
    assert_eq!(report.filled, vec![Gap::new("Healthcare", "Diagnostics")]);
    assert!(orch.store().novel_ideas().is_empty());
    assert!(orch.identify_gaps().is_empty());

    // Nothing left to search for.
    let report = orch.process_knowledge_gaps().await;
    assert_eq!(report.total(), 0);
    assert_eq!(search.queries().len(), 3);
}
