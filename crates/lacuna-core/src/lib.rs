//! lacuna-core - Core library for lacuna.
//!
//! This crate provides the types, provider traits, knowledge store and gap
//! orchestration for the lacuna knowledge-gap tracker.
//!
//! # Example
//!
//! ```ignore
//! use lacuna_core::GapOrchestrator;
//!
//! let mut orchestrator = GapOrchestrator::new(classifier, summarizer, search);
//!
//! // Classify and summarize texts into the store
//! orchestrator.ingest_data(&texts, &candidate_labels).await?;
//!
//! // Try to fill every empty class with one search each
//! let report = orchestrator.process_knowledge_gaps().await;
//! ```

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod store;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::{IngestionConfig, LacunaConfig};
pub use error::{ErrorCode, LacunaError, LacunaResult};
pub use orchestrator::GapOrchestrator;
pub use store::KnowledgeStore;
pub use traits::{
    Classifier, ClassifierConfig, ClassifierProvider, SearchClient, SearchConfig, Summarizer,
    SummarizerConfig, SummarizerProvider,
};
pub use types::{Classification, Gap, GapOutcome, GapReport, NovelIdea, SummaryOptions};
