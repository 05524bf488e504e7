//! lacuna-models - Classifier and summarizer providers for lacuna.
//!
//! # Supported Providers
//!
//! - **Hugging Face Inference API** - zero-shot classification
//!   (`facebook/bart-large-mnli` by default) and summarization
//!   (`sshleifer/distilbart-cnn-12-6` by default)
//!
//! # Example
//!
//! ```ignore
//! use lacuna_models::{ClassifierFactory, SummarizerFactory};
//!
//! let classifier = ClassifierFactory::create(config.classifier.clone())?;
//! let summarizer = SummarizerFactory::create(config.summarizer.clone())?;
//! ```

mod classifier;
mod factory;
mod hf_client;
mod summarizer;

pub use classifier::HuggingFaceClassifier;
pub use factory::{ClassifierFactory, SummarizerFactory};
pub use summarizer::HuggingFaceSummarizer;

// Re-export core types for convenience
pub use lacuna_core::traits::{
    Classifier, ClassifierConfig, ClassifierProvider, Summarizer, SummarizerConfig,
    SummarizerProvider,
};
pub use lacuna_core::types::{Classification, SummaryOptions};
