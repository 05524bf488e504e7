//! Factories for creating classifier and summarizer providers.

use std::sync::Arc;

use lacuna_core::error::LacunaResult;
use lacuna_core::traits::{
    Classifier, ClassifierConfig, ClassifierProvider, Summarizer, SummarizerConfig,
    SummarizerProvider,
};

use crate::classifier::HuggingFaceClassifier;
use crate::summarizer::HuggingFaceSummarizer;

/// Factory for creating classifier providers.
pub struct ClassifierFactory;

impl ClassifierFactory {
    /// Create a classifier from the given configuration.
    pub fn create(config: ClassifierConfig) -> LacunaResult<Arc<dyn Classifier>> {
        match config.provider {
            ClassifierProvider::HuggingFace => {
                let classifier = HuggingFaceClassifier::new(config)?;
                Ok(Arc::new(classifier))
            }
        }
    }
}

/// Factory for creating summarizer providers.
pub struct SummarizerFactory;

impl SummarizerFactory {
    /// Create a summarizer from the given configuration.
    pub fn create(config: SummarizerConfig) -> LacunaResult<Arc<dyn Summarizer>> {
        match config.provider {
            SummarizerProvider::HuggingFace => {
                let summarizer = HuggingFaceSummarizer::new(config)?;
                Ok(Arc::new(summarizer))
            }
        }
    }
}
