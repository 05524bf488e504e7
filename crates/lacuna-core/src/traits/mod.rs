//! Capability traits for the external services lacuna delegates to.

mod classifier;
mod search;
mod summarizer;

pub use classifier::*;
pub use search::*;
pub use summarizer::*;
