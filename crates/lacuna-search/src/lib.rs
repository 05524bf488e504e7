//! lacuna-search - Search client for lacuna gap filling.
//!
//! # Example
//!
//! ```ignore
//! use lacuna_search::HttpSearchClient;
//!
//! let search = HttpSearchClient::new(config.search.clone())?;
//! if let Some(text) = search.search("Missing information about General in Healthcare").await {
//!     println!("{}", text);
//! }
//! ```

mod client;

pub use client::HttpSearchClient;

// Re-export core types
pub use lacuna_core::traits::{SearchClient, SearchConfig};
