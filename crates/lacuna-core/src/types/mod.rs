//! Core types for lacuna.

mod classification;
mod gap;

pub use classification::*;
pub use gap::*;
