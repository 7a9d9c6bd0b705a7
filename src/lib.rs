//! # misprint
//!
//! A spelling corrector built on symmetric deletion.
//!
//! ## Features
//!
//! - Case-insensitive dictionary that keeps each word's canonical spelling
//! - Misprints indexed by non-adjacent letter deletions, up to a configurable distance
//! - Missing and extra letters handled together in one escalating search
//! - Arena trie and flat hash-map backends behind one trait
//! - Line correction that leaves punctuation and whitespace in place

pub mod cli;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::error::{MisprintError, Result};
    pub use crate::spelling::{Correction, Corrector, CorrectorConfig, SharedCorrector};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
