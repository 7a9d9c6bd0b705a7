//! Deletion-based spelling correction.
//!
//! Words are indexed together with every string reachable by deleting up to
//! `max_misprints` non-adjacent characters. A query is corrected by deleting
//! characters from it as well and matching both sides, so missing and extra
//! letters are handled by the same primitive.

pub mod corrector;
pub mod deletions;
pub mod flat;
pub mod index;
pub mod loader;
pub mod text;
pub mod trie;

// Re-export commonly used types
pub use corrector::{Backend, Correction, Corrector, CorrectorConfig, SharedCorrector};
pub use deletions::{generate_deletions, is_possible_misprint, max_deletions};
pub use flat::FlatDictionary;
pub use index::{DictionaryStats, MisprintIndex, WordId};
pub use trie::{DictionaryNode, DictionaryTree, NodeId};
