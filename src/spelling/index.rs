//! The capability set shared by all dictionary backends.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Identifier of a canonical word: its insertion index.
///
/// Insertion indices are unique and strictly increasing in add order, so
/// ordering a set of ids reproduces dictionary insertion order.
pub type WordId = usize;

/// Misprint distance indexed when none is configured.
pub const DEFAULT_MAX_MISPRINTS: usize = 2;

/// Case-fold a word into the key every backend stores it under.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

/// Storage of canonical words and their deletion misprints.
///
/// Implementations own the canonical spellings, assign insertion indices and
/// keep a per-distance index from misprint strings back to the words that
/// produce them. All keys passed in are already normalized.
pub trait MisprintIndex: Send + Sync + std::fmt::Debug {
    /// Maximum misprint distance indexed at add time.
    fn max_misprints(&self) -> usize;

    /// Add a canonical word. Returns `false` when the word (in any casing) is
    /// already present.
    fn add_word(&mut self, word: &str) -> Result<bool>;

    /// Number of canonical words added so far.
    fn words_count(&self) -> usize;

    /// Canonical spelling of the word with the given id.
    fn word(&self, id: WordId) -> Option<&str>;

    /// Look up a normalized key among the canonical words.
    fn lookup(&self, key: &str) -> Option<WordId>;

    /// Add to `into` every canonical word that `variant` is a misprint of at
    /// exactly `distance` deletions. Distance 0 means `variant` itself must be
    /// canonical.
    fn collect_misprints(&self, variant: &str, distance: usize, into: &mut BTreeSet<WordId>);

    /// Release spare capacity once no more words will be added.
    fn compact(&mut self) {}

    /// Size statistics for diagnostics.
    fn stats(&self) -> DictionaryStats;
}

impl<I: MisprintIndex + ?Sized> MisprintIndex for Box<I> {
    fn max_misprints(&self) -> usize {
        (**self).max_misprints()
    }

    fn add_word(&mut self, word: &str) -> Result<bool> {
        (**self).add_word(word)
    }

    fn words_count(&self) -> usize {
        (**self).words_count()
    }

    fn word(&self, id: WordId) -> Option<&str> {
        (**self).word(id)
    }

    fn lookup(&self, key: &str) -> Option<WordId> {
        (**self).lookup(key)
    }

    fn collect_misprints(&self, variant: &str, distance: usize, into: &mut BTreeSet<WordId>) {
        (**self).collect_misprints(variant, distance, into)
    }

    fn compact(&mut self) {
        (**self).compact()
    }

    fn stats(&self) -> DictionaryStats {
        (**self).stats()
    }
}

/// Statistics about a dictionary backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryStats {
    /// Name of the backend.
    pub backend: String,
    /// Number of canonical words.
    pub words: usize,
    /// Trie nodes, or hash buckets for the flat backend.
    pub entries: usize,
    /// Total number of misprint references stored.
    pub misprint_references: usize,
    /// Maximum misprint distance indexed.
    pub max_misprints: usize,
}
