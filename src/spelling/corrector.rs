//! Correction search over a misprint dictionary.
//!
//! Query-side insertions are handled by deleting characters from the query
//! itself: a token with `i` extra letters and `d` missing letters matches a
//! canonical word when some `i`-deletion of the token is a `d`-deletion
//! misprint of that word. Every split of a total distance is tried, and the
//! smallest total distance with any hit wins.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{MisprintError, Result};
use crate::spelling::deletions::{generate_deletions, max_deletions};
use crate::spelling::flat::FlatDictionary;
use crate::spelling::index::{
    normalize, DictionaryStats, MisprintIndex, WordId, DEFAULT_MAX_MISPRINTS,
};
use crate::spelling::trie::DictionaryTree;

/// Largest `max_misprints` a configuration may ask for.
pub const MAX_SUPPORTED_MISPRINTS: usize = 8;

/// Dictionary implementation to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Arena trie sharing prefixes between words and variants.
    #[default]
    Trie,
    /// Hash maps with re-verification of every candidate.
    Flat,
}

/// Configuration for the corrector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Maximum total misprint distance searched.
    pub max_misprints: usize,
    /// Dictionary backend.
    pub backend: Backend,
    /// Whether to release spare capacity once loading is finished.
    pub compact: bool,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            max_misprints: DEFAULT_MAX_MISPRINTS,
            backend: Backend::Trie,
            compact: true,
        }
    }
}

impl CorrectorConfig {
    /// Check that the configuration can be honoured.
    pub fn validate(&self) -> Result<()> {
        if self.max_misprints > MAX_SUPPORTED_MISPRINTS {
            return Err(MisprintError::invalid_config(format!(
                "max_misprints is {}, at most {} is supported",
                self.max_misprints, MAX_SUPPORTED_MISPRINTS
            )));
        }
        Ok(())
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CorrectorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Build an empty dictionary of the configured backend.
    pub fn build_index(&self) -> Result<Box<dyn MisprintIndex>> {
        self.validate()?;
        let index: Box<dyn MisprintIndex> = match self.backend {
            Backend::Trie => Box::new(DictionaryTree::new(self.max_misprints)),
            Backend::Flat => Box::new(FlatDictionary::new(self.max_misprints)),
        };
        Ok(index)
    }
}

/// Outcome of correcting a single token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Correction {
    /// The token is a canonical word; kept in the query's casing.
    Exact { input: String },
    /// The token is not canonical. `candidates` are the canonical spellings at
    /// the smallest distance found, in dictionary order, and may be empty.
    Misprint {
        input: String,
        distance: usize,
        candidates: Vec<String>,
    },
}

impl Correction {
    /// The token that was corrected.
    pub fn input(&self) -> &str {
        match self {
            Correction::Exact { input } | Correction::Misprint { input, .. } => input,
        }
    }

    /// Whether the token was found as is.
    pub fn is_exact(&self) -> bool {
        matches!(self, Correction::Exact { .. })
    }

    /// Candidate spellings; empty for exact matches and unknown tokens.
    pub fn candidates(&self) -> &[String] {
        match self {
            Correction::Exact { .. } => &[],
            Correction::Misprint { candidates, .. } => candidates,
        }
    }
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Correction::Exact { input } => f.write_str(input),
            Correction::Misprint {
                input, candidates, ..
            } => match candidates.as_slice() {
                [] => write!(f, "{{{input}?}}"),
                [single] => f.write_str(single),
                many => write!(f, "{{{}}}", many.join(" ")),
            },
        }
    }
}

/// Spelling corrector over any [`MisprintIndex`].
///
/// Adding words needs `&mut self` and correcting needs `&self`, so a plain
/// `Corrector` is single-writer by construction. Use [`SharedCorrector`] to
/// share one across threads.
#[derive(Debug, Clone)]
pub struct Corrector<I = DictionaryTree> {
    index: I,
}

impl Corrector<DictionaryTree> {
    /// Create a trie-backed corrector.
    pub fn new(max_misprints: usize) -> Self {
        Corrector {
            index: DictionaryTree::new(max_misprints),
        }
    }
}

impl Default for Corrector<DictionaryTree> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MISPRINTS)
    }
}

impl Corrector<Box<dyn MisprintIndex>> {
    /// Create a corrector with the backend chosen by `config`.
    pub fn with_config(config: &CorrectorConfig) -> Result<Self> {
        Ok(Corrector {
            index: config.build_index()?,
        })
    }
}

impl<I: MisprintIndex> Corrector<I> {
    /// Wrap an existing dictionary.
    pub fn with_index(index: I) -> Self {
        Corrector { index }
    }

    /// The underlying dictionary.
    pub fn index(&self) -> &I {
        &self.index
    }

    /// Maximum total misprint distance searched.
    pub fn max_misprints(&self) -> usize {
        self.index.max_misprints()
    }

    /// Add a canonical word; `false` if it was already present in any casing.
    pub fn add_word(&mut self, word: &str) -> Result<bool> {
        self.index.add_word(word)
    }

    /// Number of canonical words.
    pub fn words_count(&self) -> usize {
        self.index.words_count()
    }

    /// Release spare capacity once no more words will be added.
    pub fn compact(&mut self) {
        self.index.compact();
    }

    /// Dictionary statistics.
    pub fn stats(&self) -> DictionaryStats {
        self.index.stats()
    }

    /// Correct a token, returning the structured result.
    pub fn correct(&self, input: &str) -> Result<Correction> {
        if input.is_empty() {
            return Err(MisprintError::invalid_argument("cannot correct an empty token"));
        }

        let key = normalize(input);
        if self.index.lookup(&key).is_some() {
            return Ok(Correction::Exact {
                input: input.to_string(),
            });
        }

        let (distance, found) = self.search(&key)?;
        let candidates = found
            .into_iter()
            .filter_map(|id| self.index.word(id).map(str::to_string))
            .collect();

        Ok(Correction::Misprint {
            input: input.to_string(),
            distance,
            candidates,
        })
    }

    /// Correct a token and format it: the token itself when it is a known
    /// word, the single candidate, `{a b ...}` for ties, or `{token?}`.
    pub fn get_corrected_word(&self, input: &str) -> Result<String> {
        Ok(self.correct(input)?.to_string())
    }

    /// Escalate through total distances until some split finds candidates.
    /// Returns the winning distance (0 when nothing was found) and the
    /// candidate ids in insertion order.
    fn search(&self, key: &str) -> Result<(usize, BTreeSet<WordId>)> {
        let max_misprints = self.index.max_misprints();
        let max_inserts = max_deletions(key.chars().count(), Some(max_misprints));

        // variants[i] is the query with i letters assumed inserted.
        let mut variants = Vec::with_capacity(max_inserts + 1);
        variants.push(vec![key.to_string()]);
        for inserts in 1..=max_inserts {
            variants.push(generate_deletions(key, inserts)?);
        }

        let mut found = BTreeSet::new();
        for total in 1..=max_misprints {
            for deletes in 0..=total {
                let inserts = total - deletes;
                let Some(query_variants) = variants.get(inserts) else {
                    continue;
                };
                for variant in query_variants {
                    self.index.collect_misprints(variant, deletes, &mut found);
                }
            }

            if !found.is_empty() {
                debug!("'{}' resolved at distance {}: {} candidates", key, total, found.len());
                return Ok((total, found));
            }
        }

        debug!("'{}' has no candidates within {}", key, max_misprints);
        Ok((0, found))
    }
}

/// Thread-safe corrector: one writer adds words, many readers correct.
#[derive(Debug)]
pub struct SharedCorrector<I = DictionaryTree> {
    inner: Arc<RwLock<Corrector<I>>>,
}

impl<I> Clone for SharedCorrector<I> {
    fn clone(&self) -> Self {
        SharedCorrector {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I: MisprintIndex> SharedCorrector<I> {
    /// Share an existing corrector.
    pub fn new(corrector: Corrector<I>) -> Self {
        SharedCorrector {
            inner: Arc::new(RwLock::new(corrector)),
        }
    }

    /// Add a word under the exclusive lock.
    pub fn add_word(&self, word: &str) -> Result<bool> {
        self.inner.write().add_word(word)
    }

    /// Compact under the exclusive lock.
    pub fn compact(&self) {
        self.inner.write().compact();
    }

    /// Correct a token under a shared lock.
    pub fn correct(&self, input: &str) -> Result<Correction> {
        self.inner.read().correct(input)
    }

    /// Correct and format a token under a shared lock.
    pub fn get_corrected_word(&self, input: &str) -> Result<String> {
        self.inner.read().get_corrected_word(input)
    }

    /// Number of canonical words.
    pub fn words_count(&self) -> usize {
        self.inner.read().words_count()
    }
}
