//! Flat hash-backed misprint dictionary.
//!
//! Canonical words live in a case-insensitive map; deletion variants are
//! keyed only by their hash. Because unrelated variants can share a hash,
//! every candidate pulled from a bucket is re-verified with
//! [`is_possible_misprint`] before it is reported.

use std::collections::BTreeSet;
use std::hash::BuildHasher;

use ahash::{AHashMap, RandomState};
use log::trace;

use crate::error::{MisprintError, Result};
use crate::spelling::deletions::{generate_deletions, is_possible_misprint, max_deletions};
use crate::spelling::index::{
    normalize, DictionaryStats, MisprintIndex, WordId, DEFAULT_MAX_MISPRINTS,
};

#[derive(Debug, Clone)]
struct FlatWord {
    key: String,
    spelling: String,
}

/// Hash-map dictionary with the same contract as
/// [`DictionaryTree`](crate::spelling::trie::DictionaryTree).
#[derive(Debug, Clone)]
pub struct FlatDictionary {
    /// Normalized key to insertion index.
    index: AHashMap<String, WordId>,
    /// Words in insertion order.
    words: Vec<FlatWord>,
    /// Variant hash to the words producing it, at any distance.
    misprints: AHashMap<u64, Vec<WordId>>,
    hasher: RandomState,
    max_misprints: usize,
}

impl FlatDictionary {
    /// Create an empty dictionary indexing misprints up to `max_misprints`.
    pub fn new(max_misprints: usize) -> Self {
        FlatDictionary {
            index: AHashMap::new(),
            words: Vec::new(),
            misprints: AHashMap::new(),
            hasher: RandomState::new(),
            max_misprints,
        }
    }

    fn variant_hash(&self, variant: &str) -> u64 {
        self.hasher.hash_one(variant)
    }
}

impl Default for FlatDictionary {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MISPRINTS)
    }
}

impl MisprintIndex for FlatDictionary {
    fn max_misprints(&self) -> usize {
        self.max_misprints
    }

    fn add_word(&mut self, word: &str) -> Result<bool> {
        if word.is_empty() {
            return Err(MisprintError::invalid_argument("cannot add an empty word"));
        }

        let key = normalize(word);
        if self.index.contains_key(&key) {
            return Ok(false);
        }

        let max = max_deletions(key.chars().count(), Some(self.max_misprints));
        let variants = (1..=max)
            .map(|distance| generate_deletions(&key, distance))
            .collect::<Result<Vec<_>>>()?;

        let id = self.words.len();
        self.index.insert(key.clone(), id);
        self.words.push(FlatWord {
            key,
            spelling: word.to_string(),
        });

        for variant in variants.iter().flatten() {
            let hash = self.variant_hash(variant);
            let bucket = self.misprints.entry(hash).or_default();
            // Ids only grow, so a repeat can only be this word's own.
            if bucket.last() != Some(&id) {
                bucket.push(id);
            }
        }

        trace!("added '{}' as #{} to flat dictionary", word, id);
        Ok(true)
    }

    fn words_count(&self) -> usize {
        self.words.len()
    }

    fn word(&self, id: WordId) -> Option<&str> {
        self.words.get(id).map(|w| w.spelling.as_str())
    }

    fn lookup(&self, key: &str) -> Option<WordId> {
        self.index.get(key).copied()
    }

    fn collect_misprints(&self, variant: &str, distance: usize, into: &mut BTreeSet<WordId>) {
        if distance == 0 {
            into.extend(self.lookup(variant));
            return;
        }

        let Some(bucket) = self.misprints.get(&self.variant_hash(variant)) else {
            return;
        };
        for &id in bucket {
            if matches!(
                is_possible_misprint(&self.words[id].key, variant, distance),
                Ok(true)
            ) {
                into.insert(id);
            }
        }
    }

    fn compact(&mut self) {
        self.index.shrink_to_fit();
        self.words.shrink_to_fit();
        self.misprints.shrink_to_fit();
        for bucket in self.misprints.values_mut() {
            bucket.shrink_to_fit();
        }
    }

    fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            backend: "flat".to_string(),
            words: self.words.len(),
            entries: self.misprints.len(),
            misprint_references: self.misprints.values().map(Vec::len).sum(),
            max_misprints: self.max_misprints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::trie::DictionaryTree;

    fn collect(dict: &dyn MisprintIndex, variant: &str, distance: usize) -> Vec<WordId> {
        let mut found = BTreeSet::new();
        dict.collect_misprints(variant, distance, &mut found);
        found.into_iter().collect()
    }

    #[test]
    fn test_add_word_case_insensitive() {
        let mut dict = FlatDictionary::default();
        assert!(dict.add_word("Hello").unwrap());
        assert!(!dict.add_word("hELLo").unwrap());
        assert_eq!(dict.words_count(), 1);
        assert_eq!(dict.word(0), Some("Hello"));
        assert_eq!(dict.lookup("hello"), Some(0));
        assert!(dict.add_word("").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_distance_is_verified() {
        let mut dict = FlatDictionary::default();
        dict.add_word("pain").unwrap();
        dict.add_word("spain").unwrap();

        // Both words sit in the "pin" bucket, at different distances.
        assert_eq!(collect(&dict, "pin", 1), vec![0]);
        assert_eq!(collect(&dict, "pin", 2), vec![1]);
        assert_eq!(collect(&dict, "spain", 0), vec![1]);
        assert!(collect(&dict, "pln", 1).is_empty());
    }

    #[test]
    fn test_matches_trie_on_distinct_letter_words() {
        let words = ["rain", "spain", "plain", "plaint", "pain", "main", "the", "his"];
        let mut flat = FlatDictionary::default();
        let mut trie = DictionaryTree::default();
        for word in words {
            flat.add_word(word).unwrap();
            trie.add_word(word).unwrap();
        }

        for variant in ["ain", "pin", "lin", "pai", "hi", "e", "pan", "plin"] {
            for distance in 0..=2 {
                assert_eq!(
                    collect(&flat, variant, distance),
                    collect(&trie, variant, distance),
                    "{variant} at {distance}"
                );
            }
        }
    }

    #[test]
    fn test_greedy_check_diverges_on_repeated_letters() {
        // "aaba" minus positions 0 and 2 is "aa", but the greedy
        // re-verification deletes the wrong 'a' and rejects it.
        assert!(generate_deletions("aaba", 2)
            .unwrap()
            .contains(&"aa".to_string()));

        let mut flat = FlatDictionary::default();
        let mut trie = DictionaryTree::default();
        flat.add_word("aaba").unwrap();
        trie.add_word("aaba").unwrap();

        assert_eq!(collect(&trie, "aa", 2), vec![0]);
        assert!(collect(&flat, "aa", 2).is_empty());
    }

    #[test]
    fn test_stats_and_compact() {
        let mut dict = FlatDictionary::default();
        dict.add_word("miss").unwrap();
        dict.compact();

        let stats = dict.stats();
        assert_eq!(stats.backend, "flat");
        assert_eq!(stats.words, 1);
        // iss, mss, mis, is, ms: repeats of a variant count once.
        assert_eq!(stats.misprint_references, 5);
    }
}
