//! Trie-backed misprint dictionary.
//!
//! Every canonical word and every deletion variant of it is a path in the
//! trie. The node a variant ends on records, per distance, which canonical
//! nodes produced it. Nodes live in an arena and refer to each other by
//! [`NodeId`]; the parent link is only used to rebuild the string a node spells.

use std::collections::BTreeSet;

use ahash::AHashSet;
use log::trace;

use crate::error::{MisprintError, Result};
use crate::spelling::deletions::{generate_deletions, max_deletions};
use crate::spelling::index::{
    normalize, DictionaryStats, MisprintIndex, WordId, DEFAULT_MAX_MISPRINTS,
};

/// Index of a node inside a [`DictionaryTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node of every tree.
    pub const ROOT: NodeId = NodeId(0);
}

/// A single trie node keyed by one case-folded character.
#[derive(Debug, Clone, Default)]
pub struct DictionaryNode {
    value: Option<char>,
    parent: Option<NodeId>,
    /// Sorted by character for binary search.
    children: Vec<(char, NodeId)>,
    word: Option<String>,
    index: Option<WordId>,
    /// `misprints[d - 1]` holds the canonical nodes this string is a
    /// distance-`d` misprint of.
    misprints: Vec<AHashSet<NodeId>>,
}

impl DictionaryNode {
    fn new(value: char, parent: NodeId) -> Self {
        DictionaryNode {
            value: Some(value),
            parent: Some(parent),
            ..Default::default()
        }
    }

    /// The character of this node; `None` for the root.
    pub fn value(&self) -> Option<char> {
        self.value
    }

    /// The parent node; `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Canonical spelling, if this node terminates a correctly spelled word.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Whether this node terminates a canonical word.
    pub fn is_canonical(&self) -> bool {
        self.word.is_some()
    }

    /// Insertion index of the canonical word ending here.
    pub fn index(&self) -> Option<WordId> {
        self.index
    }

    /// Child node for the given (already case-folded) character.
    pub fn child(&self, value: char) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&value, |&(c, _)| c)
            .ok()
            .map(|pos| self.children[pos].1)
    }

    /// Children in character order.
    pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.children.iter().copied()
    }

    /// Canonical nodes this node's string is a misprint of at `distance`.
    ///
    /// Distance 0 yields the node itself when it is canonical.
    pub fn misprints(&self, distance: usize, this: NodeId) -> Vec<NodeId> {
        if distance == 0 {
            return if self.is_canonical() { vec![this] } else { Vec::new() };
        }
        self.misprints
            .get(distance - 1)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    fn add_misprint(&mut self, distance: usize, canonical: NodeId) -> bool {
        if self.misprints.len() < distance {
            self.misprints.resize_with(distance, AHashSet::new);
        }
        self.misprints[distance - 1].insert(canonical)
    }

    fn misprint_references(&self) -> usize {
        self.misprints.iter().map(|set| set.len()).sum()
    }
}

/// Arena-backed trie dictionary.
#[derive(Debug, Clone)]
pub struct DictionaryTree {
    nodes: Vec<DictionaryNode>,
    /// Canonical nodes in insertion order; the position is the insertion index.
    words: Vec<NodeId>,
    max_misprints: usize,
}

impl DictionaryTree {
    /// Create an empty dictionary indexing misprints up to `max_misprints`.
    pub fn new(max_misprints: usize) -> Self {
        DictionaryTree {
            nodes: vec![DictionaryNode::default()],
            words: Vec::new(),
            max_misprints,
        }
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&DictionaryNode> {
        self.nodes.get(id.0)
    }

    /// Total number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Case-insensitive walk from the root.
    ///
    /// Returns the node the path ends on whether or not it is canonical;
    /// misprint buckets live on non-canonical nodes too. The empty string
    /// resolves to the root.
    pub fn find_node(&self, word: &str) -> Option<NodeId> {
        normalize(word)
            .chars()
            .try_fold(NodeId::ROOT, |id, c| self.nodes[id.0].child(c))
    }

    /// Rebuild the lower-cased string a node spells by following parent
    /// links. Returns `None` for the root.
    pub fn node_string(&self, id: NodeId) -> Option<String> {
        let mut chars = Vec::new();
        let mut current = self.node(id)?;
        while let (Some(value), Some(parent)) = (current.value, current.parent) {
            chars.push(value);
            current = &self.nodes[parent.0];
        }
        if chars.is_empty() {
            return None;
        }
        Some(chars.into_iter().rev().collect())
    }

    /// Canonical node of the word with the given insertion index.
    pub fn word_node(&self, id: WordId) -> Option<NodeId> {
        self.words.get(id).copied()
    }

    fn extend_path(&mut self, key: &str) -> NodeId {
        key.chars()
            .fold(NodeId::ROOT, |parent, c| self.child_or_insert(parent, c))
    }

    fn child_or_insert(&mut self, parent: NodeId, value: char) -> NodeId {
        match self.nodes[parent.0]
            .children
            .binary_search_by_key(&value, |&(c, _)| c)
        {
            Ok(pos) => self.nodes[parent.0].children[pos].1,
            Err(pos) => {
                let id = NodeId(self.nodes.len());
                self.nodes.push(DictionaryNode::new(value, parent));
                self.nodes[parent.0].children.insert(pos, (value, id));
                id
            }
        }
    }
}

impl Default for DictionaryTree {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MISPRINTS)
    }
}

impl MisprintIndex for DictionaryTree {
    fn max_misprints(&self) -> usize {
        self.max_misprints
    }

    fn add_word(&mut self, word: &str) -> Result<bool> {
        if word.is_empty() {
            return Err(MisprintError::invalid_argument("cannot add an empty word"));
        }

        let key = normalize(word);
        if let Some(existing) = self.find_node(&key) {
            if self.nodes[existing.0].is_canonical() {
                return Ok(false);
            }
        }

        // Generate everything before touching the trie.
        let max = max_deletions(key.chars().count(), Some(self.max_misprints));
        let variants = (1..=max)
            .map(|distance| generate_deletions(&key, distance))
            .collect::<Result<Vec<_>>>()?;

        let canonical = self.extend_path(&key);
        let index = self.words.len();
        let node = &mut self.nodes[canonical.0];
        node.word = Some(word.to_string());
        node.index = Some(index);
        self.words.push(canonical);

        for (level, level_variants) in variants.iter().enumerate() {
            for variant in level_variants {
                let target = self.extend_path(variant);
                self.nodes[target.0].add_misprint(level + 1, canonical);
            }
        }

        trace!(
            "added '{}' as #{} with {} misprint variants",
            word,
            index,
            variants.iter().map(Vec::len).sum::<usize>()
        );
        Ok(true)
    }

    fn words_count(&self) -> usize {
        self.words.len()
    }

    fn word(&self, id: WordId) -> Option<&str> {
        let node = self.words.get(id)?;
        self.nodes[node.0].word()
    }

    fn lookup(&self, key: &str) -> Option<WordId> {
        let id = self.find_node(key)?;
        self.nodes[id.0].index
    }

    fn collect_misprints(&self, variant: &str, distance: usize, into: &mut BTreeSet<WordId>) {
        let Some(id) = self.find_node(variant) else {
            return;
        };
        let node = &self.nodes[id.0];

        if distance == 0 {
            into.extend(node.index);
            return;
        }

        if let Some(set) = node.misprints.get(distance - 1) {
            into.extend(set.iter().filter_map(|canonical| self.nodes[canonical.0].index));
        }
    }

    fn compact(&mut self) {
        self.nodes.shrink_to_fit();
        self.words.shrink_to_fit();
        for node in &mut self.nodes {
            node.children.shrink_to_fit();
            node.misprints.shrink_to_fit();
            for set in &mut node.misprints {
                set.shrink_to_fit();
            }
        }
    }

    fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            backend: "trie".to_string(),
            words: self.words.len(),
            entries: self.nodes.len(),
            misprint_references: self
                .nodes
                .iter()
                .map(DictionaryNode::misprint_references)
                .sum(),
            max_misprints: self.max_misprints,
        }
    }
}
