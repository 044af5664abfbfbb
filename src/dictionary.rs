//! Dictionary lookups for the word search engine.
//!
//! Backed by an arena trie so the engine can test both exact membership and
//! "does any word start with this" in O(length). The prefix test is what lets
//! the search stop descending down dead branches instead of enumerating every
//! possible path through the grid.

use crate::{GRID_CELLS, MIN_WORD_LENGTH};
use thiserror::Error;

const ALPHABET: usize = 26;

/// Errors raised while building a dictionary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The source yielded no usable words. Fatal: no puzzle can be generated.
    #[error("dictionary source contained no usable words")]
    Empty,
    /// A word contained something other than ASCII letters.
    #[error("dictionary word {0:?} contains a non-alphabetic character")]
    InvalidWord(String),
}

#[derive(Debug, Clone)]
struct TrieNode {
    children: [Option<u32>; ALPHABET],
    terminal: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: [None; ALPHABET],
            terminal: false,
        }
    }
}

/// An immutable set of valid words with prefix-testable lookup.
///
/// Case-normalized to uppercase; shared read-only across concurrent
/// generations for the life of the process.
#[derive(Debug, Clone)]
pub struct Dictionary {
    nodes: Vec<TrieNode>,
    len: usize,
}

impl Dictionary {
    /// Build a dictionary from an iterator of words.
    ///
    /// Words outside the playable length range (shorter than
    /// [`MIN_WORD_LENGTH`], longer than the cell count) are skipped, since no
    /// grid path can ever spell them. An empty result is an error, not a
    /// silently degraded dictionary.
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self {
            nodes: vec![TrieNode::new()],
            len: 0,
        };
        for word in words {
            let word = word.as_ref().trim();
            if !(MIN_WORD_LENGTH..=GRID_CELLS).contains(&word.len()) {
                continue;
            }
            dict.insert(word)?;
        }
        if dict.len == 0 {
            return Err(DictionaryError::Empty);
        }
        Ok(dict)
    }

    fn insert(&mut self, word: &str) -> Result<(), DictionaryError> {
        let mut node = 0usize;
        for c in word.chars() {
            let slot =
                letter_index(c).ok_or_else(|| DictionaryError::InvalidWord(word.to_string()))?;
            node = match self.nodes[node].children[slot] {
                Some(next) => next as usize,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[node].children[slot] = Some(next as u32);
                    next
                }
            };
        }
        if !self.nodes[node].terminal {
            self.nodes[node].terminal = true;
            self.len += 1;
        }
        Ok(())
    }

    fn walk(&self, word: &str) -> Option<usize> {
        let mut node = 0usize;
        for c in word.chars() {
            let slot = letter_index(c)?;
            node = self.nodes[node].children[slot]? as usize;
        }
        Some(node)
    }

    /// Exact membership test, case-normalized.
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| self.nodes[node].terminal)
    }

    /// Whether any dictionary word starts with `prefix`.
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn letter_index(c: char) -> Option<usize> {
    let upper = c.to_ascii_uppercase();
    upper
        .is_ascii_uppercase()
        .then(|| (upper as u8 - b'A') as usize)
}
