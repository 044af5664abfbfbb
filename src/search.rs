//! Exhaustive word search over the grid.
//!
//! Depth-first backtracking traversal from every starting cell, expanding to
//! all 8 in-bounds neighbors. Prefix pruning against the dictionary trie
//! keeps the traversal from walking paths no word starts with, which is what
//! makes the search tractable with a real dictionary. The starting cells are
//! searched in parallel; each branch owns its visited scratch and string
//! buffer, and the dictionary is shared read-only.

use crate::dictionary::Dictionary;
use crate::grid::{Grid, Pos};
use crate::{GRID_CELLS, GRID_SIZE, MIN_WORD_LENGTH};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// All dictionary words reachable in one grid, each with a path that spells
/// it. Ground truth for scoring and validation over the grid's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: BTreeMap<String, Vec<Pos>>,
}

impl WordSet {
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_ascii_uppercase())
    }

    /// The path the search found for `word`, if the word is in the set.
    /// A word may be spellable along several paths; one is kept.
    pub fn path_for(&self, word: &str) -> Option<&[Pos]> {
        self.words
            .get(&word.to_ascii_uppercase())
            .map(Vec::as_slice)
    }

    /// Words in alphabetical order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Pos])> {
        self.words.iter().map(|(w, p)| (w.as_str(), p.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn insert(&mut self, word: String, path: Vec<Pos>) {
        self.words.entry(word).or_insert(path);
    }
}

/// Enumerate every dictionary word reachable by an adjacency path.
///
/// Words shorter than [`MIN_WORD_LENGTH`] don't count; a word spellable
/// along several paths appears once.
pub fn find_all_words(grid: &Grid, dictionary: &Dictionary) -> WordSet {
    let found: Vec<(String, Vec<Pos>)> = Grid::positions()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|start| {
            let mut visited = [[false; GRID_SIZE]; GRID_SIZE];
            let mut current = String::with_capacity(GRID_CELLS);
            let mut path = Vec::with_capacity(GRID_CELLS);
            let mut found = Vec::new();
            explore(
                grid,
                dictionary,
                start,
                &mut visited,
                &mut current,
                &mut path,
                &mut found,
            );
            found
        })
        .reduce(Vec::new, |mut acc, mut branch| {
            acc.append(&mut branch);
            acc
        });

    let mut words = WordSet::default();
    for (word, path) in found {
        words.insert(word, path);
    }
    words
}

fn explore(
    grid: &Grid,
    dictionary: &Dictionary,
    pos: Pos,
    visited: &mut [[bool; GRID_SIZE]; GRID_SIZE],
    current: &mut String,
    path: &mut Vec<Pos>,
    found: &mut Vec<(String, Vec<Pos>)>,
) {
    current.push(grid.letter(pos));
    path.push(pos);

    // Nothing in the dictionary starts with this string: prune the branch.
    if dictionary.is_prefix(current) {
        visited[pos.row][pos.col] = true;

        if current.len() >= MIN_WORD_LENGTH && dictionary.contains(current) {
            found.push((current.clone(), path.clone()));
        }

        for next in pos.neighbors() {
            if !visited[next.row][next.col] {
                explore(grid, dictionary, next, visited, current, path, found);
            }
        }

        // Unmark before returning so sibling branches can reuse this cell.
        visited[pos.row][pos.col] = false;
    }

    current.pop();
    path.pop();
}
