//! The letter grid, cell positions, and the placement rules that build it.

use crate::letters::{self, is_vowel, SamplerError};
use crate::{GRID_CELLS, GRID_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Reshuffle attempts before giving up on one letter multiset.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10;

/// Fresh multisets to sample before the whole build fails.
pub const MAX_MULTISET_ATTEMPTS: usize = 10;

/// Errors raised while building a grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error(transparent)]
    Sampler(#[from] SamplerError),
    /// No triplet-free placement was found across every multiset tried.
    /// Vanishingly rare with frequency-weighted sampling.
    #[error("no triplet-free placement found after {attempts} letter sets")]
    Unplaceable { attempts: usize },
}

/// A cell position: `0 <= row, col < GRID_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// 8-directional adjacency. A cell is never adjacent to itself.
    pub fn is_adjacent(self, other: Pos) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }

    /// In-bounds neighbors in all 8 directions.
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        const DELTAS: [(isize, isize); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        let (row, col) = (self.row as isize, self.col as isize);
        DELTAS.into_iter().filter_map(move |(dr, dc)| {
            let (r, c) = (row + dr, col + dc);
            (r >= 0 && c >= 0 && (r as usize) < GRID_SIZE && (c as usize) < GRID_SIZE)
                .then(|| Pos::new(r as usize, c as usize))
        })
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A fully populated, immutable letter grid.
///
/// Invariant: every cell holds an uppercase letter and no row or column
/// contains three identical consecutive letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[char; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Place letters row-major, aborting on any placement that would
    /// complete a horizontal or vertical run of three identical letters.
    ///
    /// Returns `None` when the order is unplaceable; the caller reshuffles
    /// and tries again.
    pub fn place(letters: &[char]) -> Option<Grid> {
        debug_assert_eq!(letters.len(), GRID_CELLS);
        let mut cells = [['\0'; GRID_SIZE]; GRID_SIZE];
        for (i, &letter) in letters.iter().enumerate() {
            let letter = letter.to_ascii_uppercase();
            let (row, col) = (i / GRID_SIZE, i % GRID_SIZE);
            if col >= 2 && cells[row][col - 1] == letter && cells[row][col - 2] == letter {
                return None;
            }
            if row >= 2 && cells[row - 1][col] == letter && cells[row - 2][col] == letter {
                return None;
            }
            cells[row][col] = letter;
        }
        Some(Grid { cells })
    }

    /// Build a grid from explicit rows. Intended for tests and for replaying
    /// a stored puzzle; performs no triplet check.
    pub fn from_rows(rows: [[char; GRID_SIZE]; GRID_SIZE]) -> Grid {
        let mut cells = rows;
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = cell.to_ascii_uppercase();
            }
        }
        Grid { cells }
    }

    pub fn letter(&self, pos: Pos) -> char {
        self.cells[pos.row][pos.col]
    }

    /// All cell positions in row-major order.
    pub fn positions() -> impl Iterator<Item = Pos> {
        (0..GRID_CELLS).map(|i| Pos::new(i / GRID_SIZE, i % GRID_SIZE))
    }

    /// All letters in row-major order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().flatten().copied()
    }

    pub fn vowel_count(&self) -> usize {
        self.letters().filter(|&c| is_vowel(c)).count()
    }

    pub fn consonant_count(&self) -> usize {
        GRID_CELLS - self.vowel_count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Build a triplet-free grid from freshly sampled letters.
///
/// Each sampled multiset gets a bounded number of reshuffled placement
/// attempts; if all fail, a fresh multiset is sampled rather than looping
/// forever on one that is unplaceable.
pub fn build_grid(
    min_vowels: usize,
    min_consonants: usize,
    rng: &mut impl Rng,
) -> Result<Grid, BuildError> {
    for _ in 0..MAX_MULTISET_ATTEMPTS {
        let mut letter_set = letters::sample_letters(min_vowels, min_consonants, rng)?;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            if let Some(grid) = Grid::place(&letter_set) {
                return Ok(grid);
            }
            letter_set.shuffle(rng);
        }
    }
    Err(BuildError::Unplaceable {
        attempts: MAX_MULTISET_ATTEMPTS,
    })
}
