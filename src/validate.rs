//! Player-submission checks: path consistency and scoring.
//!
//! The path validator only checks that the path is a legal trail through the
//! grid spelling the claimed word. Whether the word counts is decided against
//! the puzzle's precomputed word set, never by re-running the dictionary.

use crate::grid::{Grid, Pos};
use crate::search::WordSet;
use crate::MIN_WORD_LENGTH;
use std::collections::HashSet;
use thiserror::Error;

/// Points awarded for a minimum-length word.
pub const BASE_SCORE: u32 = 100;

/// Extra points per letter beyond the minimum.
pub const LETTER_BONUS: u32 = 50;

/// Why a claimed path is not a legal trail through the grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
    #[error("position {0} is outside the grid")]
    OutOfBounds(Pos),
    #[error("cells {0} and {1} are not adjacent")]
    NotAdjacent(Pos, Pos),
    #[error("cell {0} is used more than once")]
    RepeatedCell(Pos),
    #[error("path spells {spelled:?}, not the claimed word")]
    WordMismatch { spelled: String },
}

/// Why a submission was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RejectReason {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("word is not in this puzzle's word list")]
    NotInWordSet,
}

/// Outcome of a player submission. Invalid submissions are results, not
/// errors; they carry the reason for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub valid: bool,
    pub score: u32,
    pub reason: Option<RejectReason>,
}

impl Submission {
    fn accepted(score: u32) -> Self {
        Self {
            valid: true,
            score,
            reason: None,
        }
    }

    fn rejected(reason: RejectReason) -> Self {
        Self {
            valid: false,
            score: 0,
            reason: Some(reason),
        }
    }
}

/// Check that `path` is a legal trail through `grid` spelling `claimed`.
///
/// Checks in order: non-empty, in bounds, consecutive cells adjacent and
/// distinct, no cell reused, letters along the path spell the claimed word
/// (case-insensitive). The first failed check short-circuits. Pure and
/// deterministic: the same inputs always produce the same result.
pub fn validate_path(grid: &Grid, path: &[Pos], claimed: &str) -> Result<(), PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }
    for &pos in path {
        if !pos.in_bounds() {
            return Err(PathError::OutOfBounds(pos));
        }
    }
    for pair in path.windows(2) {
        if !pair[0].is_adjacent(pair[1]) {
            return Err(PathError::NotAdjacent(pair[0], pair[1]));
        }
    }
    let mut seen = HashSet::with_capacity(path.len());
    for &pos in path {
        if !seen.insert(pos) {
            return Err(PathError::RepeatedCell(pos));
        }
    }
    let spelled: String = path.iter().map(|&pos| grid.letter(pos)).collect();
    if !spelled.eq_ignore_ascii_case(claimed) {
        return Err(PathError::WordMismatch { spelled });
    }
    Ok(())
}

/// Score for a valid word: base plus a bonus per letter beyond the minimum.
pub fn word_score(length: usize) -> u32 {
    let extra = length.saturating_sub(MIN_WORD_LENGTH) as u32;
    BASE_SCORE + LETTER_BONUS * extra
}

/// Validate a claimed word and path against a stored puzzle.
///
/// The path must be a legal trail spelling the word, and the word must be in
/// the puzzle's precomputed word set. Word-set membership already implies the
/// dictionary check and the minimum length, so neither is re-run here.
pub fn validate_submission(
    grid: &Grid,
    path: &[Pos],
    claimed: &str,
    words: &WordSet,
) -> Submission {
    if let Err(err) = validate_path(grid, path, claimed) {
        return Submission::rejected(err.into());
    }
    if !words.contains(claimed) {
        return Submission::rejected(RejectReason::NotInWordSet);
    }
    Submission::accepted(word_score(claimed.len()))
}
