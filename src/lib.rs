//! # Wordgrid
//!
//! Generates 4x4 letter grids for a timed word-finding game and enumerates
//! every dictionary word reachable by a path of adjacent cells.
//!
//! Generation is constrained: grids carry a minimum number of vowels and
//! consonants, never contain three identical consecutive letters along a row
//! or column, and are discarded and regenerated until the search engine finds
//! at least a configured number of words in them. At play time, submissions
//! are checked against the stored grid and word set with
//! [`validate_submission`].

pub mod dictionary;
pub mod grid;
pub mod letters;
pub mod puzzle;
pub mod search;
pub mod validate;

pub use dictionary::{Dictionary, DictionaryError};
pub use grid::{build_grid, BuildError, Grid, Pos};
pub use letters::{LetterPool, SamplerError};
pub use puzzle::{
    generate_daily_puzzle, generate_puzzle, GenerationError, GeneratorConfig, Puzzle,
};
pub use search::{find_all_words, WordSet};
pub use validate::{
    validate_path, validate_submission, word_score, PathError, RejectReason, Submission,
};

/// Side length of the letter grid
pub const GRID_SIZE: usize = 4;

/// Total number of cells in the grid
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Shortest word that counts as a find
pub const MIN_WORD_LENGTH: usize = 3;

/// Load the dictionary from the embedded word list
pub fn load_dictionary() -> Result<Dictionary, DictionaryError> {
    Dictionary::from_words(
        include_str!("../dictionary/dictionary.txt")
            .lines()
            .filter(|line| !line.is_empty()),
    )
}
