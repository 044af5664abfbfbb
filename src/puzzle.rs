//! Puzzle assembly: sample, build, search, accept or reject.
//!
//! A built grid is searched and accepted only if it yields enough findable
//! words. A grid that searches out too thin is discarded wholesale and
//! generation restarts from fresh letter sampling; there is no way to add
//! findable words to a fixed placement without risking new triplet
//! violations. The loop is bounded so generation always terminates.

use crate::dictionary::Dictionary;
use crate::grid::{build_grid, BuildError, Grid};
use crate::search::{find_all_words, WordSet};
use crate::GRID_CELLS;
use rand::Rng;
use thiserror::Error;

/// Errors raised while generating a puzzle. All of them are recoverable by
/// retrying later; a failed generation never yields a partial grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error("no grid with at least {min_word_count} words found in {attempts} attempts")]
    BudgetExceeded {
        min_word_count: usize,
        attempts: usize,
    },
    #[error("invalid generator config: {0}")]
    InvalidConfig(String),
}

/// Tunables for puzzle generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Minimum vowels sampled into the grid.
    pub min_vowels: usize,
    /// Minimum consonants sampled into the grid.
    pub min_consonants: usize,
    /// A grid yielding fewer findable words than this is rejected.
    pub min_word_count: usize,
    /// Whole-pipeline restarts before generation fails.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_vowels: 4,
            min_consonants: 8,
            min_word_count: 10,
            max_attempts: 100,
        }
    }
}

impl GeneratorConfig {
    fn validate(&self) -> Result<(), GenerationError> {
        if self.min_vowels + self.min_consonants > GRID_CELLS {
            return Err(GenerationError::InvalidConfig(format!(
                "min_vowels + min_consonants exceeds the {} grid cells",
                GRID_CELLS
            )));
        }
        if self.max_attempts == 0 {
            return Err(GenerationError::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// A finished puzzle: the grid and the ground-truth set of findable words.
#[derive(Debug, Clone)]
pub struct Puzzle {
    pub grid: Grid,
    pub words: WordSet,
}

/// Generate a puzzle whose grid yields at least `min_word_count` words.
///
/// Deterministic for a given dictionary, config, and RNG state.
pub fn generate_puzzle(
    dictionary: &Dictionary,
    config: &GeneratorConfig,
    rng: &mut impl Rng,
) -> Result<Puzzle, GenerationError> {
    config.validate()?;
    for _ in 0..config.max_attempts {
        let grid = build_grid(config.min_vowels, config.min_consonants, rng)?;
        let words = find_all_words(&grid, dictionary);
        if words.len() >= config.min_word_count {
            return Ok(Puzzle { grid, words });
        }
    }
    Err(GenerationError::BudgetExceeded {
        min_word_count: config.min_word_count,
        attempts: config.max_attempts,
    })
}

/// Entry point for external scheduling: default config, thread-local RNG.
/// The result is handed off to storage; this crate keeps no puzzle state.
pub fn generate_daily_puzzle(dictionary: &Dictionary) -> Result<Puzzle, GenerationError> {
    generate_puzzle(dictionary, &GeneratorConfig::default(), &mut rand::thread_rng())
}
