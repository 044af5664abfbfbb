//! Weighted letter sampling for grid generation.
//!
//! Letters are drawn from frequency-weighted pools. Each draw decays the
//! drawn letter's weight so a run of draws doesn't cluster on the same high
//! frequency letters; the decay factors are named constants so tests can
//! reason about them and callers can substitute deterministic weights.

use crate::GRID_CELLS;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// Relative English letter frequencies (percent of running text).
/// Only the ratios matter; the weights are never normalized.
pub const LETTER_WEIGHTS: [(char, f64); 26] = [
    ('A', 8.17),
    ('B', 1.49),
    ('C', 2.78),
    ('D', 4.25),
    ('E', 12.70),
    ('F', 2.23),
    ('G', 2.02),
    ('H', 6.09),
    ('I', 6.97),
    ('J', 0.15),
    ('K', 0.77),
    ('L', 4.03),
    ('M', 2.41),
    ('N', 6.75),
    ('O', 7.51),
    ('P', 1.93),
    ('Q', 0.10),
    ('R', 5.99),
    ('S', 6.33),
    ('T', 9.06),
    ('U', 2.76),
    ('V', 0.98),
    ('W', 2.36),
    ('X', 0.15),
    ('Y', 1.97),
    ('Z', 0.07),
];

pub const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Weight decay applied after each draw from a single-class pool
/// (vowels-only or consonants-only). Halving strongly discourages repeats
/// in these small pools.
pub const FOCUSED_POOL_DECAY: f64 = 0.5;

/// Gentler decay for the combined pool, which is broad enough that repeats
/// are already unlikely.
pub const MIXED_POOL_DECAY: f64 = 0.7;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SamplerError {
    /// The pool is empty or every remaining weight is zero. This is a
    /// configuration bug, not a runtime condition to retry.
    #[error("letter pool is empty or has no remaining weight")]
    Exhausted,
}

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_uppercase())
}

/// A mutable weighted letter pool.
///
/// Drawing performs weighted random selection: pick a uniform value in
/// `[0, total_weight)` and subtract candidate weights in enumeration order
/// until the remainder drops to zero or below. The drawn letter's weight is
/// then multiplied by the pool's decay factor.
#[derive(Debug, Clone)]
pub struct LetterPool {
    entries: Vec<(char, f64)>,
    decay: f64,
}

impl LetterPool {
    /// Frequency-weighted pool of the five vowels.
    pub fn vowels() -> Self {
        Self::filtered(FOCUSED_POOL_DECAY, is_vowel)
    }

    /// Frequency-weighted pool of the 21 consonants.
    pub fn consonants() -> Self {
        Self::filtered(FOCUSED_POOL_DECAY, |c| !is_vowel(c))
    }

    /// Frequency-weighted pool of the whole alphabet.
    pub fn combined() -> Self {
        Self::filtered(MIXED_POOL_DECAY, |_| true)
    }

    /// Pool with explicit weights, for tests and custom distributions.
    pub fn from_weights(entries: Vec<(char, f64)>, decay: f64) -> Self {
        Self { entries, decay }
    }

    fn filtered(decay: f64, keep: impl Fn(char) -> bool) -> Self {
        Self {
            entries: LETTER_WEIGHTS
                .iter()
                .copied()
                .filter(|&(c, _)| keep(c))
                .collect(),
            decay,
        }
    }

    /// Draw one letter and decay its weight.
    pub fn draw(&mut self, rng: &mut impl Rng) -> Result<char, SamplerError> {
        let total: f64 = self.entries.iter().map(|&(_, w)| w).sum();
        if self.entries.is_empty() || total <= 0.0 {
            return Err(SamplerError::Exhausted);
        }

        let mut remaining = rng.gen_range(0.0..total);
        let mut picked = self.entries.len() - 1;
        for (i, &(_, weight)) in self.entries.iter().enumerate() {
            remaining -= weight;
            if remaining <= 0.0 {
                picked = i;
                break;
            }
        }

        let (letter, weight) = self.entries[picked];
        self.entries[picked] = (letter, weight * self.decay);
        Ok(letter)
    }
}

/// Sample a full grid's worth of letters.
///
/// Draws `min_vowels` vowels, then `min_consonants` consonants, then fills
/// the rest from the combined pool, and finally shuffles the flat sequence
/// so the draw order leaves no positional bias in the grid.
pub fn sample_letters(
    min_vowels: usize,
    min_consonants: usize,
    rng: &mut impl Rng,
) -> Result<Vec<char>, SamplerError> {
    debug_assert!(min_vowels + min_consonants <= GRID_CELLS);
    let mut letters = Vec::with_capacity(GRID_CELLS);

    let mut vowel_pool = LetterPool::vowels();
    for _ in 0..min_vowels {
        letters.push(vowel_pool.draw(rng)?);
    }

    let mut consonant_pool = LetterPool::consonants();
    for _ in 0..min_consonants {
        letters.push(consonant_pool.draw(rng)?);
    }

    let mut mixed_pool = LetterPool::combined();
    while letters.len() < GRID_CELLS {
        letters.push(mixed_pool.draw(rng)?);
    }

    letters.shuffle(rng);
    Ok(letters)
}
