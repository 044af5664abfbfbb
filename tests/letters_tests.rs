use rand::rngs::StdRng;
use rand::SeedableRng;
use wordgrid::letters::{is_vowel, sample_letters, FOCUSED_POOL_DECAY};
use wordgrid::{LetterPool, SamplerError, GRID_CELLS};

#[test]
fn test_empty_pool_is_an_error() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut pool = LetterPool::from_weights(vec![], FOCUSED_POOL_DECAY);
    assert_eq!(pool.draw(&mut rng), Err(SamplerError::Exhausted));
}

#[test]
fn test_zero_weight_pool_is_an_error() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut pool = LetterPool::from_weights(vec![('A', 0.0), ('B', 0.0)], FOCUSED_POOL_DECAY);
    assert_eq!(pool.draw(&mut rng), Err(SamplerError::Exhausted));
}

#[test]
fn test_zero_weight_letter_is_never_drawn() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut pool = LetterPool::from_weights(vec![('A', 1.0), ('B', 0.0)], FOCUSED_POOL_DECAY);
    for _ in 0..100 {
        assert_eq!(pool.draw(&mut rng).unwrap(), 'A');
    }
}

#[test]
fn test_decay_never_empties_the_pool() {
    // Halving a positive weight keeps it positive, so a singleton pool can
    // be drawn from indefinitely.
    let mut rng = StdRng::seed_from_u64(3);
    let mut pool = LetterPool::from_weights(vec![('Q', 2.0)], FOCUSED_POOL_DECAY);
    for _ in 0..1000 {
        assert_eq!(pool.draw(&mut rng).unwrap(), 'Q');
    }
}

#[test]
fn test_draws_are_deterministic_for_a_seed() {
    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);
    let mut pool_a = LetterPool::combined();
    let mut pool_b = LetterPool::combined();

    for _ in 0..GRID_CELLS {
        assert_eq!(
            pool_a.draw(&mut rng_a).unwrap(),
            pool_b.draw(&mut rng_b).unwrap()
        );
    }
}

#[test]
fn test_vowel_pool_draws_only_vowels() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut pool = LetterPool::vowels();
    for _ in 0..50 {
        assert!(is_vowel(pool.draw(&mut rng).unwrap()));
    }
}

#[test]
fn test_consonant_pool_draws_only_consonants() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut pool = LetterPool::consonants();
    for _ in 0..50 {
        assert!(!is_vowel(pool.draw(&mut rng).unwrap()));
    }
}

#[test]
fn test_sample_letters_respects_minimums() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let letters = sample_letters(4, 8, &mut rng).unwrap();

        assert_eq!(letters.len(), GRID_CELLS);
        let vowels = letters.iter().filter(|&&c| is_vowel(c)).count();
        let consonants = letters.len() - vowels;
        assert!(vowels >= 4, "seed {}: only {} vowels", seed, vowels);
        assert!(consonants >= 8, "seed {}: only {} consonants", seed, consonants);
        assert!(letters.iter().all(|c| c.is_ascii_uppercase()));
    }
}
