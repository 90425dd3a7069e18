//! Letter pool generation
//!
//! A pool holds every solution letter plus random filler drawn from the
//! language alphabet, uniformly shuffled. Randomness is injected so pools are
//! reproducible from a seed.

use super::scoring::pool_size;
use crate::core::Difficulty;
use rand::Rng;
use rustc_hash::FxHashMap;

/// Shuffle a slice in place using Fisher-Yates
///
/// Every permutation is equally likely given a uniform `rng`.
pub fn shuffle<T, R: Rng + ?Sized>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

/// Generate the selectable letters for a round
///
/// The solution is uppercase-normalized and every one of its letters is kept.
/// Filler letters are drawn independently with replacement from `alphabet` until
/// the pool reaches the difficulty's target size. A solution at least as long as
/// the target gets no filler, so the pool may be longer than the target.
///
/// # Examples
/// ```
/// use powerletter::core::{Difficulty, ENGLISH_ALPHABET};
/// use powerletter::engine::{can_form_word, generate_letters};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let letters = generate_letters("sun", Difficulty::Easy, ENGLISH_ALPHABET, &mut rng);
///
/// assert_eq!(letters.len(), 10);
/// assert!(can_form_word("SUN", &letters));
/// ```
///
/// # Panics
/// Panics if filler is needed and `alphabet` is empty.
pub fn generate_letters<R: Rng + ?Sized>(
    solution: &str,
    difficulty: Difficulty,
    alphabet: &[char],
    rng: &mut R,
) -> Vec<char> {
    let mut letters: Vec<char> = solution.to_uppercase().chars().collect();
    let target = pool_size(difficulty);
    let filler = target.saturating_sub(letters.len());

    assert!(
        filler == 0 || !alphabet.is_empty(),
        "filler letters need a non-empty alphabet"
    );

    letters.reserve(filler);
    for _ in 0..filler {
        letters.push(alphabet[rng.random_range(0..alphabet.len())]);
    }

    shuffle(&mut letters, rng);
    letters
}

/// Check whether `word` can be spelled from `letters`, using each letter at most once
///
/// Comparison is case-insensitive on the word side; pool letters are expected uppercase.
#[must_use]
pub fn can_form_word(word: &str, letters: &[char]) -> bool {
    let mut available: FxHashMap<char, usize> = FxHashMap::default();
    for &letter in letters {
        *available.entry(letter).or_insert(0) += 1;
    }

    word.to_uppercase().chars().all(|letter| {
        available.get_mut(&letter).is_some_and(|count| {
            if *count == 0 {
                false
            } else {
                *count -= 1;
                true
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ARABIC_ALPHABET, ENGLISH_ALPHABET};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn char_counts(text: impl IntoIterator<Item = char>) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for ch in text {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn pool_size_by_difficulty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate_letters("cat", Difficulty::Easy, ENGLISH_ALPHABET, &mut rng).len(),
            10
        );
        assert_eq!(
            generate_letters("cat", Difficulty::Medium, ENGLISH_ALPHABET, &mut rng).len(),
            14
        );
        assert_eq!(
            generate_letters("cat", Difficulty::Hard, ENGLISH_ALPHABET, &mut rng).len(),
            20
        );
    }

    #[test]
    fn pool_contains_solution_multiset() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for (solution, difficulty) in [
                ("letter", Difficulty::Easy),
                ("Mississippi", Difficulty::Medium),
                ("bookkeeper", Difficulty::Hard),
            ] {
                let letters = generate_letters(solution, difficulty, ENGLISH_ALPHABET, &mut rng);
                assert!(letters.len() >= solution.len());

                let pool = char_counts(letters.iter().copied());
                for (ch, needed) in char_counts(solution.to_uppercase().chars()) {
                    assert!(
                        pool.get(&ch).copied().unwrap_or(0) >= needed,
                        "seed {seed}: {solution} missing {ch}"
                    );
                }
            }
        }
    }

    #[test]
    fn filler_drawn_from_alphabet() {
        let mut rng = StdRng::seed_from_u64(99);
        let letters = generate_letters("شمس", Difficulty::Hard, ARABIC_ALPHABET, &mut rng);
        assert_eq!(letters.len(), 20);
        assert!(letters.iter().all(|ch| ARABIC_ALPHABET.contains(ch)));
    }

    #[test]
    fn long_solution_gets_no_filler() {
        let mut rng = StdRng::seed_from_u64(3);
        let letters = generate_letters(
            "INCOMPREHENSIBILITIES",
            Difficulty::Hard,
            ENGLISH_ALPHABET,
            &mut rng,
        );
        assert_eq!(letters.len(), 21);
        assert_eq!(
            char_counts(letters.iter().copied()),
            char_counts("INCOMPREHENSIBILITIES".chars())
        );

        let mut rng = StdRng::seed_from_u64(3);
        let letters = generate_letters("telescopes", Difficulty::Easy, &[], &mut rng);
        assert_eq!(letters.len(), 10);
    }

    #[test]
    fn same_seed_same_pool() {
        let mut rng1 = StdRng::seed_from_u64(12345);
        let mut rng2 = StdRng::seed_from_u64(12345);
        assert_eq!(
            generate_letters("planet", Difficulty::Medium, ENGLISH_ALPHABET, &mut rng1),
            generate_letters("planet", Difficulty::Medium, ENGLISH_ALPHABET, &mut rng2)
        );
    }

    #[test]
    fn shuffle_keeps_elements() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut values: Vec<u32> = (0..50).collect();
        shuffle(&mut values, &mut rng);
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);
        let mut single = [42];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, [42]);
    }

    #[test]
    fn shuffle_reaches_every_permutation_uniformly() {
        const TRIALS: usize = 60_000;
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen: FxHashMap<[char; 3], usize> = FxHashMap::default();

        for _ in 0..TRIALS {
            let mut letters = ['A', 'B', 'C'];
            shuffle(&mut letters, &mut rng);
            *seen.entry(letters).or_insert(0) += 1;
        }

        assert_eq!(seen.len(), 6);
        let expected = TRIALS / 6;
        for (permutation, count) in seen {
            assert!(
                count.abs_diff(expected) < expected / 10,
                "{permutation:?} seen {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn shuffle_multiset_distribution() {
        // "AAB" has three distinct arrangements, each with probability 1/3
        const TRIALS: usize = 30_000;
        let mut rng = StdRng::seed_from_u64(77);
        let mut seen: FxHashMap<[char; 3], usize> = FxHashMap::default();

        for _ in 0..TRIALS {
            let mut letters = ['A', 'A', 'B'];
            shuffle(&mut letters, &mut rng);
            *seen.entry(letters).or_insert(0) += 1;
        }

        assert_eq!(seen.len(), 3);
        let expected = TRIALS / 3;
        assert!(seen.values().all(|&count| count.abs_diff(expected) < expected / 10));
    }

    #[test]
    fn can_form_word_respects_counts() {
        let letters = ['B', 'O', 'K', 'O', 'X'];
        assert!(can_form_word("book", &letters));
        assert!(can_form_word("OX", &letters));
        assert!(!can_form_word("boook", &letters));
        assert!(!can_form_word("cat", &letters));
        assert!(can_form_word("", &letters));
    }
}
