use crate::error::Result;
use crate::random::SeededRandom;
use crate::range::{check_fraction, index_from_fraction};

/// Fisher-Yates shuffle of `items` in place, drawing swap targets from
/// `next_fraction`.
///
/// The source must return fractions in `[0, 1)` and is called at most
/// `items.len() - 1` times. It is not retained after the call.
///
/// # Panics
/// If the source returns a value outside `[0, 1)`. Use [`try_shuffle`] to get
/// an error instead.
///
/// # Example
/// ```
/// use lehmer_utils::random::SeededRandom;
/// use lehmer_utils::shuffle::shuffle;
///
/// let mut rng = SeededRandom::new(12345);
/// let mut letters = vec!['a', 'b', 'c', 'd'];
/// shuffle(&mut letters, rng.fractions());
///
/// letters.sort();
/// assert_eq!(letters, vec!['a', 'b', 'c', 'd']);
/// ```
pub fn shuffle<T, F>(items: &mut [T], next_fraction: F)
where
    F: FnMut() -> f64,
{
    if let Err(e) = try_shuffle(items, next_fraction) {
        panic!("shuffle: {}", e);
    }
}

/// Fallible form of [`shuffle`]. Each fraction is checked before it is used,
/// so on error `items` is still a permutation of its original contents.
pub fn try_shuffle<T, F>(items: &mut [T], mut next_fraction: F) -> Result<()>
where
    F: FnMut() -> f64,
{
    log::trace!("shuffling {} items", items.len());

    for i in (1..items.len()).rev() {
        let fraction = check_fraction(next_fraction())?;
        let j = index_from_fraction(fraction, i + 1);
        items.swap(i, j);
    }

    Ok(())
}

/// Deterministic permutation of `0..size` for a given seed.
///
/// ```
/// use lehmer_utils::shuffle::shuffled_indices;
///
/// let shuffled = shuffled_indices(12345, 10);
/// assert_eq!(shuffled.len(), 10);
/// assert_eq!(shuffled, shuffled_indices(12345, 10));
/// ```
pub fn shuffled_indices(seed: i32, size: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..size).collect();
    let mut rng = SeededRandom::new(seed);
    shuffle(&mut indices, rng.fractions());
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RandomError;
    use std::collections::HashSet;

    #[test]
    fn test_shuffled_indices_basic() {
        let size = 10;
        let shuffled = shuffled_indices(12345, size);

        assert_eq!(shuffled.len(), size);
        let set: HashSet<usize> = shuffled.iter().copied().collect();
        assert_eq!(set.len(), size);
        for i in 0..size {
            assert!(set.contains(&i));
        }
    }

    #[test]
    fn test_shuffled_indices_deterministic() {
        assert_eq!(shuffled_indices(42, 100), shuffled_indices(42, 100));
    }

    #[test]
    fn test_shuffled_indices_different_seeds() {
        // 50! orderings, a collision here would point at a seeding bug
        assert_ne!(shuffled_indices(111, 50), shuffled_indices(222, 50));
    }

    #[test]
    fn test_shuffled_indices_degenerate() {
        assert!(shuffled_indices(123, 0).is_empty());
        assert_eq!(shuffled_indices(123, 1), vec![0]);
    }

    #[test]
    fn test_draw_count() {
        let mut calls = 0;
        let mut items = [1, 2, 3, 4, 5, 6];
        shuffle(&mut items, || {
            calls += 1;
            0.5
        });
        assert_eq!(calls, 5);

        let mut calls = 0;
        let mut single = [1];
        shuffle(&mut single, || {
            calls += 1;
            0.5
        });
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_zero_source_rotates() {
        // j is always 0: each step pulls the current front to position i
        let mut items = [0, 1, 2, 3];
        shuffle(&mut items, || 0.0);
        assert_eq!(items, [1, 2, 3, 0]);
    }

    #[test]
    fn test_try_shuffle_rejects_out_of_range() {
        let mut items = vec![1, 2, 3];
        let result = try_shuffle(&mut items, || 1.0);
        assert_eq!(result, Err(RandomError::FractionOutOfRange(1.0)));
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_try_shuffle_partial_is_permutation() {
        let mut items = vec![10, 20, 30, 40];
        let mut fractions = vec![0.0, -0.5].into_iter();
        let result = try_shuffle(&mut items, || fractions.next().unwrap_or(0.0));
        assert!(result.is_err());

        items.sort();
        assert_eq!(items, vec![10, 20, 30, 40]);
    }

    #[test]
    #[should_panic(expected = "expected a fraction in [0, 1)")]
    fn test_shuffle_panics_on_bad_source() {
        let mut items = [1, 2];
        shuffle(&mut items, || 2.0);
    }
}
