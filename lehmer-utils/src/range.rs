//! Integer and fraction domains shared by the generator and the shuffle.

use crate::error::{RandomError, Result};

/// 2^31 - 1, the Mersenne prime modulus of the minimal standard generator.
pub const MODULUS: i64 = 2_147_483_647;

/// 7^5
pub const MULTIPLIER: i64 = 16_807;

pub const STATE_MIN: i32 = 1;
pub const STATE_MAX: i32 = 2_147_483_646;

/// Number of distinct registers, and so of distinct fractions.
pub const STATE_SPAN: i64 = STATE_MAX as i64;

pub fn is_valid_state(state: i64) -> bool {
    (STATE_MIN as i64..=STATE_MAX as i64).contains(&state)
}

/// Narrows a caller supplied seed to `i32`, rejecting anything wider.
pub fn check_seed(seed: i64) -> Result<i32> {
    i32::try_from(seed).map_err(|_| RandomError::SeedOutOfRange(seed))
}

pub fn check_state(state: i64) -> Result<i32> {
    if is_valid_state(state) {
        Ok(state as i32)
    } else {
        Err(RandomError::StateOutOfRange(state))
    }
}

/// Accepts only values in `[0, 1)`. NaN is rejected.
pub fn check_fraction(fraction: f64) -> Result<f64> {
    if (0.0..1.0).contains(&fraction) {
        Ok(fraction)
    } else {
        Err(RandomError::FractionOutOfRange(fraction))
    }
}

/// Maps a fraction in `[0, 1)` onto an index in `[0, bound)`.
pub fn index_from_fraction(fraction: f64, bound: usize) -> usize {
    let index = (fraction * bound as f64).floor() as usize;
    // guards against rounding up to `bound` for fractions a hair below 1
    index.min(bound.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_bounds() {
        assert!(!is_valid_state(0));
        assert!(is_valid_state(1));
        assert!(is_valid_state(STATE_MAX as i64));
        assert!(!is_valid_state(MODULUS));
        assert!(!is_valid_state(-1));
    }

    #[test]
    fn test_check_seed() {
        assert_eq!(check_seed(-1), Ok(-1));
        assert_eq!(check_seed(i32::MIN as i64), Ok(i32::MIN));
        assert_eq!(
            check_seed(i32::MAX as i64 + 1),
            Err(RandomError::SeedOutOfRange(2_147_483_648))
        );
    }

    #[test]
    fn test_check_fraction() {
        assert!(check_fraction(0.0).is_ok());
        assert!(check_fraction(0.999_999).is_ok());
        assert!(check_fraction(1.0).is_err());
        assert!(check_fraction(-0.1).is_err());
        assert!(check_fraction(f64::NAN).is_err());
    }

    #[test]
    fn test_index_from_fraction() {
        assert_eq!(index_from_fraction(0.0, 10), 0);
        assert_eq!(index_from_fraction(0.55, 10), 5);
        assert_eq!(index_from_fraction(1.0 - f64::EPSILON, 26), 25);
        assert_eq!(index_from_fraction(0.3, 1), 0);
    }
}
