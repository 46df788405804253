use serde::{Deserialize, Serialize};

use crate::error::{RandomError, Result};
use crate::range::{check_seed, check_state, MODULUS, MULTIPLIER, STATE_SPAN};

/// Park-Miller "minimal standard" Lehmer generator.
///
/// The register always holds a value in `[1, 2^31 - 2]`. Every draw advances it
/// with `state = state * 16807 mod (2^31 - 1)`, computed in 64 bits.
///
/// # Example
/// ```
/// use lehmer_utils::random::SeededRandom;
///
/// let mut rng = SeededRandom::new(1);
/// assert_eq!(rng.state(), 16807);
/// assert_eq!(rng.next_int(), 282475249);
///
/// let fraction = rng.next_fraction();
/// assert!((0.0..1.0).contains(&fraction));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Checkpoint", into = "Checkpoint")]
pub struct SeededRandom {
    state: i32,
}

/// Serialized form of [`SeededRandom`]: `{"state": <register>}`.
#[derive(Serialize, Deserialize)]
pub struct Checkpoint {
    pub state: i64,
}

impl SeededRandom {
    /// Accepts any `i32`. Seeds whose first product is zero or negative are
    /// folded back into the valid register range.
    pub fn new(seed: i32) -> Self {
        let mut state = (i64::from(seed) * MULTIPLIER) % MODULUS;
        if state <= 0 {
            state = ((state + STATE_SPAN) % STATE_SPAN) + 1;
        }

        Self {
            state: state as i32,
        }
    }

    /// Like [`SeededRandom::new`], for callers holding a wider integer.
    pub fn try_from_seed(seed: i64) -> Result<Self> {
        Ok(Self::new(check_seed(seed)?))
    }

    /// Resumes a generator from a register previously read with
    /// [`SeededRandom::state`]. No multiplication is applied.
    pub fn from_state(state: i64) -> Result<Self> {
        let state = check_state(state)?;
        log::trace!("restored generator at state {}", state);
        Ok(Self { state })
    }

    pub fn state(&self) -> i32 {
        self.state
    }

    /// Advances the register and returns it. Always in `[1, 2^31 - 2]`.
    pub fn next_int(&mut self) -> i32 {
        self.state = ((i64::from(self.state) * MULTIPLIER) % MODULUS) as i32;
        debug_assert!(self.state > 0);
        self.state
    }

    /// Advances the register and maps it onto `[0, 1)`.
    pub fn next_fraction(&mut self) -> f64 {
        f64::from(self.next_int() - 1) / STATE_SPAN as f64
    }

    /// Borrows the generator as a fraction source for [`crate::shuffle::shuffle`].
    pub fn fractions(&mut self) -> impl FnMut() -> f64 + '_ {
        move || self.next_fraction()
    }
}

impl TryFrom<i64> for SeededRandom {
    type Error = RandomError;

    fn try_from(seed: i64) -> Result<Self> {
        Self::try_from_seed(seed)
    }
}

impl TryFrom<Checkpoint> for SeededRandom {
    type Error = RandomError;

    fn try_from(checkpoint: Checkpoint) -> Result<Self> {
        Self::from_state(checkpoint.state)
    }
}

impl From<SeededRandom> for Checkpoint {
    fn from(rng: SeededRandom) -> Self {
        Self {
            state: i64::from(rng.state),
        }
    }
}

impl Iterator for SeededRandom {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        Some(self.next_int())
    }
}
