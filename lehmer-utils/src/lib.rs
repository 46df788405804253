//! Seeded Park-Miller random generator and an in-place Fisher-Yates shuffle.
//!
//! The shuffle only depends on a "next fraction" closure, so it can be driven
//! by [`random::SeededRandom`] or by any other source of values in `[0, 1)`.
//! Neither is suitable for cryptographic use.

pub mod error;
pub mod random;
pub mod range;
pub mod shuffle;

pub use error::{RandomError, Result};
pub use random::SeededRandom;
pub use shuffle::{shuffle, shuffled_indices, try_shuffle};
