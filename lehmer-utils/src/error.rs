use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RandomError {
    #[error("Seed {0} does not fit in a signed 32-bit integer")]
    SeedOutOfRange(i64),

    #[error("Generator state {0} is outside [1, 2147483646]")]
    StateOutOfRange(i64),

    #[error("Randomness source returned {0}, expected a fraction in [0, 1)")]
    FractionOutOfRange(f64),
}

pub type Result<T> = std::result::Result<T, RandomError>;
