use thiserror::Error;

/// Precondition violations detected at the boundary of the ring arithmetic.
/// Nothing past these checks can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    #[error("Invalid ring dimension {n}: supported range is [{min}, {max}]")]
    InvalidDimension { n: usize, min: usize, max: usize },

    #[error("Dimension mismatch: expected N = {expected}, got N = {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Sparse index {index} out of range for N = {n}")]
    IndexOutOfRange { index: usize, n: usize },

    #[error("Sparse index {index} occurs more than once")]
    DuplicateIndex { index: usize },

    #[error("Sparse weight {weight} exceeds the maximum of {max}")]
    WeightTooLarge { weight: usize, max: usize },

    #[error("Coefficient {value} at position {position} is not ternary")]
    NotTernary { value: i32, position: usize },

    #[error("Product-form counts {counts:?} do not match {len} indices")]
    CountMismatch { counts: [usize; 3], len: usize },

    #[error("Invalid modulus 2^{log_q}")]
    InvalidModulus { log_q: u32 },
}

pub type Result<T> = std::result::Result<T, RingError>;
