use thiserror::Error;

/// Everything that can go wrong inside the engine. All of these are
/// deterministic: retrying the same call reproduces the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("bit-string parse error: {0}")]
    ParseError(String),

    #[error("block must be {expected} bits, got {actual}")]
    InvalidBlockLength { expected: usize, actual: usize },

    #[error("key must be {expected} bits, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("malformed table set: {0}")]
    MalformedTableSet(String),

    #[error("length mismatch: {left} bits vs {right} bits")]
    LengthMismatch { left: usize, right: usize },

    #[error("permutation index {index} out of range for a {len}-bit vector")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot split a {len}-bit vector at {at}")]
    InvalidWidth { at: usize, len: usize },

    #[error("{width}-bit value does not divide into {boxes} substitution chunks")]
    BlockSizeMismatch { width: usize, boxes: usize },

    #[error("round function produced {actual} bits, expected {expected}")]
    OutputWidthMismatch { expected: usize, actual: usize },
}
