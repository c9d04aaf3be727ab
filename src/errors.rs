use thiserror::Error;

#[derive(Debug, Error)]
pub enum MerkleError {
    #[error("no leaves supplied")]
    Empty,

    #[error("invalid hex at index {index}: {source}")]
    InvalidHex {
        index: usize,
        #[source]
        source: hex::FromHexError,
    },

    #[error("digest length mismatch at index {index}: expected {expected} got {got}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        got: usize,
    },
}
