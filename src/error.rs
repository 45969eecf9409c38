//! The single error type shared by the matcher, the chunk coordinator and the driver.
//!
//! The codec itself is deterministic, so none of these errors are transient. A caller that
//! receives one must fix its input (parameters or token streams) rather than retry.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Lz77Error {
    /// Rejected before any work starts.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// A token referenced bytes before the start of its own chunk's output.
    #[error(
        "Decode error in chunk {chunk} at token {token}: offset {offset} reaches before the {available} bytes decoded so far"
    )]
    Decode {
        chunk: usize,
        token: usize,
        offset: usize,
        available: usize,
    },

    /// A flattened token stream could not be split back into its chunks.
    #[error("Unable to re-split token stream: {0}")]
    Resplit(String),

    #[error("Worker pool failed to start: {0}")]
    ThreadPool(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<rayon::ThreadPoolBuildError> for Lz77Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Lz77Error::ThreadPool(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Lz77Error>;
