//! Codec parameters passed explicitly with every compression call.
//!
//! The degree of parallelism is a property of the call (`worker_count`), never of process-wide
//! state, so two calls with different worker counts can run side by side.

use std::fmt::{Display, Formatter};

use crate::error::{Lz77Error, Result};
use crate::matcher::MatchStrategy;

const DEFAULT_WINDOW: usize = 100;
const DEFAULT_MAX_LENGTH: usize = 10;
const DEFAULT_WORKERS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lz77Params {
    /// How far back (in bytes, within the chunk) the matcher may look for a repeat
    pub window_size: usize,
    /// Longest run a single token may copy
    pub max_length: usize,
    /// Number of chunks, and the number of workers that process them
    pub worker_count: usize,
    /// Search implementation. Both produce identical tokens.
    pub strategy: MatchStrategy,
}

impl Lz77Params {
    pub fn new(window_size: usize, max_length: usize, worker_count: usize) -> Self {
        Self {
            window_size,
            max_length,
            worker_count,
            strategy: MatchStrategy::Exhaustive,
        }
    }

    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Fail fast on values the coordinator cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.worker_count == 0 {
            return Err(Lz77Error::InvalidParams(
                "worker count must be at least 1".to_string(),
            ));
        }
        if self.max_length == 0 {
            return Err(Lz77Error::InvalidParams(
                "maximum match length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Lz77Params {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW, DEFAULT_MAX_LENGTH, DEFAULT_WORKERS)
    }
}

impl Display for Lz77Params {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "window {}, max length {}, {} worker(s), {} search",
            self.window_size, self.max_length, self.worker_count, self.strategy
        )
    }
}
