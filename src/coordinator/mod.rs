//! The coordinator splits the input into chunks and runs the matcher on every chunk in parallel.
//!
//! Compression happens in the following steps:
//! - Partition: cut the input into one contiguous range per worker. Earlier chunks take the remainder bytes.
//! - Fan out: each worker tokenizes only its own range. No window ever reaches into another chunk.
//! - Fan in: results are collected by chunk index, so the output order never depends on timing.
//!
//! Decompression is the mirror image. Each chunk expands into a private buffer on its own worker,
//! and the buffers are joined in chunk order once every worker is done.
//!
//! Smaller chunks trade compression ratio for speed, since a repeat can only be found inside the
//! chunk that holds it.
//!
pub mod chunked;
pub mod compress;
pub mod decompress;
pub mod partition;

use std::thread::available_parallelism;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::Result;

/// Threads for a call with `requested` workers of which `busy` have bytes to process.
/// Never more than the machine can run at once. Chunk order comes from the indexed collect,
/// so the pool may be smaller than the chunk count.
pub(crate) fn pool_size(requested: usize, busy: usize) -> usize {
    let cores = available_parallelism().map_or(1, |n| n.get());
    requested.min(busy).min(cores).max(1)
}

/// A pool private to one call, sized by `pool_size`.
pub(crate) fn worker_pool(requested: usize, busy: usize) -> Result<ThreadPool> {
    Ok(ThreadPoolBuilder::new()
        .num_threads(pool_size(requested, busy))
        .thread_name(|i| format!("lz77-worker-{}", i))
        .build()?)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pool_size_test() {
        let cores = available_parallelism().map_or(1, |n| n.get());
        assert_eq!(pool_size(100_000, 3), cores.min(3));
        assert_eq!(pool_size(100_000, 100_000), cores);
        assert_eq!(pool_size(4, 0), 1);
        assert_eq!(pool_size(1, 8), 1);
    }
}
