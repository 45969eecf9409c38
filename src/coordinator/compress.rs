use log::{debug, info};
use rayon::prelude::*;

use super::chunked::ChunkedTokens;
use super::partition::ChunkPartition;
use super::worker_pool;
use crate::error::Result;
use crate::matcher::find_tokens;
use crate::params::Lz77Params;

/*
    Each chunk is tokenized in isolation: the search window never reaches before the start
    of its own chunk. That is what makes the chunks independent, so workers share nothing but
    the read-only input. Results land in a slot per chunk (the indexed collect below), and
    chunk order is restored by position, not by which worker finished first.
*/

/// Compress `bytes` into one token stream per chunk. `params.worker_count` sets the chunk count;
/// the pool never runs more threads than there are non-empty chunks or cores.
pub fn compress(bytes: &[u8], params: &Lz77Params) -> Result<ChunkedTokens> {
    params.validate()?;
    info!(
        "Compressing {} bytes with {}.",
        bytes.len(),
        params
    );

    let partition = ChunkPartition::new(bytes.len(), params.worker_count)?;
    let busy = partition.ranges().iter().filter(|r| !r.is_empty()).count();
    let pool = worker_pool(params.worker_count, busy)?;

    let chunks = pool.install(|| {
        partition
            .ranges()
            .par_iter()
            .enumerate()
            .map(|(idx, range)| {
                let tokens = find_tokens(
                    &bytes[range.clone()],
                    params.window_size,
                    params.max_length,
                    params.strategy,
                );
                debug!(
                    "Chunk {} ({}..{}) became {} tokens.",
                    idx,
                    range.start,
                    range.end,
                    tokens.len()
                );
                tokens
            })
            .collect::<Vec<_>>()
    });

    let chunked = ChunkedTokens::new(chunks);
    info!(
        "Compressed {} bytes into {} tokens across {} chunk(s).",
        bytes.len(),
        chunked.token_count(),
        chunked.chunk_count()
    );
    Ok(chunked)
}
