use log::{debug, error, info};
use rayon::prelude::*;

use super::chunked::ChunkedTokens;
use super::worker_pool;
use crate::error::{Lz77Error, Result};
use crate::matcher::expand_tokens;

/// Rebuild the original bytes. Every chunk expands into its own buffer on a pool worker,
/// then the buffers are joined in chunk order. A bad token in any chunk fails the whole call.
pub fn decompress(chunked: &ChunkedTokens) -> Result<Vec<u8>> {
    info!(
        "Decompressing {} tokens across {} chunk(s).",
        chunked.token_count(),
        chunked.chunk_count()
    );
    let busy = chunked.chunks().iter().filter(|c| !c.is_empty()).count();
    let pool = worker_pool(chunked.chunk_count(), busy)?;

    let parts = pool.install(|| {
        chunked
            .chunks()
            .par_iter()
            .enumerate()
            .map(|(idx, tokens)| {
                let mut out = Vec::new();
                expand_tokens(tokens, &mut out).map_err(|fault| {
                    error!(
                        "Chunk {} token {} has offset {} with only {} bytes behind it.",
                        idx, fault.token, fault.offset, fault.available
                    );
                    Lz77Error::Decode {
                        chunk: idx,
                        token: fault.token,
                        offset: fault.offset,
                        available: fault.available,
                    }
                })?;
                debug!("Chunk {} expanded to {} bytes.", idx, out.len());
                Ok(out)
            })
            .collect::<Result<Vec<Vec<u8>>>>()
    })?;

    let output = parts.concat();
    info!("Decompressed {} bytes.", output.len());
    Ok(output)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::matcher::Token;

    #[test]
    fn joins_in_chunk_order_test() {
        let chunked = ChunkedTokens::new(vec![
            vec![Token::literal(b'a'), Token::new(1, 2, b'b')],
            vec![],
            vec![Token::literal(b'c'), Token::literal(b'd')],
        ]);
        assert_eq!(decompress(&chunked).unwrap(), b"aaabcd");
    }

    #[test]
    fn empty_collection_test() {
        assert!(decompress(&ChunkedTokens::default()).unwrap().is_empty());
        let one_empty = ChunkedTokens::new(vec![vec![]]);
        assert!(decompress(&one_empty).unwrap().is_empty());
    }

    #[test]
    fn reports_offending_chunk_and_token_test() {
        let chunked = ChunkedTokens::new(vec![
            vec![Token::literal(b'a')],
            vec![Token::literal(b'b'), Token::literal(b'c'), Token::new(5, 1, b'd')],
        ]);
        match decompress(&chunked) {
            Err(Lz77Error::Decode {
                chunk,
                token,
                offset,
                available,
            }) => {
                assert_eq!((chunk, token, offset, available), (1, 2, 5, 2));
            }
            other => panic!("expected a decode error, got {:?}", other),
        }
    }

    #[test]
    fn copy_cannot_cross_into_previous_chunk_test() {
        // The first chunk's bytes exist in the joined output but are out of reach.
        let chunked = ChunkedTokens::new(vec![
            vec![Token::literal(b'x'), Token::literal(b'y')],
            vec![Token::new(1, 1, b'z')],
        ]);
        assert!(matches!(
            decompress(&chunked),
            Err(Lz77Error::Decode { chunk: 1, .. })
        ));
    }
}
