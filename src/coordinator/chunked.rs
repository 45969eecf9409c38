//! The per-chunk token collection handed back by compression and consumed by decompression.
//!
//! Chunk order is significant. Flattening concatenates streams in chunk order and loses the
//! boundaries; a caller that persists the flat stream must also persist `chunk_lengths()` so
//! `from_flat` can split it again before decoding.

use crate::error::{Lz77Error, Result};
use crate::matcher::{covered_len, Token, TokenStream};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChunkedTokens {
    chunks: Vec<TokenStream>,
}

impl ChunkedTokens {
    pub fn new(chunks: Vec<TokenStream>) -> Self {
        Self { chunks }
    }

    pub fn chunks(&self) -> &[TokenStream] {
        &self.chunks
    }

    pub fn chunk(&self, idx: usize) -> Option<&TokenStream> {
        self.chunks.get(idx)
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Tokens across all chunks
    pub fn token_count(&self) -> usize {
        self.chunks.iter().map(Vec::len).sum()
    }

    /// Bytes each chunk decodes to, in chunk order.
    pub fn chunk_lengths(&self) -> Vec<usize> {
        self.chunks.iter().map(|c| covered_len(c)).collect()
    }

    /// Bytes the whole collection decodes to.
    pub fn decoded_len(&self) -> usize {
        self.chunks.iter().map(|c| covered_len(c)).sum()
    }

    /// Iterate every token in chunk order.
    pub fn iter(&self) -> impl Iterator<Item = &Token> + '_ {
        self.chunks.iter().flatten()
    }

    /// Concatenate all chunk streams in chunk order.
    pub fn flatten(&self) -> TokenStream {
        let mut flat = Vec::with_capacity(self.token_count());
        for chunk in &self.chunks {
            flat.extend_from_slice(chunk);
        }
        flat
    }

    /// Split a flattened stream back into chunks using the byte length each chunk decodes to.
    ///
    /// Fails if a token would straddle a chunk boundary or if the lengths do not account for
    /// every token.
    pub fn from_flat(tokens: &[Token], chunk_lengths: &[usize]) -> Result<Self> {
        let mut chunks = Vec::with_capacity(chunk_lengths.len());
        let mut cursor = 0;

        for (chunk_idx, &want) in chunk_lengths.iter().enumerate() {
            let mut covered = 0;
            let start = cursor;
            while covered < want {
                let t = tokens.get(cursor).ok_or_else(|| {
                    Lz77Error::Resplit(format!(
                        "ran out of tokens in chunk {} after {} of {} bytes",
                        chunk_idx, covered, want
                    ))
                })?;
                covered = covered.saturating_add(t.span());
                cursor += 1;
            }
            if covered != want {
                return Err(Lz77Error::Resplit(format!(
                    "token {} crosses the end of chunk {} ({} bytes, expected {})",
                    cursor - 1,
                    chunk_idx,
                    covered,
                    want
                )));
            }
            chunks.push(tokens[start..cursor].to_vec());
        }

        if cursor != tokens.len() {
            return Err(Lz77Error::Resplit(format!(
                "{} tokens left over after the last chunk",
                tokens.len() - cursor
            )));
        }
        Ok(Self { chunks })
    }

    pub fn into_inner(self) -> Vec<TokenStream> {
        self.chunks
    }
}

impl From<Vec<TokenStream>> for ChunkedTokens {
    fn from(chunks: Vec<TokenStream>) -> Self {
        Self::new(chunks)
    }
}
