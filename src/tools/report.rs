//! Token statistics and previews for the driver. Nothing here affects the codec.

use std::fmt::{Display, Formatter};

use crate::coordinator::chunked::ChunkedTokens;
use crate::matcher::Token;

/// What a compression run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompressionSummary {
    pub input_bytes: usize,
    pub total_tokens: usize,
    pub literal_tokens: usize,
    pub match_tokens: usize,
    /// Bytes covered by copies (excluding each token's trailing literal)
    pub copied_bytes: usize,
    pub longest_match: usize,
    pub tokens_per_chunk: Vec<usize>,
}

impl CompressionSummary {
    pub fn new(input_bytes: usize, chunked: &ChunkedTokens) -> Self {
        let mut summary = Self {
            input_bytes,
            total_tokens: 0,
            literal_tokens: 0,
            match_tokens: 0,
            copied_bytes: 0,
            longest_match: 0,
            tokens_per_chunk: chunked.chunks().iter().map(Vec::len).collect(),
        };
        for t in chunked.iter() {
            summary.total_tokens += 1;
            if t.is_literal() {
                summary.literal_tokens += 1;
            } else {
                summary.match_tokens += 1;
                summary.copied_bytes += t.length;
                summary.longest_match = summary.longest_match.max(t.length);
            }
        }
        summary
    }

    /// Input bytes per token. Higher is better.
    pub fn bytes_per_token(&self) -> f64 {
        if self.total_tokens == 0 {
            return 0.0;
        }
        self.input_bytes as f64 / self.total_tokens as f64
    }
}

impl Display for CompressionSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Size of actual file: {} bytes", self.input_bytes)?;
        writeln!(f, "Total number of tokens: {}", self.total_tokens)?;
        writeln!(
            f,
            "Literal tokens: {}, match tokens: {}, copied bytes: {}, longest match: {}",
            self.literal_tokens, self.match_tokens, self.copied_bytes, self.longest_match
        )?;
        writeln!(f, "Bytes per token: {:.3}", self.bytes_per_token())?;
        write!(f, "Tokens per chunk: {:?}", self.tokens_per_chunk)
    }
}

/// Lines describing the first `count` tokens, in chunk order.
pub fn preview<'a>(tokens: impl IntoIterator<Item = &'a Token>, count: usize) -> Vec<String> {
    tokens
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(i, t)| format!("Token {}: {}", i, t))
        .collect()
}
