//! The matcher module turns one chunk of bytes into an ordered stream of LZ77 tokens, and back.
//!
//! The search is greedy, leftmost-longest within a bounded window:
//! - At each cursor position every earlier position inside the window is a candidate, oldest first.
//! - The longest run wins. On a tie the first candidate seen (the largest offset) is kept.
//! - A match is only accepted while a byte remains after it, because every token carries a
//!   trailing literal. The last byte of a chunk therefore always ends a token.
//!
//! Two search implementations are provided:
//! - search: the reference scan over every window position.
//! - indexed: visits only positions that can match, found through per-byte and 3-byte prefix
//!   indexes. Output is token-for-token identical to the reference scan.
//!
//! Expansion (decoding) is a byte-at-a-time copy so a run may overlap the bytes it is producing.
//!
pub mod expand;
pub mod indexed;
pub mod search;
pub mod token;

use std::fmt::{Display, Formatter};

pub use expand::expand_tokens;
pub use token::{covered_len, Token, TokenStream};

/// Define the alternate search implementations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Compare against every position in the window
    Exhaustive,
    /// Compare only against positions whose leading bytes already agree
    Indexed,
}

impl Display for MatchStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Tokenize one chunk with the chosen search implementation.
pub fn find_tokens(
    bytes: &[u8],
    window_size: usize,
    max_length: usize,
    strategy: MatchStrategy,
) -> TokenStream {
    match strategy {
        MatchStrategy::Exhaustive => search::greedy_tokens(bytes, window_size, max_length),
        MatchStrategy::Indexed => indexed::indexed_tokens(bytes, window_size, max_length),
    }
}
