//! Reference greedy search. Every position in the window is compared against the cursor.
//!
//! Cost is O(n * window * max_length) for a chunk of n bytes. The indexed search exists for
//! larger windows; this one defines the expected output.

use log::trace;

use super::token::{Token, TokenStream};

/// Greedy leftmost-longest tokenizer. Ties go to the oldest (largest offset) candidate.
pub fn greedy_tokens(bytes: &[u8], window_size: usize, max_length: usize) -> TokenStream {
    let mut tokens = Vec::with_capacity(bytes.len() / 2 + 1);
    let mut i = 0;

    while i < bytes.len() {
        let mut best_length = 0;
        let mut best_offset = 0;

        for j in i.saturating_sub(window_size)..i {
            let k = match_len(bytes, j, i, max_length);
            if k > best_length {
                best_length = k;
                best_offset = i - j;
            }
        }

        i += push_token(&mut tokens, bytes, i, best_offset, best_length);
    }
    tokens
}

/// Length of the run starting at `j` that repeats the bytes at `i`.
/// Stops at `max_length`, and always leaves at least one byte after the run for the literal.
/// The run may extend past `i` (the copy overlaps its own output).
pub(crate) fn match_len(bytes: &[u8], j: usize, i: usize, max_length: usize) -> usize {
    let mut k = 0;
    while k < max_length && i + k + 1 < bytes.len() && bytes[j + k] == bytes[i + k] {
        k += 1;
    }
    k
}

/// Append the token for cursor `i` and return how far the cursor moves.
pub(crate) fn push_token(
    tokens: &mut TokenStream,
    bytes: &[u8],
    i: usize,
    offset: usize,
    length: usize,
) -> usize {
    if length > 0 {
        trace!("Match at {}: offset {}, length {}", i, offset, length);
        tokens.push(Token::new(offset, length, bytes[i + length]));
        length + 1
    } else {
        tokens.push(Token::literal(bytes[i]));
        1
    }
}
