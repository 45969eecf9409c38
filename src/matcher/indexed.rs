//! Indexed greedy search.
//!
//! Produces exactly the tokens of `search::greedy_tokens`, but skips window positions that cannot
//! match. Two indexes are kept, both holding positions in ascending order:
//! - one bucket per byte value, for runs of one or two bytes.
//! - a 3-byte prefix map. Any position sharing the cursor's first three bytes beats every position
//!   that does not, so when this bucket has a candidate in the window nothing else is scanned.
//!
//! Scanning each bucket oldest first keeps the largest-offset tie-break of the reference search.

use rustc_hash::FxHashMap;

use super::search::{match_len, push_token};
use super::token::TokenStream;

const PREFIX_LEN: usize = 3;

struct PositionIndex {
    by_byte: Vec<Vec<usize>>,
    by_prefix: FxHashMap<u32, Vec<usize>>,
    /// Every position below this has been recorded
    next_unindexed: usize,
}

impl PositionIndex {
    fn new() -> Self {
        Self {
            by_byte: vec![Vec::new(); 256],
            by_prefix: FxHashMap::default(),
            next_unindexed: 0,
        }
    }

    /// Record every position before `i`.
    fn catch_up(&mut self, bytes: &[u8], i: usize) {
        for j in self.next_unindexed..i {
            self.by_byte[bytes[j] as usize].push(j);
            if let Some(key) = prefix_key(bytes, j) {
                self.by_prefix.entry(key).or_default().push(j);
            }
        }
        self.next_unindexed = self.next_unindexed.max(i);
    }
}

fn prefix_key(bytes: &[u8], at: usize) -> Option<u32> {
    bytes.get(at..at + PREFIX_LEN).map(|p| {
        ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | p[2] as u32
    })
}

/// Longest match among `candidates` at or after `lo`, first position winning ties.
fn best_in(
    bytes: &[u8],
    candidates: &[usize],
    lo: usize,
    i: usize,
    max_length: usize,
) -> (usize, usize) {
    let first = candidates.partition_point(|&j| j < lo);
    let mut best_length = 0;
    let mut best_offset = 0;
    for &j in &candidates[first..] {
        let k = match_len(bytes, j, i, max_length);
        if k > best_length {
            best_length = k;
            best_offset = i - j;
        }
    }
    (best_offset, best_length)
}

/// Greedy leftmost-longest tokenizer backed by position indexes.
pub fn indexed_tokens(bytes: &[u8], window_size: usize, max_length: usize) -> TokenStream {
    let mut tokens = Vec::with_capacity(bytes.len() / 2 + 1);
    let mut index = PositionIndex::new();
    let mut i = 0;

    while i < bytes.len() {
        let lo = i.saturating_sub(window_size);
        index.catch_up(bytes, i);

        let mut best = (0, 0);
        // A prefix hit is a run of at least PREFIX_LEN only when the run may grow that long.
        if max_length >= PREFIX_LEN && i + PREFIX_LEN < bytes.len() {
            if let Some(candidates) = prefix_key(bytes, i).and_then(|k| index.by_prefix.get(&k)) {
                best = best_in(bytes, candidates, lo, i, max_length);
            }
        }
        if best.1 == 0 {
            best = best_in(bytes, &index.by_byte[bytes[i] as usize], lo, i, max_length);
        }

        i += push_token(&mut tokens, bytes, i, best.0, best.1);
    }
    tokens
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::matcher::search::greedy_tokens;

    fn assert_same(data: &[u8], window: usize, max_length: usize) {
        assert_eq!(
            indexed_tokens(data, window, max_length),
            greedy_tokens(data, window, max_length),
            "window {} max_length {}",
            window,
            max_length
        );
    }

    #[test]
    fn matches_reference_on_text_test() {
        let data = "It was the best of times, it was the worst of times, it was the age of wisdom, \
                    it was the age of foolishness, it was the epoch of belief"
            .as_bytes();
        for window in [0, 1, 2, 5, 16, 100, 1000] {
            for max_length in [1, 2, 3, 4, 10, 255] {
                assert_same(data, window, max_length);
            }
        }
    }

    #[test]
    fn matches_reference_on_runs_test() {
        let mut data = vec![b'a'; 40];
        data.extend_from_slice(b"abababababbbbbbbcabcabcabc");
        data.extend(vec![0_u8; 17]);
        for window in [0, 1, 3, 9, 64] {
            for max_length in [1, 2, 3, 9, 50] {
                assert_same(&data, window, max_length);
            }
        }
    }

    #[test]
    fn short_inputs_test() {
        let cases: [&[u8]; 7] = [b"", b"a", b"aa", b"aaa", b"aaaa", b"abab", b"abcab"];
        for data in cases {
            assert_same(data, 8, 8);
        }
    }

    #[test]
    fn prefix_key_test() {
        assert_eq!(prefix_key(b"abc", 0), Some(0x616263));
        assert_eq!(prefix_key(b"abc", 1), None);
    }
}
