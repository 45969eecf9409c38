use std::ops::Range;

use crate::error::{Lz77Error, Result};

/// Split of the input into contiguous, non-overlapping byte ranges, one per worker.
///
/// Every range is `len / workers` bytes, and the first `len % workers` ranges get one more.
/// With more workers than bytes the trailing ranges are empty. Empty input is a single empty range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkPartition {
    ranges: Vec<Range<usize>>,
}

impl ChunkPartition {
    pub fn new(len: usize, workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(Lz77Error::InvalidParams(
                "cannot partition input across zero workers".to_string(),
            ));
        }
        if len == 0 {
            return Ok(Self {
                ranges: vec![0..0],
            });
        }

        let base = len / workers;
        let extra = len % workers;
        let mut start = 0;
        let ranges = (0..workers)
            .map(|w| {
                let size = base + usize::from(w < extra);
                let range = start..start + size;
                start += size;
                range
            })
            .collect();
        Ok(Self { ranges })
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Number of chunks
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn chunk_lengths(&self) -> Vec<usize> {
        self.ranges.iter().map(|r| r.len()).collect()
    }
}
