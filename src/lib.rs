//! Chunk-parallel LZ77 compression and decompression.
//!
//! Version 0.1.0
//!
//! Turns a byte sequence into (offset, length, next) tokens using a greedy longest-match search over
//! a bounded sliding window, and rebuilds the bytes from those tokens.
//!
//! The input is cut into one contiguous chunk per worker. Chunks are compressed and decompressed
//! independently and concurrently, and results are always returned in chunk order, so output is
//! reproducible for a given worker count. This is the codec and its parallel decomposition only;
//! there is no container format, header or framing.
//!
//! Basic usage:
//!
//! ```
//! use lz77par::{compress, decompress, Lz77Params};
//!
//! let data = b"abracadabra abracadabra";
//! let tokens = compress(data, &Lz77Params::new(16, 8, 2)).unwrap();
//! assert_eq!(decompress(&tokens).unwrap(), data);
//! ```
//!
pub mod coordinator;
pub mod error;
pub mod matcher;
pub mod params;
pub mod tools;

pub use coordinator::chunked::ChunkedTokens;
pub use coordinator::compress::compress;
pub use coordinator::decompress::decompress;
pub use coordinator::partition::ChunkPartition;
pub use error::{Lz77Error, Result};
pub use matcher::{MatchStrategy, Token, TokenStream};
pub use params::Lz77Params;
