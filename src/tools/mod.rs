//! The tools module provides the helpers behind the lz77par command line driver.
//!
//! None of them touch the codec. They are plumbing around it:
//! - cli: Command line interface for lz77par.
//! - report: Token statistics and the token preview.
//! - timer: Named phase timing.
//!
pub mod cli;
pub mod report;
pub mod timer;
