//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::{
    fs,
    io::{self, Error},
};

use log::{error, info};
use simplelog::{Config, TermLogger, TerminalMode};
use tikv_jemallocator::Jemalloc;

use lz77par::tools::cli::{log_opts, lz77opts_init};
use lz77par::tools::report::{preview, CompressionSummary};
use lz77par::tools::timer::Timer;
use lz77par::{compress, decompress, Lz77Error};

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() -> Result<(), Lz77Error> {
    let opts = lz77opts_init();

    // Available log levels are Off, Error, Warn, Info, Debug, Trace
    if TermLogger::init(
        opts.verbose,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Logger was already initialized.");
    }
    log_opts(&opts);

    let mut timer = Timer::new();

    let input = fs::read(&opts.file)?;
    if input.is_empty() {
        error!("Fatal error: {} is empty.", opts.file);
        return Err(Error::new(io::ErrorKind::InvalidInput, "Empty input file.").into());
    }
    timer.mark("read");

    let chunked = compress(&input, &opts.params)?;
    timer.mark("compress");

    info!("{}", CompressionSummary::new(input.len(), &chunked));
    info!("Compression took: {:?}", timer.total("compress"));
    info!("Compressed data preview (first {} tokens):", opts.preview);
    for line in preview(chunked.iter(), opts.preview) {
        info!("{}", line);
    }
    timer.mark("report");

    let output = decompress(&chunked)?;
    timer.mark("decompress");
    info!("Decompression took: {:?}", timer.total("decompress"));

    if output != input {
        error!("Fatal error: decompressed output does not match {}.", opts.file);
        return Err(Error::new(io::ErrorKind::InvalidData, "Round trip mismatch.").into());
    }

    fs::write(&opts.output, &output)?;
    timer.mark("write");
    info!("Decompressed output written to '{}'", opts.output);

    timer.report();
    info!("Done.\n");
    Ok(())
}
