use clap::Parser;
use log::{info, LevelFilter};

use crate::matcher::MatchStrategy;
use crate::params::Lz77Params;

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Chunk-parallel LZ77 compressor",
    long_about = "
    Compresses a file into LZ77 (offset, length, next) tokens using one worker per chunk,
    reports what it found, then decompresses the tokens again, verifies the round trip
    and writes the rebuilt bytes out.

    More workers mean smaller chunks. Matches never cross a chunk boundary, so the token
    count grows as the worker count does."
)]
pub struct Args {
    /// Filename of file to process
    #[clap()]
    filename: String,

    /// Where to write the decompressed bytes. Defaults to <filename>.out
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// How many bytes back the search may look
    #[clap(short = 'w', long = "window", default_value_t = 100)]
    window: usize,

    /// Longest run one token may copy
    #[clap(short = 'l', long = "max-length", default_value_t = 10)]
    max_length: usize,

    /// Worker (and chunk) count
    #[clap(short = 't', long = "threads", default_value_t = 4)]
    threads: usize,

    /// Use the indexed search. Output is identical, usually faster on large windows
    #[clap(long = "indexed")]
    indexed: bool,

    /// Number of leading tokens to show
    #[clap(short = 'p', long = "preview", default_value_t = 10)]
    preview: usize,

    /// Sets verbosity. -v1 shows very little, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

/// Everything the driver needs to run one compress/decompress trial.
#[derive(Debug)]
pub struct Lz77Opts {
    /// Input file
    pub file: String,
    /// Output file for the rebuilt bytes
    pub output: String,
    pub params: Lz77Params,
    /// Leading tokens to print
    pub preview: usize,
    pub verbose: LevelFilter,
}

impl From<Args> for Lz77Opts {
    fn from(args: Args) -> Self {
        let strategy = if args.indexed {
            MatchStrategy::Indexed
        } else {
            MatchStrategy::Exhaustive
        };
        let output = args
            .output
            .unwrap_or_else(|| format!("{}.out", args.filename));
        Self {
            file: args.filename,
            output,
            params: Lz77Params::new(args.window, args.max_length, args.threads)
                .with_strategy(strategy),
            preview: args.preview,
            verbose: level_from(args.v),
        }
    }
}

fn level_from(v: u8) -> LevelFilter {
    match v {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Parse the command line into our internal structure.
pub fn lz77opts_init() -> Lz77Opts {
    Args::parse().into()
}

/// Report initialization status to the user. Call after the logger is up.
pub fn log_opts(opts: &Lz77Opts) {
    info!("---- lz77par Initialization Start ----");
    info!("Verbosity set to {}", opts.verbose);
    info!("Getting input from the file {}", opts.file);
    info!("Writing output to the file {}", opts.output);
    info!("Parameters: {}", opts.params);
    info!("---- lz77par Initialization End ----\n");
}
