//! Command line interface for the preprocessor, built on the external CLAP
//! crate.
//!

use clap::Parser;
use log::info;
use std::fmt::{Display, Formatter};

/// Zip or Unzip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// All user settable options that control program behavior.
#[derive(Debug)]
pub struct BwOpts {
    /// Optional name of the file to read for input. None reads stdin.
    pub file: Option<String>,
    /// Compress or decompress.
    pub op_mode: Mode,
    /// Don't remove input files after processing.
    pub keep_input_files: bool,
    /// Silently overwrite existing files with the same name.
    pub force_overwrite: bool,
    /// Location where output is sent.
    pub output: Output,
}

/// Command line arguments interpreted by CLAP.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A block-sorting compression preprocessor",
    long_about = "
    Applies the Burrows-Wheeler transform and the Move-To-Front coder to one
    block of data, or exactly reverses them. The output is not compressed;
    it is rearranged so a later entropy coder can compress it well.

    With no file name, input is read from standard input and written to
    standard output."
)]
struct Args {
    /// Filename of the file to process
    #[clap()]
    filename: Option<String>,

    /// Perform compression preprocessing on the input
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Reverse the preprocessing on the input
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Overwrite existing output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Keep (don't delete) input files
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Send output to standard out
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Suppress noncritical messages
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Be verbose (a 2nd -v gives more)
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    v: u8,
}

/// Put command line information from CLAP into our internal options struct
/// and set the log level.
pub fn bwopts_init() -> BwOpts {
    let args = Args::parse();

    let mut opts = BwOpts {
        file: args.filename,
        op_mode: Mode::Zip,
        keep_input_files: args.keep,
        force_overwrite: args.force,
        output: Output::File,
    };

    if args.decompress {
        opts.op_mode = Mode::Unzip;
    }
    if args.compress {
        opts.op_mode = Mode::Zip;
    }
    // Without a named file there is nowhere to put a suffixed output.
    if args.stdout || opts.file.is_none() {
        opts.output = Output::Stdout;
    }

    // Set the log level. Each additional -v reveals more.
    if args.quiet {
        log::set_max_level(log::LevelFilter::Off);
    } else {
        match args.v {
            0 => log::set_max_level(log::LevelFilter::Info),
            1 => log::set_max_level(log::LevelFilter::Debug),
            _ => log::set_max_level(log::LevelFilter::Trace),
        }
    };

    // Report initialization status to the user
    info!("Operational mode set to {}", opts.op_mode);
    match &opts.file {
        Some(s) => info!("Getting input from the file {}", s),
        None => info!("Getting input from stdin"),
    }
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    if opts.keep_input_files {
        info!("Keeping input files")
    };
    opts
}
