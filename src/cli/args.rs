//! Command line argument parsing for the Sieva CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Sieva - a DFA-based stop-word filtering tokenizer
#[derive(Parser, Debug, Clone)]
#[command(name = "sieva")]
#[command(about = "Tokenize text with DFA-based stop-word filtering")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SievaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SievaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Count the accepted terms in a text file
    #[command(name = "count")]
    Count(ScanArgs),

    /// Print each accepted term in a text file
    #[command(name = "terms")]
    Terms(ScanArgs),

    /// Show the most frequent accepted terms in a text file
    #[command(name = "top")]
    Top(TopArgs),
}

/// Arguments shared by every scanning command.
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Path of the text file to scan
    pub text: PathBuf,

    /// Path of a stop-word file (one word per line)
    #[arg(short, long)]
    pub stop_words: Option<PathBuf>,
}

/// Arguments for the `top` command.
#[derive(Args, Debug, Clone)]
pub struct TopArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Number of terms to show
    #[arg(short = 'n', long, default_value_t = 10)]
    pub limit: usize,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
