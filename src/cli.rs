/// CLI argument definitions for the `codesim` command.
///
/// Defines the subcommands, their arguments, and long help text
/// using the `clap` derive macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Top-level CLI parser with global logging/config flags and a subcommand.
#[derive(Parser)]
#[command(
    name = "codesim",
    version,
    about = "Source code similarity detection"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file (default: ./codesim.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by commands that hash documents.
#[derive(Args)]
pub struct KArgs {
    /// k-gram width in characters (default: 5, or `k` from the config)
    #[arg(short, long)]
    pub k: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare source files pairwise and report their similarity
    #[command(long_about = "\
Compare source files pairwise and report their similarity.

Each document is normalized before comparison: comments are removed, string,
character and numeric literals are replaced by placeholders, whitespace is
collapsed, text is lowercased and every identifier that is not a reserved
keyword becomes `var`. Renaming variables or reformatting code therefore does
not change the result.

The canonical text is fingerprinted with a rolling hash over every window of
k characters. The similarity of two documents is the Jaccard index of their
fingerprint sets:

  similarity = |A ∩ B| / |A ∪ B|

1.0 means the documents share every k-gram, 0.0 that they share none. k is
clamped to the length of the shorter document.

Directories are walked recursively (respecting .gitignore) and filtered by
extension; files named explicitly are always compared.")]
    Compare {
        /// Files and/or directories to compare
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        #[command(flatten)]
        k: KArgs,

        /// Flag pairs at or above this similarity (0.0-1.0, default: 0.8)
        #[arg(long)]
        threshold: Option<f64>,

        /// Show detailed report with per-pair matched segments
        #[arg(short, long)]
        report: bool,

        /// Show all pairs (default: top 20)
        #[arg(long)]
        show_all: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Extensions to include when walking directories (comma-separated)
        #[arg(long, value_delimiter = ',', value_name = "EXT")]
        include_ext: Vec<String>,

        /// Glob patterns to exclude when walking directories (repeatable)
        #[arg(long, value_name = "GLOB")]
        exclude: Vec<String>,
    },

    /// Print the normalized (canonical) form of a file
    Normalize {
        /// File to normalize
        file: PathBuf,

        #[command(flatten)]
        k: KArgs,

        /// Output as JSON, with the number of k-grams
        #[arg(long)]
        json: bool,
    },

    /// Generate a shell completion script
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
