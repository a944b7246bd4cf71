//! Diagnostics on stderr through the `log` facade and `env_logger`.
//!
//! Reports go to stdout; everything logged here (skipped files, config
//! sources, per-pair timings) goes to stderr so it never mixes with JSON.

use std::env;
use std::io::Write;

use env_logger::Builder;
use log::LevelFilter;

/// Initialize logging once at startup.
///
/// `RUST_LOG` wins when set. Otherwise `quiet` limits output to errors and
/// each `-v` raises the level one step above the default of warnings.
pub fn init_logging(verbose: u8, quiet: bool) {
    let mut builder = Builder::new();
    if env::var_os("RUST_LOG").is_some() {
        builder.parse_default_env();
    } else {
        builder.filter_level(determine_level(verbose, quiet));
    }

    builder.format(|buf, record| {
        let level = record.level();
        let style = buf.default_level_style(level);
        writeln!(buf, "{style}{}{style:#}: {}", level.as_str().to_lowercase(), record.args())
    });

    // A second initialization (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
}

fn determine_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
#[path = "logging_test.rs"]
mod tests;
