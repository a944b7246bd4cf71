mod cli;

use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};

use cli::{Cli, Commands};
use codesim::compare::{self, CompareOptions};
use codesim::config::Config;
use codesim::logging;
use codesim::walk::SourceFilter;

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "codesim", &mut io::stdout());
        return Ok(());
    }

    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Compare {
            paths,
            k,
            threshold,
            report,
            show_all,
            json,
            include_ext,
            exclude,
        } => {
            if let Some(k) = k.k {
                config.k = k;
            }
            if let Some(threshold) = threshold {
                config.threshold = threshold;
            }
            if !include_ext.is_empty() {
                config.include_ext = include_ext;
            }
            config.exclude.extend(exclude);
            config.validate()?;

            let filter = SourceFilter::new(&config.include_ext, &config.exclude)?;
            let opts = CompareOptions {
                k: config.k,
                threshold: config.threshold,
                max_file_size: config.max_file_size,
                show_report: report,
                show_all,
                json,
            };
            compare::run(&paths, &filter, &opts)
        }
        Commands::Normalize { file, k, json } => {
            if let Some(k) = k.k {
                config.k = k;
            }
            config.validate()?;
            compare::run_normalize(&file, config.k, config.max_file_size, json)
        }
        Commands::Completions { .. } => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
