// piispan/src/main.rs
//! piispan entry point.
//!
//! Parses arguments, configures logging, builds the extraction engine and
//! dispatches to the selected subcommand.

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::io;

use piispan::cli::{Cli, Commands};
use piispan::commands::{self, check, extract};
use piispan::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match args.command {
        Commands::Extract(cmd) => {
            let engine = commands::build_engine(cmd.config.as_deref())?;
            extract::run_extract(
                &engine,
                extract::ExtractOptions { input: cmd.input, output: cmd.output },
            )
            .context("Extraction failed")?;
        }
        Commands::Check(cmd) => {
            let engine = commands::build_engine(cmd.config.as_deref())?;
            let report = check::check_span(&engine, &cmd.label, &cmd.text);
            check::print_check(&mut io::stdout().lock(), &report, cmd.json)?;
        }
    }

    Ok(())
}
