mod averages;
mod config;
mod manager;
mod report;
mod scan;
mod series;
mod window;

use crate::manager::Manager;
use crate::series::Pattern;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// TOML file with run parameters (defaults are used if omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// File to write the report to (stdout if omitted).
    #[arg(long)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report on a single generated series.
    Report {
        #[arg(long, value_enum)]
        pattern: Pattern,
    },

    /// Report on one series of each pattern.
    Compare,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let mut mgr = Manager::new(args.config.as_ref()).context("failed to construct mgr")?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(file) => {
            let file = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match args.command {
        Command::Report { pattern } => mgr.run_report(pattern, &mut out)?,
        Command::Compare => mgr.run_comparison(&mut out)?,
    }

    out.flush().context("failed to flush output")?;

    Ok(())
}
