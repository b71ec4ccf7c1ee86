mod agenda;
mod config;
mod error;
mod input;
mod logging;
mod priority_queue;
mod report;
mod types;

use std::fs::File;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use crate::config::{AgendaConfig, Cli};
use crate::error::{AgendaError, Result};

fn run(config: &AgendaConfig) -> Result<()> {
    let parsed = match &config.input {
        Some(path) => {
            let file = File::open(path).map_err(|source| AgendaError::File {
                path: path.clone(),
                source,
            })?;
            input::read_from(file)?
        }
        None => input::read_from(io::stdin().lock())?,
    };
    info!(
        capacity = parsed.capacity,
        commands = parsed.commands.len(),
        "input loaded"
    );

    let outcome = agenda::run(parsed, config.tie_break)?;

    match &config.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| AgendaError::File {
                path: path.clone(),
                source,
            })?;
            report::write_report(BufWriter::new(file), &outcome, config.language)?;
        }
        None => report::write_report(io::stdout().lock(), &outcome, config.language)?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = AgendaConfig::from(Cli::parse());
    logging::init(config.verbose);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("agenda: {err}");
            ExitCode::FAILURE
        }
    }
}
