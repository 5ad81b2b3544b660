//! sleepcalc library root.
//! Exposes the CLI parser, the high-level run() function, the time parser
//! and the sleep model solver.

pub mod cli;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use chrono::NaiveDateTime;
use clap::Parser;
use cli::parser::Cli;
use errors::{AppError, AppResult};
use ui::report::OutputFormat;
use utils::time::{capture_now, parse_now_override};

/// Everything the command handler needs, resolved once from the CLI.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub format: OutputFormat,
    pub verbose: bool,
    pub now: NaiveDateTime,
}

impl RunOptions {
    /// Build the options, sampling the reference instant exactly once.
    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let now = match &cli.now {
            Some(raw) => parse_now_override(raw)?,
            None => capture_now(),
        };

        Ok(Self {
            format: cli.format,
            verbose: cli.verbose,
            now,
        })
    }
}

/// Run an already parsed command line.
pub fn run_with(cli: &Cli) -> AppResult<()> {
    let woke_up = cli.woke_up.as_deref().ok_or(AppError::Usage)?;
    let opts = RunOptions::from_cli(cli)?;

    cli::commands::calc::handle(woke_up, cli.min_wake_up.as_deref(), &opts)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    run_with(&cli)
}
