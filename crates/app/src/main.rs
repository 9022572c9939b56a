mod config;
mod terminal;
mod vm;

use std::sync::Arc;

use services::{AssessmentController, Clock};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Command, print_usage};
use crate::terminal::Terminal;

fn init_tracing() {
    // Logs go to stderr; stdout carries the survey itself.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let command = Command::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .inspect_err(|_| print_usage())?;

    let args = match command {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Run(args) => args,
    };

    // Content is read once; the catalog is immutable for the rest of the process.
    let catalog = Arc::new(args.content.load()?);
    info!(policy = ?args.policy, "starting assessment");

    let mut controller = AssessmentController::new(catalog)
        .with_policy(args.policy)
        .with_clock(Clock::default_clock());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Terminal::new(stdin.lock(), stdout.lock()).run(&mut controller)?;
    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
