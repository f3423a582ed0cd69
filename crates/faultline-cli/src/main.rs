//! faultline CLI application
//!
//! Runs small failure scenarios end to end: each one raises a contextual
//! error, logs it through a `TracingSink` and prints the formatted report.
//!
//! Set RUST_LOG=debug for verbose logging.

mod args;
mod commands;
mod console;
mod router;
mod telemetry;

use std::sync::Arc;

use clap::Parser;
use faultline_core::{LoggerPort, TracingSink};

use args::Cli;
use console::CliConsole;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let console = CliConsole::new();

    let config = match router::logging_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            console.report_foreign(&*err);
            std::process::exit(2);
        }
    };
    telemetry::init(&config)?;

    let port = LoggerPort::new();
    if !cli.no_log {
        port.attach(Arc::new(TracingSink::new()));
    }

    router::route(cli.command, &port, &console).await;
    Ok(())
}
