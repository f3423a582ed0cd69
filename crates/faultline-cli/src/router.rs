//! Command routing logic for CLI

use std::time::Duration;

use faultline_core::{LoggerPort, LoggingConfig, LoggingOverrides};

use crate::args::{Cli, Commands};
use crate::commands;
use crate::console::CliConsole;

/// Build the logging config: file (if given), then command-line overrides
pub fn logging_config(cli: &Cli) -> anyhow::Result<LoggingConfig> {
    let mut config = match &cli.config {
        Some(path) => LoggingConfig::load(path)?,
        None => LoggingConfig::default(),
    };

    config.merge(LoggingOverrides {
        level: cli.log_level.clone(),
        format: cli.log_format.clone(),
        log_file: cli.log_file.clone(),
        ..LoggingOverrides::default()
    });
    config.validate()?;
    Ok(config)
}

/// Route CLI commands to their respective handlers.
///
/// A failing scenario is logged through `port` and reported on stdout; it is
/// not an error of the CLI itself.
pub async fn route(command: Commands, port: &LoggerPort, console: &CliConsole) {
    let outcome = match command {
        Commands::Auth {
            username,
            password,
            expired,
        } => commands::auth::authenticate(&username, &password, expired),
        Commands::Validate { emails } => commands::validate::validate_emails(&emails)
            .map(|count| format!("{} value(s) passed validation", count)),
        Commands::Database { dsn, query } => commands::database::run_query(&dsn, &query)
            .map(|rows| format!("Query returned {} row(s)", rows)),
        Commands::Client { url, timeout } => {
            commands::client::fetch(&url, Duration::from_secs(timeout))
                .await
                .map(|status| format!("{} responded with {}", url, status))
        }
        Commands::Codes => {
            commands::codes::show_codes(console);
            return;
        }
    };

    match outcome {
        Ok(message) => console.success(&message),
        Err(error) => {
            error.log(port);
            console.report(&error);
        }
    }
}
