//! CLI argument definitions using clap
//!
//! - faultline auth --username <u> --password <p>   # Authentication failure
//! - faultline validate <email>...                  # Validation failure
//! - faultline database                             # Database failure wrapping a driver error
//! - faultline client <url>                         # Outbound request failure
//! - faultline codes                                # Reserved code table

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "faultline")]
#[command(about = "Raise, log and report contextual errors")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML logging configuration file
    #[arg(long, global = true, env = "FAULTLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (pretty, compact, json)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Also write log records to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Do not attach a sink; errors are reported but not logged
    #[arg(long, global = true)]
    pub no_log: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Check a username/password pair against the demo account
    Auth {
        /// Username to authenticate
        #[arg(long, default_value = "user@example.com")]
        username: String,

        /// Password to authenticate with
        #[arg(long, default_value = "wrongpassword")]
        password: String,

        /// Treat the session token as expired
        #[arg(long)]
        expired: bool,
    },

    /// Validate one or more email addresses
    Validate {
        /// Values to validate
        #[arg(required = true)]
        emails: Vec<String>,
    },

    /// Run a query against a database that always rejects it
    Database {
        /// Connection string of the database
        #[arg(long, default_value = "mysql:host=localhost;dbname=myapp")]
        dsn: String,

        /// Query to run
        #[arg(long, default_value = "SELECT * FROM non_existing_table")]
        query: String,
    },

    /// Fetch a URL and report any transport or HTTP failure
    Client {
        /// URL to request
        url: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 10)]
        timeout: u64,
    },

    /// Print the reserved error code table
    Codes,
}
