//! CLI console utilities

use colored::*;
use faultline_core::{ContextualError, ReportFormatter};

/// CLI console for formatted output
pub struct CliConsole {
    formatter: ReportFormatter,
}

impl CliConsole {
    /// Create a new CLI console
    pub const fn new() -> Self {
        Self {
            formatter: ReportFormatter,
        }
    }

    /// Print a section header
    pub fn header(&self, title: &str) {
        println!("{}", title.bold().underline());
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    /// Print a report for an error, with its one-line summary first
    pub fn report(&self, error: &ContextualError) {
        println!("{} {}", "✗".red().bold(), error.formatted_message().red());
        println!();
        println!("{}", self.formatter.format_chain(error));
    }

    /// Print a report for an error from outside faultline
    pub fn report_foreign(&self, error: &(dyn std::error::Error + 'static)) {
        println!("{}", self.formatter.format_any(error));
    }

    /// Print a table row
    pub fn row(&self, name: &str, value: &str) {
        println!("  {:<40} {}", name.cyan(), value);
    }
}

impl Default for CliConsole {
    fn default() -> Self {
        Self::new()
    }
}
