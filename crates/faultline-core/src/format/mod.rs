//! Human-readable error reports
//!
//! [`ReportFormatter`] renders any [`ErrorReport`] as four lines:
//!
//! ```text
//! Error: <message>
//! Code: <code>
//! File: <file>:<line>
//! Additional Data: <pretty-printed context, or None>
//! ```
//!
//! Log scrapers depend on this layout; keep it stable.

mod report;

pub use report::{ErrorReport, Foreign};

use crate::error::{ContextMap, ContextualError};

/// Placeholder printed when there is no context to show
pub const NO_DATA: &str = "None";

/// Placeholder printed when the creation site is unknown
pub const UNKNOWN_LOCATION: &str = "unknown";

/// Renders errors as text
pub trait ErrorFormatter {
    /// Format `error`. Must not panic.
    fn format(&self, error: &dyn ErrorReport) -> String;
}

/// The default four-line formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Format a boxed or otherwise type-erased error.
    ///
    /// A [`ContextualError`] behind the trait object keeps its code, location
    /// and context; anything else is reported through [`Foreign`].
    pub fn format_any(&self, error: &(dyn std::error::Error + 'static)) -> String {
        match error.downcast_ref::<ContextualError>() {
            Some(contextual) => self.format(contextual),
            None => self.format(&Foreign(error)),
        }
    }

    /// The report followed by one `Caused by:` line per error in the source chain
    pub fn format_chain(&self, error: &ContextualError) -> String {
        let mut output = self.format(error);
        let mut source = std::error::Error::source(error);
        while let Some(cause) = source {
            output.push_str(&format!("\nCaused by: {}", cause));
            source = cause.source();
        }
        output
    }
}

impl ErrorFormatter for ReportFormatter {
    fn format(&self, error: &dyn ErrorReport) -> String {
        let location = error
            .report_location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string());

        let data = match error.report_context() {
            Some(context) if !context.is_empty() => render_context(context),
            _ => NO_DATA.to_string(),
        };

        format!(
            "Error: {}\nCode: {}\nFile: {}\nAdditional Data: {}",
            error.report_message(),
            error.report_code(),
            location,
            data
        )
    }
}

fn render_context(context: &ContextMap) -> String {
    serde_json::to_string_pretty(context).unwrap_or_else(|_| format!("{:?}", context))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_layout() {
        let error = ContextualError::new("Something broke", 42);
        let line = error.location().map(|l| l.line()).unwrap_or_default();

        let output = ReportFormatter::new().format(&error);
        assert_eq!(
            output,
            format!(
                "Error: Something broke\nCode: 42\nFile: {}:{}\nAdditional Data: None",
                file!(),
                line
            )
        );
    }

    #[test]
    fn test_format_pretty_prints_context() {
        let error = ContextualError::invalid_credentials(Some("bob".to_string()));
        let output = ReportFormatter::new().format(&error);

        assert!(output.contains("Code: 3001"));
        assert!(output.ends_with(
            "Additional Data: {\n  \"type\": \"authentication\",\n  \"username\": \"bob\"\n}"
        ));
    }

    #[test]
    fn test_format_is_deterministic() {
        let formatter = ReportFormatter::new();
        let error = ContextualError::database(
            "Insert failed",
            Some("INSERT INTO t".to_string()),
            Some("primary".to_string()),
        )
        .with_context("attempt", 3);

        assert_eq!(formatter.format(&error), formatter.format(&error));
    }

    #[test]
    fn test_format_foreign_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let output = ReportFormatter::new().format(&Foreign(&io));

        assert_eq!(
            output,
            "Error: disk on fire\nCode: 0\nFile: unknown\nAdditional Data: None"
        );
    }

    #[test]
    fn test_format_any_downcasts_contextual_errors() {
        let boxed: Box<dyn std::error::Error + Send + Sync> =
            Box::new(ContextualError::from_errors(["bad email"]));
        let output = ReportFormatter::new().format_any(boxed.as_ref());

        assert!(output.contains("Code: 2001"));
        assert!(output.contains("\"errors\": ["));
        assert!(output.contains("\"bad email\""));
    }

    #[test]
    fn test_format_any_falls_back_to_foreign() {
        let parse = "x".parse::<i32>().unwrap_err();
        let output = ReportFormatter::new().format_any(&parse);

        assert!(output.starts_with("Error: invalid digit found in string\nCode: 0\n"));
        assert!(output.ends_with("Additional Data: None"));
    }

    #[test]
    fn test_format_any_keeps_context_of_chained_cause() {
        let outer = ContextualError::query_error(Some("SELECT 1".to_string()))
            .with_cause(ContextualError::connection_error(Some("primary".to_string())));
        let source = std::error::Error::source(&outer).unwrap();
        let output = ReportFormatter::new().format_any(source);

        assert!(output.starts_with("Error: Database connection error\nCode: 1001\nFile: "));
        assert!(!output.contains("File: unknown"));
        assert!(output.contains("\"connection\": \"primary\""));
    }

    #[test]
    fn test_format_chain_lists_causes() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let connection = ContextualError::connection_error(Some("primary".to_string())).with_cause(io);
        let query = ContextualError::query_error(Some("SELECT 1".to_string())).with_cause(connection);

        let output = ReportFormatter::new().format_chain(&query);
        assert!(output.contains("Error: Database query error"));
        assert!(output.ends_with(
            "\nCaused by: Database connection error\nCaused by: connection refused"
        ));
    }

    #[test]
    fn test_format_nested_context_values() {
        let mut context = ContextMap::new();
        context.insert("http_code".to_string(), json!(0));
        context.insert("additional_info".to_string(), json!({"timestamp": 1700000000}));

        let error = ContextualError::client("Could not resolve host", 0, context);
        let output = ReportFormatter::new().format(&error);

        assert!(output.contains("\"additional_info\": {\n    \"timestamp\": 1700000000\n  }"));
    }
}
