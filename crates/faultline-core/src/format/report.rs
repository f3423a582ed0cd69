//! The capability a value needs in order to be formatted

use std::panic::Location;

use crate::error::{ContextMap, ContextualError};

/// Data the formatter extracts from an error.
///
/// Only the message is required; everything else has an "absent" default so
/// any error type can take part.
pub trait ErrorReport {
    /// Human-readable message
    fn report_message(&self) -> String;

    /// Numeric code, 0 when the error has none
    fn report_code(&self) -> i64 {
        0
    }

    /// Where the error was created, if known
    fn report_location(&self) -> Option<&'static Location<'static>> {
        None
    }

    /// Structured context, if the error carries any
    fn report_context(&self) -> Option<&ContextMap> {
        None
    }
}

impl ErrorReport for ContextualError {
    fn report_message(&self) -> String {
        self.message().to_string()
    }

    fn report_code(&self) -> i64 {
        self.code()
    }

    fn report_location(&self) -> Option<&'static Location<'static>> {
        self.location()
    }

    fn report_context(&self) -> Option<&ContextMap> {
        Some(self.context())
    }
}

/// Adapter that lets any `std::error::Error` be formatted.
///
/// Reports the error's `Display` output with no code, location or context.
#[derive(Debug, Clone, Copy)]
pub struct Foreign<'a>(pub &'a (dyn std::error::Error + 'a));

impl ErrorReport for Foreign<'_> {
    fn report_message(&self) -> String {
        self.0.to_string()
    }
}
