//! faultline core library
//!
//! Structured errors that carry machine-readable context, chain to their
//! causes, log through an attachable sink and render into a stable report.
//!
//! ```
//! use faultline_core::{ContextualError, ErrorFormatter, LoggerPort, ReportFormatter};
//!
//! let port = LoggerPort::new();
//! let error = ContextualError::invalid_credentials(Some("bob".to_string()));
//! error.log(&port);
//!
//! let report = ReportFormatter::new().format(&error);
//! assert!(report.starts_with("Error: Invalid credentials provided\nCode: 3001\n"));
//! ```

pub mod error;
pub mod format;
pub mod logging;

// Re-export commonly used types
pub use error::{Cause, ContextMap, ContextualError, ErrorKind, ErrorType, FaultResult, codes};
pub use format::{ErrorFormatter, ErrorReport, Foreign, ReportFormatter};
pub use logging::{
    ErrorSink, LoggerPort, LoggingConfig, LoggingOverrides, ResultExt, SinkError, TracingSink,
};
