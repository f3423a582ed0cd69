//! Logging support
//!
//! [`ErrorSink`] is the only thing faultline needs from a logging backend.
//! A [`LoggerPort`] holds the optional sink and is passed explicitly to the
//! code that logs; there is no process-wide logger.

mod config;
mod port;
mod tracing_sink;

pub use config::{ConfigError, LOG_FORMATS, LOG_LEVELS, LoggingConfig, LoggingOverrides};
pub use port::{ErrorSink, LoggerPort, ResultExt, SinkError};
pub use tracing_sink::{TRACING_TARGET, TracingSink};
