//! Logger port: the sink capability and its attachment point

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::{Value, json};
use thiserror::Error;

use crate::error::{ContextMap, ContextualError, FaultResult};

/// Failure reported by a sink while recording an error.
///
/// These never reach the code that called [`ContextualError::log`]; the port
/// swallows them.
#[derive(Error, Debug)]
pub enum SinkError {
    /// Writing the record failed
    #[error("sink I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload could not be encoded by the sink
    #[error("sink serialization error: {0}")]
    Serialization(String),

    /// The sink refused the record
    #[error("sink rejected record: {0}")]
    Rejected(String),
}

/// Anything that can record an error-level event with a structured payload
#[cfg_attr(test, mockall::automock)]
pub trait ErrorSink: Send + Sync {
    /// Record one error occurrence
    fn record_error(&self, message: &str, payload: &ContextMap) -> Result<(), SinkError>;
}

/// Attachment point for an optional [`ErrorSink`].
///
/// Clones share the same slot, so a port can be handed to every component that
/// raises errors and attached once during start-up. Attaching takes a write
/// lock, which orders it before every later log call. Re-attaching while other
/// threads are logging is allowed, but which sink receives those concurrent
/// records is unspecified.
#[derive(Clone, Default)]
pub struct LoggerPort {
    sink: Arc<RwLock<Option<Arc<dyn ErrorSink>>>>,
}

impl LoggerPort {
    /// Create a port with no sink attached
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a port with `sink` already attached
    pub fn with_sink(sink: Arc<dyn ErrorSink>) -> Self {
        let port = Self::new();
        port.attach(sink);
        port
    }

    /// Attach `sink`, replacing any sink attached before
    pub fn attach(&self, sink: Arc<dyn ErrorSink>) {
        *self.sink.write() = Some(sink);
    }

    /// Remove the attached sink; later log calls become no-ops
    pub fn detach(&self) {
        *self.sink.write() = None;
    }

    /// Whether a sink is attached
    pub fn is_attached(&self) -> bool {
        self.sink.read().is_some()
    }

    fn current(&self) -> Option<Arc<dyn ErrorSink>> {
        self.sink.read().clone()
    }
}

impl fmt::Debug for LoggerPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerPort")
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl ContextualError {
    /// Record this error through `port`; see [`ContextualError::log_with`]
    pub fn log(&self, port: &LoggerPort) {
        self.log_with(port, ContextMap::new());
    }

    /// Record this error through `port` with `extra` merged over the payload.
    ///
    /// Does nothing when no sink is attached. A failing sink is reported via
    /// `tracing` and otherwise ignored.
    pub fn log_with(&self, port: &LoggerPort, extra: ContextMap) {
        let Some(sink) = port.current() else {
            return;
        };

        let payload = self.log_payload(extra);
        if let Err(err) = sink.record_error(&self.message, &payload) {
            tracing::warn!(
                code = self.code,
                error = %err,
                "error sink failed to record error"
            );
        }
    }

    /// The payload handed to a sink: code, type, context, location, cause,
    /// then `extra` (which wins on key collisions)
    pub fn log_payload(&self, extra: ContextMap) -> ContextMap {
        let mut payload = ContextMap::new();
        payload.insert("code".to_string(), json!(self.code));
        payload.insert("type".to_string(), json!(self.error_type().as_str()));
        payload.insert(
            "additional_data".to_string(),
            Value::Object(self.context.clone()),
        );
        if let Some(location) = self.location {
            payload.insert(
                "location".to_string(),
                json!(format!("{}:{}", location.file(), location.line())),
            );
        }
        if let Some(cause) = &self.cause {
            payload.insert("cause".to_string(), json!(cause.to_string()));
        }
        payload.extend(extra);
        payload
    }
}

/// Extension trait for logging the error side of a result
pub trait ResultExt<T> {
    /// Log the error, if any, and return the result unchanged
    fn log_err(self, port: &LoggerPort) -> FaultResult<T>;
}

impl<T> ResultExt<T> for FaultResult<T> {
    fn log_err(self, port: &LoggerPort) -> FaultResult<T> {
        if let Err(ref error) = self {
            error.log(port);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_detached_port_is_noop() {
        let port = LoggerPort::new();
        assert!(!port.is_attached());
        ContextualError::token_expired(None).log(&port);
    }

    #[test]
    fn test_log_records_once_with_payload() {
        let mut sink = MockErrorSink::new();
        sink.expect_record_error()
            .with(
                eq("Invalid credentials provided"),
                mockall::predicate::function(|payload: &ContextMap| {
                    payload["code"] == json!(3001)
                        && payload["type"] == json!("authentication")
                        && payload["additional_data"]["username"] == json!("bob")
                        && payload["request_id"] == json!("r-42")
                }),
            )
            .times(1)
            .returning(|_, _| Ok(()));

        let port = LoggerPort::with_sink(Arc::new(sink));
        let mut extra = ContextMap::new();
        extra.insert("request_id".to_string(), json!("r-42"));

        ContextualError::invalid_credentials(Some("bob".to_string())).log_with(&port, extra);
    }

    #[test]
    fn test_attach_twice_logs_once() {
        let mut sink = MockErrorSink::new();
        sink.expect_record_error().times(1).returning(|_, _| Ok(()));
        let sink: Arc<dyn ErrorSink> = Arc::new(sink);

        let port = LoggerPort::new();
        port.attach(Arc::clone(&sink));
        port.attach(sink);

        ContextualError::new("once", 7).log(&port);
    }

    #[test]
    fn test_sink_failure_is_swallowed() {
        let mut sink = MockErrorSink::new();
        sink.expect_record_error()
            .times(1)
            .returning(|_, _| Err(SinkError::Rejected("disk full".to_string())));

        let port = LoggerPort::with_sink(Arc::new(sink));
        ContextualError::query_error(Some("SELECT 1".to_string())).log(&port);
    }

    #[test]
    fn test_extra_wins_over_payload_keys() {
        let mut extra = ContextMap::new();
        extra.insert("code".to_string(), json!("overridden"));

        let payload = ContextualError::new("m", 5).log_payload(extra);
        assert_eq!(payload["code"], json!("overridden"));
        assert_eq!(payload["type"], json!("base"));
        assert!(!payload.contains_key("cause"));
    }

    #[test]
    fn test_detach_stops_recording() {
        let mut sink = MockErrorSink::new();
        sink.expect_record_error().times(0);

        let port = LoggerPort::with_sink(Arc::new(sink));
        port.detach();
        ContextualError::new("dropped", 1).log(&port);
    }

    #[test]
    fn test_log_err_passes_result_through() {
        let mut sink = MockErrorSink::new();
        sink.expect_record_error().times(1).returning(|_, _| Ok(()));
        let port = LoggerPort::with_sink(Arc::new(sink));

        let ok: FaultResult<u8> = Ok(1);
        assert_eq!(ok.log_err(&port).ok(), Some(1));

        let err: FaultResult<u8> = Err(ContextualError::from_errors(["bad email"]));
        let err = err.log_err(&port).unwrap_err();
        assert_eq!(err.code(), 2001);
    }
}
