//! Sink that forwards error records to `tracing`

use super::port::{ErrorSink, SinkError};
use crate::error::ContextMap;

/// Target used for every event emitted by [`TracingSink`]
pub const TRACING_TARGET: &str = "faultline";

/// Emits each record as a `tracing` error event.
///
/// Level filtering, formatting and output destination belong to whatever
/// subscriber the application installs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorSink for TracingSink {
    fn record_error(&self, message: &str, payload: &ContextMap) -> Result<(), SinkError> {
        let payload = serde_json::to_string(payload)
            .map_err(|e| SinkError::Serialization(e.to_string()))?;
        tracing::error!(target: TRACING_TARGET, payload = %payload, "{}", message);
        Ok(())
    }
}
