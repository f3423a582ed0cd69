//! Context management for ContextualError

use serde_json::Value;

use super::types::{Cause, ContextMap, ContextualError, ErrorKind};

impl ErrorKind {
    /// Context keys owned by this kind. Caller context never overrides them.
    pub fn reserved_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Base | Self::Client => &[],
            Self::Authentication { .. } => &["type", "username"],
            Self::Validation { .. } => &["type", "errors"],
            Self::Database { .. } => &["type", "query", "connection"],
        }
    }

    /// The `(key, value)` entries this kind contributes to the context
    pub(crate) fn context_entries(&self) -> Vec<(&'static str, Value)> {
        let error_type = self.error_type();
        if !error_type.is_tagged() {
            return Vec::new();
        }

        let mut entries = vec![("type", Value::String(error_type.as_str().to_string()))];
        match self {
            Self::Base | Self::Client => {}
            Self::Authentication { username } => {
                entries.push(("username", optional_string(username)));
            }
            Self::Validation { errors } => {
                entries.push((
                    "errors",
                    Value::Array(errors.iter().cloned().map(Value::String).collect()),
                ));
            }
            Self::Database { query, connection } => {
                entries.push(("query", optional_string(query)));
                entries.push(("connection", optional_string(connection)));
            }
        }
        entries
    }
}

fn optional_string(value: &Option<String>) -> Value {
    value.clone().map(Value::String).unwrap_or(Value::Null)
}

/// Merge a kind's fields over caller-supplied context.
///
/// Kind entries win. An overwritten caller key keeps its position; new kind
/// keys are appended after the caller's keys.
pub(crate) fn merge_kind_context(kind: &ErrorKind, mut caller: ContextMap) -> ContextMap {
    for (key, value) in kind.context_entries() {
        caller.insert(key.to_string(), value);
    }
    caller
}

impl ContextualError {
    /// Attach a single context entry.
    ///
    /// Keys reserved by the error's kind are left untouched.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if self.kind.reserved_keys().contains(&key.as_str()) {
            tracing::debug!(
                key = %key,
                error_type = %self.error_type(),
                "ignoring caller context entry that collides with a reserved key"
            );
            return self;
        }
        self.context.insert(key, value.into());
        self
    }

    /// Attach every entry of `context`, with the same reserved-key rule as
    /// [`ContextualError::with_context`]
    pub fn with_context_map(self, context: ContextMap) -> Self {
        context
            .into_iter()
            .fold(self, |error, (key, value)| error.with_context(key, value))
    }

    /// Chain an underlying error as the cause
    pub fn with_cause<E>(self, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.with_shared_cause(std::sync::Arc::new(cause))
    }

    /// Chain an already shared cause
    pub fn with_shared_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }
}
