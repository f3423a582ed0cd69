//! From trait implementations for ContextualError conversions
//!
//! The converted error is always kept as the cause.

use serde_json::json;

use super::types::{ContextMap, ContextualError};

impl From<reqwest::Error> for ContextualError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        let status_code = error.status().map(|s| s.as_u16());
        let error_type = if status_code.is_some() {
            "HTTP error"
        } else if error.is_builder() {
            "request error"
        } else {
            "network error"
        };

        let mut context = ContextMap::new();
        context.insert("error_type".to_string(), json!(error_type));
        context.insert("http_code".to_string(), json!(status_code.unwrap_or(0)));
        if let Some(url) = error.url() {
            context.insert("url".to_string(), json!(url.as_str()));
        }

        Self::client(
            error.to_string(),
            i64::from(status_code.unwrap_or(0)),
            context,
        )
        .with_cause(error)
    }
}

impl From<std::io::Error> for ContextualError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        let mut context = ContextMap::new();
        context.insert("io_kind".to_string(), json!(format!("{:?}", error.kind())));
        Self::with_parts(
            error.to_string(),
            super::codes::UNSPECIFIED,
            super::ErrorKind::Base,
            context,
        )
        .with_cause(error)
    }
}

impl From<serde_json::Error> for ContextualError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        let mut context = ContextMap::new();
        context.insert("line".to_string(), json!(error.line()));
        context.insert("column".to_string(), json!(error.column()));
        Self::with_parts(
            error.to_string(),
            super::codes::UNSPECIFIED,
            super::ErrorKind::Base,
            context,
        )
        .with_cause(error)
    }
}
