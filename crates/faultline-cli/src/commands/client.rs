//! Client command implementation

use std::time::Duration;

use chrono::Utc;
use faultline_core::{ContextMap, ContextualError, FaultResult};
use serde_json::json;

/// GET `url` and return the status code of a successful response.
///
/// Transport failures and non-2xx responses both become client errors whose
/// code is the HTTP status (0 when no response arrived).
pub async fn fetch(url: &str, timeout: Duration) -> FaultResult<u16> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| ContextualError::from(e).with_context("additional_info", timestamp()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(status.as_u16());
    }

    let mut context = ContextMap::new();
    context.insert("error_type".to_string(), json!("HTTP error"));
    context.insert("http_code".to_string(), json!(status.as_u16()));
    context.insert("url".to_string(), json!(url));
    context.insert("additional_info".to_string(), timestamp());

    Err(ContextualError::client(
        format!("Request to {} failed with {}", url, status),
        i64::from(status.as_u16()),
        context,
    ))
}

fn timestamp() -> serde_json::Value {
    json!({ "timestamp": Utc::now().timestamp() })
}
