//! Database command implementation
//!
//! There is no real driver here: [`execute`] stands in for one that always
//! rejects the query, so the wrapping into a database error can be shown.

use faultline_core::{ContextMap, ContextualError, ErrorKind, FaultResult, codes};
use serde_json::json;
use thiserror::Error;

/// Failure reported by the simulated driver
#[derive(Error, Debug)]
#[error("SQLSTATE[{sqlstate}]: {message}")]
pub struct DriverError {
    pub sqlstate: String,
    pub message: String,
}

/// Extract the `dbname=` component of a DSN
pub fn database_name(dsn: &str) -> Option<&str> {
    dsn.split([':', ';'])
        .find_map(|part| part.trim().strip_prefix("dbname="))
        .filter(|name| !name.is_empty())
}

/// Run `query` on the simulated driver, which rejects every statement
pub fn execute(dsn: &str, query: &str) -> Result<u64, DriverError> {
    let database = database_name(dsn).unwrap_or("default");
    let table = query
        .split_whitespace()
        .skip_while(|word| !word.eq_ignore_ascii_case("from"))
        .nth(1)
        .unwrap_or("unknown");

    Err(DriverError {
        sqlstate: "42S02".to_string(),
        message: format!(
            "Base table or view not found: Table '{}.{}' doesn't exist",
            database, table
        ),
    })
}

/// Run a query and wrap any driver failure in a database error
pub fn run_query(dsn: &str, query: &str) -> FaultResult<u64> {
    execute(dsn, query).map_err(|driver| {
        let mut context = ContextMap::new();
        context.insert("database".to_string(), json!(database_name(dsn)));
        context.insert("sqlstate".to_string(), json!(driver.sqlstate));

        ContextualError::with_parts(
            driver.message.clone(),
            codes::DATABASE_QUERY,
            ErrorKind::Database {
                query: Some(query.to_string()),
                connection: Some(dsn.to_string()),
            },
            context,
        )
        .with_cause(driver)
    })
}
