//! Reserved error codes
//!
//! Each kind owns a block of a thousand codes. Other code must not reuse these
//! values for unrelated failures.

use super::types::ErrorType;

/// No code supplied
pub const UNSPECIFIED: i64 = 0;

/// Generic database failure
pub const DATABASE: i64 = 1000;
/// Could not reach or open the database connection
pub const DATABASE_CONNECTION: i64 = 1001;
/// A query failed to execute
pub const DATABASE_QUERY: i64 = 1002;

/// Generic validation failure
pub const VALIDATION: i64 = 2000;
/// Validation failed with a list of messages
pub const VALIDATION_FROM_LIST: i64 = 2001;

/// Generic authentication failure
pub const AUTHENTICATION: i64 = 3000;
/// Username/password rejected
pub const AUTHENTICATION_INVALID_CREDENTIALS: i64 = 3001;
/// Session or bearer token no longer valid
pub const AUTHENTICATION_TOKEN_EXPIRED: i64 = 3002;

/// Every named code with its constant name, in ascending order
pub const RESERVED: &[(&str, i64)] = &[
    ("DATABASE", DATABASE),
    ("DATABASE_CONNECTION", DATABASE_CONNECTION),
    ("DATABASE_QUERY", DATABASE_QUERY),
    ("VALIDATION", VALIDATION),
    ("VALIDATION_FROM_LIST", VALIDATION_FROM_LIST),
    ("AUTHENTICATION", AUTHENTICATION),
    (
        "AUTHENTICATION_INVALID_CREDENTIALS",
        AUTHENTICATION_INVALID_CREDENTIALS,
    ),
    ("AUTHENTICATION_TOKEN_EXPIRED", AUTHENTICATION_TOKEN_EXPIRED),
];

/// Map a code to the kind whose range it falls in
pub fn classify(code: i64) -> Option<ErrorType> {
    match code {
        1000..=1999 => Some(ErrorType::Database),
        2000..=2999 => Some(ErrorType::Validation),
        3000..=3999 => Some(ErrorType::Authentication),
        _ => None,
    }
}
