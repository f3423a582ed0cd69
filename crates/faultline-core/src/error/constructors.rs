//! Constructor methods for ContextualError
//!
//! Every constructor records its call site, so the location reported by the
//! formatter is where the error was built rather than somewhere inside this crate.

use std::panic::Location;

use super::codes;
use super::context::merge_kind_context;
use super::types::{ContextMap, ContextualError, ErrorKind};

impl ContextualError {
    /// Create a base error with an empty context
    #[track_caller]
    pub fn new(message: impl Into<String>, code: i64) -> Self {
        Self::with_parts(message, code, ErrorKind::Base, ContextMap::new())
    }

    /// Create an error of any kind.
    ///
    /// The kind's typed fields and `"type"` tag are merged over `context`;
    /// on a key collision the kind's value is kept.
    #[track_caller]
    pub fn with_parts(
        message: impl Into<String>,
        code: i64,
        kind: ErrorKind,
        context: ContextMap,
    ) -> Self {
        let context = merge_kind_context(&kind, context);
        Self {
            message: message.into(),
            code,
            kind,
            context,
            cause: None,
            location: Some(Location::caller()),
        }
    }

    /// Create an error with the kind's default message and code
    #[track_caller]
    pub fn from_kind(kind: ErrorKind) -> Self {
        let message = kind.default_message();
        let code = kind.default_code();
        Self::with_parts(message, code, kind, ContextMap::new())
    }

    /// Create an authentication error
    #[track_caller]
    pub fn authentication(message: impl Into<String>, username: Option<String>) -> Self {
        Self::with_parts(
            message,
            codes::AUTHENTICATION,
            ErrorKind::Authentication { username },
            ContextMap::new(),
        )
    }

    /// Authentication failed because the credentials were rejected
    #[track_caller]
    pub fn invalid_credentials(username: Option<String>) -> Self {
        Self::with_parts(
            "Invalid credentials provided",
            codes::AUTHENTICATION_INVALID_CREDENTIALS,
            ErrorKind::Authentication { username },
            ContextMap::new(),
        )
    }

    /// Authentication failed because the token is no longer valid
    #[track_caller]
    pub fn token_expired(username: Option<String>) -> Self {
        Self::with_parts(
            "Authentication token has expired",
            codes::AUTHENTICATION_TOKEN_EXPIRED,
            ErrorKind::Authentication { username },
            ContextMap::new(),
        )
    }

    /// Create a validation error
    #[track_caller]
    pub fn validation<I, S>(message: impl Into<String>, errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_parts(
            message,
            codes::VALIDATION,
            ErrorKind::Validation {
                errors: errors.into_iter().map(Into::into).collect(),
            },
            ContextMap::new(),
        )
    }

    /// Create a validation error from a list of failure messages
    #[track_caller]
    pub fn from_errors<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_parts(
            "Validation errors occurred",
            codes::VALIDATION_FROM_LIST,
            ErrorKind::Validation {
                errors: errors.into_iter().map(Into::into).collect(),
            },
            ContextMap::new(),
        )
    }

    /// Create a database error
    #[track_caller]
    pub fn database(
        message: impl Into<String>,
        query: Option<String>,
        connection: Option<String>,
    ) -> Self {
        Self::with_parts(
            message,
            codes::DATABASE,
            ErrorKind::Database { query, connection },
            ContextMap::new(),
        )
    }

    /// The database connection could not be used
    #[track_caller]
    pub fn connection_error(connection: Option<String>) -> Self {
        Self::with_parts(
            "Database connection error",
            codes::DATABASE_CONNECTION,
            ErrorKind::Database {
                query: None,
                connection,
            },
            ContextMap::new(),
        )
    }

    /// A database query failed
    #[track_caller]
    pub fn query_error(query: Option<String>) -> Self {
        Self::with_parts(
            "Database query error",
            codes::DATABASE_QUERY,
            ErrorKind::Database {
                query,
                connection: None,
            },
            ContextMap::new(),
        )
    }

    /// Create a client-request error; the code and context come from the caller
    #[track_caller]
    pub fn client(message: impl Into<String>, code: i64, context: ContextMap) -> Self {
        Self::with_parts(message, code, ErrorKind::Client, context)
    }
}
