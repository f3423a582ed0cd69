//! Core error types for faultline

use std::panic::Location;
use std::sync::Arc;

use serde_json::{Map, Value};

/// Ordered key/value payload carried by every error.
///
/// Backed by serde_json's `preserve_order` map, so iteration (and therefore
/// formatting) follows insertion order.
pub type ContextMap = Map<String, Value>;

/// Shared handle to the error that caused another one.
pub type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for fallible operations that fail with a [`ContextualError`]
pub type FaultResult<T> = Result<T, ContextualError>;

/// Discriminator identifying which kind produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Unclassified failures
    Base,
    /// Identity and credential failures
    Authentication,
    /// Input and business-rule failures
    Validation,
    /// Persistence-layer failures
    Database,
    /// Failures of outbound calls to other systems
    Client,
}

impl ErrorType {
    /// The string stored under the `"type"` context key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Authentication => "authentication",
            Self::Validation => "validation",
            Self::Database => "database",
            Self::Client => "client",
        }
    }

    /// Whether constructors of this kind write a `"type"` entry into the context.
    ///
    /// Base and client errors only ever carry caller-supplied keys.
    pub fn is_tagged(&self) -> bool {
        matches!(
            self,
            Self::Authentication | Self::Validation | Self::Database
        )
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of error kinds, each with its typed fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ErrorKind {
    /// Unclassified error carrying only the base fields
    #[default]
    Base,
    /// Authentication failure
    Authentication { username: Option<String> },
    /// Validation failure with the ordered list of failure messages
    Validation { errors: Vec<String> },
    /// Database failure
    Database {
        query: Option<String>,
        connection: Option<String>,
    },
    /// Outbound request failure; all detail lives in the caller's context
    Client,
}

impl ErrorKind {
    /// Discriminator for this kind
    pub fn error_type(&self) -> ErrorType {
        match self {
            Self::Base => ErrorType::Base,
            Self::Authentication { .. } => ErrorType::Authentication,
            Self::Validation { .. } => ErrorType::Validation,
            Self::Database { .. } => ErrorType::Database,
            Self::Client => ErrorType::Client,
        }
    }

    /// Message used when a constructor is given none
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::Base | Self::Client => "",
            Self::Authentication { .. } => "Authentication error occurred",
            Self::Validation { .. } => "Validation error occurred",
            Self::Database { .. } => "Database error occurred",
        }
    }

    /// Base code of the kind's reserved range
    pub fn default_code(&self) -> i64 {
        use super::codes;
        match self {
            Self::Base | Self::Client => codes::UNSPECIFIED,
            Self::Authentication { .. } => codes::AUTHENTICATION,
            Self::Validation { .. } => codes::VALIDATION,
            Self::Database { .. } => codes::DATABASE,
        }
    }
}

/// An error that carries machine-readable context alongside its message.
///
/// Every field is fixed at construction. The consuming `with_*` adapters are
/// part of construction and never let caller context overwrite a key owned by
/// the kind, so [`ContextualError::context`] and the typed accessors always agree.
#[derive(Debug, Clone)]
pub struct ContextualError {
    pub(crate) message: String,
    pub(crate) code: i64,
    pub(crate) kind: ErrorKind,
    pub(crate) context: ContextMap,
    pub(crate) cause: Option<Cause>,
    pub(crate) location: Option<&'static Location<'static>>,
}

impl std::fmt::Display for ContextualError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ContextualError {
    // Yield the error behind the `Arc` so a chained cause can be downcast.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl ContextualError {
    /// Human-readable summary
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Machine-readable classification code
    pub fn code(&self) -> i64 {
        self.code
    }

    /// The kind and its typed fields
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Discriminator of the kind
    pub fn error_type(&self) -> ErrorType {
        self.kind.error_type()
    }

    /// Full context map; empty when nothing was attached
    pub fn context(&self) -> &ContextMap {
        &self.context
    }

    /// The chained cause, if any
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Call site of the constructor that built this error
    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }

    /// Username of an authentication error
    pub fn username(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Authentication { username } => username.as_deref(),
            _ => None,
        }
    }

    /// Failure messages of a validation error; empty for other kinds
    pub fn validation_errors(&self) -> &[String] {
        match &self.kind {
            ErrorKind::Validation { errors } => errors,
            _ => &[],
        }
    }

    /// Query text of a database error
    pub fn query(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Database { query, .. } => query.as_deref(),
            _ => None,
        }
    }

    /// Connection name of a database error
    pub fn connection_name(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Database { connection, .. } => connection.as_deref(),
            _ => None,
        }
    }
}
