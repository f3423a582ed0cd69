//! Error types for faultline
//!
//! Every error is a [`ContextualError`] carrying:
//! - message: Human-readable summary
//! - code: Numeric classification from a kind's reserved range (see [`codes`])
//! - kind: One of the closed set of [`ErrorKind`]s with its typed fields
//! - context: Ordered key/value payload, always in agreement with the typed fields
//! - cause: Optional underlying error, exposed through `std::error::Error::source`

pub mod codes;
mod constructors;
mod context;
mod conversions;
mod messages;
mod types;

pub use types::{Cause, ContextMap, ContextualError, ErrorKind, ErrorType, FaultResult};
