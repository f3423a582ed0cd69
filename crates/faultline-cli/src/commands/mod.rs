//! CLI commands
//!
//! Each scenario returns a `FaultResult`; the router logs and reports failures.

pub mod auth;
pub mod client;
pub mod codes;
pub mod database;
pub mod validate;
