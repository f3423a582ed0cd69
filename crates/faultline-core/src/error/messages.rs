//! Single-line messages with the kind's fields appended

use super::types::{ContextualError, ErrorKind};

impl ContextualError {
    /// The message followed by the kind's fields, as `message | Field: value | ...`.
    ///
    /// Fields that are absent or empty are left out entirely, so an error with
    /// nothing to add renders as its bare message.
    pub fn formatted_message(&self) -> String {
        let mut output = self.message.clone();

        match &self.kind {
            ErrorKind::Base => {}
            ErrorKind::Authentication { username } => {
                push_field(&mut output, "Username", username.as_deref());
            }
            ErrorKind::Validation { errors } => {
                if !errors.is_empty() {
                    push_field(&mut output, "Errors", Some(&errors.join(", ")));
                }
            }
            ErrorKind::Database { query, connection } => {
                push_field(&mut output, "Query", query.as_deref());
                push_field(&mut output, "Connection", connection.as_deref());
            }
            ErrorKind::Client => {
                if !self.context.is_empty() {
                    // A map of JSON values always serializes
                    let context = serde_json::to_string(&self.context)
                        .unwrap_or_else(|_| format!("{:?}", self.context));
                    push_field(&mut output, "Context", Some(&context));
                }
            }
        }

        output
    }
}

fn push_field(output: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        output.push_str(&format!(" | {}: {}", label, value));
    }
}
