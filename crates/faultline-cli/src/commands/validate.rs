//! Validate command implementation

use faultline_core::{ContextualError, FaultResult};
use serde_json::json;

/// Check that every value looks like an email address.
///
/// Returns the number of values checked.
pub fn validate_emails(emails: &[String]) -> FaultResult<usize> {
    let errors: Vec<String> = emails
        .iter()
        .filter(|email| !looks_like_email(email))
        .map(|email| format!("Invalid email address format: {}", email))
        .collect();

    if errors.is_empty() {
        return Ok(emails.len());
    }

    Err(ContextualError::from_errors(errors).with_context("email", json!(emails)))
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("user@example.com"));
        assert!(!looks_like_email("invalid-email"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("user@localhost"));
        assert!(!looks_like_email("user@example."));
        assert!(!looks_like_email("a@b@c.com"));
    }

    #[test]
    fn test_collects_every_failure_in_order() {
        let input = vec![
            "invalid-email".to_string(),
            "ok@example.com".to_string(),
            "also-bad".to_string(),
        ];
        let err = validate_emails(&input).unwrap_err();

        assert_eq!(err.code(), 2001);
        assert_eq!(
            err.validation_errors(),
            [
                "Invalid email address format: invalid-email",
                "Invalid email address format: also-bad",
            ]
        );
        assert_eq!(err.context()["email"], json!(input));
    }

    #[test]
    fn test_all_valid() {
        let input = vec!["a@example.com".to_string(), "b@example.org".to_string()];
        assert_eq!(validate_emails(&input).unwrap(), 2);
    }
}
