//! Auth command implementation

use faultline_core::{ContextualError, FaultResult};

/// The only account the demo accepts
pub const DEMO_USERNAME: &str = "admin@example.com";
pub const DEMO_PASSWORD: &str = "correct horse battery staple";

/// Check a username/password pair against the demo account
pub fn authenticate(username: &str, password: &str, token_expired: bool) -> FaultResult<String> {
    if username != DEMO_USERNAME || password != DEMO_PASSWORD {
        return Err(ContextualError::invalid_credentials(Some(username.to_string()))
            .with_context("attempted_username", username));
    }

    if token_expired {
        return Err(ContextualError::token_expired(Some(username.to_string())));
    }

    Ok(format!("Authenticated {}", username))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrong_password_is_invalid_credentials() {
        let err = authenticate("user@example.com", "wrongpassword", false).unwrap_err();
        assert_eq!(err.code(), 3001);
        assert_eq!(err.username(), Some("user@example.com"));
        assert_eq!(
            err.context()["attempted_username"],
            json!("user@example.com")
        );
    }

    #[test]
    fn test_expired_token() {
        let err = authenticate(DEMO_USERNAME, DEMO_PASSWORD, true).unwrap_err();
        assert_eq!(err.code(), 3002);
        assert_eq!(err.message(), "Authentication token has expired");
    }

    #[test]
    fn test_valid_credentials() {
        let message = authenticate(DEMO_USERNAME, DEMO_PASSWORD, false).unwrap();
        assert!(message.contains(DEMO_USERNAME));
    }
}
