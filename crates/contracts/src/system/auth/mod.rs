use serde::{Deserialize, Serialize};

use crate::shared::form_settings::{PIN_LEN, USERNAME_MAX_LEN};
use crate::shared::validation::{ensure, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub pin: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl LoginRequest {
    /// Runs both field checks, trimming the username
    pub fn validated(username: &str, pin: &str) -> Result<Self, ValidationError> {
        let username = validate_username(username)?;
        validate_pin(pin)?;
        Ok(Self {
            username,
            pin: pin.to_string(),
        })
    }
}

pub fn validate_username(value: &str) -> Result<String, ValidationError> {
    let username = value.trim();
    ensure(!username.is_empty(), "Username is required")?;
    ensure(
        username.chars().count() <= USERNAME_MAX_LEN,
        format!("Username must not exceed {} characters", USERNAME_MAX_LEN),
    )?;
    Ok(username.to_string())
}

pub fn validate_pin(value: &str) -> Result<(), ValidationError> {
    ensure(!value.is_empty(), "PIN is required")?;
    ensure(
        value.chars().all(|c| c.is_ascii_digit()),
        "PIN must contain only digits",
    )?;
    ensure(
        value.len() == PIN_LEN,
        format!("PIN must be exactly {} digits", PIN_LEN),
    )
}

/// Keeps only digits, at most one PIN worth
pub fn sanitize_pin(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_digit)
        .take(PIN_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert_eq!(
            validate_username("   ").unwrap_err().message(),
            "Username is required"
        );
        assert_eq!(
            validate_username(&"a".repeat(33)).unwrap_err().message(),
            "Username must not exceed 32 characters"
        );
        assert_eq!(validate_username("  admin ").unwrap(), "admin");
    }

    #[test]
    fn test_pin_rules() {
        assert_eq!(validate_pin("").unwrap_err().message(), "PIN is required");
        assert_eq!(
            validate_pin("12a456").unwrap_err().message(),
            "PIN must contain only digits"
        );
        assert_eq!(
            validate_pin("12345").unwrap_err().message(),
            "PIN must be exactly 6 digits"
        );
        assert!(validate_pin("123456").is_ok());
    }

    #[test]
    fn test_sanitize_pin() {
        assert_eq!(sanitize_pin("12-34 5678"), "123456");
        assert_eq!(sanitize_pin("abc"), "");
    }

    #[test]
    fn test_login_response_without_user_id() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"success":true,"message":"Login successful"}"#).unwrap();
        assert!(response.success);
        assert_eq!(response.user_id, None);
    }
}
