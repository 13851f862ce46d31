//! Building blocks of the submission validation gate.
//!
//! Form validators are plain functions that return on the first failing
//! rule with `?`, so exactly one message reaches the user at a time.

use thiserror::Error;
use validator::ValidateEmail;

/// A client-side rule failed; the message is shown verbatim
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Fail with `message` unless `condition` holds
pub fn ensure(condition: bool, message: impl Into<String>) -> Result<(), ValidationError> {
    if condition {
        Ok(())
    } else {
        Err(ValidationError::new(message))
    }
}

/// Trimmed value of a mandatory text field
pub fn required_text(value: &str, message: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    ensure(!trimmed.is_empty(), message)?;
    Ok(trimmed.to_string())
}

/// Positive integer quantity typed into a number input
pub fn positive_quantity(value: &str, message: &str) -> Result<i64, ValidationError> {
    match value.trim().parse::<i64>() {
        Ok(quantity) if quantity >= 1 => Ok(quantity),
        _ => Err(ValidationError::new(message)),
    }
}

/// Digits, spaces and `-+()` only, with at least eight digits
pub fn is_valid_phone(phone: &str) -> bool {
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'));
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    !phone.is_empty() && allowed && digits >= 8
}

/// RFC-valid address whose domain has a dot with text on both sides
pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
        && email
            .rsplit_once('@')
            .is_some_and(|(_, domain)| has_inner_dot(domain))
}

fn has_inner_dot(domain: &str) -> bool {
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_short_circuits_with_first_message() {
        let check = || -> Result<(), ValidationError> {
            ensure(true, "first")?;
            ensure(false, "second")?;
            ensure(false, "third")?;
            Ok(())
        };
        assert_eq!(check(), Err(ValidationError::new("second")));
    }

    #[test]
    fn test_required_text_trims() {
        assert_eq!(required_text("  Shirts ", "required"), Ok("Shirts".to_string()));
        assert_eq!(
            required_text("   ", "Category name is required"),
            Err(ValidationError::new("Category name is required"))
        );
    }

    #[test]
    fn test_positive_quantity() {
        assert_eq!(positive_quantity("3", "bad"), Ok(3));
        assert!(positive_quantity("0", "bad").is_err());
        assert!(positive_quantity("-2", "bad").is_err());
        assert!(positive_quantity("", "bad").is_err());
        assert!(positive_quantity("two", "bad").is_err());
    }

    #[test]
    fn test_phone() {
        assert!(is_valid_phone("+62 812-3456-789"));
        assert!(is_valid_phone("(021) 5550 1234"));
        assert!(!is_valid_phone("1234567"));
        assert!(!is_valid_phone("0812 3456 78x9"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email("ana@example.com"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("ana example.com"));
        assert!(!is_valid_email("sari@localhost"));
        assert!(!is_valid_email("sari@localhost."));
        assert!(is_valid_email("sari@mail.butik.id"));
    }
}
