//! User-facing flash messages.

use super::form_settings::ERROR_DISMISS_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            FlashKind::Success => "message success",
            FlashKind::Error => "message error",
        }
    }

    /// Errors hide themselves, successes stay until the page is left
    pub fn auto_dismiss_ms(&self) -> Option<u32> {
        match self {
            FlashKind::Success => None,
            FlashKind::Error => Some(ERROR_DISMISS_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_errors_auto_dismiss() {
        assert_eq!(FlashMessage::error("x").kind.auto_dismiss_ms(), Some(5_000));
        assert_eq!(FlashMessage::success("x").kind.auto_dismiss_ms(), None);
        assert_eq!(FlashKind::Error.css_class(), "message error");
    }
}
