use base64::{engine::general_purpose, Engine as _};

use super::form_settings::MAX_PICTURE_BYTES;
use super::validation::{ensure, ValidationError};

/// Check a chosen file before it is read as a data URI
pub fn validate_picture(mime_type: &str, size_bytes: u64) -> Result<(), ValidationError> {
    ensure(
        mime_type.starts_with("image/"),
        "Please select a valid image file",
    )?;
    ensure(
        size_bytes <= MAX_PICTURE_BYTES,
        "Image size must be less than 5MB",
    )?;
    Ok(())
}

/// `data:` URI of a file's bytes, as stored in a picture slot
pub fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime_type,
        general_purpose::STANDARD.encode(bytes)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_picture() {
        assert!(validate_picture("image/png", 1024).is_ok());
        assert!(validate_picture("image/jpeg", MAX_PICTURE_BYTES).is_ok());
        assert_eq!(
            validate_picture("application/pdf", 10).unwrap_err().message(),
            "Please select a valid image file"
        );
        assert_eq!(
            validate_picture("image/png", MAX_PICTURE_BYTES + 1)
                .unwrap_err()
                .message(),
            "Image size must be less than 5MB"
        );
    }

    #[test]
    fn test_data_url() {
        assert_eq!(data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
        assert_eq!(data_url("image/gif", &[]), "data:image/gif;base64,");
    }
}
