//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits mirror the column widths of the catalog schema; the embedded
//! store does not enforce string lengths on its own.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: cafe, menu item
pub const MAX_NAME_LEN: usize = 200;

/// Cafe location / address line
pub const MAX_LOCATION_LEN: usize = 255;

/// Menu item descriptions
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// URLs / thumbnail paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} cannot be empty.")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that a string (possibly empty) is within the length limit.
pub fn validate_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_whitespace_only() {
        assert!(validate_required_text("   ", "Name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("", "Name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Blue Bottle", "Name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn required_text_rejects_overlong() {
        let long = "a".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "Name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn optional_text_allows_none() {
        assert!(validate_optional_text(&None, "Description", MAX_DESCRIPTION_LEN).is_ok());
        let long = Some("a".repeat(MAX_DESCRIPTION_LEN + 1));
        assert!(validate_optional_text(&long, "Description", MAX_DESCRIPTION_LEN).is_err());
    }
}
