//! Field checks shared by the stores and the HTTP layer.

use crate::error::ValidationErrors;

/// Record an error for `field` when `value` is empty after trimming.
pub fn require_non_blank(errors: &mut ValidationErrors, field: &str, label: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{label} cannot be empty"));
    }
}

/// Record an error for `field` unless `value` is one or more ASCII letters.
pub fn require_alphabetic(errors: &mut ValidationErrors, field: &str, label: &str, value: &str) {
    if value.is_empty() {
        errors.add(field, format!("{label} cannot be empty"));
    } else if !is_alphabetic(value) {
        errors.add(
            field,
            format!("{label} must contain only alphabetic characters (a-z or A-Z)"),
        );
    }
}

/// `[a-zA-Z]+`
pub fn is_alphabetic(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphabetic())
}
