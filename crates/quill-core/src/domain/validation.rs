//! Field-level validation results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Message attached to a required field that was left blank.
pub const BLANK: &str = "can't be blank";

/// A single failed check on a named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every field error found in one write attempt, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Names of the failing fields, without duplicates.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for error in &self.errors {
            if !fields.contains(&error.field.as_str()) {
                fields.push(&error.field);
            }
        }
        fields
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{} {}", e.field, e.message))
            .collect();
        write!(f, "{}", messages.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Record a `BLANK` error when `value` is empty or whitespace only.
pub fn require_present(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, BLANK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_counts_as_blank() {
        let mut errors = ValidationErrors::default();
        require_present(&mut errors, "title", " \n\t ");
        require_present(&mut errors, "description", "ok");

        assert_eq!(errors.fields(), vec!["title"]);
        assert_eq!(errors.errors()[0].message, BLANK);
    }

    #[test]
    fn test_display_lists_every_field() {
        let mut errors = ValidationErrors::default();
        errors.add("title", BLANK);
        errors.add("description", BLANK);

        assert_eq!(
            errors.to_string(),
            "title can't be blank, description can't be blank"
        );
    }

    #[test]
    fn test_empty_errors_are_ok() {
        assert!(ValidationErrors::default().into_result().is_ok());
    }
}
