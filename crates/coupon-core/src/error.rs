//! # Error Types
//!
//! Validation error types for coupon-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  coupon-core errors (this file)                                        │
//! │  ├── ValidationError   - One field-level violation                     │
//! │  └── ValidationErrors  - Every violation found for one input           │
//! │                                                                         │
//! │  coupon-store errors (separate crate)                                  │
//! │  └── StoreError        - ValidationFailed / DuplicateName / NotFound   │
//! │                          / EmptyCollection                             │
//! │                                                                         │
//! │  coupon-api errors (in app)                                            │
//! │  └── ApiError          - What the caller sees (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationErrors → StoreError → ApiError → Caller               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// A single field-level violation.
///
/// The field name is carried in every variant so a caller can point at the
/// offending input; `Display` renders the human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is outside an inclusive range.
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        value: i64,
    },
}

impl ValidationError {
    /// Creates a `Required` violation for `field`.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an `OutOfRange` violation for `field`.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, value: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field } | ValidationError::OutOfRange { field, .. } => {
                field
            }
        }
    }
}

// =============================================================================
// Validation Errors (collected)
// =============================================================================

/// Every violation found while validating one input, in rule order.
///
/// Never empty when produced by [`crate::validation::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        ValidationErrors(Vec::new())
    }

    /// Appends a violation.
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no violation was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the violations in rule order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Names of the offending fields, in rule order.
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(ValidationError::field).collect()
    }

    /// True when some violation names `field`.
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }

    /// Consumes the collection, returning the violations.
    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        ValidationErrors(vec![error])
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        ValidationErrors(iter.into_iter().collect())
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::required("name");
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::out_of_range("percent", 1, 100, 0);
        assert_eq!(err.to_string(), "percent must be between 1 and 100 (got 0)");
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(ValidationError::required("name").field(), "name");
        assert_eq!(
            ValidationError::out_of_range("percent", 1, 100, 101).field(),
            "percent"
        );
    }

    #[test]
    fn test_errors_display_joins_reasons() {
        let errors: ValidationErrors = vec![
            ValidationError::required("name"),
            ValidationError::out_of_range("percent", 1, 100, -5),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            errors.to_string(),
            "name is required; percent must be between 1 and 100 (got -5)"
        );
        assert_eq!(errors.fields(), vec!["name", "percent"]);
        assert!(errors.contains_field("percent"));
        assert!(!errors.contains_field("isActive"));
    }

    #[test]
    fn test_single_error_converts() {
        let errors = ValidationErrors::from(ValidationError::required("name"));
        assert_eq!(errors.len(), 1);
        assert!(!errors.is_empty());
    }
}
