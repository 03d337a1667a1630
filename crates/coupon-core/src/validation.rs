//! # Validation Module
//!
//! Input validation for coupon create/update requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Adapter (coupon-api)                                         │
//! │  └── Type validation (deserialization into CouponInputDto)             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── name must be non-empty                                            │
//! │  └── percent must lie in 1..=100                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store (coupon-store)                                         │
//! │  ├── case-insensitive name uniqueness                                  │
//! │  └── id existence                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every rule in [`RULES`] runs against the input; violations are collected,
//! not short-circuited at the first failure.
//!
//! ## Usage
//! ```rust
//! use coupon_core::{validation, CouponInput};
//!
//! let errors = validation::validate(&CouponInput::new("X", 0, false)).unwrap_err();
//! assert_eq!(errors.fields(), vec!["percent"]);
//! ```

use crate::error::{ValidationError, ValidationErrors};
use crate::types::CouponInput;
use crate::{MAX_PERCENT, MIN_PERCENT};

/// Result type for validating a whole input.
pub type ValidationResult = Result<(), ValidationErrors>;

/// A single rule: returns the violation it detects, if any.
pub type Rule = fn(&CouponInput) -> Option<ValidationError>;

/// Rules applied to every create/update input, in reporting order.
pub const RULES: &[Rule] = &[name_rule, percent_rule];

fn name_rule(input: &CouponInput) -> Option<ValidationError> {
    validate_name(&input.name).err()
}

fn percent_rule(input: &CouponInput) -> Option<ValidationError> {
    validate_percent(input.percent).err()
}

/// Validates a coupon input against every rule in [`RULES`].
///
/// ## Returns
/// - `Ok(())` when the input is acceptable
/// - `Err(ValidationErrors)` listing every violation found
pub fn validate(input: &CouponInput) -> ValidationResult {
    let errors: ValidationErrors = RULES.iter().filter_map(|rule| rule(input)).collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a coupon name.
///
/// ## Rules
/// - Must not be empty. Whitespace is not trimmed, so `" "` passes.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be between [`MIN_PERCENT`] and [`MAX_PERCENT`], both inclusive
///
/// ## Example
/// ```rust
/// use coupon_core::validation::validate_percent;
///
/// assert!(validate_percent(1).is_ok());
/// assert!(validate_percent(100).is_ok());
/// assert!(validate_percent(0).is_err());
/// assert!(validate_percent(101).is_err());
/// ```
pub fn validate_percent(percent: i32) -> Result<(), ValidationError> {
    if !(MIN_PERCENT..=MAX_PERCENT).contains(&percent) {
        return Err(ValidationError::out_of_range(
            "percent",
            i64::from(MIN_PERCENT),
            i64::from(MAX_PERCENT),
            i64::from(percent),
        ));
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
