//! # coupon-core: Pure Domain Logic for the Coupon Catalog
//!
//! This crate holds the coupon domain types and the input validator.
//! Nothing in here touches storage, locks, or the network.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Coupon Catalog Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 coupon-api (adapter layer)                      │   │
//! │  │   CouponInputDto ──► CouponInput        Coupon ──► CouponDto    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 coupon-store (collection owner)                 │   │
//! │  │     list / get_by_id / create / update / delete                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ coupon-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐   ┌─────────────┐   ┌───────────────────┐      │   │
//! │  │   │   types   │   │ validation  │   │      error        │      │   │
//! │  │   │  Coupon   │   │  Validator  │   │  ValidationError  │      │   │
//! │  │   │  Input    │   │  rules      │   │  ValidationErrors │      │   │
//! │  │   └───────────┘   └─────────────┘   └───────────────────┘      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOCKS • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Coupon` and `CouponInput`
//! - [`validation`] - Input rules, collected without short-circuiting
//! - [`error`] - Validation error types
//!
//! ## Example Usage
//!
//! ```rust
//! use coupon_core::{validation, CouponInput};
//!
//! let input = CouponInput::new("SAVE10", 10, true);
//! assert!(validation::validate(&input).is_ok());
//!
//! let bad = CouponInput::new("", 0, false);
//! let errors = validation::validate(&bad).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationErrors};
pub use types::{Coupon, CouponId, CouponInput};
pub use validation::{validate, ValidationResult};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest discount a coupon may carry, in percent (inclusive).
pub const MIN_PERCENT: i32 = 1;

/// Largest discount a coupon may carry, in percent (inclusive).
pub const MAX_PERCENT: i32 = 100;
