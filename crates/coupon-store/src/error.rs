//! # Store Error Types
//!
//! Error types for coupon collection operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationErrors (coupon-core)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds DuplicateName / NotFound / Empty      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in app) ← status-equivalent code for the caller             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is recoverable; the store stays usable after any of them.

use coupon_core::{CouponId, ValidationErrors};
use thiserror::Error;

/// Coupon store operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The input broke one or more field rules.
    ///
    /// ## When This Occurs
    /// - Empty name
    /// - Percent outside 1..=100
    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationErrors),

    /// Another coupon already uses this name (ignoring case).
    ///
    /// Only checked on create.
    #[error("A coupon with name {name} already exists")]
    DuplicateName { name: String },

    /// No coupon has this id.
    #[error("Coupon not found: {id}")]
    NotFound { id: CouponId },

    /// The collection holds no coupons.
    #[error("No coupons exist")]
    EmptyCollection,
}

/// Fieldless discriminant of [`StoreError`], for matching without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreErrorKind {
    ValidationFailed,
    DuplicateName,
    NotFound,
    EmptyCollection,
}

impl StoreError {
    /// Creates a NotFound error for the given id.
    pub fn not_found(id: CouponId) -> Self {
        StoreError::NotFound { id }
    }

    /// Creates a DuplicateName error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        StoreError::DuplicateName { name: name.into() }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::ValidationFailed(_) => StoreErrorKind::ValidationFailed,
            StoreError::DuplicateName { .. } => StoreErrorKind::DuplicateName,
            StoreError::NotFound { .. } => StoreErrorKind::NotFound,
            StoreError::EmptyCollection => StoreErrorKind::EmptyCollection,
        }
    }
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
