//! # coupon-store: Coupon Collection Owner
//!
//! This crate provides the single in-process coupon collection and the
//! CRUD operations over it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Coupon Catalog Data Flow                         │
//! │                                                                         │
//! │  Adapter command (create_coupon)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   coupon-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   1. validate(input)           ── coupon-core                   │   │
//! │  │   2. lock collection           ── one Mutex, every operation    │   │
//! │  │   3. uniqueness / existence                                     │   │
//! │  │   4. assign id, stamp time, mutate                              │   │
//! │  │   5. return a copy                                              │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - `CouponStore` and its operations
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use coupon_core::CouponInput;
//! use coupon_store::{CouponStore, StoreError};
//!
//! let store = CouponStore::new();
//! assert!(matches!(store.list(), Err(StoreError::EmptyCollection)));
//!
//! let coupon = store.create(CouponInput::new("SAVE10", 10, true)).unwrap();
//! assert_eq!(coupon.id, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreErrorKind, StoreResult};
pub use store::CouponStore;
