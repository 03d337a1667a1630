//! # Domain Types
//!
//! Core domain types used throughout the coupon catalog.
//!
//! ## Type Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐            ┌──────────────────────┐          │
//! │  │     CouponInput      │  create /  │       Coupon         │          │
//! │  │  ──────────────────  │  update    │  ──────────────────  │          │
//! │  │  name                │ ─────────► │  id (assigned)       │          │
//! │  │  percent             │  (store)   │  name                │          │
//! │  │  is_active           │            │  percent             │          │
//! │  └──────────────────────┘            │  is_active           │          │
//! │                                      │  created_at          │          │
//! │                                      │  last_updated_at     │          │
//! │                                      └──────────────────────┘          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity
//! - `id`: integer, immutable, assigned by the store
//! - Business key: `name`, compared case-insensitively

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identifier of a coupon, assigned by the store.
pub type CouponId = i64;

// =============================================================================
// Coupon Input
// =============================================================================

/// Payload of a create or update request.
///
/// Carries no identity and no timestamps; it is never stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CouponInput {
    /// Display name, unique across coupons ignoring case.
    pub name: String,

    /// Discount in whole percent, 1..=100.
    pub percent: i32,

    /// Whether the coupon can currently be redeemed.
    pub is_active: bool,
}

impl CouponInput {
    /// Creates an input value.
    pub fn new(name: impl Into<String>, percent: i32, is_active: bool) -> Self {
        CouponInput {
            name: name.into(),
            percent,
            is_active,
        }
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// A discount coupon held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Coupon {
    /// Unique identifier, never changes after creation.
    pub id: CouponId,

    /// Display name, unique across coupons ignoring case.
    pub name: String,

    /// Discount in whole percent, 1..=100.
    pub percent: i32,

    /// Whether the coupon can currently be redeemed.
    pub is_active: bool,

    /// When the coupon was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the coupon was last updated. Equal to `created_at` until the
    /// first update.
    #[ts(as = "String")]
    pub last_updated_at: DateTime<Utc>,
}

impl Coupon {
    /// Builds a fresh coupon from an already-validated input.
    ///
    /// Both timestamps are set to `now`.
    pub fn from_input(id: CouponId, input: CouponInput, now: DateTime<Utc>) -> Self {
        Coupon {
            id,
            name: input.name,
            percent: input.percent,
            is_active: input.is_active,
            created_at: now,
            last_updated_at: now,
        }
    }

    /// Overwrites the mutable fields from an already-validated input and
    /// refreshes `last_updated_at`.
    ///
    /// `id` and `created_at` are left untouched. The new timestamp never goes
    /// below the previous one, even if the wall clock stepped backwards.
    pub fn apply(&mut self, input: CouponInput, now: DateTime<Utc>) {
        self.name = input.name;
        self.percent = input.percent;
        self.is_active = input.is_active;
        self.last_updated_at = now.max(self.last_updated_at);
    }

    /// True when `name` equals this coupon's name ignoring case.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_from_input_sets_equal_timestamps() {
        let now = Utc::now();
        let coupon = Coupon::from_input(1, CouponInput::new("SAVE10", 10, true), now);

        assert_eq!(coupon.id, 1);
        assert_eq!(coupon.name, "SAVE10");
        assert_eq!(coupon.created_at, coupon.last_updated_at);
    }

    #[test]
    fn test_apply_keeps_identity() {
        let created = Utc::now();
        let mut coupon = Coupon::from_input(7, CouponInput::new("SAVE10", 10, true), created);

        let later = created + Duration::seconds(5);
        coupon.apply(CouponInput::new("SAVE20", 20, false), later);

        assert_eq!(coupon.id, 7);
        assert_eq!(coupon.created_at, created);
        assert_eq!(coupon.last_updated_at, later);
        assert_eq!(coupon.name, "SAVE20");
        assert_eq!(coupon.percent, 20);
        assert!(!coupon.is_active);
    }

    #[test]
    fn test_apply_never_moves_timestamp_backwards() {
        let created = Utc::now();
        let mut coupon = Coupon::from_input(1, CouponInput::new("A", 5, true), created);

        coupon.apply(CouponInput::new("A", 6, true), created - Duration::hours(1));

        assert_eq!(coupon.last_updated_at, created);
        assert!(coupon.last_updated_at >= coupon.created_at);
    }

    #[test]
    fn test_has_name_ignores_case() {
        let coupon = Coupon::from_input(1, CouponInput::new("Save10", 10, true), Utc::now());
        assert!(coupon.has_name("SAVE10"));
        assert!(coupon.has_name("save10"));
        assert!(!coupon.has_name("save11"));
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let input: CouponInput =
            serde_json::from_str(r#"{"name":"SAVE10","percent":10,"isActive":true}"#).unwrap();
        assert_eq!(input, CouponInput::new("SAVE10", 10, true));

        let coupon = Coupon::from_input(1, input, Utc::now());
        let json = serde_json::to_value(&coupon).unwrap();
        assert!(json.get("lastUpdatedAt").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["isActive"], true);
    }
}
