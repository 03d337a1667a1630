//! # Coupon State
//!
//! Shared handle to the process-wide coupon store.

use std::sync::Arc;

use coupon_store::CouponStore;

/// Handle to the coupon store shared by every command.
///
/// ## Thread Safety
/// `CouponStore` serializes its own operations behind one mutex, so the
/// handle only needs an `Arc`. Cloning is cheap and every clone sees the
/// same collection.
#[derive(Debug, Clone, Default)]
pub struct CouponState {
    store: Arc<CouponStore>,
}

impl CouponState {
    /// Creates state around a fresh, empty store.
    pub fn new() -> Self {
        CouponState {
            store: Arc::new(CouponStore::new()),
        }
    }

    /// Wraps an existing store.
    pub fn with_store(store: Arc<CouponStore>) -> Self {
        CouponState { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &CouponStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coupon_core::CouponInput;

    #[test]
    fn test_clones_share_the_store() {
        let state = CouponState::new();
        let other = state.clone();

        state
            .store()
            .create(CouponInput::new("SAVE10", 10, true))
            .unwrap();

        assert_eq!(other.store().len(), 1);
    }
}
