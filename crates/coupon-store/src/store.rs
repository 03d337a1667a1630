//! # Coupon Store
//!
//! The sole owner of the coupon collection.
//!
//! ## Thread Safety
//! The collection sits behind one `Mutex` because:
//! 1. Several callers may share the store through an `Arc`
//! 2. Uniqueness check, id assignment, and insert must happen as one step
//! 3. A read must never see a half-applied mutation
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Coupon Store Operations                              │
//! │                                                                         │
//! │  Operation        Pre-checks                    Collection Change       │
//! │  ─────────        ──────────                    ─────────────────       │
//! │                                                                         │
//! │  create(input) ─► validate, name unique ──────► push(max id + 1)        │
//! │                                                                         │
//! │  update(id, in) ► validate, id exists ────────► overwrite fields        │
//! │                                                                         │
//! │  delete(id) ────► id exists ──────────────────► remove                  │
//! │                                                                         │
//! │  get_by_id(id) ─► id exists ──────────────────► (read only)             │
//! │                                                                         │
//! │  list() ────────► not empty ──────────────────► (read only)             │
//! │                                                                         │
//! │  NOTE: every operation holds the lock for its whole body.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use coupon_core::{validation, Coupon, CouponId, CouponInput};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};

/// In-memory coupon collection with CRUD operations.
///
/// Share it between callers with `Arc<CouponStore>`; every method takes
/// `&self`. Callers only ever receive copies of the stored coupons.
///
/// ## Usage
/// ```rust
/// use coupon_core::CouponInput;
/// use coupon_store::CouponStore;
///
/// let store = CouponStore::new();
/// let created = store.create(CouponInput::new("SAVE10", 10, true)).unwrap();
/// let updated = store
///     .update(created.id, CouponInput::new("SAVE20", 20, false))
///     .unwrap();
/// assert_eq!(updated.created_at, created.created_at);
/// store.delete(created.id).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct CouponStore {
    coupons: Mutex<Vec<Coupon>>,
}

impl CouponStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        CouponStore {
            coupons: Mutex::new(Vec::new()),
        }
    }

    /// Acquires the collection lock.
    ///
    /// Every mutation is applied in one statement after its checks pass, so
    /// the collection is consistent even if a previous holder panicked.
    fn lock(&self) -> MutexGuard<'_, Vec<Coupon>> {
        self.coupons.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns every coupon in collection order.
    ///
    /// ## Errors
    /// `EmptyCollection` when the store holds no coupons.
    pub fn list(&self) -> StoreResult<Vec<Coupon>> {
        let coupons = self.lock();

        if coupons.is_empty() {
            debug!("List requested on empty collection");
            return Err(StoreError::EmptyCollection);
        }

        info!(count = coupons.len(), "Retrieving all coupons");
        Ok(coupons.clone())
    }

    /// Returns the coupon with the given id.
    ///
    /// ## Errors
    /// `NotFound` when no coupon has this id.
    pub fn get_by_id(&self, id: CouponId) -> StoreResult<Coupon> {
        let coupons = self.lock();

        let coupon = coupons
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id))?;

        info!(id, "Retrieving coupon");
        Ok(coupon)
    }

    /// Creates a coupon from `input`.
    ///
    /// ## Steps
    /// 1. Validate the input (all violations collected)
    /// 2. Reject a name already used by any coupon, ignoring case
    /// 3. Assign `id` = highest current id + 1 (1 on an empty store)
    /// 4. Stamp `created_at` = `last_updated_at` = now
    /// 5. Append and return a copy
    ///
    /// ## Errors
    /// `ValidationFailed` or `DuplicateName`. The collection is unchanged.
    pub fn create(&self, input: CouponInput) -> StoreResult<Coupon> {
        debug!(name = %input.name, percent = input.percent, "Creating coupon");

        validation::validate(&input).inspect_err(|errors| {
            warn!(%errors, "Rejected coupon create");
        })?;

        let mut coupons = self.lock();

        if coupons.iter().any(|c| c.has_name(&input.name)) {
            warn!(name = %input.name, "Rejected coupon create: duplicate name");
            return Err(StoreError::duplicate(input.name));
        }

        let id = next_id(&coupons);
        info!(id, "Adding new coupon");

        let coupon = Coupon::from_input(id, input, Utc::now());
        coupons.push(coupon.clone());

        Ok(coupon)
    }

    /// Replaces the name, percent, and active flag of coupon `id`.
    ///
    /// `id` and `created_at` never change; `last_updated_at` is refreshed.
    /// The new name is not checked against other coupons, so an update can
    /// leave two coupons sharing a name.
    ///
    /// ## Errors
    /// `ValidationFailed` (checked first) or `NotFound`. The collection is
    /// unchanged on error.
    pub fn update(&self, id: CouponId, input: CouponInput) -> StoreResult<Coupon> {
        debug!(id, name = %input.name, percent = input.percent, "Updating coupon");

        validation::validate(&input).inspect_err(|errors| {
            warn!(id, %errors, "Rejected coupon update");
        })?;

        let mut coupons = self.lock();

        let coupon = coupons
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;

        coupon.apply(input, Utc::now());
        info!(id, "Updated coupon");

        Ok(coupon.clone())
    }

    /// Removes coupon `id`.
    ///
    /// ## Errors
    /// `NotFound` when no coupon has this id.
    pub fn delete(&self, id: CouponId) -> StoreResult<()> {
        let mut coupons = self.lock();

        let index = coupons
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found(id))?;

        coupons.remove(index);
        info!(id, "Deleted coupon");

        Ok(())
    }

    /// Number of coupons currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when the store holds no coupons.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

/// Highest id in the collection plus one, or 1 when it is empty.
fn next_id(coupons: &[Coupon]) -> CouponId {
    coupons.iter().map(|c| c.id).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreErrorKind;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn input(name: &str, percent: i32) -> CouponInput {
        CouponInput::new(name, percent, true)
    }

    fn seeded(names: &[&str]) -> CouponStore {
        let store = CouponStore::new();
        for name in names {
            store.create(input(name, 10)).unwrap();
        }
        store
    }

    #[test]
    fn test_list_on_empty_store() {
        let store = CouponStore::new();
        assert_eq!(store.list(), Err(StoreError::EmptyCollection));
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_first_coupon() {
        let store = CouponStore::new();

        let coupon = store.create(CouponInput::new("SAVE10", 10, true)).unwrap();

        assert_eq!(coupon.id, 1);
        assert_eq!(coupon.name, "SAVE10");
        assert_eq!(coupon.percent, 10);
        assert!(coupon.is_active);
        assert_eq!(coupon.created_at, coupon.last_updated_at);
        assert_eq!(store.list().unwrap(), vec![coupon]);
    }

    #[test]
    fn test_create_rejects_duplicate_name_ignoring_case() {
        let store = seeded(&["SAVE10"]);

        let result = store.create(CouponInput::new("save10", 20, true));

        assert_eq!(result, Err(StoreError::duplicate("save10")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_rejects_invalid_percent() {
        let store = CouponStore::new();

        let err = store
            .create(CouponInput::new("X", 0, false))
            .unwrap_err();

        match err {
            StoreError::ValidationFailed(errors) => {
                assert_eq!(errors.fields(), vec!["percent"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_create_reports_every_violation() {
        let store = CouponStore::new();

        let err = store.create(CouponInput::new("", 101, true)).unwrap_err();

        match err {
            StoreError::ValidationFailed(errors) => {
                assert_eq!(errors.fields(), vec!["name", "percent"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validation_runs_before_duplicate_check() {
        let store = seeded(&["SAVE10"]);

        let err = store.create(CouponInput::new("SAVE10", 0, true)).unwrap_err();

        assert_eq!(err.kind(), StoreErrorKind::ValidationFailed);
    }

    #[test]
    fn test_ids_follow_current_max() {
        let store = seeded(&["A", "B", "C"]);
        store.delete(2).unwrap();

        // Freed id 2 is not reused; the new id follows the max (3).
        let d = store.create(input("D", 5)).unwrap();
        assert_eq!(d.id, 4);

        // Deleting the max lets max + 1 be recomputed from what remains.
        store.delete(4).unwrap();
        let e = store.create(input("E", 5)).unwrap();
        assert_eq!(e.id, 4);
    }

    #[test]
    fn test_ids_after_emptying_store() {
        let store = seeded(&["A"]);
        store.delete(1).unwrap();

        let b = store.create(input("B", 5)).unwrap();
        assert_eq!(b.id, 1);
    }

    #[test]
    fn test_get_by_id() {
        let store = seeded(&["A", "B"]);

        assert_eq!(store.get_by_id(2).unwrap().name, "B");
        assert_eq!(store.get_by_id(3), Err(StoreError::not_found(3)));
    }

    #[test]
    fn test_update_overwrites_fields() {
        let store = CouponStore::new();
        let created = store.create(CouponInput::new("SAVE10", 10, true)).unwrap();

        let updated = store
            .update(1, CouponInput::new("SAVE20", 20, false))
            .unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "SAVE20");
        assert_eq!(updated.percent, 20);
        assert!(!updated.is_active);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.last_updated_at >= created.last_updated_at);
        assert_eq!(store.get_by_id(1).unwrap(), updated);
    }

    #[test]
    fn test_update_validates_before_lookup() {
        let store = CouponStore::new();

        let err = store.update(42, CouponInput::new("", 10, true)).unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::ValidationFailed);

        let err = store.update(42, input("OK", 10)).unwrap_err();
        assert_eq!(err, StoreError::not_found(42));
    }

    #[test]
    fn test_update_rejects_out_of_range_and_keeps_coupon() {
        let store = seeded(&["A"]);
        let before = store.get_by_id(1).unwrap();

        let err = store.update(1, input("A", 101)).unwrap_err();

        assert_eq!(err.kind(), StoreErrorKind::ValidationFailed);
        assert_eq!(store.get_by_id(1).unwrap(), before);
    }

    #[test]
    fn test_update_does_not_recheck_name_uniqueness() {
        // Renaming onto an existing name is accepted; only create checks names.
        let store = seeded(&["A", "B"]);

        let renamed = store.update(2, input("a", 15)).unwrap();

        assert_eq!(renamed.name, "a");
        let names: Vec<String> = store.list().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["A", "a"]);
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let store = seeded(&["A", "B"]);

        store.delete(1).unwrap();

        assert_eq!(store.get_by_id(1), Err(StoreError::not_found(1)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_unknown_id() {
        let store = seeded(&["A"]);
        assert_eq!(store.delete(99), Err(StoreError::not_found(99)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = seeded(&["C", "A", "B"]);

        let names: Vec<String> = store.list().unwrap().into_iter().map(|c| c.name).collect();

        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_store_usable_after_errors() {
        let store = CouponStore::new();
        let _ = store.list();
        let _ = store.delete(1);
        let _ = store.create(input("", 0));

        assert_eq!(store.create(input("A", 1)).unwrap().id, 1);
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(CouponStore::new());

        std::thread::scope(|scope| {
            for t in 0..8 {
                let store = Arc::clone(&store);
                scope.spawn(move || {
                    for i in 0..25 {
                        store.create(input(&format!("T{t}-{i}"), 10)).unwrap();
                    }
                });
            }
        });

        let coupons = store.list().unwrap();
        let ids: HashSet<CouponId> = coupons.iter().map(|c| c.id).collect();
        assert_eq!(coupons.len(), 200);
        assert_eq!(ids.len(), 200);
        assert_eq!(ids.iter().max(), Some(&200));
    }

    #[test]
    fn test_concurrent_same_name_creates_once() {
        let store = Arc::new(CouponStore::new());

        let successes: usize = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let store = Arc::clone(&store);
                    let name = if i % 2 == 0 { "PROMO" } else { "promo" };
                    scope.spawn(move || store.create(input(name, 10)).is_ok())
                })
                .collect();
            handles
                .into_iter()
                .map(|h| usize::from(h.join().unwrap()))
                .sum()
        });

        assert_eq!(successes, 1);
        assert_eq!(store.len(), 1);
    }
}
