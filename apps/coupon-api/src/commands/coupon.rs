//! # Coupon Commands
//!
//! CRUD commands over the coupon store.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command           Route equivalent             Success    Failure      │
//! │  ───────           ────────────────             ───────    ───────      │
//! │  list_coupons      GET    /api/coupons          200        404          │
//! │  get_coupon        GET    /api/coupons/{id}     200        404          │
//! │  create_coupon     POST   /api/coupons          201        400          │
//! │  update_coupon     PUT    /api/coupons/{id}     200        400, 404     │
//! │  delete_coupon     DELETE /api/coupons/{id}     204        404          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commands::ApiResponse;
use crate::error::ApiError;
use crate::state::CouponState;
use coupon_core::{Coupon, CouponId, CouponInput};

/// Base route of the coupon resource.
pub const COUPONS_ROUTE: &str = "/api/coupons";

/// Create/update payload.
///
/// Missing fields fall back to empty / zero / false so they surface as
/// validation violations instead of decode failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CouponInputDto {
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
}

impl From<CouponInputDto> for CouponInput {
    fn from(dto: CouponInputDto) -> Self {
        CouponInput {
            name: dto.name,
            percent: dto.percent,
            is_active: dto.is_active,
        }
    }
}

/// Coupon as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponDto {
    pub id: CouponId,
    pub name: String,
    pub percent: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_updated_at: DateTime<Utc>,
}

impl From<&Coupon> for CouponDto {
    fn from(c: &Coupon) -> Self {
        CouponDto {
            id: c.id,
            name: c.name.clone(),
            percent: c.percent,
            is_active: c.is_active,
            created_at: c.created_at,
            last_updated_at: c.last_updated_at,
        }
    }
}

impl From<Coupon> for CouponDto {
    fn from(c: Coupon) -> Self {
        CouponDto {
            id: c.id,
            name: c.name,
            percent: c.percent,
            is_active: c.is_active,
            created_at: c.created_at,
            last_updated_at: c.last_updated_at,
        }
    }
}

/// Lists every coupon.
///
/// An empty collection is answered as not found, not as an empty list.
pub fn list_coupons(coupons: &CouponState) -> Result<ApiResponse<Vec<CouponDto>>, ApiError> {
    debug!("list_coupons command");

    let list = coupons.store().list()?;
    Ok(ApiResponse::ok(list.into_iter().map(CouponDto::from).collect()))
}

/// Gets one coupon by id.
pub fn get_coupon(coupons: &CouponState, id: CouponId) -> Result<ApiResponse<CouponDto>, ApiError> {
    debug!(id, "get_coupon command");

    let coupon = coupons.store().get_by_id(id)?;
    Ok(ApiResponse::ok(coupon.into()))
}

/// Creates a coupon.
///
/// ## Returns
/// 201 with the new coupon and its location, e.g. `/api/coupons/1`.
pub fn create_coupon(
    coupons: &CouponState,
    dto: CouponInputDto,
) -> Result<ApiResponse<CouponDto>, ApiError> {
    debug!(name = %dto.name, "create_coupon command");

    let coupon = coupons.store().create(dto.into())?;
    let location = format!("{}/{}", COUPONS_ROUTE, coupon.id);
    Ok(ApiResponse::created(location, coupon.into()))
}

/// Replaces a coupon's name, percent, and active flag.
pub fn update_coupon(
    coupons: &CouponState,
    id: CouponId,
    dto: CouponInputDto,
) -> Result<ApiResponse<CouponDto>, ApiError> {
    debug!(id, name = %dto.name, "update_coupon command");

    let coupon = coupons.store().update(id, dto.into())?;
    Ok(ApiResponse::ok(coupon.into()))
}

/// Deletes a coupon.
pub fn delete_coupon(coupons: &CouponState, id: CouponId) -> Result<ApiResponse<()>, ApiError> {
    debug!(id, "delete_coupon command");

    coupons.store().delete(id)?;
    Ok(ApiResponse::no_content())
}
