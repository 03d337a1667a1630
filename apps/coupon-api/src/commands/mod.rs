//! # Commands Module
//!
//! All coupon commands exposed to callers.
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Caller payload (JSON)                                                  │
//! │         │                                                               │
//! │         │ serde                                                         │
//! │         ▼                                                               │
//! │  CouponInputDto ──► CouponInput                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn create_coupon(                                                      │
//! │      coupons: &CouponState,   ◄── shared store handle                   │
//! │      dto: CouponInputDto,     ◄── request payload                       │
//! │  ) -> Result<ApiResponse<CouponDto>, ApiError>                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Coupon ──► CouponDto, plus a status-equivalent                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

pub mod coupon;

/// Status of a successful command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    /// Read or update succeeded (200)
    Ok,

    /// A resource was created (201)
    Created,

    /// Succeeded with nothing to return (204)
    NoContent,
}

impl ResponseStatus {
    /// The HTTP status a transport would answer with.
    pub fn http_equivalent(self) -> u16 {
        match self {
            ResponseStatus::Ok => 200,
            ResponseStatus::Created => 201,
            ResponseStatus::NoContent => 204,
        }
    }
}

/// Successful command outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,

    /// Where the created resource can be read back (create only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<T>,
}

impl<T> ApiResponse<T> {
    /// 200 with a body.
    pub fn ok(body: T) -> Self {
        ApiResponse {
            status: ResponseStatus::Ok,
            location: None,
            body: Some(body),
        }
    }

    /// 201 with a body and the location of the new resource.
    pub fn created(location: impl Into<String>, body: T) -> Self {
        ApiResponse {
            status: ResponseStatus::Created,
            location: Some(location.into()),
            body: Some(body),
        }
    }

    /// 204 without a body.
    pub fn no_content() -> Self {
        ApiResponse {
            status: ResponseStatus::NoContent,
            location: None,
            body: None,
        }
    }
}
