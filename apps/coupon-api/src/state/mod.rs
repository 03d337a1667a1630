//! # State Module
//!
//! Manages application state for the coupon adapter.
//!
//! ## Why Separate State Types?
//! Each command declares only the state it needs:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                       │
//! │          ▼                                     ▼                        │
//! │  ┌──────────────────┐                 ┌──────────────────┐             │
//! │  │   CouponState    │                 │   ConfigState    │             │
//! │  │                  │                 │                  │             │
//! │  │  Arc<            │                 │  log_filter      │             │
//! │  │   CouponStore>   │                 │  seed_file       │             │
//! │  │                  │                 │  pretty          │             │
//! │  └──────────────────┘                 └──────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod coupons;

pub use config::{ConfigError, ConfigState};
pub use coupons::CouponState;
