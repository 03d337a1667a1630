//! # Coupon API Library
//!
//! Adapter layer for the coupon catalog: DTOs, command functions,
//! status-equivalent errors, configuration, and logging setup.
//!
//! ## Module Organization
//! ```text
//! coupon_api/
//! ├── lib.rs          ◄─── You are here (tracing, seeding, run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── coupons.rs  ◄─── Shared store handle
//! │   └── config.rs   ◄─── Environment configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── ApiResponse / ResponseStatus
//! │   └── coupon.rs   ◄─── Coupon CRUD commands + DTOs
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! The binary seeds the store from an optional JSON file, then prints the
//! `list_coupons` outcome as JSON on stdout. Logs go to stderr.

pub mod commands;
pub mod error;
pub mod state;

use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::coupon::{create_coupon, list_coupons, CouponInputDto};
use state::{ConfigState, CouponState};

/// Outcome of seeding the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub rejected: usize,
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set
/// - otherwise `fallback` (from `COUPON_LOG`, default `info,coupon=debug`)
pub fn init_tracing(fallback: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses a seed file body: a JSON array of coupon payloads.
pub fn parse_seed(json: &str) -> serde_json::Result<Vec<CouponInputDto>> {
    serde_json::from_str(json)
}

/// Reads and parses a seed file.
pub fn load_seed(path: &Path) -> anyhow::Result<Vec<CouponInputDto>> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("reading seed file {}", path.display()))?;
    parse_seed(&body).with_context(|| format!("parsing seed file {}", path.display()))
}

/// Creates every seed entry through the regular create command.
///
/// Rejected entries are logged and skipped.
pub fn seed(coupons: &CouponState, inputs: Vec<CouponInputDto>) -> SeedReport {
    let mut report = SeedReport::default();

    for input in inputs {
        let name = input.name.clone();
        match create_coupon(coupons, input) {
            Ok(_) => report.created += 1,
            Err(e) => {
                warn!(name = %name, error = %e, "Seed entry rejected");
                report.rejected += 1;
            }
        }
    }

    info!(created = report.created, rejected = report.rejected, "Seeding finished");
    report
}

/// Renders the current listing (or its error) as JSON.
pub fn render_listing(coupons: &CouponState, pretty: bool) -> serde_json::Result<String> {
    match list_coupons(coupons) {
        Ok(resp) => to_json(&resp, pretty),
        Err(err) => to_json(&err, pretty),
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Runs the seed-and-dump flow.
///
/// ## Startup Sequence
/// 1. Create an empty store
/// 2. Seed it from `config.seed_file`, if set
/// 3. Print the listing as JSON
pub fn run(config: &ConfigState) -> anyhow::Result<()> {
    info!(?config, "Starting coupon catalog");

    let coupons = CouponState::new();

    if let Some(path) = &config.seed_file {
        let inputs = load_seed(path)?;
        seed(&coupons, inputs);
    }

    let listing = render_listing(&coupons, config.pretty).context("rendering coupon listing")?;
    println!("{}", listing);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts_rejections() {
        let inputs = parse_seed(
            r#"[
                {"name":"SAVE10","percent":10,"isActive":true},
                {"name":"save10","percent":20,"isActive":true},
                {"name":"BAD","percent":0,"isActive":false},
                {"name":"HALF","percent":50}
            ]"#,
        )
        .unwrap();

        let coupons = CouponState::new();
        let report = seed(&coupons, inputs);

        assert_eq!(report, SeedReport { created: 2, rejected: 2 });
        assert_eq!(coupons.store().len(), 2);
    }

    #[test]
    fn test_render_listing_empty_and_filled() {
        let coupons = CouponState::new();

        let empty: serde_json::Value =
            serde_json::from_str(&render_listing(&coupons, false).unwrap()).unwrap();
        assert_eq!(empty["code"], "NOT_FOUND");

        seed(
            &coupons,
            parse_seed(r#"[{"name":"SAVE10","percent":10,"isActive":true}]"#).unwrap(),
        );
        let filled: serde_json::Value =
            serde_json::from_str(&render_listing(&coupons, true).unwrap()).unwrap();
        assert_eq!(filled["status"], "OK");
        assert_eq!(filled["body"][0]["name"], "SAVE10");
    }

    #[test]
    fn test_parse_seed_rejects_non_array() {
        assert!(parse_seed(r#"{"name":"SAVE10"}"#).is_err());
    }
}
