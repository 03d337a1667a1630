//! # Coupon Catalog Entry Point
//!
//! ## Startup Sequence
//! 1. Load configuration from the environment
//! 2. Initialize tracing (logging)
//! 3. Seed the store and print the listing

use coupon_api::state::ConfigState;

fn main() -> anyhow::Result<()> {
    let config = ConfigState::from_env()?;

    coupon_api::init_tracing(&config.log_filter);

    coupon_api::run(&config)
}
