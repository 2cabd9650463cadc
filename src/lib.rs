//! optiroute - library surface of the route selection binary
//!
//! Exposes the renderer handoff and run-configuration helpers so integration
//! tests can drive the same code path the binary uses. The search itself
//! lives in the `optiroute-genetics` and `optiroute-catalog` member crates.

pub mod render;
pub mod run_config;
