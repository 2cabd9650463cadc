//! Optiroute Genetics - Generational search over the route catalog
//!
//! This crate implements the genetic algorithm that picks the best candidate
//! route: fitness evaluation from catalog attributes, population seeding,
//! rank-based parent selection, the degenerate crossover/mutation operators a
//! bare-identifier representation admits, and the evolution engine that runs
//! a fixed number of generations and tracks the best route seen.
//!
//! All randomness flows through a single injected RNG, so a fixed seed makes
//! an entire run reproducible.

pub mod config;
pub mod engine;
pub mod error;
pub mod fitness;
pub mod population;
pub mod reproduce;
pub mod selection;

pub use config::*;
pub use engine::*;
pub use error::*;
pub use fitness::*;
pub use population::*;
pub use reproduce::*;
pub use selection::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
