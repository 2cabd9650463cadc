//! Optiroute Catalog - Candidate route storage
//!
//! This crate provides the immutable table of candidate travel routes the
//! genetic search draws from: route records with their measured attributes,
//! the identifier type carried inside populations, and a CSV loader for the
//! tabular source the catalog is built from once at startup.

pub mod catalog;
pub mod record;

pub use catalog::*;
pub use record::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
