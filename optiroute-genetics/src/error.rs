//! Error taxonomy for genetic algorithm runs
//!
//! Configuration errors fail fast before any generation runs. Catalog lookup
//! misses are never errors; they degrade to the unfit sentinel score inside
//! the evaluator. Only a run that never observes a viable route surfaces an
//! error to the caller.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GaError {
    #[error("population size must be at least 2, got {0}")]
    InvalidPopulationSize(usize),
    #[error("population size {requested} exceeds the {available} distinct routes in the catalog")]
    PopulationExceedsCatalog { requested: usize, available: usize },
    #[error("generation count must be at least 1")]
    InvalidGenerations,
    #[error("mutation rate must lie in [0, 1], got {0}")]
    InvalidMutationRate(f64),
    #[error("selection needs at least 2 population members, got {0}")]
    InsufficientPopulation(usize),
    /// No generation produced a candidate scoring above the unfit sentinel.
    /// Scores at or below [`crate::fitness::ABSENT_SCORE`] never become
    /// best-so-far, so a catalog whose routes all score negative (a negative
    /// `weather_impact`, say) reports this too.
    #[error("no viable route found: every evaluated route scored as unfit")]
    NoViableRoute,
}
