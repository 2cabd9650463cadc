//! Fitness evaluation from catalog attributes

use optiroute_catalog::{RouteCatalog, RouteId};

/// Score assigned to identifiers that cannot be resolved or whose attributes
/// are invalid. All legitimate scores are expected non-negative, so the
/// sentinel ranks such routes as maximally unfit instead of failing the run.
pub const ABSENT_SCORE: f64 = 0.0;

/// Pure fitness evaluator over a catalog snapshot
///
/// Referentially transparent: the same identifier always yields the same
/// score for a fixed catalog.
pub struct FitnessEvaluator<'a> {
    catalog: &'a RouteCatalog,
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(catalog: &'a RouteCatalog) -> Self {
        Self { catalog }
    }

    /// Desirability of one route; higher is better
    ///
    /// `avg_speed × traffic × weather / distance`. A stale or malformed
    /// identifier, a non-positive distance, or a non-finite result all score
    /// as [`ABSENT_SCORE`].
    pub fn score(&self, id: &RouteId) -> f64 {
        let Some(record) = self.catalog.get(id) else {
            return ABSENT_SCORE;
        };

        if record.distance_km <= 0.0 {
            return ABSENT_SCORE;
        }

        let score =
            record.avg_speed_kmh * record.traffic_volume * record.weather_impact / record.distance_km;

        if score.is_finite() {
            score
        } else {
            ABSENT_SCORE
        }
    }
}
