//! Route records and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique key naming one candidate route in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    /// Create an identifier from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One candidate route with its measured attributes
///
/// Records are created once at catalog load time and never mutated during a
/// run. Fitness is intentionally not a field here; it is a run-time derived
/// quantity recomputed from these attributes on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecord {
    pub route_id: RouteId,
    /// Route length in kilometers; expected positive
    pub distance_km: f64,
    /// Average speed in km/h
    pub avg_speed_kmh: f64,
    /// Traffic volume in arbitrary units
    pub traffic_volume: f64,
    /// Multiplicative weather factor
    pub weather_impact: f64,
    pub start_lat: f64,
    pub start_lon: f64,
    pub end_lat: f64,
    pub end_lon: f64,
}
