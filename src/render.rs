//! GeoJSON handoff for the downstream map renderer
//!
//! The core's obligation ends at handing over a well-formed winning route.
//! The artifact carries the route's endpoints as point features plus a
//! straight connecting line; computing the actual road-network path and
//! drawing the map are the renderer's business.

use std::path::Path;

use anyhow::Result;
use serde_json::json;

use optiroute_catalog::RouteRecord;

/// Build the GeoJSON feature collection for one winning route
pub fn route_feature_collection(record: &RouteRecord, score: f64) -> serde_json::Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {
                    "role": "start",
                    "route_id": record.route_id.as_str(),
                },
                "geometry": {
                    "type": "Point",
                    // GeoJSON positions are [lon, lat]
                    "coordinates": [record.start_lon, record.start_lat],
                },
            },
            {
                "type": "Feature",
                "properties": {
                    "role": "end",
                    "route_id": record.route_id.as_str(),
                },
                "geometry": {
                    "type": "Point",
                    "coordinates": [record.end_lon, record.end_lat],
                },
            },
            {
                "type": "Feature",
                "properties": {
                    "role": "route",
                    "route_id": record.route_id.as_str(),
                    "fitness_score": score,
                    "distance_km": record.distance_km,
                },
                "geometry": {
                    "type": "LineString",
                    "coordinates": [
                        [record.start_lon, record.start_lat],
                        [record.end_lon, record.end_lat],
                    ],
                },
            },
        ],
    })
}

/// Write the handoff artifact to disk
pub fn write_route_map(record: &RouteRecord, score: f64, path: impl AsRef<Path>) -> Result<()> {
    let collection = route_feature_collection(record, score);
    std::fs::write(path.as_ref(), serde_json::to_string_pretty(&collection)?)?;
    Ok(())
}
