//! CSV-backed route catalog
//!
//! The catalog is loaded once at startup from a delimited file with the schema
//! `route_id,distance_km,avg_speed_kmh,traffic_volume,weather_impact,start_lat,start_lon,end_lat,end_lon`
//! and is read-only afterwards. File order is preserved so that rank ties can
//! be broken by first appearance.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::record::{RouteId, RouteRecord};

/// Catalog load failures
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog row: {0}")]
    Csv(#[from] csv::Error),
    #[error("duplicate route id in catalog: {0}")]
    DuplicateRoute(RouteId),
    #[error("catalog contains no routes")]
    Empty,
}

/// Immutable table of candidate routes, keyed by route id
#[derive(Debug)]
pub struct RouteCatalog {
    records: Vec<RouteRecord>,
    index: HashMap<RouteId, usize>,
}

impl RouteCatalog {
    /// Build a catalog from already-parsed records, preserving their order
    pub fn from_records(records: Vec<RouteRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if index.insert(record.route_id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateRoute(record.route_id.clone()));
            }
        }

        Ok(Self { records, index })
    }

    /// Load the catalog from a CSV file on disk
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path.as_ref())?;
        let catalog = Self::from_csv_reader(file)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            routes = catalog.len(),
            "route catalog loaded"
        );
        Ok(catalog)
    }

    /// Load the catalog from any CSV source with a header row
    pub fn from_csv_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for row in csv_reader.deserialize() {
            let record: RouteRecord = row?;
            records.push(record);
        }

        Self::from_records(records)
    }

    /// Look up one route; `None` when the id does not resolve
    pub fn get(&self, id: &RouteId) -> Option<&RouteRecord> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    /// All records in catalog order
    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    /// All identifiers in catalog order
    pub fn ids(&self) -> impl Iterator<Item = &RouteId> {
        self.records.iter().map(|r| &r.route_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
