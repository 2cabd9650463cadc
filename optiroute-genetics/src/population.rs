//! Working set of route identifiers for one generation

use rand::seq::SliceRandom;
use rand::Rng;

use optiroute_catalog::{RouteCatalog, RouteId};

use crate::error::GaError;

/// Ordered collection of route identifiers for one generation
///
/// Carries bare identifiers only; attributes and fitness are always resolved
/// through the catalog, never cached here. The engine replaces the whole
/// population once per generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    members: Vec<RouteId>,
}

impl Population {
    /// Seed a population of `size` distinct identifiers drawn uniformly
    /// without replacement from the catalog
    pub fn seed(
        catalog: &RouteCatalog,
        size: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, GaError> {
        if size < 2 {
            return Err(GaError::InvalidPopulationSize(size));
        }
        if size > catalog.len() {
            return Err(GaError::PopulationExceedsCatalog {
                requested: size,
                available: catalog.len(),
            });
        }

        let members = catalog
            .records()
            .choose_multiple(rng, size)
            .map(|record| record.route_id.clone())
            .collect();

        Ok(Self { members })
    }

    pub fn from_members(members: Vec<RouteId>) -> Self {
        Self { members }
    }

    pub fn members(&self) -> &[RouteId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use optiroute_catalog::RouteRecord;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn catalog(ids: &[&str]) -> RouteCatalog {
        let records = ids
            .iter()
            .map(|id| RouteRecord {
                route_id: RouteId::from(*id),
                distance_km: 1.0,
                avg_speed_kmh: 1.0,
                traffic_volume: 1.0,
                weather_impact: 1.0,
                start_lat: 0.0,
                start_lon: 0.0,
                end_lat: 0.0,
                end_lon: 0.0,
            })
            .collect();
        RouteCatalog::from_records(records).unwrap()
    }

    #[test]
    fn test_seed_draws_distinct_catalog_ids() {
        let catalog = catalog(&["A", "B", "C", "D", "E"]);
        let mut rng = StdRng::seed_from_u64(7);

        let population = Population::seed(&catalog, 4, &mut rng).unwrap();
        assert_eq!(population.len(), 4);

        let unique: HashSet<&RouteId> = population.members().iter().collect();
        assert_eq!(unique.len(), 4);
        for id in population.members() {
            assert!(catalog.get(id).is_some());
        }
    }

    #[test]
    fn test_seed_larger_than_catalog_rejected() {
        let catalog = catalog(&["A", "B", "C"]);
        let mut rng = StdRng::seed_from_u64(7);

        let err = Population::seed(&catalog, 4, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GaError::PopulationExceedsCatalog {
                requested: 4,
                available: 3
            }
        ));
    }

    #[test]
    fn test_seed_below_two_rejected() {
        let catalog = catalog(&["A", "B", "C"]);
        let mut rng = StdRng::seed_from_u64(7);

        let err = Population::seed(&catalog, 1, &mut rng).unwrap_err();
        assert!(matches!(err, GaError::InvalidPopulationSize(1)));
    }

    #[test]
    fn test_seed_is_deterministic_for_fixed_seed() {
        let catalog = catalog(&["A", "B", "C", "D", "E", "F"]);

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);

        let first = Population::seed(&catalog, 3, &mut rng_a).unwrap();
        let second = Population::seed(&catalog, 3, &mut rng_b).unwrap();
        assert_eq!(first, second);
    }
}
