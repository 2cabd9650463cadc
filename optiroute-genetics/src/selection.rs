//! Parent selection by fitness rank

use std::cmp::Ordering;

use optiroute_catalog::RouteId;

use crate::error::GaError;
use crate::fitness::FitnessEvaluator;
use crate::population::Population;

/// Rank the population by descending fitness and return the top two members
///
/// The sort is stable, so ties keep their first-seen order. Exactly two
/// parents come out of every generation; a population below two members
/// cannot supply them.
pub fn select_parents(
    population: &Population,
    evaluator: &FitnessEvaluator<'_>,
) -> Result<(RouteId, RouteId), GaError> {
    if population.len() < 2 {
        return Err(GaError::InsufficientPopulation(population.len()));
    }

    let mut ranked: Vec<(&RouteId, f64)> = population
        .members()
        .iter()
        .map(|id| (id, evaluator.score(id)))
        .collect();

    // scores are finite by construction, so Equal is only hit on real ties
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    Ok((ranked[0].0.clone(), ranked[1].0.clone()))
}
