//! Generational evolution engine

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use optiroute_catalog::{RouteCatalog, RouteId};

use crate::config::GaConfig;
use crate::error::GaError;
use crate::fitness::{FitnessEvaluator, ABSENT_SCORE};
use crate::population::Population;
use crate::reproduce::{crossover, mutate};
use crate::selection::select_parents;

/// The highest-fitness route observed across all generations of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestRoute {
    pub route_id: RouteId,
    pub score: f64,
}

/// Runs the genetic search for a fixed number of generations
///
/// Plain stateful struct with a single entry point. `run` consumes the
/// engine: seeding happens first, the configured generation count is always
/// exhausted (no early stopping), and the engine is spent afterwards.
///
/// Note on population size: the configured size only shapes the seed pool.
/// Every generation re-derives the population as `[parent1, parent2, child1,
/// child2]`, so it stabilizes at 4 members from the second generation onward.
/// This collapse is deliberate, not an oversight.
pub struct EvolutionEngine {
    config: GaConfig,
    rng: StdRng,
}

impl EvolutionEngine {
    /// Build an engine, failing fast on invalid configuration
    ///
    /// All randomness in the run flows from `seed`; identical seed, catalog,
    /// and configuration reproduce the run generation by generation.
    pub fn new(config: GaConfig, seed: u64) -> Result<Self, GaError> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Seed a population and evolve it for the configured generation count
    ///
    /// Returns the best route seen across the whole run, or
    /// [`GaError::NoViableRoute`] when every evaluated member scored as
    /// unfit.
    pub fn run(mut self, catalog: &RouteCatalog) -> Result<BestRoute, GaError> {
        let evaluator = FitnessEvaluator::new(catalog);
        let mut population =
            Population::seed(catalog, self.config.population_size, &mut self.rng)?;
        let mut best: Option<BestRoute> = None;

        tracing::info!(
            population = population.len(),
            generations = self.config.generations,
            mutation_rate = self.config.mutation_rate,
            "evolution started"
        );

        for generation in 0..self.config.generations {
            let (parent1, parent2) = select_parents(&population, &evaluator)?;

            // the order swap makes the two crossover draws independent;
            // crossover always draws before the matching mutation
            let cross1 = crossover(&mut self.rng, &parent1, &parent2);
            let child1 = mutate(&mut self.rng, cross1, self.config.mutation_rate, catalog);
            let cross2 = crossover(&mut self.rng, &parent2, &parent1);
            let child2 = mutate(&mut self.rng, cross2, self.config.mutation_rate, catalog);

            population = Population::from_members(vec![parent1, parent2, child1, child2]);

            let mut candidate = None;
            let mut candidate_score = f64::NEG_INFINITY;
            for id in population.members() {
                let score = evaluator.score(id);
                if score > candidate_score {
                    candidate = Some(id);
                    candidate_score = score;
                }
            }

            tracing::trace!(generation, ?population, candidate_score, "generation evaluated");

            // a sentinel-scored candidate is never crowned; it would make an
            // unresolvable route look like a real winner
            let improved = candidate_score > ABSENT_SCORE
                && best.as_ref().map_or(true, |b| candidate_score > b.score);
            if improved {
                if let Some(id) = candidate {
                    tracing::debug!(generation, route = %id, score = candidate_score, "new best route");
                    best = Some(BestRoute {
                        route_id: id.clone(),
                        score: candidate_score,
                    });
                }
            }
        }

        match &best {
            Some(b) => tracing::info!(route = %b.route_id, score = b.score, "evolution finished"),
            None => tracing::warn!("evolution finished without a viable route"),
        }

        best.ok_or(GaError::NoViableRoute)
    }
}
