//! Genetic algorithm configuration

use serde::{Deserialize, Serialize};

use crate::error::GaError;

/// Run configuration for the evolution engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaConfig {
    /// Number of distinct routes in the seed population
    pub population_size: usize,
    /// Fixed number of generations to run
    pub generations: usize,
    /// Probability that a child is replaced by a fresh catalog draw
    pub mutation_rate: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            generations: 20,
            mutation_rate: 0.3,
        }
    }
}

impl GaConfig {
    /// Validate the configuration before a run starts
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size < 2 {
            return Err(GaError::InvalidPopulationSize(self.population_size));
        }
        if self.generations < 1 {
            return Err(GaError::InvalidGenerations);
        }
        // NaN fails both bounds and is rejected here too
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GaError::InvalidMutationRate(self.mutation_rate));
        }
        Ok(())
    }
}
