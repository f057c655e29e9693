//! Diagnostics and statistics
//!
//! This module provides statistics collection for evolutionary runs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::fitness::traits::FitnessValue;
use crate::genome::traits::EvolutionaryGenome;
use crate::population::population::Population;
use crate::termination::RunOutcome;

/// Statistics for a single generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number (0-based)
    pub generation: usize,
    /// Total fitness evaluations so far
    pub evaluations: usize,
    /// Best fitness in this generation
    pub best_fitness: f64,
    /// Worst fitness in this generation
    pub worst_fitness: f64,
    /// Mean fitness
    pub mean_fitness: f64,
    /// Population diversity
    pub diversity: f64,
}

impl GenerationStats {
    /// Compute statistics from a population
    pub fn from_population<G, F>(
        population: &Population<G, F>,
        generation: usize,
        evaluations: usize,
    ) -> Self
    where
        G: EvolutionaryGenome,
        F: FitnessValue,
    {
        Self {
            generation,
            evaluations,
            best_fitness: population
                .best()
                .map(|i| i.fitness_f64())
                .unwrap_or(f64::NEG_INFINITY),
            worst_fitness: population
                .worst()
                .map(|i| i.fitness_f64())
                .unwrap_or(f64::INFINITY),
            mean_fitness: population.mean_fitness().unwrap_or(0.0),
            diversity: population.diversity(),
        }
    }
}

/// Statistics collector for an entire evolution run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Statistics per generation
    pub generations: Vec<GenerationStats>,
    /// Total runtime in milliseconds
    pub total_runtime_ms: f64,
    /// Reason for termination
    pub termination_reason: Option<String>,
}

impl EvolutionStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Get the best fitness across all generations
    pub fn best_fitness(&self) -> Option<f64> {
        self.generations
            .iter()
            .map(|g| g.best_fitness)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Get the history of best fitness values
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }

    /// Get the history of mean fitness values
    pub fn mean_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.mean_fitness).collect()
    }

    /// Set the termination reason
    pub fn set_termination_reason(&mut self, reason: &str) {
        self.termination_reason = Some(reason.to_string());
    }

    /// Set the total runtime
    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }

    /// Get a summary of the evolution run
    pub fn summary(&self) -> String {
        format!(
            "Evolution Summary:\n\
             - Generations: {}\n\
             - Best fitness: {:.6}\n\
             - Runtime: {:.2}ms\n\
             - Termination: {}",
            self.num_generations(),
            self.best_fitness().unwrap_or(f64::NEG_INFINITY),
            self.total_runtime_ms,
            self.termination_reason.as_deref().unwrap_or("unknown")
        )
    }
}

/// Result of an evolution run
#[derive(Clone, Debug, Serialize)]
#[serde(bound = "")]
pub struct EvolutionResult<G, F = f64>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    /// The best genome of the final scored generation
    pub best_genome: G,
    /// Fitness of `best_genome`
    pub best_fitness: F,
    /// Best fitness per generation
    pub fitness_history: Vec<f64>,
    /// Number of generations scored
    pub generations: usize,
    /// Total fitness evaluations
    pub evaluations: usize,
    /// How the run ended
    pub outcome: RunOutcome,
    /// Statistics for the run
    pub stats: EvolutionStats,
}

impl<G, F> EvolutionResult<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    /// Create a new evolution result
    pub fn new(
        best_genome: G,
        best_fitness: F,
        fitness_history: Vec<f64>,
        evaluations: usize,
        outcome: RunOutcome,
    ) -> Self {
        Self {
            best_genome,
            best_fitness,
            generations: fitness_history.len(),
            fitness_history,
            evaluations,
            outcome,
            stats: EvolutionStats::new(),
        }
    }

    /// Add statistics to the result
    pub fn with_stats(mut self, stats: EvolutionStats) -> Self {
        self.stats = stats;
        self
    }

    /// Whether the run found a perfect candidate
    pub fn converged(&self) -> bool {
        self.outcome == RunOutcome::Converged
    }
}

pub mod prelude {
    pub use super::{EvolutionResult, EvolutionStats, GenerationStats};
}
