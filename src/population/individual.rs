//! Individual wrapper type
//!
//! This module provides the Individual type that wraps a genome with its fitness.

use serde::{Deserialize, Serialize};

use crate::fitness::traits::FitnessValue;
use crate::genome::traits::EvolutionaryGenome;

/// An individual in the population
///
/// Wraps a genome with its computed fitness value and the generation it was
/// born in.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Individual<G, F = f64>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    /// The genome of this individual
    pub genome: G,
    /// The fitness value (None if not yet evaluated)
    pub fitness: Option<F>,
    /// Generation when this individual was created
    pub birth_generation: usize,
}

impl<G, F> Individual<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    /// Create a new individual with an unevaluated genome
    pub fn new(genome: G) -> Self {
        Self {
            genome,
            fitness: None,
            birth_generation: 0,
        }
    }

    /// Create a new individual with a known fitness
    pub fn with_fitness(genome: G, fitness: F) -> Self {
        Self {
            genome,
            fitness: Some(fitness),
            birth_generation: 0,
        }
    }

    /// Create a new individual with birth generation
    pub fn with_generation(genome: G, generation: usize) -> Self {
        Self {
            genome,
            fitness: None,
            birth_generation: generation,
        }
    }

    /// Check if this individual has been evaluated
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Get the fitness as f64, or negative infinity if not evaluated
    pub fn fitness_f64(&self) -> f64 {
        self.fitness
            .as_ref()
            .map(|f| f.to_f64())
            .unwrap_or(f64::NEG_INFINITY)
    }

    /// Set the fitness value
    pub fn set_fitness(&mut self, fitness: F) {
        self.fitness = Some(fitness);
    }

    /// Take the genome out of this individual
    pub fn into_genome(self) -> G {
        self.genome
    }

    /// Get a reference to the genome
    pub fn genome(&self) -> &G {
        &self.genome
    }

    /// Check if this individual is better than another
    pub fn is_better_than(&self, other: &Self) -> bool {
        match (&self.fitness, &other.fitness) {
            (Some(f1), Some(f2)) => f1.is_better_than(f2),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::assignment::Assignment;

    #[test]
    fn test_individual_new() {
        let individual: Individual<Assignment> = Individual::new(Assignment::from([0, 1]));
        assert!(!individual.is_evaluated());
        assert_eq!(individual.birth_generation, 0);
        assert_eq!(individual.fitness_f64(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_individual_set_fitness() {
        let mut individual: Individual<Assignment> =
            Individual::with_generation(Assignment::from([0, 1]), 4);
        individual.set_fitness(0.5);
        assert!(individual.is_evaluated());
        assert_eq!(individual.fitness_f64(), 0.5);
        assert_eq!(individual.birth_generation, 4);
    }

    #[test]
    fn test_individual_is_better_than() {
        let ind1 = Individual::with_fitness(Assignment::from([0]), 1.0);
        let ind2 = Individual::with_fitness(Assignment::from([1]), 0.0);
        let unevaluated: Individual<Assignment> = Individual::new(Assignment::from([1]));

        assert!(ind1.is_better_than(&ind2));
        assert!(!ind2.is_better_than(&ind1));
        assert!(ind2.is_better_than(&unevaluated));
        assert!(!unevaluated.is_better_than(&ind2));
    }

    #[test]
    fn test_individual_into_genome() {
        let genome = Assignment::from([2, 1, 0]);
        let individual = Individual::with_fitness(genome.clone(), 0.25);
        assert_eq!(individual.into_genome(), genome);
    }
}
