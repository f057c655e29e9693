//! Operator traits
//!
//! This module defines the core operator traits for genetic algorithms.

use rand::Rng;

use crate::error::OperatorResult;
use crate::genome::traits::EvolutionaryGenome;
use crate::history::MutationBias;

/// Selection operator trait
///
/// Selects individuals from a population for reproduction.
pub trait SelectionOperator<G: EvolutionaryGenome>: Send + Sync {
    /// Select `count` distinct individuals from the population
    ///
    /// `population` holds (genome, fitness) pairs. Returns indices into it;
    /// fewer than `count` are returned if the population is smaller.
    fn select_many<R: Rng>(
        &self,
        population: &[(&G, f64)],
        count: usize,
        rng: &mut R,
    ) -> Vec<usize>;
}

/// Crossover operator trait
///
/// Combines genetic material from two parents to create offspring.
pub trait CrossoverOperator<G: EvolutionaryGenome>: Send + Sync {
    /// Apply crossover to two parents and produce two offspring
    fn crossover<R: Rng>(&self, parent1: &G, parent2: &G, rng: &mut R) -> OperatorResult<(G, G)>;
}

/// Mutation operator trait
///
/// Applies random changes to a genome.
pub trait MutationOperator<G: EvolutionaryGenome>: Send + Sync {
    /// Apply mutation to a genome in place
    fn mutate<R: Rng>(&self, genome: &mut G, rng: &mut R);
}

/// Biased mutation operator trait
///
/// Mutation operator whose replacement values are drawn from a mutation bias
/// instead of uniformly.
pub trait BiasedMutationOperator<G: EvolutionaryGenome>: MutationOperator<G> {
    /// Apply mutation using the given bias
    fn mutate_biased<R: Rng>(&self, genome: &mut G, bias: &MutationBias, rng: &mut R);
}
