//! Mutation operators
//!
//! This module provides orientated mutation for categorical genomes.

use rand::Rng;

use crate::genome::traits::CategoricalGenome;
use crate::history::MutationBias;
use crate::operators::traits::{BiasedMutationOperator, MutationOperator};

/// Default chance that a genome is mutated at all
pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.1;

/// Orientated mutation
///
/// With probability `mutation_probability`, picks one position uniformly and
/// overwrites it with a variation drawn from the mutation bias. At most one
/// gene changes per call.
#[derive(Clone, Debug)]
pub struct OrientatedMutation {
    /// Probability that a genome is mutated
    pub mutation_probability: f64,
    /// Number of variations, used by the unbiased fallback
    pub num_variations: usize,
}

impl OrientatedMutation {
    /// Create a new orientated mutation over `num_variations` values
    pub fn new(num_variations: usize) -> Self {
        assert!(num_variations > 0, "Number of variations must be positive");
        Self {
            mutation_probability: DEFAULT_MUTATION_PROBABILITY,
            num_variations,
        }
    }

    /// Set the per-genome mutation probability
    pub fn with_probability(mut self, probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0, 1]"
        );
        self.mutation_probability = probability;
        self
    }
}

impl<G: CategoricalGenome> MutationOperator<G> for OrientatedMutation {
    /// Mutate with a uniform bias
    fn mutate<R: Rng>(&self, genome: &mut G, rng: &mut R) {
        let uniform = MutationBias::uniform(self.num_variations);
        self.mutate_biased(genome, &uniform, rng);
    }
}

impl<G: CategoricalGenome> BiasedMutationOperator<G> for OrientatedMutation {
    fn mutate_biased<R: Rng>(&self, genome: &mut G, bias: &MutationBias, rng: &mut R) {
        if rng.gen::<f64>() >= self.mutation_probability {
            return;
        }
        let genes = genome.variations_mut();
        if genes.is_empty() {
            return;
        }
        let index = rng.gen_range(0..genes.len());
        genes[index] = bias.sample(rng);
    }
}
