//! Core genome traits
//!
//! This module defines the `EvolutionaryGenome` trait and the categorical
//! genome abstraction used by layout candidates.

use rand::Rng;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::GenomeError;
use crate::genome::space::VariationSpace;

/// Core genome abstraction for evolutionary algorithms.
///
/// Genomes must be cloneable, serializable, and thread-safe.
pub trait EvolutionaryGenome: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The allele type for individual genes
    type Allele: Clone + Send;

    /// Compute dimensionality for adaptive operators
    fn dimension(&self) -> usize;

    /// Generate a random genome within the given space
    fn generate<R: Rng>(rng: &mut R, space: &VariationSpace) -> Self;

    /// Distance metric between two genomes (default: 0.0)
    fn distance(&self, _other: &Self) -> f64 {
        0.0
    }
}

/// Trait for genomes whose genes are categorical choices (variation indices)
pub trait CategoricalGenome: EvolutionaryGenome<Allele = usize> {
    /// Get the chosen variation per element
    fn variations(&self) -> &[usize];

    /// Get the chosen variations mutably
    fn variations_mut(&mut self) -> &mut [usize];

    /// Create from a vector of variations, checked against a space
    fn from_variations(variations: Vec<usize>, space: &VariationSpace)
        -> Result<Self, GenomeError>;

    /// Number of positions where two genomes agree
    fn matches(&self, other: &[usize]) -> usize {
        self.variations()
            .iter()
            .zip(other.iter())
            .filter(|(a, b)| a == b)
            .count()
    }
}
