//! Fitness traits
//!
//! This module defines the fitness evaluation traits.

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

use crate::genome::traits::EvolutionaryGenome;

/// Trait bound for fitness values
///
/// Fitness values must be comparable and convertible to f64 for
/// selection and statistics.
pub trait FitnessValue:
    PartialOrd + Clone + Send + Sync + Debug + Serialize + DeserializeOwned + 'static
{
    /// Convert fitness to f64
    fn to_f64(&self) -> f64;

    /// Check if this fitness is better than another
    fn is_better_than(&self, other: &Self) -> bool;
}

impl FitnessValue for f64 {
    fn to_f64(&self) -> f64 {
        *self
    }

    fn is_better_than(&self, other: &Self) -> bool {
        self > other
    }
}

/// Fitness evaluation trait
///
/// Defines how to evaluate the fitness of a genome.
pub trait Fitness {
    /// The genome type being evaluated
    type Genome: EvolutionaryGenome;

    /// The fitness value type
    type Value: FitnessValue;

    /// Evaluate fitness (higher = better by convention)
    fn evaluate(&self, genome: &Self::Genome) -> Self::Value;

    /// The best value this function can return, if known
    fn optimum(&self) -> Option<f64> {
        None
    }
}
