//! Crossover operators
//!
//! This module provides the crossover operator for assignment genomes.

use rand::Rng;
use tracing::debug;

use crate::error::{OperatorError, OperatorResult, RepairInfo};
use crate::genome::assignment::Assignment;
use crate::genome::traits::{CategoricalGenome, EvolutionaryGenome};
use crate::operators::traits::CrossoverOperator;

/// One-point crossover for assignments
///
/// Picks a cut point uniformly in `[1, L-1]` and swaps the tails:
/// child 1 is `parent1[..cut] + parent2[cut..]`, child 2 is
/// `parent2[..cut] + parent1[cut..]`. Both children therefore contain at
/// least one gene from each parent.
///
/// Genomes shorter than two have no valid cut point; the parents are
/// returned unchanged as a repaired result.
#[derive(Clone, Debug, Default)]
pub struct OnePointCrossover;

impl OnePointCrossover {
    /// Create a new one-point crossover
    pub fn new() -> Self {
        Self
    }

    /// Build both children for a fixed cut point
    pub fn at(parent1: &Assignment, parent2: &Assignment, cut: usize) -> (Assignment, Assignment) {
        let (p1, p2) = (parent1.variations(), parent2.variations());

        let mut child1 = Vec::with_capacity(p1.len());
        child1.extend_from_slice(&p1[..cut]);
        child1.extend_from_slice(&p2[cut..]);

        let mut child2 = Vec::with_capacity(p2.len());
        child2.extend_from_slice(&p2[..cut]);
        child2.extend_from_slice(&p1[cut..]);

        (Assignment::new(child1), Assignment::new(child2))
    }
}

impl CrossoverOperator<Assignment> for OnePointCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &Assignment,
        parent2: &Assignment,
        rng: &mut R,
    ) -> OperatorResult<(Assignment, Assignment)> {
        if parent1.dimension() != parent2.dimension() {
            return OperatorResult::Failed(OperatorError::CrossoverFailed(
                "Parent dimensions do not match".to_string(),
            ));
        }

        let n = parent1.dimension();
        if n < 2 {
            debug!(length = n, "no cut point available, copying parents");
            return OperatorResult::Repaired(
                (parent1.clone(), parent2.clone()),
                RepairInfo {
                    constraint_violations: vec![format!("genome length {} has no cut point", n)],
                    repair_method: "clone-parents",
                },
            );
        }

        let cut = rng.gen_range(1..n);
        OperatorResult::Success(Self::at(parent1, parent2, cut))
    }
}
