//! Target-match fitness
//!
//! Scores a layout candidate by how many elements agree with a fixed target
//! assignment.

use crate::error::GenomeError;
use crate::fitness::traits::Fitness;
use crate::genome::assignment::Assignment;
use crate::genome::space::VariationSpace;
use crate::genome::traits::CategoricalGenome;

/// Fraction of elements whose variation equals the target's
///
/// Returns a value in `[0, 1]`; `1.0` exactly when the candidate equals the
/// target. The target is validated against its space on construction.
#[derive(Clone, Debug)]
pub struct TargetMatch {
    target: Assignment,
    space: VariationSpace,
}

impl TargetMatch {
    /// Create a target-match fitness for the given target
    pub fn new(target: Assignment, space: VariationSpace) -> Result<Self, GenomeError> {
        space.check(target.variations())?;
        Ok(Self { target, space })
    }

    /// The target assignment
    pub fn target(&self) -> &Assignment {
        &self.target
    }

    /// The space the target lives in
    pub fn space(&self) -> &VariationSpace {
        &self.space
    }

    /// Score a candidate, reporting a length mismatch as an error
    pub fn try_score(&self, candidate: &Assignment) -> Result<f64, GenomeError> {
        if candidate.len() != self.target.len() {
            return Err(GenomeError::DimensionMismatch {
                expected: self.target.len(),
                actual: candidate.len(),
            });
        }
        Ok(self.score(candidate))
    }

    fn score(&self, candidate: &Assignment) -> f64 {
        debug_assert_eq!(candidate.len(), self.target.len());
        candidate.matches(self.target.variations()) as f64 / self.target.len() as f64
    }
}

impl Fitness for TargetMatch {
    type Genome = Assignment;
    type Value = f64;

    fn evaluate(&self, genome: &Assignment) -> f64 {
        self.score(genome)
    }

    fn optimum(&self) -> Option<f64> {
        Some(1.0)
    }
}
