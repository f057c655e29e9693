//! Termination criteria
//!
//! A run is `Running` until one of its criteria fires. Reaching the target
//! fitness ends it as `Converged`; running out of generations ends it as
//! `Exhausted`.

use serde::{Deserialize, Serialize};

/// Evolution state for termination checking
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvolutionState {
    /// Number of generations scored so far
    pub generation: usize,
    /// Best fitness of the current generation
    pub best_fitness: f64,
}

/// Terminal state of a run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// A perfect candidate was found
    Converged,
    /// All generations ran without a perfect candidate
    Exhausted,
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunOutcome::Converged => write!(f, "converged"),
            RunOutcome::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// Termination criterion trait
pub trait TerminationCriterion: Send + Sync {
    /// Check if evolution should terminate
    fn should_terminate(&self, state: &EvolutionState) -> bool;

    /// Get a description of why termination occurred
    fn reason(&self) -> &'static str;

    /// The terminal state this criterion leads to
    fn outcome(&self) -> RunOutcome;
}

/// Terminate after a maximum number of generations
#[derive(Clone, Debug)]
pub struct MaxGenerations(pub usize);

impl MaxGenerations {
    /// Create a new max generations criterion
    pub fn new(max: usize) -> Self {
        Self(max)
    }
}

impl TerminationCriterion for MaxGenerations {
    fn should_terminate(&self, state: &EvolutionState) -> bool {
        state.generation >= self.0
    }

    fn reason(&self) -> &'static str {
        "Maximum generations reached"
    }

    fn outcome(&self) -> RunOutcome {
        RunOutcome::Exhausted
    }
}

/// Terminate when target fitness is reached
#[derive(Clone, Debug)]
pub struct TargetFitness {
    /// Target fitness value
    pub target: f64,
}

impl TargetFitness {
    /// Create a new target fitness criterion
    pub fn new(target: f64) -> Self {
        Self { target }
    }

    /// Perfect match (fitness exactly 1.0)
    pub fn perfect() -> Self {
        Self::new(1.0)
    }
}

impl TerminationCriterion for TargetFitness {
    fn should_terminate(&self, state: &EvolutionState) -> bool {
        state.best_fitness >= self.target
    }

    fn reason(&self) -> &'static str {
        "Target fitness reached"
    }

    fn outcome(&self) -> RunOutcome {
        RunOutcome::Converged
    }
}

pub mod prelude {
    pub use super::{EvolutionState, MaxGenerations, RunOutcome, TargetFitness, TerminationCriterion};
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(generation: usize, best_fitness: f64) -> EvolutionState {
        EvolutionState {
            generation,
            best_fitness,
        }
    }

    #[test]
    fn test_max_generations() {
        let criterion = MaxGenerations::new(10);

        assert!(!criterion.should_terminate(&state(9, 0.0)));
        assert!(criterion.should_terminate(&state(10, 0.0)));
        assert_eq!(criterion.outcome(), RunOutcome::Exhausted);
    }

    #[test]
    fn test_target_fitness_perfect() {
        let criterion = TargetFitness::perfect();

        assert!(!criterion.should_terminate(&state(1, 0.99)));
        assert!(criterion.should_terminate(&state(1, 1.0)));
        assert_eq!(criterion.reason(), "Target fitness reached");
        assert_eq!(criterion.outcome(), RunOutcome::Converged);
    }

    #[test]
    fn test_run_outcome_display() {
        assert_eq!(RunOutcome::Converged.to_string(), "converged");
        assert_eq!(RunOutcome::Exhausted.to_string(), "exhausted");
    }
}
