//! Error types for layout-evo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for genome operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenomeError {
    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A variation index outside `[0, num_variations)`
    #[error("Variation {value} at position {index} is out of range (num_variations = {num_variations})")]
    ValueOutOfRange {
        index: usize,
        value: usize,
        num_variations: usize,
    },

    /// Invalid genome structure
    #[error("Invalid genome structure: {0}")]
    InvalidStructure(String),
}

/// Error type for operator failures
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperatorError {
    /// Crossover operation failed
    #[error("Crossover failed: {0}")]
    CrossoverFailed(String),

    /// Selection operation failed
    #[error("Selection failed: {0}")]
    SelectionFailed(String),
}

/// Top-level error type for evolution operations
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// Genome error
    #[error("Genome error: {0}")]
    Genome(#[from] GenomeError),

    /// Operator error
    #[error("Operator error: {0}")]
    Operator(#[from] OperatorError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Empty population
    #[error("Empty population")]
    EmptyPopulation,
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;

/// Repair information when an operator could not apply its normal rule
#[derive(Debug, Clone)]
pub struct RepairInfo {
    /// List of constraint violations that were repaired
    pub constraint_violations: Vec<String>,
    /// Method used to repair the genome
    pub repair_method: &'static str,
}

/// Result of an operator application with optional repair information
#[derive(Debug, Clone)]
pub enum OperatorResult<G> {
    /// Operation succeeded without repairs
    Success(G),
    /// Operation succeeded but required repairs
    Repaired(G, RepairInfo),
    /// Operation failed unrecoverably
    Failed(OperatorError),
}

impl<G> OperatorResult<G> {
    /// Returns the genome if successful or repaired, None if failed
    pub fn genome(self) -> Option<G> {
        match self {
            Self::Success(g) | Self::Repaired(g, _) => Some(g),
            Self::Failed(_) => None,
        }
    }

    /// Converts into a `Result`, discarding repair information
    pub fn into_result(self) -> Result<G, OperatorError> {
        match self {
            Self::Success(g) | Self::Repaired(g, _) => Ok(g),
            Self::Failed(e) => Err(e),
        }
    }

    /// Returns true if the operation was successful (with or without repairs)
    pub fn is_ok(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }

    /// Returns true if repairs were needed
    pub fn was_repaired(&self) -> bool {
        matches!(self, Self::Repaired(_, _))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genome_error_display() {
        let err = GenomeError::DimensionMismatch {
            expected: 10,
            actual: 5,
        };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 10, got 5");

        let err = GenomeError::ValueOutOfRange {
            index: 2,
            value: 7,
            num_variations: 3,
        };
        assert_eq!(
            err.to_string(),
            "Variation 7 at position 2 is out of range (num_variations = 3)"
        );
    }

    #[test]
    fn test_operator_error_display() {
        let err = OperatorError::CrossoverFailed("parent lengths differ".to_string());
        assert_eq!(err.to_string(), "Crossover failed: parent lengths differ");
    }

    #[test]
    fn test_evolution_error_from_genome_error() {
        let genome_err = GenomeError::InvalidStructure("empty".to_string());
        let evo_err: EvolutionError = genome_err.into();
        assert!(matches!(evo_err, EvolutionError::Genome(_)));
    }

    #[test]
    fn test_operator_result_repaired() {
        let repair_info = RepairInfo {
            constraint_violations: vec!["length 1".to_string()],
            repair_method: "clone-parents",
        };
        let result: OperatorResult<i32> = OperatorResult::Repaired(42, repair_info);
        assert!(result.is_ok());
        assert!(result.was_repaired());
        assert_eq!(result.genome(), Some(42));
    }

    #[test]
    fn test_operator_result_failed_into_result() {
        let result: OperatorResult<i32> =
            OperatorResult::Failed(OperatorError::CrossoverFailed("test".to_string()));
        assert!(!result.is_ok());
        assert_eq!(
            result.into_result(),
            Err(OperatorError::CrossoverFailed("test".to_string()))
        );
    }
}
