//! Variation space
//!
//! The search space of a layout problem: how many elements a layout has and
//! how many variations each element can take.

use serde::{Deserialize, Serialize};

use crate::error::GenomeError;

/// Shape of the search space shared by every candidate in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariationSpace {
    /// Number of elements (genome length)
    pub num_elements: usize,
    /// Number of variations per element; alleles are in `[0, num_variations)`
    pub num_variations: usize,
}

impl VariationSpace {
    /// Create a new variation space
    ///
    /// # Panics
    /// Panics if either dimension is zero
    pub fn new(num_elements: usize, num_variations: usize) -> Self {
        assert!(num_elements > 0, "Number of elements must be positive");
        assert!(num_variations > 0, "Number of variations must be positive");
        Self {
            num_elements,
            num_variations,
        }
    }

    /// Create a variation space, returning an error instead of panicking
    pub fn try_new(num_elements: usize, num_variations: usize) -> Result<Self, GenomeError> {
        if num_elements == 0 || num_variations == 0 {
            return Err(GenomeError::InvalidStructure(format!(
                "variation space must be non-empty, got {} elements x {} variations",
                num_elements, num_variations
            )));
        }
        Ok(Self {
            num_elements,
            num_variations,
        })
    }

    /// Genome length
    pub fn dimension(&self) -> usize {
        self.num_elements
    }

    /// Check if a variation index is valid in this space
    pub fn contains(&self, variation: usize) -> bool {
        variation < self.num_variations
    }

    /// Validate a full sequence of variations against this space
    pub fn check(&self, variations: &[usize]) -> Result<(), GenomeError> {
        if variations.len() != self.num_elements {
            return Err(GenomeError::DimensionMismatch {
                expected: self.num_elements,
                actual: variations.len(),
            });
        }
        self.check_values(variations)
    }

    /// Validate that every value is a valid variation, regardless of length
    pub fn check_values(&self, variations: &[usize]) -> Result<(), GenomeError> {
        match variations
            .iter()
            .enumerate()
            .find(|(_, &v)| !self.contains(v))
        {
            Some((index, &value)) => Err(GenomeError::ValueOutOfRange {
                index,
                value,
                num_variations: self.num_variations,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_new() {
        let space = VariationSpace::new(5, 3);
        assert_eq!(space.dimension(), 5);
        assert!(space.contains(2));
        assert!(!space.contains(3));
    }

    #[test]
    #[should_panic]
    fn test_space_zero_elements() {
        VariationSpace::new(0, 3);
    }

    #[test]
    fn test_space_try_new_rejects_empty() {
        assert!(VariationSpace::try_new(4, 0).is_err());
        assert!(VariationSpace::try_new(0, 4).is_err());
        assert!(VariationSpace::try_new(1, 1).is_ok());
    }

    #[test]
    fn test_space_check() {
        let space = VariationSpace::new(3, 2);
        assert!(space.check(&[0, 1, 1]).is_ok());
        assert_eq!(
            space.check(&[0, 1]),
            Err(GenomeError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(
            space.check(&[0, 2, 1]),
            Err(GenomeError::ValueOutOfRange {
                index: 1,
                value: 2,
                num_variations: 2
            })
        );
    }

    #[test]
    fn test_space_check_values_any_length() {
        let space = VariationSpace::new(3, 3);
        assert!(space.check_values(&[2, 2, 2, 2, 2]).is_ok());
        assert!(space.check_values(&[]).is_ok());
        assert!(space.check_values(&[3]).is_err());
    }
}
