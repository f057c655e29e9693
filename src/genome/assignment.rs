//! Assignment genome
//!
//! A layout candidate: one chosen variation per element.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenomeError;
use crate::genome::space::VariationSpace;
use crate::genome::traits::{CategoricalGenome, EvolutionaryGenome};

/// Fixed-length assignment of variations to elements
///
/// Entry `i` is the variation index chosen for element `i`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    variations: Vec<usize>,
}

impl Assignment {
    /// Create a new assignment with the given variations
    ///
    /// No range check is performed; use [`CategoricalGenome::from_variations`]
    /// for a checked constructor.
    pub fn new(variations: Vec<usize>) -> Self {
        Self { variations }
    }

    /// Create an assignment that picks the same variation for every element
    pub fn filled(length: usize, variation: usize) -> Self {
        Self {
            variations: vec![variation; length],
        }
    }

    /// Get the length of the assignment
    pub fn len(&self) -> usize {
        self.variations.len()
    }

    /// Check if the assignment is empty
    pub fn is_empty(&self) -> bool {
        self.variations.is_empty()
    }

    /// Get the variation for one element
    pub fn get(&self, index: usize) -> Option<usize> {
        self.variations.get(index).copied()
    }

    /// Set the variation for one element
    pub fn set(&mut self, index: usize, variation: usize) {
        if let Some(slot) = self.variations.get_mut(index) {
            *slot = variation;
        }
    }

    /// Number of positions where the two assignments differ
    pub fn hamming_distance(&self, other: &Self) -> usize {
        self.variations
            .iter()
            .zip(other.variations.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// (element, variation) pairs in element order
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.variations.iter().copied().enumerate()
    }
}

impl EvolutionaryGenome for Assignment {
    type Allele = usize;

    fn dimension(&self) -> usize {
        self.variations.len()
    }

    fn generate<R: Rng>(rng: &mut R, space: &VariationSpace) -> Self {
        let variations = (0..space.num_elements)
            .map(|_| rng.gen_range(0..space.num_variations))
            .collect();
        Self { variations }
    }

    fn distance(&self, other: &Self) -> f64 {
        self.hamming_distance(other) as f64
    }
}

impl CategoricalGenome for Assignment {
    fn variations(&self) -> &[usize] {
        &self.variations
    }

    fn variations_mut(&mut self) -> &mut [usize] {
        &mut self.variations
    }

    fn from_variations(
        variations: Vec<usize>,
        space: &VariationSpace,
    ) -> Result<Self, GenomeError> {
        space.check(&variations)?;
        Ok(Self { variations })
    }
}

impl std::ops::Index<usize> for Assignment {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.variations[index]
    }
}

impl From<Vec<usize>> for Assignment {
    fn from(variations: Vec<usize>) -> Self {
        Self { variations }
    }
}

impl From<Assignment> for Vec<usize> {
    fn from(genome: Assignment) -> Self {
        genome.variations
    }
}

impl<const N: usize> From<[usize; N]> for Assignment {
    fn from(arr: [usize; N]) -> Self {
        Self {
            variations: arr.to_vec(),
        }
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.variations.iter()
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.variations.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_assignment_new() {
        let a = Assignment::new(vec![0, 2, 1]);
        assert_eq!(a.len(), 3);
        assert_eq!(a.variations(), &[0, 2, 1]);
        assert_eq!(a[1], 2);
    }

    #[test]
    fn test_assignment_get_set() {
        let mut a = Assignment::filled(3, 0);
        assert_eq!(a.get(0), Some(0));
        assert_eq!(a.get(3), None);

        a.set(1, 2);
        assert_eq!(a.get(1), Some(2));

        // Out of range index is ignored
        a.set(10, 2);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_assignment_generate_within_space() {
        let mut rng = StdRng::seed_from_u64(7);
        let space = VariationSpace::new(50, 4);
        let a = Assignment::generate(&mut rng, &space);
        assert_eq!(a.dimension(), 50);
        assert!(a.variations().iter().all(|&v| v < 4));
    }

    #[test]
    fn test_assignment_from_variations_checked() {
        let space = VariationSpace::new(3, 2);
        assert!(Assignment::from_variations(vec![0, 1, 0], &space).is_ok());
        assert!(Assignment::from_variations(vec![0, 1], &space).is_err());
        assert!(Assignment::from_variations(vec![0, 5, 0], &space).is_err());
    }

    #[test]
    fn test_assignment_hamming_and_matches() {
        let a = Assignment::from([0, 1, 2, 0]);
        let b = Assignment::from([0, 2, 2, 1]);
        assert_eq!(a.hamming_distance(&b), 2);
        assert_eq!(a.matches(b.variations()), 2);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_assignment_pairs() {
        let a = Assignment::from([2, 0]);
        let pairs: Vec<_> = a.pairs().collect();
        assert_eq!(pairs, vec![(0, 2), (1, 0)]);
    }

    #[test]
    fn test_assignment_display() {
        let a = Assignment::from([1, 0, 2]);
        assert_eq!(a.to_string(), "[1, 0, 2]");
    }

    #[test]
    fn test_assignment_serializes_as_plain_array() {
        let a = Assignment::from([1, 0, 2]);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, "[1,0,2]");
    }
}
