//! Variation history and mutation bias
//!
//! Every offspring produced in a run is recorded here as per-variation
//! counts. The relative frequencies of those counts form the mutation bias
//! that orientated mutation samples replacement values from, so variations
//! that keep showing up in offspring become more likely to be mutated in.
//!
//! Counts are kept incrementally: recording offspring costs O(entries) and
//! deriving the bias costs O(num_variations), independent of run length.

use rand::Rng;
use rand_distr::{Distribution, WeightedIndex};
use serde::{Deserialize, Serialize};

use crate::error::GenomeError;
use crate::genome::traits::CategoricalGenome;

/// Cumulative per-variation counts for a run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationHistory {
    counts: Vec<u64>,
    total: u64,
}

impl VariationHistory {
    /// Create an empty history over `num_variations` values
    pub fn new(num_variations: usize) -> Self {
        Self {
            counts: vec![0; num_variations],
            total: 0,
        }
    }

    /// Create a history pre-seeded with results from earlier runs
    pub fn with_previous(num_variations: usize, previous: &[usize]) -> Result<Self, GenomeError> {
        let mut history = Self::new(num_variations);
        history.record_values(previous)?;
        Ok(history)
    }

    /// Number of variations tracked
    pub fn num_variations(&self) -> usize {
        self.counts.len()
    }

    /// Count for each variation
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Total number of recorded entries
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Check if nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Record raw variation values
    ///
    /// Values are checked before anything is counted, so a failed call
    /// leaves the history unchanged.
    pub fn record_values(&mut self, values: &[usize]) -> Result<(), GenomeError> {
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, &v)| v >= self.counts.len())
        {
            return Err(GenomeError::ValueOutOfRange {
                index,
                value,
                num_variations: self.counts.len(),
            });
        }
        for &value in values {
            self.counts[value] += 1;
        }
        self.total += values.len() as u64;
        Ok(())
    }

    /// Record every entry of a genome
    pub fn record<G: CategoricalGenome>(&mut self, genome: &G) -> Result<(), GenomeError> {
        self.record_values(genome.variations())
    }

    /// Record every entry of every genome
    pub fn record_all<'a, G, I>(&mut self, genomes: I) -> Result<(), GenomeError>
    where
        G: CategoricalGenome + 'a,
        I: IntoIterator<Item = &'a G>,
    {
        for genome in genomes {
            self.record(genome)?;
        }
        Ok(())
    }

    /// Derive the mutation bias from the current counts
    pub fn bias(&self) -> MutationBias {
        if self.total == 0 {
            return MutationBias::uniform(self.counts.len());
        }
        let total = self.total as f64;
        MutationBias {
            probabilities: self.counts.iter().map(|&c| c as f64 / total).collect(),
        }
    }
}

/// Probability distribution over variation values used by orientated mutation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MutationBias {
    probabilities: Vec<f64>,
}

impl MutationBias {
    /// Uniform bias: `1 / num_variations` for every value
    pub fn uniform(num_variations: usize) -> Self {
        Self {
            probabilities: vec![1.0 / num_variations as f64; num_variations],
        }
    }

    /// Probability for each variation
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Probability of one variation (0.0 when out of range)
    pub fn probability(&self, variation: usize) -> f64 {
        self.probabilities.get(variation).copied().unwrap_or(0.0)
    }

    /// Number of variations covered
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Check if the bias covers no variations
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Draw a variation index weighted by the bias
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match WeightedIndex::new(&self.probabilities) {
            Ok(dist) => dist.sample(rng),
            Err(_) => rng.gen_range(0..self.probabilities.len().max(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::assignment::Assignment;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_history_is_uniform() {
        let history = VariationHistory::new(4);
        let bias = history.bias();
        assert_eq!(bias.probabilities(), &[0.25, 0.25, 0.25, 0.25]);
    }

    #[test]
    fn test_bias_is_relative_frequency() {
        let mut history = VariationHistory::new(3);
        history.record(&Assignment::from([0, 0, 1, 2])).unwrap();
        let bias = history.bias();
        assert_relative_eq!(bias.probability(0), 0.5);
        assert_relative_eq!(bias.probability(1), 0.25);
        assert_relative_eq!(bias.probability(2), 0.25);
        assert_relative_eq!(bias.probabilities().iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn test_history_accumulates_across_records() {
        let mut history = VariationHistory::new(2);
        history.record(&Assignment::from([0, 0])).unwrap();
        history.record(&Assignment::from([1, 1])).unwrap();
        history
            .record_all(&[Assignment::from([1, 1]), Assignment::from([1, 1])])
            .unwrap();
        assert_eq!(history.counts(), &[2, 6]);
        assert_eq!(history.total(), 8);
        assert_relative_eq!(history.bias().probability(1), 0.75);
    }

    #[test]
    fn test_previous_results_seed_bias() {
        let history = VariationHistory::with_previous(3, &[2]).unwrap();
        assert_eq!(history.bias().probabilities(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_out_of_range_value_leaves_history_unchanged() {
        let mut history = VariationHistory::new(2);
        let err = history.record_values(&[0, 1, 5]).unwrap_err();
        assert_eq!(
            err,
            GenomeError::ValueOutOfRange {
                index: 2,
                value: 5,
                num_variations: 2
            }
        );
        assert!(history.is_empty());
    }

    #[test]
    fn test_sample_respects_zero_probabilities() {
        let mut rng = StdRng::seed_from_u64(11);
        let bias = VariationHistory::with_previous(3, &[2, 2, 2]).unwrap().bias();
        for _ in 0..200 {
            assert_eq!(bias.sample(&mut rng), 2);
        }
    }

    #[test]
    fn test_sample_within_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let bias = MutationBias::uniform(5);
        for _ in 0..200 {
            assert!(bias.sample(&mut rng) < 5);
        }
    }
}
