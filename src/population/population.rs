//! Population type
//!
//! This module provides the Population container type.

use rand::Rng;

use crate::fitness::traits::{Fitness, FitnessValue};
use crate::genome::space::VariationSpace;
use crate::genome::traits::EvolutionaryGenome;
use crate::population::individual::Individual;

/// A population of individuals
#[derive(Clone, Debug)]
pub struct Population<G, F = f64>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    /// The individuals in this population
    individuals: Vec<Individual<G, F>>,
    /// Current generation number
    generation: usize,
}

impl<G, F> Population<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    /// Create an empty population
    pub fn new() -> Self {
        Self {
            individuals: Vec::new(),
            generation: 0,
        }
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual<G, F>>) -> Self {
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Create a random population, each genome drawn uniformly from the space
    pub fn random<R: Rng>(size: usize, space: &VariationSpace, rng: &mut R) -> Self {
        let individuals = (0..size)
            .map(|_| Individual::new(G::generate(rng, space)))
            .collect();
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Get the current generation
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Set the generation number
    pub fn set_generation(&mut self, generation: usize) {
        self.generation = generation;
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual<G, F>> {
        self.individuals.iter()
    }

    /// Get the underlying individuals
    pub fn individuals(&self) -> &[Individual<G, F>] {
        &self.individuals
    }

    /// Get the best individual (by fitness)
    ///
    /// On ties the earliest individual wins.
    pub fn best(&self) -> Option<&Individual<G, F>> {
        self.individuals
            .iter()
            .filter(|i| i.is_evaluated())
            .fold(None, |best: Option<&Individual<G, F>>, candidate| match best {
                Some(b) if !candidate.is_better_than(b) => Some(b),
                _ => Some(candidate),
            })
    }

    /// Get the worst individual (by fitness)
    pub fn worst(&self) -> Option<&Individual<G, F>> {
        self.individuals
            .iter()
            .filter(|i| i.is_evaluated())
            .min_by(|a, b| {
                a.fitness_f64()
                    .partial_cmp(&b.fitness_f64())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Check if all individuals have been evaluated
    pub fn all_evaluated(&self) -> bool {
        self.individuals.iter().all(|i| i.is_evaluated())
    }

    /// Get genome-fitness pairs for selection
    pub fn as_selection_pool(&self) -> Vec<(&G, f64)> {
        self.individuals
            .iter()
            .filter_map(|i| i.fitness.as_ref().map(|f| (&i.genome, f.to_f64())))
            .collect()
    }

    /// Evaluate all unevaluated individuals using the given fitness function
    pub fn evaluate<Fit>(&mut self, fitness: &Fit)
    where
        Fit: Fitness<Genome = G, Value = F>,
    {
        for individual in &mut self.individuals {
            if !individual.is_evaluated() {
                let f = fitness.evaluate(&individual.genome);
                individual.set_fitness(f);
            }
        }
    }

    /// Compute mean fitness
    pub fn mean_fitness(&self) -> Option<f64> {
        let evaluated: Vec<f64> = self
            .individuals
            .iter()
            .filter_map(|i| i.fitness.as_ref().map(|f| f.to_f64()))
            .collect();

        if evaluated.is_empty() {
            None
        } else {
            Some(evaluated.iter().sum::<f64>() / evaluated.len() as f64)
        }
    }

    /// Compute population diversity
    ///
    /// Average pairwise genome distance divided by genome length, so for
    /// categorical genomes the value is in `[0, 1]`.
    pub fn diversity(&self) -> f64 {
        if self.len() < 2 {
            return 0.0;
        }

        let dimension = self.individuals[0].genome.dimension().max(1) as f64;
        let mut total_distance = 0.0;
        let mut count = 0;

        for i in 0..self.len() {
            for j in (i + 1)..self.len() {
                total_distance += self.individuals[i]
                    .genome
                    .distance(&self.individuals[j].genome);
                count += 1;
            }
        }

        total_distance / count as f64 / dimension
    }
}

impl<G, F> Default for Population<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<G, F> std::ops::Index<usize> for Population<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    type Output = Individual<G, F>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl<G, F> IntoIterator for Population<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    type Item = Individual<G, F>;
    type IntoIter = std::vec::IntoIter<Individual<G, F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}

impl<G, F> FromIterator<Individual<G, F>> for Population<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    fn from_iter<I: IntoIterator<Item = Individual<G, F>>>(iter: I) -> Self {
        Self::from_individuals(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::target::TargetMatch;
    use crate::genome::assignment::Assignment;
    use crate::genome::traits::CategoricalGenome;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn create_test_population() -> Population<Assignment> {
        let individuals = vec![
            Individual::with_fitness(Assignment::from([0, 0]), 0.0),
            Individual::with_fitness(Assignment::from([0, 1]), 0.5),
            Individual::with_fitness(Assignment::from([1, 1]), 1.0),
            Individual::with_fitness(Assignment::from([1, 0]), 0.5),
        ];
        Population::from_individuals(individuals)
    }

    #[test]
    fn test_population_new() {
        let pop: Population<Assignment> = Population::new();
        assert!(pop.is_empty());
        assert_eq!(pop.generation(), 0);
    }

    #[test]
    fn test_population_random() {
        let mut rng = StdRng::seed_from_u64(1);
        let space = VariationSpace::new(6, 3);
        let pop: Population<Assignment> = Population::random(10, &space, &mut rng);

        assert_eq!(pop.len(), 10);
        assert!(!pop.all_evaluated());
        for individual in pop.iter() {
            assert_eq!(individual.genome.len(), 6);
            assert!(individual.genome.variations().iter().all(|&v| v < 3));
        }
    }

    #[test]
    fn test_population_best_worst() {
        let pop = create_test_population();
        assert_eq!(pop.best().unwrap().fitness_f64(), 1.0);
        assert_eq!(pop.worst().unwrap().fitness_f64(), 0.0);
    }

    #[test]
    fn test_population_best_prefers_first_on_tie() {
        let pop = Population::from_individuals(vec![
            Individual::with_fitness(Assignment::from([0]), 0.5),
            Individual::with_fitness(Assignment::from([1]), 0.5),
        ]);
        assert_eq!(pop.best().unwrap().genome, Assignment::from([0]));
    }

    #[test]
    fn test_population_mean_fitness() {
        let pop = create_test_population();
        assert_eq!(pop.mean_fitness().unwrap(), 0.5);
    }

    #[test]
    fn test_population_evaluate() {
        let mut rng = StdRng::seed_from_u64(2);
        let space = VariationSpace::new(4, 2);
        let mut pop: Population<Assignment> = Population::random(5, &space, &mut rng);
        let fitness = TargetMatch::new(Assignment::from([0, 1, 0, 1]), space).unwrap();

        pop.evaluate(&fitness);

        assert!(pop.all_evaluated());
        for individual in pop.iter() {
            let f = individual.fitness_f64();
            assert!((0.0..=1.0).contains(&f));
        }
    }

    #[test]
    fn test_population_diversity_normalized() {
        let identical = Population::from_individuals(vec![
            Individual::with_fitness(Assignment::from([0, 1]), 0.0),
            Individual::with_fitness(Assignment::from([0, 1]), 0.0),
        ]);
        assert_eq!(identical.diversity(), 0.0);

        let opposite = Population::from_individuals(vec![
            Individual::with_fitness(Assignment::from([0, 0]), 0.0),
            Individual::with_fitness(Assignment::from([1, 1]), 0.0),
        ]);
        assert_eq!(opposite.diversity(), 1.0);
    }

    #[test]
    fn test_population_as_selection_pool() {
        let pop = create_test_population();
        let pool = pop.as_selection_pool();
        assert_eq!(pool.len(), 4);
        assert_eq!(pool[2].1, 1.0);
    }
}
