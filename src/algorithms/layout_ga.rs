//! Layout Genetic Algorithm
//!
//! This module implements the generational search for a layout assignment.
//! Each generation the two best candidates are recombined with one-point
//! crossover to fill the next population, and every child is then given a
//! chance of orientated mutation whose replacement values follow the
//! variations seen in all offspring so far.

use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::diagnostics::{EvolutionResult, EvolutionStats, GenerationStats};
use crate::error::{EvoResult, EvolutionError, OperatorError};
use crate::fitness::target::TargetMatch;
use crate::fitness::traits::Fitness;
use crate::genome::assignment::Assignment;
use crate::genome::space::VariationSpace;
use crate::history::{MutationBias, VariationHistory};
use crate::operators::crossover::OnePointCrossover;
use crate::operators::mutation::{OrientatedMutation, DEFAULT_MUTATION_PROBABILITY};
use crate::operators::selection::TopSelection;
use crate::operators::traits::{BiasedMutationOperator, CrossoverOperator};
use crate::population::individual::Individual;
use crate::population::population::Population;
use crate::termination::{EvolutionState, MaxGenerations, TargetFitness, TerminationCriterion};

/// How offspring are counted when the population size is odd
///
/// Each crossover yields two children, so an odd population cannot be refilled
/// exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OddPopulationPolicy {
    /// Run `population_size / 2` crossovers; an odd population shrinks by one
    /// after the first generation and stays at that size
    #[default]
    Truncate,
    /// Run one extra crossover and drop the surplus child, keeping the size
    Preserve,
}

impl OddPopulationPolicy {
    /// Number of offspring produced per generation
    pub fn offspring_count(&self, population_size: usize) -> usize {
        match self {
            OddPopulationPolicy::Truncate => 2 * (population_size / 2),
            OddPopulationPolicy::Preserve => population_size,
        }
    }
}

/// Configuration for the layout GA
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutGAConfig {
    /// Maximum number of generations to score
    pub num_generations: usize,
    /// Population size (at least 2)
    pub population_size: usize,
    /// Number of elements in a layout
    pub num_elements: usize,
    /// Number of variations per element
    pub num_variations: usize,
    /// Chance that a child receives an orientated mutation
    pub mutation_probability: f64,
    /// Offspring rule for odd population sizes
    pub odd_population: OddPopulationPolicy,
}

impl LayoutGAConfig {
    /// Create a configuration for the given layout shape with default settings
    pub fn new(num_elements: usize, num_variations: usize) -> Self {
        Self {
            num_generations: 100,
            population_size: 50,
            num_elements,
            num_variations,
            mutation_probability: DEFAULT_MUTATION_PROBABILITY,
            odd_population: OddPopulationPolicy::default(),
        }
    }

    /// Check every size and rate
    pub fn validate(&self) -> EvoResult<()> {
        if self.num_generations == 0 {
            return Err(EvolutionError::Configuration(
                "Number of generations must be positive".to_string(),
            ));
        }
        if self.population_size < 2 {
            return Err(EvolutionError::Configuration(format!(
                "Population size must be at least 2, got {}",
                self.population_size
            )));
        }
        if self.num_elements == 0 {
            return Err(EvolutionError::Configuration(
                "Number of elements must be positive".to_string(),
            ));
        }
        if self.num_variations == 0 {
            return Err(EvolutionError::Configuration(
                "Number of variations must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(EvolutionError::Configuration(format!(
                "Mutation probability must be in [0, 1], got {}",
                self.mutation_probability
            )));
        }
        Ok(())
    }

    /// The search space described by this configuration
    pub fn space(&self) -> EvoResult<VariationSpace> {
        Ok(VariationSpace::try_new(
            self.num_elements,
            self.num_variations,
        )?)
    }
}

impl Default for LayoutGAConfig {
    /// An A/B layout (two variations) over ten elements
    fn default() -> Self {
        Self::new(10, 2)
    }
}

/// Builder for LayoutGA
#[derive(Clone, Debug, Default)]
pub struct LayoutGABuilder {
    config: LayoutGAConfig,
    target: Option<Assignment>,
    previous_results: Vec<usize>,
}

impl LayoutGABuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: LayoutGAConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the maximum number of generations
    pub fn num_generations(mut self, generations: usize) -> Self {
        self.config.num_generations = generations;
        self
    }

    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the number of elements
    pub fn num_elements(mut self, elements: usize) -> Self {
        self.config.num_elements = elements;
        self
    }

    /// Set the number of variations per element
    pub fn num_variations(mut self, variations: usize) -> Self {
        self.config.num_variations = variations;
        self
    }

    /// Set the per-child mutation probability
    pub fn mutation_probability(mut self, probability: f64) -> Self {
        self.config.mutation_probability = probability;
        self
    }

    /// Set the odd population policy
    pub fn odd_population(mut self, policy: OddPopulationPolicy) -> Self {
        self.config.odd_population = policy;
        self
    }

    /// Set the target assignment
    pub fn target(mut self, target: impl Into<Assignment>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Pre-seed the variation history with results from earlier runs
    pub fn previous_results(mut self, previous: Vec<usize>) -> Self {
        self.previous_results = previous;
        self
    }

    /// Build the LayoutGA instance
    pub fn build(self) -> EvoResult<LayoutGA> {
        self.config.validate()?;
        let space = self.config.space()?;

        let target = self.target.ok_or_else(|| {
            EvolutionError::Configuration("Target assignment must be specified".to_string())
        })?;
        let fitness = TargetMatch::new(target, space).map_err(|e| {
            EvolutionError::Configuration(format!("Invalid target assignment: {}", e))
        })?;

        let previous = VariationHistory::with_previous(space.num_variations, &self.previous_results)
            .map_err(|e| EvolutionError::Configuration(format!("Invalid previous results: {}", e)))?;

        let mutation = OrientatedMutation::new(space.num_variations)
            .with_probability(self.config.mutation_probability);

        Ok(LayoutGA {
            config: self.config,
            space,
            fitness,
            previous,
            selection: TopSelection::new(),
            crossover: OnePointCrossover::new(),
            mutation,
        })
    }
}

/// Layout Genetic Algorithm
///
/// Built by [`LayoutGABuilder`]; a built instance holds a validated
/// configuration and can be run any number of times.
#[derive(Clone, Debug)]
pub struct LayoutGA {
    config: LayoutGAConfig,
    space: VariationSpace,
    fitness: TargetMatch,
    previous: VariationHistory,
    selection: TopSelection,
    crossover: OnePointCrossover,
    mutation: OrientatedMutation,
}

impl LayoutGA {
    /// Create a builder for LayoutGA
    pub fn builder() -> LayoutGABuilder {
        LayoutGABuilder::new()
    }

    /// The validated configuration
    pub fn config(&self) -> &LayoutGAConfig {
        &self.config
    }

    /// The search space
    pub fn space(&self) -> &VariationSpace {
        &self.space
    }

    /// The target assignment candidates are scored against
    pub fn target(&self) -> &Assignment {
        self.fitness.target()
    }

    /// Mutation bias implied by the previous results alone
    pub fn initial_bias(&self) -> MutationBias {
        self.previous.bias()
    }

    /// Run the genetic algorithm
    ///
    /// All randomness (initial population, tie-breaks, cut points, mutation)
    /// is drawn from `rng` in a fixed order, so a seeded generator reproduces
    /// the run exactly.
    #[instrument(
        level = "info",
        skip(self, rng),
        fields(
            num_generations = self.config.num_generations,
            population_size = self.config.population_size,
            num_elements = self.space.num_elements,
            num_variations = self.space.num_variations
        )
    )]
    pub fn run<R: Rng>(&self, rng: &mut R) -> EvoResult<EvolutionResult<Assignment>> {
        let start_time = Instant::now();

        let mut population: Population<Assignment> =
            Population::random(self.config.population_size, &self.space, rng);
        let mut history = self.previous.clone();

        let converged = self
            .fitness
            .optimum()
            .map_or_else(TargetFitness::perfect, TargetFitness::new);
        let exhausted = MaxGenerations::new(self.config.num_generations);
        let criteria: [&dyn TerminationCriterion; 2] = [&converged, &exhausted];

        let mut stats = EvolutionStats::new();
        let mut fitness_history: Vec<f64> = Vec::with_capacity(self.config.num_generations);
        let mut evaluations = 0;

        loop {
            population.evaluate(&self.fitness);
            evaluations += population.len();

            let gen_stats =
                GenerationStats::from_population(&population, population.generation(), evaluations);
            let best_fitness = gen_stats.best_fitness;
            debug!(
                generation = gen_stats.generation,
                best_fitness,
                mean_fitness = gen_stats.mean_fitness,
                diversity = gen_stats.diversity,
                "generation scored"
            );
            fitness_history.push(best_fitness);
            stats.record(gen_stats);

            let state = EvolutionState {
                generation: fitness_history.len(),
                best_fitness,
            };
            let terminated = criteria
                .iter()
                .find(|c| c.should_terminate(&state))
                .map(|c| (c.outcome(), c.reason()));

            if let Some((outcome, reason)) = terminated {
                let best = population
                    .best()
                    .ok_or(EvolutionError::EmptyPopulation)?
                    .clone();
                stats.set_termination_reason(reason);
                stats.set_runtime(start_time.elapsed());

                info!(
                    %outcome,
                    generations = fitness_history.len(),
                    best_fitness = best.fitness_f64(),
                    "run finished"
                );

                let best_fitness = best.fitness_f64();
                return Ok(EvolutionResult::new(
                    best.into_genome(),
                    best_fitness,
                    fitness_history,
                    evaluations,
                    outcome,
                )
                .with_stats(stats));
            }

            population = self.breed(&population, &mut history, rng)?;
        }
    }

    /// Produce the next population from the current, scored one
    fn breed<R: Rng>(
        &self,
        population: &Population<Assignment>,
        history: &mut VariationHistory,
        rng: &mut R,
    ) -> EvoResult<Population<Assignment>> {
        let pool = population.as_selection_pool();
        let (first, second) = self.selection.select_pair(&pool, rng).ok_or_else(|| {
            OperatorError::SelectionFailed(format!(
                "need two scored candidates, have {}",
                pool.len()
            ))
        })?;
        let (parent1, parent2) = (pool[first].0, pool[second].0);

        let offspring_count = self
            .config
            .odd_population
            .offspring_count(self.config.population_size);
        let mut offspring: Vec<Assignment> = Vec::with_capacity(offspring_count + 1);
        while offspring.len() < offspring_count {
            let (child1, child2) = self
                .crossover
                .crossover(parent1, parent2, rng)
                .into_result()?;
            offspring.push(child1);
            offspring.push(child2);
        }
        offspring.truncate(offspring_count);

        history.record_all(&offspring)?;
        let bias = history.bias();

        for child in &mut offspring {
            self.mutation.mutate_biased(child, &bias, rng);
        }

        let next_generation = population.generation() + 1;
        let mut next: Population<Assignment> = offspring
            .into_iter()
            .map(|child| Individual::with_generation(child, next_generation))
            .collect();
        next.set_generation(next_generation);
        Ok(next)
    }
}

/// Search for a layout matching `target` in a single call
///
/// Returns the best candidate and the best fitness of every generation that
/// was scored. `previous_results` pre-seeds the mutation bias.
#[allow(clippy::too_many_arguments)]
pub fn search_layout<R: Rng>(
    num_generations: usize,
    population_size: usize,
    num_variations: usize,
    target: &[usize],
    num_elements: usize,
    previous_results: Option<&[usize]>,
    rng: &mut R,
) -> EvoResult<(Assignment, Vec<f64>)> {
    let result = LayoutGA::builder()
        .num_generations(num_generations)
        .population_size(population_size)
        .num_variations(num_variations)
        .num_elements(num_elements)
        .target(target.to_vec())
        .previous_results(previous_results.map(<[usize]>::to_vec).unwrap_or_default())
        .build()?
        .run(rng)?;
    Ok((result.best_genome, result.fitness_history))
}
