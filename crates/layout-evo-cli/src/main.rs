//! layout-evo CLI - search for the best A/B layout with a genetic algorithm.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use layout_evo::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Shown for any rejected input
const INVALID_INPUT: &str = "values must be valid and positive";

#[derive(Parser, Debug)]
#[command(name = "layout-evo")]
#[command(about = "Find the best layout variation for each element", long_about = None)]
struct Cli {
    /// Number of elements in the layout
    #[arg(long, default_value_t = 5)]
    elements: usize,

    /// Number of variations per element
    #[arg(long, default_value_t = 2)]
    variations: usize,

    /// Maximum number of generations
    #[arg(long, default_value_t = 100)]
    generations: usize,

    /// Population size
    #[arg(long, default_value_t = 50)]
    population: usize,

    /// Seed for the random stream; a fresh one is drawn when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Target layout as 0-based variation indices, e.g. 0,2,1
    #[arg(long, value_delimiter = ',')]
    target: Option<Vec<usize>>,

    /// Variations seen in earlier runs, used to bias mutation
    #[arg(long, value_delimiter = ',')]
    previous: Vec<usize>,

    /// Keep odd population sizes constant instead of dropping one offspring
    #[arg(long)]
    preserve_population: bool,

    /// Emit JSON lines instead of tables
    #[arg(long)]
    json: bool,
}

/// JSON lines on any writer
struct JsonPresenter<W: Write> {
    writer: W,
}

impl<W: Write> JsonPresenter<W> {
    fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_line(&mut self, value: &serde_json::Value) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, value)?;
        writeln!(self.writer)
    }

    fn display_outcome(&mut self, result: &EvolutionResult<Assignment>) -> io::Result<()> {
        self.write_line(&serde_json::json!({
            "outcome": result.outcome,
            "best_fitness": result.best_fitness,
            "generations": result.generations,
            "evaluations": result.evaluations,
        }))
    }
}

impl<W: Write> ResultPresenter for JsonPresenter<W> {
    fn display_assignment(&mut self, assignment: &Assignment) -> io::Result<()> {
        self.write_line(&serde_json::json!({ "best_assignment": assignment }))
    }

    fn display_fitness_history(&mut self, history: &[f64]) -> io::Result<()> {
        self.write_line(&serde_json::json!({ "fitness_history": history }))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            debug!(error = %e, "rejected arguments");
            eprintln!("{}", INVALID_INPUT);
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<EvolutionError>() {
                Some(EvolutionError::Configuration(reason)) => {
                    debug!(%reason, "rejected configuration");
                    eprintln!("{}", INVALID_INPUT);
                }
                _ => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, "starting layout search");
    let mut rng = StdRng::seed_from_u64(seed);

    let target = match cli.target {
        Some(target) => Assignment::new(target),
        None => {
            let space = VariationSpace::try_new(cli.elements, cli.variations)
                .map_err(|e| EvolutionError::Configuration(e.to_string()))?;
            Assignment::generate(&mut rng, &space)
        }
    };

    let odd_population = if cli.preserve_population {
        OddPopulationPolicy::Preserve
    } else {
        OddPopulationPolicy::Truncate
    };

    let result = LayoutGA::builder()
        .num_elements(cli.elements)
        .num_variations(cli.variations)
        .num_generations(cli.generations)
        .population_size(cli.population)
        .odd_population(odd_population)
        .target(target)
        .previous_results(cli.previous)
        .build()?
        .run(&mut rng)?;

    let stdout = io::stdout();
    if cli.json {
        let mut presenter = JsonPresenter::new(stdout.lock());
        present(&mut presenter, &result)?;
        presenter.display_outcome(&result)?;
    } else {
        let mut presenter = TablePresenter::new(stdout.lock());
        present(&mut presenter, &result)?;
        let mut out = presenter.into_inner();
        writeln!(out, "Outcome: {} (seed {})", result.outcome, seed)?;
        writeln!(out, "{}", result.stats.summary())?;
    }
    Ok(())
}
