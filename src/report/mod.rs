//! Result presentation
//!
//! The engine hands back an [`EvolutionResult`]; everything that shows it to a
//! person goes through a [`ResultPresenter`].

use std::io::{self, Write};

use crate::diagnostics::EvolutionResult;
use crate::genome::assignment::Assignment;

/// Width of the trend bar for a fitness of 1.0
const TREND_WIDTH: usize = 20;

/// Something that can show a layout search result
pub trait ResultPresenter {
    /// Show the best assignment found
    fn display_assignment(&mut self, assignment: &Assignment) -> io::Result<()>;

    /// Show the best fitness of each generation
    fn display_fitness_history(&mut self, history: &[f64]) -> io::Result<()>;
}

/// Show both parts of a result
pub fn present<P: ResultPresenter + ?Sized>(
    presenter: &mut P,
    result: &EvolutionResult<Assignment>,
) -> io::Result<()> {
    presenter.display_assignment(&result.best_genome)?;
    presenter.display_fitness_history(&result.fitness_history)
}

/// Plain-text tables
///
/// Elements and generations are numbered from 1.
#[derive(Debug)]
pub struct TablePresenter<W: Write> {
    writer: W,
}

impl<W: Write> TablePresenter<W> {
    /// Write tables to `writer`
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultPresenter for TablePresenter<W> {
    fn display_assignment(&mut self, assignment: &Assignment) -> io::Result<()> {
        writeln!(self.writer, "Best layout")?;
        for (element, variation) in assignment.pairs() {
            writeln!(
                self.writer,
                "Element {} | Variation {}",
                element + 1,
                variation + 1
            )?;
        }
        Ok(())
    }

    fn display_fitness_history(&mut self, history: &[f64]) -> io::Result<()> {
        writeln!(self.writer, "Fitness per generation")?;
        for (generation, fitness) in history.iter().enumerate() {
            let filled = (fitness.clamp(0.0, 1.0) * TREND_WIDTH as f64).round() as usize;
            writeln!(
                self.writer,
                "Generation {:>4} | {:.4} | {:<width$}",
                generation + 1,
                fitness,
                "#".repeat(filled),
                width = TREND_WIDTH
            )?;
        }
        Ok(())
    }
}

pub mod prelude {
    pub use super::{present, ResultPresenter, TablePresenter};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::termination::RunOutcome;

    fn rendered<F>(f: F) -> String
    where
        F: FnOnce(&mut TablePresenter<Vec<u8>>) -> io::Result<()>,
    {
        let mut presenter = TablePresenter::new(Vec::new());
        f(&mut presenter).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_assignment_rows_are_one_based() {
        let out = rendered(|p| p.display_assignment(&Assignment::from([2, 0, 1])));
        let rows: Vec<&str> = out.lines().skip(1).collect();
        assert_eq!(
            rows,
            vec![
                "Element 1 | Variation 3",
                "Element 2 | Variation 1",
                "Element 3 | Variation 2",
            ]
        );
    }

    #[test]
    fn test_fitness_trend() {
        let out = rendered(|p| p.display_fitness_history(&[0.5, 1.0]));
        let rows: Vec<&str> = out.lines().skip(1).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("Generation    1 | 0.5000 | ##########"));
        assert!(rows[1].contains(&"#".repeat(TREND_WIDTH)));
    }

    #[test]
    fn test_present_result() {
        let result = EvolutionResult::new(
            Assignment::from([1, 1]),
            1.0,
            vec![0.5, 1.0],
            4,
            RunOutcome::Converged,
        );
        let out = rendered(|p| present(p, &result));
        assert!(out.contains("Element 2 | Variation 2"));
        assert!(out.contains("Generation    2 | 1.0000"));
    }
}
