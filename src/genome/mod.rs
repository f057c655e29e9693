//! Genome abstractions and implementations
//!
//! This module provides the core `EvolutionaryGenome` trait and the
//! `Assignment` genome used for layout candidates.

pub mod assignment;
pub mod space;
pub mod traits;

pub mod prelude {
    pub use super::assignment::*;
    pub use super::space::*;
    pub use super::traits::*;
}
