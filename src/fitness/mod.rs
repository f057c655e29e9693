//! Fitness evaluation
//!
//! This module provides the fitness abstraction and the target-match score.

pub mod target;
pub mod traits;

pub mod prelude {
    pub use super::target::*;
    pub use super::traits::*;
}
