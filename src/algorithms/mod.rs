//! Evolutionary algorithms
//!
//! This module provides the generational layout search.

pub mod layout_ga;

pub mod prelude {
    pub use super::layout_ga::*;
}
