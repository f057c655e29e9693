//! # layout-evo
//!
//! A genetic algorithm that searches for the layout of a set of interface
//! elements, each of which can be shown in one of several variations.
//!
//! Candidates are scored by how many elements agree with a target layout.
//! Each generation the two best candidates are recombined, and mutation draws
//! replacement variations in proportion to how often they appeared in earlier
//! offspring, optionally seeded with results from previous runs.
//!
//! ## Core Concepts
//!
//! - **Assignment**: one variation index per element
//! - **Target match**: fitness is the fraction of positions equal to the target
//! - **Orientated mutation**: replacement values follow the accumulated variation history
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use layout_evo::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let result = LayoutGA::builder()
//!     .num_elements(5)
//!     .num_variations(3)
//!     .population_size(20)
//!     .num_generations(100)
//!     .target(vec![0, 2, 1, 1, 0])
//!     .previous_results(vec![2, 2, 1])
//!     .build()?
//!     .run(&mut rng)?;
//!
//! println!("{} after {} generations", result.outcome, result.generations);
//! ```

pub mod algorithms;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod history;
pub mod operators;
pub mod population;
pub mod report;
pub mod termination;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::history::{MutationBias, VariationHistory};
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
    pub use crate::report::prelude::*;
    pub use crate::termination::prelude::*;
}
