#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Benchmark functions and evaluation machinery for black-box
//! (derivative-free) continuous optimization. It ships a catalogue of 14
//! classic test functions (sphere, rastrigin, ackley, the Schwefel
//! variants, …), input transformations that break their symmetries, and a
//! generic evaluation layer that counts evaluations, tracks the best
//! fitness seen, and archives historically best candidates — all with zero
//! required feature flags for the common case.
//!
//! # Getting Started
//!
//! Evaluate a benchmark function through an [`Evaluator`] in five lines:
//!
//! ```
//! use benchfn::prelude::*;
//!
//! let registry = FunctionRegistry::standard();
//! let problem = registry.problem("sphere", 3).unwrap();
//! let mut evaluator = Evaluator::new(&problem);
//!
//! let fitness = evaluator.evaluate(&[1.0, 2.0, 2.0]).unwrap();
//! assert_eq!(fitness, 9.0);
//! assert_eq!(evaluator.num_evals(), 1);
//! assert!(evaluator.fitness_is_within_ftol(10.0));
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Evaluator`] | Evaluate parameter vectors against one problem: count evaluations, archive the best, compare and rank. |
//! | [`Problem`](problem::Problem) | An objective function plus its search space, fitness scheme, and (optionally) known optimum. |
//! | [`FitnessScheme`](fitness::FitnessScheme) | How fitness values compare — scalar or vector, minimize or maximize. |
//! | [`Candidate`](candidate::Candidate) | A parameter vector paired with its (possibly unknown) fitness and population slot. |
//! | [`BoundedArchive`](archive::BoundedArchive) | Capacity-bounded top list of the best fitness/params pairs seen. |
//! | [`FunctionRegistry`](registry::FunctionRegistry) | Immutable catalogue of named benchmark functions with default bounds and optima. |
//!
//! # Function Catalogue
//!
//! | Name | Character | Default bounds | Optimum |
//! |------|-----------|----------------|---------|
//! | `sphere` | unimodal, convex | ±100 | 0 at origin |
//! | `elliptic` | unimodal, ill-conditioned | ±100 | 0 at origin |
//! | `cigar` | unimodal, one easy axis | ±100 | 0 at origin |
//! | `cigtab` | unimodal, two hard axes | ±100 | 0 at origin |
//! | `schwefel_1_2` | unimodal, non-separable | ±100 | 0 at origin |
//! | `schwefel_2_21` | unimodal, max-norm | ±100 | 0 at origin |
//! | `schwefel_2_22` | unimodal, sum + product | ±10 | 0 at origin |
//! | `rosenbrock` | narrow curved valley | ±30 | 0 at (1,…,1) |
//! | `step` | piecewise flat | ±100 | 0 at origin |
//! | `quartic` | unimodal, quartic growth | ±1.28 | 0 at origin |
//! | `quartic_noisy` | quartic + uniform noise | ±1.28 | 0 (noisy) |
//! | `rastrigin` | highly multimodal | ±5.12 | 0 at origin |
//! | `ackley` | nearly flat with a deep well | ±32 | 0 at origin |
//! | `griewank` | multimodal, product term | ±600 | 0 at origin |
//!
//! Wrap any problem in [`Shifted`](transform::Shifted),
//! [`Irregular`](transform::Irregular), [`Asymmetric`](transform::Asymmetric),
//! or [`IllConditioned`](transform::IllConditioned) to perturb it so an
//! algorithm cannot exploit symmetry or separability.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on plain-data public types | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at key evaluation points | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod archive;
pub mod candidate;
mod error;
mod evaluator;
pub mod fitness;
pub mod functions;
pub mod pareto;
pub mod problem;
pub mod registry;
pub mod transform;
mod types;

pub use archive::{ArchiveEntry, BoundedArchive};
pub use candidate::Candidate;
pub use error::{Error, Result};
pub use evaluator::{Evaluator, DEFAULT_ARCHIVE_CAPACITY};
pub use fitness::{FitnessScheme, ScalarScheme, VectorOrdering, VectorScheme};
pub use problem::{BenchmarkProblem, FitnessOf, Problem, SearchSpace};
pub use registry::{FunctionRegistry, FunctionSpec};
pub use types::Direction;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use benchfn::prelude::*;
/// ```
pub mod prelude {
    pub use crate::archive::{ArchiveEntry, BoundedArchive};
    pub use crate::candidate::Candidate;
    pub use crate::error::{Error, Result};
    pub use crate::evaluator::{Evaluator, DEFAULT_ARCHIVE_CAPACITY};
    pub use crate::fitness::{FitnessScheme, ScalarScheme, VectorOrdering, VectorScheme};
    pub use crate::problem::{BenchmarkProblem, FitnessOf, Problem, SearchSpace};
    pub use crate::registry::{FunctionRegistry, FunctionSpec};
    pub use crate::transform::{Asymmetric, IllConditioned, Irregular, Shifted};
    pub use crate::types::Direction;
}
