//! The [`Problem`] trait defines what gets evaluated.
//!
//! A problem bundles an objective function with its search space, its
//! fitness scheme, and (optionally) a known global optimum. The
//! [`Evaluator`](crate::Evaluator) consumes problems through this trait
//! and never looks inside the objective.
//!
//! [`BenchmarkProblem`] is the concrete implementation behind the
//! function catalogue: a scalar-minimize problem wrapping a plain
//! `fn(&[f64]) -> f64`, optionally with additive uniform noise for the
//! noisy variants.
//!
//! ```
//! use benchfn::prelude::*;
//! use benchfn::functions;
//!
//! let space = SearchSpace::symmetric(2, 5.12).unwrap();
//! let problem = BenchmarkProblem::new("rastrigin", functions::rastrigin, space)
//!     .with_optimum(0.0);
//!
//! assert_eq!(problem.num_dimensions(), 2);
//! assert_eq!(problem.objective(&[0.0, 0.0]), 0.0);
//! ```

use core::fmt;

use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::fitness::{FitnessScheme, ScalarScheme};

/// The fitness value type of a problem's scheme.
pub type FitnessOf<P> = <<P as Problem>::Scheme as FitnessScheme>::Value;

/// An optimization problem: a total objective function over a declared
/// search space, compared under a fitness scheme.
///
/// The objective may be stochastic (a noisy benchmark variant); it takes
/// `&self`, so stochastic implementations keep their RNG behind interior
/// mutability. Callers must not assume two evaluations of identical
/// params return equal fitness.
pub trait Problem {
    /// The fitness scheme deciding how this problem's fitness values compare.
    type Scheme: FitnessScheme;

    /// Evaluate the objective at `params`.
    ///
    /// Total over the declared domain: never fails for a parameter vector
    /// of the declared dimensionality, though it may return non-finite
    /// fitness for pathological inputs.
    fn objective(&self, params: &[f64]) -> FitnessOf<Self>;

    /// The scheme that orders this problem's fitness values.
    fn scheme(&self) -> &Self::Scheme;

    /// The declared per-dimension bounds.
    ///
    /// Consumed for reporting and validation only — the
    /// [`Evaluator`](crate::Evaluator) does not enforce bounds.
    fn search_space(&self) -> &SearchSpace;

    /// Dimensionality of the search space.
    fn num_dimensions(&self) -> usize {
        self.search_space().num_dimensions()
    }

    /// Human-readable problem name.
    fn name(&self) -> &str;

    /// The known global optimum fitness, where the problem declares one.
    ///
    /// Consumed by convergence checks
    /// ([`Evaluator::fitness_is_within_ftol`](crate::Evaluator::fitness_is_within_ftol)).
    fn known_optimum(&self) -> Option<FitnessOf<Self>> {
        None
    }
}

/// Per-dimension bounds of a search space.
///
/// # Examples
///
/// ```
/// use benchfn::SearchSpace;
///
/// let space = SearchSpace::symmetric(3, 100.0).unwrap();
/// assert_eq!(space.num_dimensions(), 3);
/// assert_eq!(space.bound(0), (-100.0, 100.0));
/// assert!(space.contains(&[0.0, -100.0, 99.5]));
/// assert!(!space.contains(&[0.0, -101.0, 0.0]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SearchSpace {
    bounds: Vec<(f64, f64)>,
}

impl SearchSpace {
    /// Create a search space from explicit per-dimension `(low, high)` bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDimensions`] for an empty bounds list and
    /// [`Error::InvalidBounds`] if any `low` exceeds its `high`.
    pub fn new(bounds: Vec<(f64, f64)>) -> Result<Self> {
        if bounds.is_empty() {
            return Err(Error::ZeroDimensions);
        }
        for &(low, high) in &bounds {
            if low.is_nan() || high.is_nan() || low > high {
                return Err(Error::InvalidBounds { low, high });
            }
        }
        Ok(Self { bounds })
    }

    /// A space of `dimensions` dimensions, each bounded by `±half_width`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDimensions`] or [`Error::InvalidBounds`] as
    /// for [`SearchSpace::new`].
    pub fn symmetric(dimensions: usize, half_width: f64) -> Result<Self> {
        Self::uniform(dimensions, -half_width, half_width)
    }

    /// A space of `dimensions` dimensions, each bounded by `[low, high]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDimensions`] or [`Error::InvalidBounds`] as
    /// for [`SearchSpace::new`].
    pub fn uniform(dimensions: usize, low: f64, high: f64) -> Result<Self> {
        Self::new(vec![(low, high); dimensions])
    }

    /// Number of dimensions.
    #[must_use]
    pub fn num_dimensions(&self) -> usize {
        self.bounds.len()
    }

    /// All per-dimension bounds.
    #[must_use]
    pub fn bounds(&self) -> &[(f64, f64)] {
        &self.bounds
    }

    /// Bounds of dimension `dimension`.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is out of range.
    #[must_use]
    pub fn bound(&self, dimension: usize) -> (f64, f64) {
        self.bounds[dimension]
    }

    /// Whether `params` has the right length and every coordinate lies
    /// within its dimension's bounds.
    #[must_use]
    pub fn contains(&self, params: &[f64]) -> bool {
        params.len() == self.bounds.len()
            && params
                .iter()
                .zip(&self.bounds)
                .all(|(&x, &(low, high))| x >= low && x <= high)
    }
}

impl fmt::Display for SearchSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.bounds[0];
        if self.bounds.iter().all(|&b| b == first) {
            write!(
                f,
                "[{}, {}]^{}",
                first.0,
                first.1,
                self.bounds.len()
            )
        } else {
            write!(f, "{:?}", self.bounds)
        }
    }
}

/// A named scalar-minimize benchmark problem wrapping a closed-form
/// function, with optional additive uniform noise.
///
/// Noise models the "noisy" benchmark variants: each evaluation adds an
/// independent sample from U[0, 1), so repeated evaluation of identical
/// params legitimately returns different values. The RNG sits behind a
/// mutex so the objective can stay `&self`.
pub struct BenchmarkProblem {
    name: String,
    function: fn(&[f64]) -> f64,
    space: SearchSpace,
    scheme: ScalarScheme,
    optimum: Option<f64>,
    noise: Option<Mutex<fastrand::Rng>>,
}

impl BenchmarkProblem {
    /// Create a noiseless benchmark problem with no declared optimum.
    #[must_use]
    pub fn new(name: impl Into<String>, function: fn(&[f64]) -> f64, space: SearchSpace) -> Self {
        Self {
            name: name.into(),
            function,
            space,
            scheme: ScalarScheme::minimize(),
            optimum: None,
            noise: None,
        }
    }

    /// Declare the known global optimum fitness.
    #[must_use]
    pub fn with_optimum(mut self, optimum: f64) -> Self {
        self.optimum = Some(optimum);
        self
    }

    /// Add U[0, 1) noise to every evaluation, with a randomly seeded RNG.
    #[must_use]
    pub fn with_noise(mut self) -> Self {
        self.noise = Some(Mutex::new(fastrand::Rng::new()));
        self
    }

    /// Add U[0, 1) noise with a fixed seed for reproducibility.
    #[must_use]
    pub fn with_noise_seed(mut self, seed: u64) -> Self {
        self.noise = Some(Mutex::new(fastrand::Rng::with_seed(seed)));
        self
    }

    /// Whether this problem adds noise to evaluations.
    #[must_use]
    pub fn is_noisy(&self) -> bool {
        self.noise.is_some()
    }
}

impl fmt::Debug for BenchmarkProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchmarkProblem")
            .field("name", &self.name)
            .field("space", &self.space)
            .field("optimum", &self.optimum)
            .field("noisy", &self.noise.is_some())
            .finish_non_exhaustive()
    }
}

impl Problem for BenchmarkProblem {
    type Scheme = ScalarScheme;

    fn objective(&self, params: &[f64]) -> f64 {
        let value = (self.function)(params);
        match &self.noise {
            Some(rng) => value + rng.lock().f64(),
            None => value,
        }
    }

    fn scheme(&self) -> &ScalarScheme {
        &self.scheme
    }

    fn search_space(&self) -> &SearchSpace {
        &self.space
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn known_optimum(&self) -> Option<f64> {
        self.optimum
    }
}
