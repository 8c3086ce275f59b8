//! Input transformations that perturb benchmark problems.
//!
//! Each wrapper implements [`Problem`] by forwarding every structural
//! query (search space, dimensionality, scheme, name, known optimum) to
//! the wrapped problem and altering only how the objective input is
//! produced. They exist to keep algorithms honest: an optimizer that
//! exploits a benchmark's symmetry, separability, or round coordinates
//! loses that shortcut once the problem is wrapped.
//!
//! - [`Shifted`] moves the optimum location by an offset vector.
//! - [`Irregular`] applies the standard per-coordinate oscillation
//!   transform, making smooth level sets locally rugged.
//! - [`Asymmetric`] breaks the symmetry between positive and negative
//!   half-spaces.
//! - [`IllConditioned`] grades coordinate scales geometrically.
//!
//! The three analytic transforms fix the origin, so for origin-optimum
//! benchmarks the forwarded optimum value stays exact; compose with
//! [`Shifted`] to relocate it.
//!
//! ```
//! use benchfn::prelude::*;
//! use benchfn::functions;
//!
//! let space = SearchSpace::symmetric(2, 100.0).unwrap();
//! let sphere = BenchmarkProblem::new("sphere", functions::sphere, space).with_optimum(0.0);
//!
//! let shifted = Shifted::new(sphere, vec![3.0, -4.0]).unwrap();
//! // The optimum moved to (3, -4); its value is unchanged.
//! assert_eq!(shifted.objective(&[3.0, -4.0]), 0.0);
//! assert_eq!(shifted.objective(&[0.0, 0.0]), 25.0);
//! assert_eq!(shifted.known_optimum(), Some(0.0));
//! ```

use crate::error::{Error, Result};
use crate::problem::{FitnessOf, Problem, SearchSpace};

/// Evaluate the wrapped problem at `x - offset`, relocating its optimum
/// by `offset` without changing the optimum value.
#[derive(Debug)]
pub struct Shifted<P> {
    inner: P,
    offset: Vec<f64>,
    name: String,
}

impl<P: Problem> Shifted<P> {
    /// Shift `inner` by an explicit offset vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the offset length does not
    /// match the problem's dimensionality.
    pub fn new(inner: P, offset: Vec<f64>) -> Result<Self> {
        if offset.len() != inner.num_dimensions() {
            return Err(Error::DimensionMismatch {
                expected: inner.num_dimensions(),
                got: offset.len(),
            });
        }
        let name = format!("shifted({})", inner.name());
        Ok(Self {
            inner,
            offset,
            name,
        })
    }

    /// Shift `inner` by an offset sampled uniformly within its bounds,
    /// reproducibly from `seed`.
    #[must_use]
    pub fn with_seed(inner: P, seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let offset = inner
            .search_space()
            .bounds()
            .iter()
            .map(|&(low, high)| low + rng.f64() * (high - low))
            .collect();
        let name = format!("shifted({})", inner.name());
        Self {
            inner,
            offset,
            name,
        }
    }

    /// The offset applied to every evaluation.
    #[must_use]
    pub fn offset(&self) -> &[f64] {
        &self.offset
    }

    /// The wrapped problem.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: Problem> Problem for Shifted<P> {
    type Scheme = P::Scheme;

    fn objective(&self, params: &[f64]) -> FitnessOf<P> {
        let moved: Vec<f64> = params
            .iter()
            .zip(&self.offset)
            .map(|(&x, &o)| x - o)
            .collect();
        self.inner.objective(&moved)
    }

    fn scheme(&self) -> &P::Scheme {
        self.inner.scheme()
    }

    fn search_space(&self) -> &SearchSpace {
        self.inner.search_space()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn known_optimum(&self) -> Option<FitnessOf<P>> {
        self.inner.known_optimum()
    }
}

/// The standard oscillation transform applied per coordinate.
///
/// Fixes the origin and preserves sign, but makes the mapping locally
/// irregular so smooth level sets stop being smooth. Coordinates are
/// transformed before the wrapped objective sees them.
fn oscillate(x: f64) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    let log_abs = x.abs().ln();
    let (c1, c2) = if x > 0.0 { (10.0, 7.9) } else { (5.5, 3.1) };
    x.signum() * (log_abs + 0.049 * ((c1 * log_abs).sin() + (c2 * log_abs).sin())).exp()
}

/// Apply the oscillation transform to every coordinate before evaluation.
#[derive(Debug)]
pub struct Irregular<P> {
    inner: P,
    name: String,
}

impl<P: Problem> Irregular<P> {
    /// Wrap `inner`.
    #[must_use]
    pub fn new(inner: P) -> Self {
        let name = format!("irregular({})", inner.name());
        Self { inner, name }
    }

    /// The wrapped problem.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: Problem> Problem for Irregular<P> {
    type Scheme = P::Scheme;

    fn objective(&self, params: &[f64]) -> FitnessOf<P> {
        let transformed: Vec<f64> = params.iter().map(|&x| oscillate(x)).collect();
        self.inner.objective(&transformed)
    }

    fn scheme(&self) -> &P::Scheme {
        self.inner.scheme()
    }

    fn search_space(&self) -> &SearchSpace {
        self.inner.search_space()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn known_optimum(&self) -> Option<FitnessOf<P>> {
        self.inner.known_optimum()
    }
}

/// Break the symmetry between the positive and negative half-spaces.
///
/// Positive coordinates are raised to a dimension-graded power controlled
/// by `beta`; negative coordinates and zero pass through unchanged, so the
/// origin stays fixed.
#[derive(Debug)]
pub struct Asymmetric<P> {
    inner: P,
    beta: f64,
    name: String,
}

impl<P: Problem> Asymmetric<P> {
    /// Wrap `inner` with asymmetry strength `beta` (0.2 and 0.5 are the
    /// conventional choices).
    #[must_use]
    pub fn new(inner: P, beta: f64) -> Self {
        let name = format!("asymmetric({})", inner.name());
        Self { inner, beta, name }
    }

    /// The wrapped problem.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    #[allow(clippy::cast_precision_loss)]
    fn warp(&self, x: f64, dimension: usize, num_dimensions: usize) -> f64 {
        if x <= 0.0 {
            return x;
        }
        let grade = if num_dimensions > 1 {
            dimension as f64 / (num_dimensions - 1) as f64
        } else {
            0.0
        };
        x.powf(1.0 + self.beta * grade * x.sqrt())
    }
}

impl<P: Problem> Problem for Asymmetric<P> {
    type Scheme = P::Scheme;

    fn objective(&self, params: &[f64]) -> FitnessOf<P> {
        let n = params.len();
        let transformed: Vec<f64> = params
            .iter()
            .enumerate()
            .map(|(i, &x)| self.warp(x, i, n))
            .collect();
        self.inner.objective(&transformed)
    }

    fn scheme(&self) -> &P::Scheme {
        self.inner.scheme()
    }

    fn search_space(&self) -> &SearchSpace {
        self.inner.search_space()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn known_optimum(&self) -> Option<FitnessOf<P>> {
        self.inner.known_optimum()
    }
}

/// Grade coordinate scales geometrically from 1 up to `sqrt(alpha)`.
///
/// Coordinate `i` is multiplied by `alpha^(i / (2(n-1)))`, turning an
/// isotropic problem into one whose axes span a condition number of
/// `alpha`. The origin stays fixed.
#[derive(Debug)]
pub struct IllConditioned<P> {
    inner: P,
    alpha: f64,
    name: String,
}

impl<P: Problem> IllConditioned<P> {
    /// Wrap `inner` with condition number `alpha` (10 and 100 are the
    /// conventional choices).
    #[must_use]
    pub fn new(inner: P, alpha: f64) -> Self {
        let name = format!("ill_conditioned({})", inner.name());
        Self { inner, alpha, name }
    }

    /// The wrapped problem.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: Problem> Problem for IllConditioned<P> {
    type Scheme = P::Scheme;

    #[allow(clippy::cast_precision_loss)]
    fn objective(&self, params: &[f64]) -> FitnessOf<P> {
        let n = params.len();
        let transformed: Vec<f64> = params
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let grade = if n > 1 {
                    i as f64 / (2.0 * (n - 1) as f64)
                } else {
                    0.0
                };
                self.alpha.powf(grade) * x
            })
            .collect();
        self.inner.objective(&transformed)
    }

    fn scheme(&self) -> &P::Scheme {
        self.inner.scheme()
    }

    fn search_space(&self) -> &SearchSpace {
        self.inner.search_space()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn known_optimum(&self) -> Option<FitnessOf<P>> {
        self.inner.known_optimum()
    }
}
