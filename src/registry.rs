//! The catalogue of named benchmark functions.
//!
//! A [`FunctionRegistry`] is an explicitly constructed, immutable table
//! built once at startup and passed by reference to whoever needs it —
//! never ambient global state. [`FunctionRegistry::standard`] holds the
//! full catalogue in a stable order, so entries are addressable both by
//! name and by position.
//!
//! ```
//! use benchfn::prelude::*;
//!
//! let registry = FunctionRegistry::standard();
//! assert!(registry.names().any(|name| name == "rastrigin"));
//!
//! let problem = registry.problem("rastrigin", 2).unwrap();
//! assert_eq!(problem.objective(&[0.0, 0.0]), 0.0);
//! assert_eq!(problem.search_space().bound(0), (-5.12, 5.12));
//! ```

use crate::error::{Error, Result};
use crate::functions;
use crate::problem::{BenchmarkProblem, SearchSpace};

/// Registry metadata for one benchmark function.
#[derive(Clone, Debug)]
pub struct FunctionSpec {
    /// Canonical function name.
    pub name: &'static str,
    /// Default per-dimension bounds.
    pub bounds: (f64, f64),
    /// Known global optimum fitness, where one is documented.
    pub optimum: Option<f64>,
    /// The objective function.
    pub function: fn(&[f64]) -> f64,
    /// Whether problems built from this spec add U[0, 1) evaluation noise.
    pub noisy: bool,
}

/// Immutable catalogue mapping canonical names to benchmark functions,
/// default bounds, and known optima.
#[derive(Clone, Debug)]
pub struct FunctionRegistry {
    specs: Vec<FunctionSpec>,
}

impl FunctionRegistry {
    /// Build the standard catalogue.
    ///
    /// The order is stable and documented: unimodal functions first
    /// (sphere through quartic and its noisy variant), then the
    /// multimodal ones (rastrigin, ackley, griewank).
    #[must_use]
    pub fn standard() -> Self {
        let spec = |name, bounds, function| FunctionSpec {
            name,
            bounds,
            optimum: Some(0.0),
            function,
            noisy: false,
        };
        let specs = vec![
            spec("sphere", (-100.0, 100.0), functions::sphere as fn(&[f64]) -> f64),
            spec("elliptic", (-100.0, 100.0), functions::elliptic),
            spec("cigar", (-100.0, 100.0), functions::cigar),
            spec("cigtab", (-100.0, 100.0), functions::cigtab),
            spec("schwefel_1_2", (-100.0, 100.0), functions::schwefel_1_2),
            spec("schwefel_2_21", (-100.0, 100.0), functions::schwefel_2_21),
            spec("schwefel_2_22", (-10.0, 10.0), functions::schwefel_2_22),
            spec("rosenbrock", (-30.0, 30.0), functions::rosenbrock),
            spec("step", (-100.0, 100.0), functions::step),
            spec("quartic", (-1.28, 1.28), functions::quartic),
            FunctionSpec {
                name: "quartic_noisy",
                bounds: (-1.28, 1.28),
                optimum: Some(0.0),
                function: functions::quartic,
                noisy: true,
            },
            spec("rastrigin", (-5.12, 5.12), functions::rastrigin),
            spec("ackley", (-32.0, 32.0), functions::ackley),
            spec("griewank", (-600.0, 600.0), functions::griewank),
        ];
        trace_info!(num_functions = specs.len(), "function registry built");
        Self { specs }
    }

    /// Look up a spec by canonical name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FunctionSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// All specs in registry order.
    #[must_use]
    pub fn specs(&self) -> &[FunctionSpec] {
        &self.specs
    }

    /// All canonical names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.specs.iter().map(|spec| spec.name)
    }

    /// Number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Instantiate the named function as a problem of `dimensions`
    /// dimensions with its default bounds. Noisy specs produce problems
    /// with a randomly seeded noise RNG.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFunction`] for an unregistered name and
    /// [`Error::ZeroDimensions`] for `dimensions == 0`.
    pub fn problem(&self, name: &str, dimensions: usize) -> Result<BenchmarkProblem> {
        let spec = self.get(name).ok_or_else(|| Error::UnknownFunction {
            name: name.to_string(),
        })?;
        let space = SearchSpace::uniform(dimensions, spec.bounds.0, spec.bounds.1)?;
        let mut problem = BenchmarkProblem::new(spec.name, spec.function, space);
        if let Some(optimum) = spec.optimum {
            problem = problem.with_optimum(optimum);
        }
        if spec.noisy {
            problem = problem.with_noise();
        }
        Ok(problem)
    }

    /// Like [`problem`](Self::problem), but noisy specs get a noise RNG
    /// seeded with `seed` for reproducible runs. Noiseless specs ignore
    /// the seed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFunction`] for an unregistered name and
    /// [`Error::ZeroDimensions`] for `dimensions == 0`.
    pub fn problem_with_seed(
        &self,
        name: &str,
        dimensions: usize,
        seed: u64,
    ) -> Result<BenchmarkProblem> {
        let spec = self.get(name).ok_or_else(|| Error::UnknownFunction {
            name: name.to_string(),
        })?;
        let space = SearchSpace::uniform(dimensions, spec.bounds.0, spec.bounds.1)?;
        let mut problem = BenchmarkProblem::new(spec.name, spec.function, space);
        if let Some(optimum) = spec.optimum {
            problem = problem.with_optimum(optimum);
        }
        if spec.noisy {
            problem = problem.with_noise_seed(seed);
        }
        Ok(problem)
    }
}
