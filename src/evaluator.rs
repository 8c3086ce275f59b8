//! The evaluation layer: counting, archiving, comparing, ranking.

use core::cmp::Ordering;

use crate::archive::BoundedArchive;
use crate::candidate::Candidate;
use crate::error::{Error, Result};
use crate::fitness::FitnessScheme;
use crate::problem::{FitnessOf, Problem};

/// Default capacity of the evaluator's best-candidate archive.
pub const DEFAULT_ARCHIVE_CAPACITY: usize = 100;

/// The single source of truth for evaluation bookkeeping on one problem.
///
/// An evaluator wraps a [`Problem`], counts every fitness computation,
/// remembers the most recent fitness, and records results in an owned
/// [`BoundedArchive`]. Comparison ([`is_better`](Evaluator::is_better)),
/// tournament selection ([`best_of`](Evaluator::best_of)), and batch
/// ranking ([`rank_by_fitness`](Evaluator::rank_by_fitness)) all delegate
/// to the problem's [`FitnessScheme`], so the evaluator never needs to
/// know whether fitness is scalar or vector.
///
/// The evaluation count is the canonical step counter of a run: it grows
/// by exactly one per completed evaluation, is never reset, and is stamped
/// onto every archive entry.
///
/// Evaluation is synchronous and single-threaded. Incrementing the
/// counter and inserting into the archive form one logical step, which is
/// why every evaluating operation takes `&mut self` — sharing an
/// evaluator across threads without external synchronization is not
/// representable. Parallel designs should give each worker its own
/// evaluator (or counter delta) and merge into one authoritative
/// evaluator under exclusion.
///
/// # Examples
///
/// ```
/// use benchfn::prelude::*;
///
/// let registry = FunctionRegistry::standard();
/// let problem = registry.problem("sphere", 2).unwrap();
/// let mut evaluator = Evaluator::new(&problem);
///
/// let (winner, fitness) = evaluator.best_of(&[1.0, 0.0], &[2.0, 2.0]).unwrap();
/// assert_eq!(winner, vec![1.0, 0.0]);
/// assert_eq!(fitness, 1.0);
/// assert_eq!(evaluator.num_evals(), 2);
/// ```
pub struct Evaluator<'a, P: Problem> {
    problem: &'a P,
    archive: BoundedArchive<P::Scheme>,
    num_evals: u64,
    last_fitness: Option<FitnessOf<P>>,
}

impl<'a, P: Problem> Evaluator<'a, P> {
    /// Create an evaluator with the default archive capacity.
    #[must_use]
    pub fn new(problem: &'a P) -> Self {
        // DEFAULT_ARCHIVE_CAPACITY is nonzero, so this cannot fail.
        match Self::with_archive_capacity(problem, DEFAULT_ARCHIVE_CAPACITY) {
            Ok(evaluator) => evaluator,
            Err(_) => unreachable!(),
        }
    }

    /// Create an evaluator whose archive retains at most `capacity`
    /// entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn with_archive_capacity(problem: &'a P, capacity: usize) -> Result<Self> {
        let archive = BoundedArchive::new(problem.scheme().clone(), capacity)?;
        Ok(Self {
            problem,
            archive,
            num_evals: 0,
            last_fitness: None,
        })
    }

    /// Evaluate the objective at `params`.
    ///
    /// Increments the evaluation count by exactly one, overwrites the
    /// last fitness, records the result in the archive, and returns the
    /// fitness. Results are never cached: a noisy objective legitimately
    /// returns different values for identical params.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `params` does not match
    /// the problem's dimensionality. Nothing else fails: objectives are
    /// total, and non-finite fitness is a valid, comparably-ordered value.
    pub fn evaluate(&mut self, params: &[f64]) -> Result<FitnessOf<P>> {
        let expected = self.problem.num_dimensions();
        if params.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                got: params.len(),
            });
        }

        let fitness = self.problem.objective(params);
        self.num_evals += 1;
        self.last_fitness = Some(fitness.clone());
        self.archive.add_candidate(fitness.clone(), params, self.num_evals);
        trace_debug!(num_evals = self.num_evals, "evaluation recorded");
        Ok(fitness)
    }

    /// The fitness produced by the most recent evaluation, or `None`
    /// before the first one. Never triggers an evaluation.
    #[must_use]
    pub fn last_fitness(&self) -> Option<&FitnessOf<P>> {
        self.last_fitness.as_ref()
    }

    /// Return `true` iff `a` is strictly better than `b` under the
    /// problem's scheme.
    #[must_use]
    pub fn is_better(&self, a: &FitnessOf<P>, b: &FitnessOf<P>) -> bool {
        self.problem.scheme().is_better(a, b)
    }

    /// Evaluate `params` (one counted evaluation) and return whether the
    /// resulting fitness is strictly better than `fitness`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] as for
    /// [`evaluate`](Evaluator::evaluate).
    pub fn evaluate_is_better(&mut self, params: &[f64], fitness: &FitnessOf<P>) -> Result<bool> {
        let evaluated = self.evaluate(params)?;
        Ok(self.is_better(&evaluated, fitness))
    }

    /// Evaluate both parameter vectors (two counted evaluations) and
    /// return the winning pair.
    ///
    /// Ties break deterministically in favor of the **first** argument:
    /// `b` wins only when it is strictly better than `a`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if either vector has the
    /// wrong length; the first vector is evaluated (and counted) before
    /// the second is checked.
    pub fn best_of(&mut self, a: &[f64], b: &[f64]) -> Result<(Vec<f64>, FitnessOf<P>)> {
        let fitness_a = self.evaluate(a)?;
        let fitness_b = self.evaluate(b)?;
        if self.is_better(&fitness_b, &fitness_a) {
            Ok((b.to_vec(), fitness_b))
        } else {
            Ok((a.to_vec(), fitness_a))
        }
    }

    /// Evaluate every candidate that has no fitness yet, then sort the
    /// slice in place, best first.
    ///
    /// Only candidates whose fitness is `None` are evaluated (each
    /// counted and archived); a stored fitness — including a NaN from a
    /// pathological objective — is trusted as-is, so calling this twice
    /// in a row performs zero evaluations the second time and leaves the
    /// order unchanged. The sort is stable: candidates with equal known
    /// fitness keep their relative order, and each candidate's population
    /// `index` travels with it untouched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] on the first candidate whose
    /// params have the wrong length; candidates before it have already
    /// been evaluated and counted.
    pub fn rank_by_fitness(&mut self, candidates: &mut [Candidate<FitnessOf<P>>]) -> Result<()> {
        for candidate in candidates.iter_mut() {
            if candidate.fitness().is_none() {
                let fitness = self.evaluate(candidate.params())?;
                candidate.set_fitness(fitness);
            }
        }

        let scheme = self.problem.scheme();
        candidates.sort_by(|a, b| match (a.fitness(), b.fitness()) {
            (Some(fa), Some(fb)) => {
                if scheme.is_better(fa, fb) {
                    Ordering::Less
                } else if scheme.is_better(fb, fa) {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            }
            // Unreachable after the fill loop, but ordered deterministically:
            // a missing fitness never ranks above a known one.
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        trace_info!(num_candidates = candidates.len(), "population ranked");
        Ok(())
    }

    /// Number of fitness computations performed through this evaluator.
    #[must_use]
    pub fn num_evals(&self) -> u64 {
        self.num_evals
    }

    /// The wrapped problem.
    #[must_use]
    pub fn problem(&self) -> &P {
        self.problem
    }

    /// The archive of best results seen.
    #[must_use]
    pub fn archive(&self) -> &BoundedArchive<P::Scheme> {
        &self.archive
    }

    /// The best fitness recorded so far, if any evaluation has happened.
    #[must_use]
    pub fn best_fitness(&self) -> Option<&FitnessOf<P>> {
        self.archive.best_fitness()
    }

    /// Return `true` iff the archive's best fitness is within absolute
    /// tolerance `atol` of the problem's known optimum.
    ///
    /// `false` when no evaluation has happened yet or the problem
    /// declares no optimum.
    #[must_use]
    pub fn fitness_is_within_ftol(&self, atol: f64) -> bool {
        match (self.archive.best_fitness(), self.problem.known_optimum()) {
            (Some(best), Some(optimum)) => {
                self.problem.scheme().within_tolerance(best, &optimum, atol)
            }
            _ => false,
        }
    }

    /// One-line progress report: evaluation count, best fitness, archive
    /// occupancy.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.archive.best() {
            Some(best) => format!(
                "{} evaluations; best fitness {:?} at evaluation {}; archive {}/{}",
                self.num_evals,
                best.fitness,
                best.num_evals,
                self.archive.len(),
                self.archive.capacity(),
            ),
            None => format!(
                "0 evaluations; archive empty (capacity {})",
                self.archive.capacity()
            ),
        }
    }

    /// One-line description of the wrapped problem: name, dimensionality,
    /// bounds, fitness representation.
    #[must_use]
    pub fn problem_summary(&self) -> String {
        format!(
            "{}: {} dimensions in {}, {} fitness",
            self.problem.name(),
            self.problem.num_dimensions(),
            self.problem.search_space(),
            self.problem.scheme().fitness_type(),
        )
    }
}

impl<P: Problem> core::fmt::Debug for Evaluator<'_, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Evaluator")
            .field("problem", &self.problem.name())
            .field("num_evals", &self.num_evals)
            .field("archive_len", &self.archive.len())
            .finish_non_exhaustive()
    }
}
