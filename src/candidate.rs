//! Candidate solutions: a parameter vector with its (possibly unknown)
//! fitness and population slot.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One evaluated (or pending) solution.
///
/// A candidate owns its parameter vector exclusively; cloning performs a
/// full, independent copy, so ranking or mutating a cloned population can
/// never retroactively change the original.
///
/// The `index` is a weak, non-owning association with a population slot —
/// a plain position, never a pointer into the population, since candidates
/// outlive or are reordered independently of any specific population
/// array. `None` means "not assigned to a slot".
///
/// Fitness starts as `None` ("not yet evaluated") and is filled in lazily
/// by the [`Evaluator`](crate::Evaluator) the first time the candidate is
/// ranked or evaluated. A stored NaN (`Some(f64::NAN)`) is a real fitness
/// from a pathological objective output, distinct from `None`.
///
/// # Examples
///
/// ```
/// use benchfn::Candidate;
///
/// let candidate: Candidate = Candidate::new(vec![1.0, 2.0]);
/// assert!(candidate.fitness().is_none());
/// assert_eq!(candidate.index(), None);
///
/// let slotted = Candidate::<f64>::with_index(vec![0.5], 3);
/// assert_eq!(slotted.index(), Some(3));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candidate<V = f64> {
    params: Vec<f64>,
    index: Option<usize>,
    fitness: Option<V>,
}

impl<V> Candidate<V> {
    /// Create a candidate that is not assigned to a population slot.
    #[must_use]
    pub fn new(params: Vec<f64>) -> Self {
        Self {
            params,
            index: None,
            fitness: None,
        }
    }

    /// Create a candidate assigned to population slot `index`.
    #[must_use]
    pub fn with_index(params: Vec<f64>, index: usize) -> Self {
        Self {
            params,
            index: Some(index),
            fitness: None,
        }
    }

    /// The point in search space.
    #[must_use]
    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Mutable access to the point in search space.
    ///
    /// Mutating the params of an already-evaluated candidate does not
    /// clear its fitness; call [`clear_fitness`](Self::clear_fitness) when
    /// the stored fitness no longer describes the params.
    pub fn params_mut(&mut self) -> &mut [f64] {
        &mut self.params
    }

    /// Population slot this candidate occupies, if any.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Assign the candidate to population slot `index`.
    pub fn set_index(&mut self, index: usize) {
        self.index = Some(index);
    }

    /// Detach the candidate from its population slot.
    pub fn clear_index(&mut self) {
        self.index = None;
    }

    /// The fitness value, or `None` if not yet evaluated.
    #[must_use]
    pub fn fitness(&self) -> Option<&V> {
        self.fitness.as_ref()
    }

    /// Record an evaluated fitness.
    pub fn set_fitness(&mut self, fitness: V) {
        self.fitness = Some(fitness);
    }

    /// Forget the stored fitness, returning the candidate to the
    /// "not yet evaluated" state.
    pub fn clear_fitness(&mut self) {
        self.fitness = None;
    }
}
