//! Bounded archive of the best fitness/params pairs seen during a run.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fitness::FitnessScheme;

/// One archived result: a fitness, the params that produced it, and the
/// evaluation count at which it was recorded.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArchiveEntry<V> {
    /// The recorded fitness value.
    pub fitness: V,
    /// The parameter vector that produced it.
    pub params: Vec<f64>,
    /// The evaluator's evaluation count when this entry was recorded.
    pub num_evals: u64,
}

/// Capacity-bounded top list of the best results seen.
///
/// Entries are kept sorted best-first under the scheme's ordering. A new
/// entry that ties an existing one ranks after it, so earlier results win
/// ties and repeated insertion of equal fitness values cannot churn the
/// list. When the capacity is exceeded, the worst-ranked entry is evicted.
///
/// The archive is owned by exactly one [`Evaluator`](crate::Evaluator);
/// it is not shared across evaluators.
///
/// # Examples
///
/// ```
/// use benchfn::{BoundedArchive, ScalarScheme};
///
/// let mut archive = BoundedArchive::new(ScalarScheme::minimize(), 2).unwrap();
/// archive.add_candidate(3.0, &[1.0], 1);
/// archive.add_candidate(1.0, &[2.0], 2);
/// archive.add_candidate(2.0, &[3.0], 3); // evicts fitness 3.0
///
/// assert_eq!(archive.best_fitness(), Some(&1.0));
/// assert_eq!(archive.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct BoundedArchive<S: FitnessScheme> {
    scheme: S,
    capacity: usize,
    entries: Vec<ArchiveEntry<S::Value>>,
}

impl<S: FitnessScheme> BoundedArchive<S> {
    /// Create an empty archive holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn new(scheme: S, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        Ok(Self {
            scheme,
            capacity,
            entries: Vec::new(),
        })
    }

    /// Insert a result, evicting the worst-ranked entry if the archive is
    /// full. Never fails for a valid fitness/params pair.
    pub fn add_candidate(&mut self, fitness: S::Value, params: &[f64], num_evals: u64) {
        // Skip entries that are better than or tied with the new fitness,
        // so ties keep insertion order.
        let position = self
            .entries
            .partition_point(|entry| !self.scheme.is_better(&fitness, &entry.fitness));

        if position == self.capacity {
            return;
        }
        self.entries.insert(
            position,
            ArchiveEntry {
                fitness,
                params: params.to_vec(),
                num_evals,
            },
        );
        self.entries.truncate(self.capacity);
    }

    /// The best entry recorded so far.
    #[must_use]
    pub fn best(&self) -> Option<&ArchiveEntry<S::Value>> {
        self.entries.first()
    }

    /// The best fitness recorded so far, by the scheme's ordering.
    #[must_use]
    pub fn best_fitness(&self) -> Option<&S::Value> {
        self.best().map(|entry| &entry.fitness)
    }

    /// Number of entries currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the archive holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries the archive retains.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate entries best-first.
    pub fn iter(&self) -> core::slice::Iter<'_, ArchiveEntry<S::Value>> {
        self.entries.iter()
    }

    /// The scheme that orders this archive.
    #[must_use]
    pub fn scheme(&self) -> &S {
        &self.scheme
    }
}

impl<'a, S: FitnessScheme> IntoIterator for &'a BoundedArchive<S> {
    type Item = &'a ArchiveEntry<S::Value>;
    type IntoIter = core::slice::Iter<'a, ArchiveEntry<S::Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
