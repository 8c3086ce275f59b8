//! Fitness representations and the comparison policies that order them.
//!
//! A [`FitnessScheme`] decides everything the evaluation layer needs to
//! know about fitness values without knowing their shape: which of two
//! values is better, what "not yet evaluated" looks like, and what the
//! worst possible value is. The [`Evaluator`](crate::Evaluator) delegates
//! every comparison here, so the same evaluation code serves scalar and
//! vector (multi-objective) fitness alike.
//!
//! Two schemes are built in:
//!
//! - [`ScalarScheme`] — real-valued fitness, minimize or maximize, with a
//!   total order over all `f64` values including NaN and infinities.
//! - [`VectorScheme`] — fixed-length vector fitness with a pluggable
//!   [`VectorOrdering`] (weighted sum or Pareto dominance). The scheme,
//!   not the Evaluator, decides how vectors compare.
//!
//! # Example
//!
//! ```
//! use benchfn::fitness::{FitnessScheme, ScalarScheme};
//!
//! let scheme = ScalarScheme::minimize();
//! assert!(scheme.is_better(&1.0, &2.0));
//! assert!(!scheme.is_better(&2.0, &1.0));
//! // Non-finite fitness is valid but always worse than finite fitness.
//! assert!(scheme.is_better(&1e300, &f64::NAN));
//! assert!(scheme.is_better(&1e300, &f64::INFINITY));
//! ```

use core::fmt;

use crate::pareto;
use crate::types::Direction;

/// Comparison policy for a fitness representation.
///
/// Implementers must make [`is_better`](FitnessScheme::is_better) a strict
/// weak ordering: irreflexive, transitive, and consistent with a single
/// canonical "worse" direction declared by the scheme. (The one sanctioned
/// exception is [`VectorOrdering::Dominance`], a strict partial order —
/// see its documentation.)
///
/// "Not yet evaluated" is typed rather than encoded in the value: a
/// candidate's fitness is `Option<Value>` and the NA sentinel is `None`.
/// This keeps NaN available as a real, comparable fitness for pathological
/// objective outputs, distinct from "never evaluated".
pub trait FitnessScheme: Clone {
    /// The fitness representation this scheme orders.
    type Value: Clone + PartialEq + fmt::Debug;

    /// Return `true` iff `a` is strictly better than `b`.
    fn is_better(&self, a: &Self::Value, b: &Self::Value) -> bool;

    /// A sentinel value that is never better than any reachable fitness.
    fn worst_fitness(&self) -> Self::Value;

    /// The "not yet evaluated" sentinel.
    ///
    /// Always `None`: a missing fitness is not a `Value` at all, so it can
    /// never compare as better than a real fitness.
    fn na_fitness(&self) -> Option<Self::Value> {
        None
    }

    /// Return `true` iff `fitness` is the "not yet evaluated" sentinel.
    fn is_na(&self, fitness: &Option<Self::Value>) -> bool {
        fitness.is_none()
    }

    /// Short name of the fitness representation, for reporting.
    fn fitness_type(&self) -> &'static str;

    /// Return `true` iff `a` and `b` are within absolute tolerance `atol`
    /// of each other. Used by convergence checks against a known optimum.
    fn within_tolerance(&self, a: &Self::Value, b: &Self::Value, atol: f64) -> bool;
}

/// Finiteness rank used by the scalar total order: finite values beat
/// infinities, infinities beat NaN.
fn finiteness_class(v: f64) -> u8 {
    if v.is_finite() {
        0
    } else if v.is_nan() {
        2
    } else {
        1
    }
}

/// Total "strictly better" order over all `f64` values for one direction.
///
/// Finite values compare by value in the given direction. Any non-finite
/// value is worse than any finite value; between infinities the
/// direction's better infinity wins; NaN is never better than anything.
pub(crate) fn better_scalar(direction: Direction, a: f64, b: f64) -> bool {
    let (ca, cb) = (finiteness_class(a), finiteness_class(b));
    if ca != cb {
        return ca < cb;
    }
    if ca == 2 {
        // NaN vs NaN: tie.
        return false;
    }
    match direction {
        Direction::Minimize => a < b,
        Direction::Maximize => a > b,
    }
}

/// Scalar real-valued fitness, minimize or maximize.
///
/// The ordering is total over all `f64` values, so a pathological
/// objective output (NaN, ±∞) is a valid fitness that deterministically
/// ranks worse than every finite fitness. The worst sentinel is NaN,
/// which nothing ranks below.
///
/// # Examples
///
/// ```
/// use benchfn::fitness::{FitnessScheme, ScalarScheme};
///
/// let minimize = ScalarScheme::minimize();
/// assert!(minimize.is_better(&0.5, &2.0));
///
/// let maximize = ScalarScheme::maximize();
/// assert!(maximize.is_better(&2.0, &0.5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScalarScheme {
    direction: Direction,
}

impl ScalarScheme {
    /// Create a scheme with the given direction.
    #[must_use]
    pub const fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// Lower fitness is better.
    #[must_use]
    pub const fn minimize() -> Self {
        Self::new(Direction::Minimize)
    }

    /// Higher fitness is better.
    #[must_use]
    pub const fn maximize() -> Self {
        Self::new(Direction::Maximize)
    }

    /// Return the optimization direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl Default for ScalarScheme {
    fn default() -> Self {
        Self::minimize()
    }
}

impl FitnessScheme for ScalarScheme {
    type Value = f64;

    fn is_better(&self, a: &f64, b: &f64) -> bool {
        better_scalar(self.direction, *a, *b)
    }

    fn worst_fitness(&self) -> f64 {
        f64::NAN
    }

    fn fitness_type(&self) -> &'static str {
        "scalar"
    }

    fn within_tolerance(&self, a: &f64, b: &f64, atol: f64) -> bool {
        a.is_finite() && b.is_finite() && (a - b).abs() <= atol
    }
}

/// How a [`VectorScheme`] turns per-objective values into one ordering.
#[derive(Clone, Debug, PartialEq)]
pub enum VectorOrdering {
    /// Scalarize with one weight per objective, then compare with the
    /// scalar total order in minimize-space. A strict weak ordering.
    WeightedSum(Vec<f64>),
    /// Strict Pareto dominance: better iff at least as good in every
    /// objective and strictly better in at least one.
    ///
    /// This is a strict partial order, not a weak ordering — mutually
    /// non-dominated values rank as ties, and ranking a population with
    /// it groups rather than linearizes incomparable values. Use
    /// [`VectorOrdering::WeightedSum`] when a full ordering is required.
    Dominance,
}

/// Fixed-length vector fitness for multi-objective use.
///
/// Each objective carries its own [`Direction`]; the [`VectorOrdering`]
/// decides how the per-objective comparisons combine. Non-finite
/// components follow the same rule as [`ScalarScheme`]: worse than any
/// finite component, deterministically ordered.
///
/// # Examples
///
/// ```
/// use benchfn::fitness::{FitnessScheme, VectorOrdering, VectorScheme};
/// use benchfn::Direction;
///
/// let scheme = VectorScheme::new(
///     vec![Direction::Minimize, Direction::Minimize],
///     VectorOrdering::Dominance,
/// );
/// assert!(scheme.is_better(&vec![1.0, 1.0], &vec![2.0, 2.0]));
/// // Incomparable under dominance: neither is better.
/// assert!(!scheme.is_better(&vec![1.0, 3.0], &vec![3.0, 1.0]));
/// assert!(!scheme.is_better(&vec![3.0, 1.0], &vec![1.0, 3.0]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct VectorScheme {
    directions: Vec<Direction>,
    ordering: VectorOrdering,
}

impl VectorScheme {
    /// Create a scheme over `directions.len()` objectives.
    #[must_use]
    pub fn new(directions: Vec<Direction>, ordering: VectorOrdering) -> Self {
        Self {
            directions,
            ordering,
        }
    }

    /// All-minimize scheme with Pareto dominance over `num_objectives`.
    #[must_use]
    pub fn minimize_all(num_objectives: usize) -> Self {
        Self::new(
            vec![Direction::Minimize; num_objectives],
            VectorOrdering::Dominance,
        )
    }

    /// Number of objectives.
    #[must_use]
    pub fn num_objectives(&self) -> usize {
        self.directions.len()
    }

    /// Per-objective optimization directions.
    #[must_use]
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Map a vector into minimize-space and scalarize with `weights`.
    fn scalarize(&self, values: &[f64], weights: &[f64]) -> f64 {
        debug_assert_eq!(values.len(), weights.len());
        values
            .iter()
            .zip(weights)
            .zip(&self.directions)
            .map(|((&v, &w), dir)| match dir {
                Direction::Minimize => w * v,
                Direction::Maximize => -(w * v),
            })
            .sum()
    }
}

impl FitnessScheme for VectorScheme {
    type Value = Vec<f64>;

    fn is_better(&self, a: &Vec<f64>, b: &Vec<f64>) -> bool {
        debug_assert_eq!(a.len(), self.directions.len());
        debug_assert_eq!(b.len(), self.directions.len());
        match &self.ordering {
            VectorOrdering::WeightedSum(weights) => better_scalar(
                Direction::Minimize,
                self.scalarize(a, weights),
                self.scalarize(b, weights),
            ),
            VectorOrdering::Dominance => pareto::dominates(a, b, &self.directions),
        }
    }

    fn worst_fitness(&self) -> Vec<f64> {
        vec![f64::NAN; self.directions.len()]
    }

    fn fitness_type(&self) -> &'static str {
        "vector"
    }

    fn within_tolerance(&self, a: &Vec<f64>, b: &Vec<f64>, atol: f64) -> bool {
        a.len() == b.len()
            && a.iter()
                .zip(b)
                .all(|(&x, &y)| x.is_finite() && y.is_finite() && (x - y).abs() <= atol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_na_invariant() {
        let scheme = ScalarScheme::minimize();
        assert!(scheme.is_na(&scheme.na_fitness()));
        assert!(!scheme.is_na(&Some(1.0)));
        // NaN is a real fitness, not the NA sentinel.
        assert!(!scheme.is_na(&Some(f64::NAN)));

        let vector = VectorScheme::minimize_all(2);
        assert!(vector.is_na(&vector.na_fitness()));
    }

    #[test]
    fn test_scalar_minimize_order() {
        let scheme = ScalarScheme::minimize();
        assert!(scheme.is_better(&1.0, &2.0));
        assert!(!scheme.is_better(&2.0, &1.0));
        assert!(!scheme.is_better(&1.0, &1.0)); // irreflexive on ties
    }

    #[test]
    fn test_scalar_maximize_order() {
        let scheme = ScalarScheme::maximize();
        assert!(scheme.is_better(&2.0, &1.0));
        assert!(!scheme.is_better(&1.0, &2.0));
    }

    #[test]
    fn test_worst_fitness_never_better() {
        let scheme = ScalarScheme::minimize();
        let worst = scheme.worst_fitness();
        for &x in &[0.0, -1e300, 1e300, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(!scheme.is_better(&worst, &x), "worst beat {x}");
        }
        // Every finite fitness beats the worst sentinel.
        for &x in &[0.0, -1e300, 1e300] {
            assert!(scheme.is_better(&x, &worst));
        }
    }

    #[test]
    fn test_non_finite_worse_than_finite() {
        for scheme in [ScalarScheme::minimize(), ScalarScheme::maximize()] {
            assert!(scheme.is_better(&1e12, &f64::NAN));
            assert!(scheme.is_better(&1e12, &f64::INFINITY));
            assert!(scheme.is_better(&-1e12, &f64::NEG_INFINITY));
            assert!(!scheme.is_better(&f64::NAN, &0.0));
            assert!(!scheme.is_better(&f64::INFINITY, &0.0));
        }
        // Between infinities, the direction's better infinity wins, and
        // both beat NaN.
        let minimize = ScalarScheme::minimize();
        assert!(minimize.is_better(&f64::NEG_INFINITY, &f64::INFINITY));
        assert!(minimize.is_better(&f64::INFINITY, &f64::NAN));
        let maximize = ScalarScheme::maximize();
        assert!(maximize.is_better(&f64::INFINITY, &f64::NEG_INFINITY));
    }

    #[test]
    fn test_scalar_order_is_transitive_on_mixed_values() {
        let scheme = ScalarScheme::minimize();
        let chain = [-3.0, 0.0, 7.5, f64::NEG_INFINITY, f64::INFINITY, f64::NAN];
        // chain is ordered best-to-worst; every earlier element must beat
        // every later one and never the reverse.
        for i in 0..chain.len() {
            for j in (i + 1)..chain.len() {
                assert!(scheme.is_better(&chain[i], &chain[j]), "{i} vs {j}");
                assert!(!scheme.is_better(&chain[j], &chain[i]), "{j} vs {i}");
            }
        }
    }

    #[test]
    fn test_weighted_sum_ordering() {
        let scheme = VectorScheme::new(
            vec![Direction::Minimize, Direction::Maximize],
            VectorOrdering::WeightedSum(vec![1.0, 2.0]),
        );
        // a: 1 - 2*3 = -5, b: 2 - 2*1 = 0 in minimize-space
        assert!(scheme.is_better(&vec![1.0, 3.0], &vec![2.0, 1.0]));
        assert!(!scheme.is_better(&vec![2.0, 1.0], &vec![1.0, 3.0]));
    }

    #[test]
    fn test_dominance_ordering() {
        let scheme = VectorScheme::minimize_all(2);
        assert!(scheme.is_better(&vec![1.0, 1.0], &vec![1.0, 2.0]));
        assert!(!scheme.is_better(&vec![1.0, 1.0], &vec![1.0, 1.0])); // irreflexive
        // Finite vector dominates the all-NaN worst sentinel.
        assert!(scheme.is_better(&vec![5.0, 5.0], &scheme.worst_fitness()));
        assert!(!scheme.is_better(&scheme.worst_fitness(), &vec![5.0, 5.0]));
    }

    #[test]
    fn test_within_tolerance() {
        let scheme = ScalarScheme::minimize();
        assert!(scheme.within_tolerance(&1.0, &1.05, 0.1));
        assert!(!scheme.within_tolerance(&1.0, &1.2, 0.1));
        assert!(!scheme.within_tolerance(&f64::NAN, &1.0, 1.0));

        let vector = VectorScheme::minimize_all(2);
        assert!(vector.within_tolerance(&vec![1.0, 2.0], &vec![1.01, 1.99], 0.1));
        assert!(!vector.within_tolerance(&vec![1.0, 2.0], &vec![1.5, 2.0], 0.1));
    }
}
