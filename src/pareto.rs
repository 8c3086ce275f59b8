//! Pareto dominance utilities for vector-valued fitness.
//!
//! The pairwise comparison used by
//! [`VectorOrdering::Dominance`](crate::fitness::VectorOrdering) lives
//! here, together with the front-ranking helpers an evolutionary algorithm
//! needs when it works with vector fitness beyond pairwise comparison:
//!
//! | Function | Purpose |
//! |---|---|
//! | [`non_dominated_sort`] | Rank solutions into successive fronts (front 0, 1, …) |
//! | [`pareto_front_indices`] | Filter to non-dominated (Pareto-optimal) solutions only |
//!
//! Per-component comparisons use the same total order as
//! [`ScalarScheme`](crate::fitness::ScalarScheme): non-finite values are
//! worse than finite ones and ordered deterministically, so a solution
//! with a NaN objective never blocks a finite solution from a front.
//!
//! # Example
//!
//! ```
//! use benchfn::pareto::{non_dominated_sort, pareto_front_indices};
//! use benchfn::Direction;
//!
//! let solutions = vec![
//!     vec![1.0, 5.0], // Pareto-optimal
//!     vec![5.0, 1.0], // Pareto-optimal
//!     vec![3.0, 3.0], // Pareto-optimal
//!     vec![4.0, 4.0], // dominated by (3, 3)
//! ];
//! let dirs = [Direction::Minimize, Direction::Minimize];
//!
//! let fronts = non_dominated_sort(&solutions, &dirs);
//! assert_eq!(fronts.len(), 2);
//!
//! let mut front = pareto_front_indices(&solutions, &dirs);
//! front.sort();
//! assert_eq!(front, vec![0, 1, 2]);
//! ```

use crate::fitness::better_scalar;
use crate::types::Direction;

/// Returns `true` if solution `a` Pareto-dominates solution `b`.
///
/// A solution dominates another if it is at least as good in all
/// objectives and strictly better in at least one, respecting the given
/// directions.
pub(crate) fn dominates(a: &[f64], b: &[f64], directions: &[Direction]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), directions.len());

    let mut strictly_better = false;
    for ((&av, &bv), &dir) in a.iter().zip(b.iter()).zip(directions.iter()) {
        if better_scalar(dir, bv, av) {
            return false;
        }
        if better_scalar(dir, av, bv) {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Compute non-dominated sorting of a set of solutions.
///
/// Return a vec of fronts, where `fronts[0]` is the Pareto front
/// (non-dominated solutions), `fronts[1]` is the next-best front
/// (dominated only by front 0), and so on. Each inner vec contains
/// indices into the original `solutions` slice.
///
/// Use the fast non-dominated sorting algorithm from Deb et al. (2002)
/// with O(M × N²) complexity, where M is the number of objectives and N
/// is the number of solutions.
#[must_use]
pub fn non_dominated_sort(solutions: &[Vec<f64>], directions: &[Direction]) -> Vec<Vec<usize>> {
    let n = solutions.len();
    if n == 0 {
        return Vec::new();
    }

    // S_p: set of solutions dominated by p
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    // n_p: domination count for p
    let mut domination_count: Vec<usize> = vec![0; n];

    for i in 0..n {
        for j in (i + 1)..n {
            if dominates(&solutions[i], &solutions[j], directions) {
                dominated_by[i].push(j);
                domination_count[j] += 1;
            } else if dominates(&solutions[j], &solutions[i], directions) {
                dominated_by[j].push(i);
                domination_count[i] += 1;
            }
        }
    }

    let mut fronts: Vec<Vec<usize>> = Vec::new();
    let mut current_front: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();

    while !current_front.is_empty() {
        let mut next_front: Vec<usize> = Vec::new();
        for &p in &current_front {
            for &q in &dominated_by[p] {
                domination_count[q] -= 1;
                if domination_count[q] == 0 {
                    next_front.push(q);
                }
            }
        }
        fronts.push(current_front);
        current_front = next_front;
    }

    fronts
}

/// Filter solutions to return only non-dominated (Pareto-optimal) indices.
///
/// Equivalent to `non_dominated_sort(solutions, directions)[0]` but
/// communicates the intent more clearly. Use this when you only need the
/// Pareto front and not the full ranking.
#[must_use]
pub fn pareto_front_indices(solutions: &[Vec<f64>], directions: &[Direction]) -> Vec<usize> {
    let fronts = non_dominated_sort(solutions, directions);
    fronts.into_iter().next().unwrap_or_default()
}
