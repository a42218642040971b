//! Pareto-dominance and duplicate filtering utilities.
//!
//! These are the small, independently testable filters that both the
//! preprocessing pipeline and the WFG core build on. Every function here is
//! pure: it reads its inputs and returns a new set.
//!
//! | Function | Purpose |
//! |---|---|
//! | [`dominates`] | Strict Pareto dominance between two points |
//! | [`weakly_dominates`] | "At least as good on every objective" |
//! | [`pareto_front_indices`] | Indices of the non-dominated members of a set |
//! | [`non_dominated_subset`] | The non-dominated members themselves |
//! | [`dedupe`] | Keep one representative per group of near-identical points |
//!
//! # Example
//!
//! ```
//! use hypervolume::Direction;
//! use hypervolume::pareto::{dedupe, non_dominated_subset, pareto_front_indices};
//!
//! let points = vec![
//!     vec![1.0, 5.0], // Pareto-optimal
//!     vec![5.0, 1.0], // Pareto-optimal
//!     vec![3.0, 3.0], // Pareto-optimal
//!     vec![4.0, 4.0], // Dominated by (3, 3)
//!     vec![3.0, 3.0 + 1e-12], // Near-duplicate of (3, 3)
//! ];
//! let dirs = [Direction::Minimize, Direction::Minimize];
//!
//! assert_eq!(pareto_front_indices(&points, &dirs), vec![0, 1, 2]);
//!
//! let unique = dedupe(points, 1e-9);
//! assert_eq!(unique.len(), 4);
//!
//! let front = non_dominated_subset(unique, &dirs);
//! assert_eq!(front, vec![vec![1.0, 5.0], vec![5.0, 1.0], vec![3.0, 3.0]]);
//! ```

use crate::types::Direction;

/// Returns `true` if point `a` Pareto-dominates point `b`.
///
/// A point dominates another if it is at least as good in all objectives
/// and strictly better in at least one, respecting the given directions.
/// Comparisons are exact; no tolerance is applied.
#[must_use]
pub fn dominates(a: &[f64], b: &[f64], directions: &[Direction]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), directions.len());

    let mut strictly_better = false;
    for ((&av, &bv), dir) in a.iter().zip(b).zip(directions) {
        let (better, worse) = match dir {
            Direction::Minimize => (av < bv, av > bv),
            Direction::Maximize => (av > bv, av < bv),
        };
        if worse {
            return false;
        }
        if better {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Returns `true` if `a` is at least as good as `b` in every objective.
///
/// Unlike [`dominates`], equal points weakly dominate each other.
#[must_use]
pub fn weakly_dominates(a: &[f64], b: &[f64], directions: &[Direction]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), directions.len());

    a.iter()
        .zip(b)
        .zip(directions)
        .all(|((&av, &bv), dir)| match dir {
            Direction::Minimize => av <= bv,
            Direction::Maximize => av >= bv,
        })
}

/// Returns the indices of the points not dominated by any other point.
///
/// Indices are returned in ascending order. Exact duplicates do not dominate
/// each other, so every copy of a non-dominated point is kept.
///
/// Complexity: O(M * N^2) where M = objectives, N = points.
#[must_use]
pub fn pareto_front_indices(points: &[Vec<f64>], directions: &[Direction]) -> Vec<usize> {
    (0..points.len())
        .filter(|&i| !is_dominated(points, i, directions))
        .collect()
}

/// Reduces `points` to its non-dominated subset, preserving order.
///
/// Takes ownership so that surviving points are moved rather than cloned.
#[must_use]
pub fn non_dominated_subset(points: Vec<Vec<f64>>, directions: &[Direction]) -> Vec<Vec<f64>> {
    let dominated: Vec<bool> = (0..points.len())
        .map(|i| is_dominated(&points, i, directions))
        .collect();

    points
        .into_iter()
        .zip(dominated)
        .filter_map(|(p, d)| (!d).then_some(p))
        .collect()
}

/// Collapses points that are coordinate-wise equal within `tolerance`.
///
/// Points are scanned in order; a point is kept unless every coordinate
/// lies within `tolerance` of an already kept point. The first member of
/// each group is therefore its representative.
#[must_use]
pub fn dedupe(points: Vec<Vec<f64>>, tolerance: f64) -> Vec<Vec<f64>> {
    let mut unique: Vec<Vec<f64>> = Vec::with_capacity(points.len());
    for p in points {
        if !unique.iter().any(|u| approx_equal(u, &p, tolerance)) {
            unique.push(p);
        }
    }
    unique
}

/// All-minimize directions for `n_objectives` objectives.
pub(crate) fn minimize_all(n_objectives: usize) -> Vec<Direction> {
    vec![Direction::Minimize; n_objectives]
}

fn is_dominated(points: &[Vec<f64>], i: usize, directions: &[Direction]) -> bool {
    points
        .iter()
        .enumerate()
        .any(|(j, q)| j != i && dominates(q, &points[i], directions))
}

fn approx_equal(a: &[f64], b: &[f64], tolerance: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| (x - y).abs() <= tolerance)
}
