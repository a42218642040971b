//! Turns a raw population snapshot into the point set the WFG core expects.
//!
//! The steps always run in this order, each one switched by the
//! [`IndicatorConfig`]:
//!
//! 1. **Translate** every point into comparison space with the configured
//!    normalizers.
//! 2. **Deduplicate** near-identical points (`deduplicate_first`).
//! 3. **Reduce** to the non-dominated subset (`reduce_to_non_dominated_first`).
//! 4. **Presort** by descending first objective (`presort`). This only makes
//!    limit sets cheaper to reduce; it never changes the hypervolume.
//! 5. **Filter** against the reference point according to the
//!    [`NonDominatedPolicy`].
//!
//! # Example
//!
//! ```
//! use hypervolume::IndicatorConfig;
//! use hypervolume::preprocess::preprocess;
//!
//! let config = IndicatorConfig::builder(2).build().unwrap();
//! let population = vec![
//!     vec![0.2, 0.8],
//!     vec![0.2, 0.8],  // duplicate
//!     vec![0.5, 0.9],  // dominated by (0.2, 0.8)
//!     vec![0.7, 0.1],
//!     vec![1.5, 0.05], // beyond the reference point
//! ];
//!
//! let points = preprocess(&population, &config).unwrap();
//! assert_eq!(points, vec![vec![0.7, 0.1], vec![0.2, 0.8]]);
//! ```

use core::cmp::Ordering;

use crate::config::IndicatorConfig;
use crate::error::{Error, Result};
use crate::indicator::Evaluated;
use crate::normalization::translate;
use crate::pareto::{dedupe, minimize_all, non_dominated_subset, weakly_dominates};
use crate::types::NonDominatedPolicy;

/// Runs the full pipeline over `population`.
///
/// An empty population, or one emptied by the reference-point filter, yields
/// an empty set.
///
/// # Errors
///
/// Returns `Error::DimensionMismatch` if any member's evaluation vector does
/// not have exactly `config.n_objectives()` values. Nothing is computed in
/// that case.
pub fn preprocess<E: Evaluated>(population: &[E], config: &IndicatorConfig) -> Result<Vec<Vec<f64>>> {
    check_dimensions(population, config.n_objectives())?;
    let directions = minimize_all(config.n_objectives());

    let mut points: Vec<Vec<f64>> = population
        .iter()
        .map(|e| translate(e.evaluation(), config.normalization()))
        .collect();
    trace_debug!(remaining = points.len(), "translated population");

    if config.deduplicate_first() {
        points = dedupe(points, config.duplicate_tolerance());
        trace_debug!(remaining = points.len(), "deduplicated population");
    }

    if config.reduce_to_non_dominated_first() {
        points = non_dominated_subset(points, &directions);
        trace_debug!(remaining = points.len(), "reduced to non-dominated set");
    }

    if config.presort() {
        presort(&mut points);
        trace_debug!(remaining = points.len(), "presorted by first objective");
    }

    match config.policy() {
        NonDominatedPolicy::Ignore => {
            points = filter_by_reference(points, config.reference_point());
            trace_debug!(remaining = points.len(), "filtered against reference point");
            if points.is_empty() {
                trace_debug!("no point reaches the reference point");
            }
        }
        NonDominatedPolicy::NoPolicy => {}
    }

    Ok(points)
}

/// Sorts points by descending first coordinate.
///
/// The sort is stable, so points tied on the first coordinate keep their
/// relative order.
pub fn presort(points: &mut [Vec<f64>]) {
    points.sort_by(|a, b| b[0].partial_cmp(&a[0]).unwrap_or(Ordering::Equal));
}

/// Keeps only the points at least as good as `reference_point` in every
/// objective (minimize sense).
#[must_use]
pub fn filter_by_reference(points: Vec<Vec<f64>>, reference_point: &[f64]) -> Vec<Vec<f64>> {
    let directions = minimize_all(reference_point.len());
    points
        .into_iter()
        .filter(|p| weakly_dominates(p, reference_point, &directions))
        .collect()
}

/// Fails fast on the first member whose length differs from `n_objectives`.
pub(crate) fn check_dimensions<E: Evaluated>(population: &[E], n_objectives: usize) -> Result<()> {
    match population
        .iter()
        .position(|e| e.evaluation().len() != n_objectives)
    {
        Some(point_index) => Err(Error::DimensionMismatch {
            expected: n_objectives,
            got: population[point_index].evaluation().len(),
            point_index,
        }),
        None => Ok(()),
    }
}
