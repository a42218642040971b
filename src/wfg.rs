//! Exact hypervolume by exclusive-contribution decomposition (WFG).
//!
//! The region dominated by a point set `S` and bounded by a reference point
//! is split into `n` non-overlapping slices. Slice `k` is point `k`'s own box
//! minus whatever the points after it already cover:
//!
//! ```text
//! hv(S)         = sum over k of exclusive(S, k)
//! exclusive(S, k) = inclusive(S[k]) - hv(nd(limit(S, k)))
//! limit(S, k)   = { max(p, S[k]) coordinate-wise : p in S[k+1..] }
//! ```
//!
//! where `nd` keeps the non-dominated members. Each recursive call works on
//! a strictly smaller set, so the recursion depth is bounded by `n`.
//!
//! All points are in comparison space, where every objective is minimized.
//! Coordinates are compared exactly; tolerance is a preprocessing concern.
//!
//! # Example
//!
//! ```
//! use hypervolume::wfg::Wfg;
//!
//! let reference = [5.0, 5.0];
//! let wfg = Wfg::new(&reference);
//! let front = vec![vec![0.0, 4.0], vec![2.0, 2.0], vec![3.0, 0.0]];
//!
//! assert!((wfg.hypervolume(&front) - 15.0).abs() < 1e-12);
//! assert_eq!(wfg.exclusive_contributions(&front), vec![2.0, 3.0, 10.0]);
//! ```

use crate::pareto::{minimize_all, non_dominated_subset};
use crate::types::Direction;

/// The WFG engine for one reference point.
///
/// Every point passed to its methods must have as many coordinates as the
/// reference point. This is a precondition, checked only in debug builds;
/// [`HypervolumeIndicator`](crate::HypervolumeIndicator) validates
/// populations before they reach the engine.
#[derive(Debug, Clone)]
pub struct Wfg<'a> {
    reference_point: &'a [f64],
    directions: Vec<Direction>,
}

impl<'a> Wfg<'a> {
    /// Creates an engine measuring volume up to `reference_point`.
    #[must_use]
    pub fn new(reference_point: &'a [f64]) -> Self {
        Self {
            reference_point,
            directions: minimize_all(reference_point.len()),
        }
    }

    /// Returns the number of objectives (the reference point's length).
    #[must_use]
    pub fn n_objectives(&self) -> usize {
        self.reference_point.len()
    }

    /// Volume of the axis-aligned box between `point` and the reference point.
    ///
    /// Always `0.0` for a single objective: one-dimensional volume is not
    /// measured by this engine, so single-objective sets have hypervolume
    /// zero whatever their content.
    #[must_use]
    pub fn inclusive_volume(&self, point: &[f64]) -> f64 {
        debug_assert_eq!(point.len(), self.n_objectives());

        if self.n_objectives() == 1 {
            return 0.0;
        }
        point
            .iter()
            .zip(self.reference_point)
            .map(|(&p, &r)| (r - p).abs())
            .product()
    }

    /// Points after index `k`, each clipped coordinate-wise to be no better
    /// than `points[k]`.
    ///
    /// Returns `None` when `k` is the last index.
    ///
    /// # Panics
    ///
    /// Panics if `k` is out of bounds.
    #[must_use]
    pub fn limit_set(&self, points: &[Vec<f64>], k: usize) -> Option<Vec<Vec<f64>>> {
        let pivot = &points[k];
        let tail = &points[k + 1..];
        if tail.is_empty() {
            return None;
        }

        Some(
            tail.iter()
                .map(|p| p.iter().zip(pivot).map(|(&a, &b)| a.max(b)).collect())
                .collect(),
        )
    }

    /// The part of `points[k]`'s box not covered by any point after it.
    ///
    /// # Panics
    ///
    /// Panics if `k` is out of bounds.
    #[must_use]
    pub fn exclusive_contribution(&self, points: &[Vec<f64>], k: usize) -> f64 {
        let inclusive = self.inclusive_volume(&points[k]);
        match self.limit_set(points, k) {
            None => inclusive,
            Some(limit) => {
                inclusive - self.hypervolume(&non_dominated_subset(limit, &self.directions))
            }
        }
    }

    /// Total hypervolume of `points`, by plain recursion.
    ///
    /// `points` should be non-dominated; the result for a set with dominated
    /// members is still the volume of the union, but takes longer.
    #[must_use]
    pub fn hypervolume(&self, points: &[Vec<f64>]) -> f64 {
        let mut total = 0.0;
        for k in 0..points.len() {
            total += self.exclusive_contribution(points, k);
        }
        total
    }

    /// Total hypervolume of `points`, driven by an explicit frame stack.
    ///
    /// Visits the same sub-problems in the same order as
    /// [`hypervolume`](Self::hypervolume) and accumulates them identically,
    /// so both return the same bits. Frames live on the heap, so very large
    /// sets cannot overflow the thread's stack.
    #[must_use]
    pub fn hypervolume_iterative(&self, points: &[Vec<f64>]) -> f64 {
        let mut stack = vec![Frame::new(points.to_vec())];

        while let Some(frame) = stack.last_mut() {
            if frame.next == frame.points.len() {
                let volume = frame.total;
                stack.pop();
                match stack.last_mut() {
                    Some(parent) => {
                        parent.total += parent.inclusive - volume;
                        parent.next += 1;
                    }
                    None => return volume,
                }
                continue;
            }

            let k = frame.next;
            let inclusive = self.inclusive_volume(&frame.points[k]);
            match self.limit_set(&frame.points, k) {
                None => {
                    frame.total += inclusive;
                    frame.next += 1;
                }
                Some(limit) => {
                    frame.inclusive = inclusive;
                    stack.push(Frame::new(non_dominated_subset(limit, &self.directions)));
                }
            }
        }

        0.0
    }

    /// Exclusive contribution of every point, in input order.
    ///
    /// The contributions sum to [`hypervolume`](Self::hypervolume).
    #[must_use]
    pub fn exclusive_contributions(&self, points: &[Vec<f64>]) -> Vec<f64> {
        (0..points.len())
            .map(|k| self.exclusive_contribution(points, k))
            .collect()
    }
}

/// A pending `hypervolume` call: its set, the next index to visit, the sum
/// so far, and the inclusive volume of the point whose limit set is being
/// measured by the frame above it.
struct Frame {
    points: Vec<Vec<f64>>,
    next: usize,
    total: f64,
    inclusive: f64,
}

impl Frame {
    fn new(points: Vec<Vec<f64>>) -> Self {
        Self {
            points,
            next: 0,
            total: 0.0,
            inclusive: 0.0,
        }
    }
}
