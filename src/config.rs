//! Immutable configuration for the hypervolume indicator.
//!
//! Build one with [`IndicatorConfig::builder`]. Every setting has a default,
//! so the shortest valid configuration only names the objective count:
//!
//! ```
//! use hypervolume::{IndicatorConfig, NonDominatedPolicy};
//!
//! let config = IndicatorConfig::builder(3).build().unwrap();
//! assert_eq!(config.n_objectives(), 3);
//! assert_eq!(config.reference_point(), &[1.0, 1.0, 1.0]);
//! assert_eq!(config.policy(), NonDominatedPolicy::Ignore);
//! assert!(config.presort());
//! ```
//!
//! Validation happens once, in [`IndicatorConfigBuilder::build`], so a
//! constructed configuration is always internally consistent.

use core::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::normalization::{Normalization, Normalizer};
use crate::types::{NonDominatedPolicy, Traversal};

/// Default tolerance for collapsing near-identical points.
pub const DEFAULT_DUPLICATE_TOLERANCE: f64 = 1e-9;

/// Validated, read-only settings shared by every evaluation of an indicator.
///
/// Cloning is cheap: normalizers are reference-counted and shared.
#[derive(Clone)]
pub struct IndicatorConfig {
    n_objectives: usize,
    normalization: Normalization,
    reference_point: Vec<f64>,
    presort: bool,
    policy: NonDominatedPolicy,
    deduplicate_first: bool,
    reduce_to_non_dominated_first: bool,
    duplicate_tolerance: f64,
    traversal: Traversal,
}

impl IndicatorConfig {
    /// Creates a builder for a problem with `n_objectives` objectives.
    #[must_use]
    pub fn builder(n_objectives: usize) -> IndicatorConfigBuilder {
        IndicatorConfigBuilder::new(n_objectives)
    }

    /// Returns the number of objectives (M).
    #[must_use]
    pub fn n_objectives(&self) -> usize {
        self.n_objectives
    }

    /// Returns the per-objective normalizers.
    ///
    /// Empty when no normalization was configured; otherwise exactly
    /// [`n_objectives`](Self::n_objectives) entries long.
    #[must_use]
    pub fn normalization(&self) -> &[Option<Arc<dyn Normalizer>>] {
        &self.normalization
    }

    /// Returns the reference point in comparison space.
    #[must_use]
    pub fn reference_point(&self) -> &[f64] {
        &self.reference_point
    }

    /// Returns whether points are sorted by their first objective before
    /// the WFG core runs.
    #[must_use]
    pub fn presort(&self) -> bool {
        self.presort
    }

    /// Returns the policy for points beyond the reference point.
    #[must_use]
    pub fn policy(&self) -> NonDominatedPolicy {
        self.policy
    }

    /// Returns whether near-identical points are collapsed first.
    #[must_use]
    pub fn deduplicate_first(&self) -> bool {
        self.deduplicate_first
    }

    /// Returns whether dominated points are removed first.
    #[must_use]
    pub fn reduce_to_non_dominated_first(&self) -> bool {
        self.reduce_to_non_dominated_first
    }

    /// Returns the tolerance used when deduplicating.
    #[must_use]
    pub fn duplicate_tolerance(&self) -> f64 {
        self.duplicate_tolerance
    }

    /// Returns how the WFG decomposition is driven.
    #[must_use]
    pub fn traversal(&self) -> Traversal {
        self.traversal
    }
}

impl fmt::Debug for IndicatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let normalized: Vec<bool> = self.normalization.iter().map(Option::is_some).collect();
        f.debug_struct("IndicatorConfig")
            .field("n_objectives", &self.n_objectives)
            .field("normalized", &normalized)
            .field("reference_point", &self.reference_point)
            .field("presort", &self.presort)
            .field("policy", &self.policy)
            .field("deduplicate_first", &self.deduplicate_first)
            .field(
                "reduce_to_non_dominated_first",
                &self.reduce_to_non_dominated_first,
            )
            .field("duplicate_tolerance", &self.duplicate_tolerance)
            .field("traversal", &self.traversal)
            .finish()
    }
}

/// Builder for [`IndicatorConfig`].
#[derive(Clone)]
pub struct IndicatorConfigBuilder {
    n_objectives: usize,
    normalization: Option<Normalization>,
    reference_point: Option<Vec<f64>>,
    presort: bool,
    policy: NonDominatedPolicy,
    deduplicate_first: bool,
    reduce_to_non_dominated_first: bool,
    duplicate_tolerance: f64,
    traversal: Traversal,
    out_of_range_objective: Option<usize>,
}

impl IndicatorConfigBuilder {
    fn new(n_objectives: usize) -> Self {
        Self {
            n_objectives,
            normalization: None,
            reference_point: None,
            presort: true,
            policy: NonDominatedPolicy::default(),
            deduplicate_first: true,
            reduce_to_non_dominated_first: true,
            duplicate_tolerance: DEFAULT_DUPLICATE_TOLERANCE,
            traversal: Traversal::default(),
            out_of_range_objective: None,
        }
    }

    /// Sets the whole normalization set, one optional normalizer per objective.
    #[must_use]
    pub fn normalizations(mut self, normalization: Normalization) -> Self {
        self.normalization = Some(normalization);
        self
    }

    /// Sets the normalizer for a single objective.
    ///
    /// Objectives not given a normalizer keep their raw values. An
    /// out-of-range `objective` is remembered and reported by
    /// [`build`](Self::build).
    #[must_use]
    pub fn normalizer(mut self, objective: usize, normalizer: impl Normalizer + 'static) -> Self {
        let n_objectives = self.n_objectives;
        let slots = self
            .normalization
            .get_or_insert_with(|| vec![None; n_objectives]);
        match slots.get_mut(objective) {
            Some(slot) => {
                let normalizer: Arc<dyn Normalizer> = Arc::new(normalizer);
                *slot = Some(normalizer);
            }
            None => {
                self.out_of_range_objective.get_or_insert(objective);
            }
        }
        self
    }

    /// Sets the reference point. Default: all ones.
    #[must_use]
    pub fn reference_point(mut self, reference_point: Vec<f64>) -> Self {
        self.reference_point = Some(reference_point);
        self
    }

    /// Enables or disables presorting. Default: `true`.
    #[must_use]
    pub fn presort(mut self, presort: bool) -> Self {
        self.presort = presort;
        self
    }

    /// Sets the non-dominating point policy. Default: [`NonDominatedPolicy::Ignore`].
    #[must_use]
    pub fn policy(mut self, policy: NonDominatedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enables or disables deduplication. Default: `true`.
    #[must_use]
    pub fn deduplicate_first(mut self, enabled: bool) -> Self {
        self.deduplicate_first = enabled;
        self
    }

    /// Enables or disables the non-dominated reduction. Default: `true`.
    #[must_use]
    pub fn reduce_to_non_dominated_first(mut self, enabled: bool) -> Self {
        self.reduce_to_non_dominated_first = enabled;
        self
    }

    /// Sets the deduplication tolerance. Default: `1e-9`.
    #[must_use]
    pub fn duplicate_tolerance(mut self, tolerance: f64) -> Self {
        self.duplicate_tolerance = tolerance;
        self
    }

    /// Sets the traversal strategy. Default: [`Traversal::Recursive`].
    #[must_use]
    pub fn traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Validates the settings and builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidObjectiveCount` if the objective count is zero.
    /// Returns `Error::ReferencePointDimensionMismatch` if the reference point
    /// length differs from the objective count.
    /// Returns `Error::NonFiniteReferencePoint` if a reference coordinate is NaN or infinite.
    /// Returns `Error::NormalizerObjectiveOutOfRange` if
    /// [`normalizer`](Self::normalizer) named an objective index that does
    /// not exist.
    /// Returns `Error::NormalizationDimensionMismatch` if the normalization set
    /// length differs from the objective count.
    /// Returns `Error::InvalidTolerance` if the tolerance is negative or NaN.
    pub fn build(self) -> Result<IndicatorConfig> {
        let m = self.n_objectives;
        if m == 0 {
            return Err(Error::InvalidObjectiveCount(m));
        }

        let reference_point = self.reference_point.unwrap_or_else(|| vec![1.0; m]);
        if reference_point.len() != m {
            return Err(Error::ReferencePointDimensionMismatch {
                expected: m,
                got: reference_point.len(),
            });
        }
        if let Some(index) = reference_point.iter().position(|v| !v.is_finite()) {
            return Err(Error::NonFiniteReferencePoint { index });
        }

        if let Some(objective) = self.out_of_range_objective {
            return Err(Error::NormalizerObjectiveOutOfRange {
                objective,
                n_objectives: m,
            });
        }

        let normalization = match self.normalization {
            Some(n) if n.len() != m => {
                return Err(Error::NormalizationDimensionMismatch {
                    expected: m,
                    got: n.len(),
                });
            }
            // An all-`None` set is the same as no normalization.
            Some(n) if n.iter().all(Option::is_none) => Vec::new(),
            Some(n) => n,
            None => Vec::new(),
        };

        if self.duplicate_tolerance.is_nan() || self.duplicate_tolerance < 0.0 {
            return Err(Error::InvalidTolerance(self.duplicate_tolerance));
        }

        Ok(IndicatorConfig {
            n_objectives: m,
            normalization,
            reference_point,
            presort: self.presort,
            policy: self.policy,
            deduplicate_first: self.deduplicate_first,
            reduce_to_non_dominated_first: self.reduce_to_non_dominated_first,
            duplicate_tolerance: self.duplicate_tolerance,
            traversal: self.traversal,
        })
    }
}
