//! The hypervolume indicator: configuration, preprocessing and the WFG core
//! wired into one callable.
//!
//! # Examples
//!
//! ```
//! use hypervolume::{HypervolumeIndicator, IndicatorConfig};
//!
//! let config = IndicatorConfig::builder(2)
//!     .reference_point(vec![5.0, 5.0])
//!     .build()
//!     .unwrap();
//! let indicator = HypervolumeIndicator::new(config);
//!
//! let population = vec![[0.0, 4.0], [2.0, 2.0], [3.0, 0.0], [4.0, 4.0]];
//! let hv = indicator.evaluate(&population).unwrap();
//! assert!((hv - 15.0).abs() < 1e-12);
//! ```
//!
//! Any type that can expose its objective values is accepted, by
//! implementing [`Evaluated`]:
//!
//! ```
//! use hypervolume::{Evaluated, HypervolumeIndicator};
//!
//! struct Candidate {
//!     genome: Vec<u8>,
//!     objectives: Vec<f64>,
//! }
//!
//! impl Evaluated for Candidate {
//!     fn evaluation(&self) -> &[f64] {
//!         &self.objectives
//!     }
//! }
//!
//! let indicator = HypervolumeIndicator::with_defaults(2).unwrap();
//! let population = vec![Candidate {
//!     genome: vec![1, 0, 1],
//!     objectives: vec![0.5, 0.5],
//! }];
//! assert!((indicator.evaluate(&population).unwrap() - 0.25).abs() < 1e-12);
//! ```

use std::sync::Arc;

use crate::config::IndicatorConfig;
use crate::error::Result;
use crate::preprocess::preprocess;
use crate::types::Traversal;
use crate::wfg::Wfg;

/// A candidate solution that carries one value per objective.
pub trait Evaluated {
    /// Returns the objective values, one per objective.
    fn evaluation(&self) -> &[f64];
}

impl Evaluated for [f64] {
    fn evaluation(&self) -> &[f64] {
        self
    }
}

impl<const N: usize> Evaluated for [f64; N] {
    fn evaluation(&self) -> &[f64] {
        self
    }
}

impl Evaluated for Vec<f64> {
    fn evaluation(&self) -> &[f64] {
        self
    }
}

impl Evaluated for Box<[f64]> {
    fn evaluation(&self) -> &[f64] {
        self
    }
}

impl<T: Evaluated + ?Sized> Evaluated for &T {
    fn evaluation(&self) -> &[f64] {
        (**self).evaluation()
    }
}

/// A quality indicator over sets of objective vectors.
///
/// Object-safe so that an experiment driver can hold several indicators as
/// `Box<dyn Indicator>` and recreate them per trial with
/// [`fresh_instance`](Indicator::fresh_instance).
pub trait Indicator: Send + Sync {
    /// Short, stable name of the indicator.
    fn name(&self) -> &'static str;

    /// Computes the indicator for a population given as raw objective vectors.
    ///
    /// # Errors
    ///
    /// Returns an error if the population does not fit the indicator's
    /// configuration.
    fn compute(&self, points: &[Vec<f64>]) -> Result<f64>;

    /// Returns a new, independent indicator with the same configuration.
    fn fresh_instance(&self) -> Box<dyn Indicator>;
}

/// One preprocessed point with its exclusive hypervolume contribution.
#[derive(Clone, Debug, PartialEq)]
pub struct PointContribution {
    /// The point in comparison space.
    pub point: Vec<f64>,
    /// The volume dominated by this point and by no later point.
    pub contribution: f64,
}

/// Exact hypervolume indicator.
///
/// Holds nothing but its read-only [`IndicatorConfig`], so one instance can
/// be shared across threads, and [`fresh_instance`](Self::fresh_instance)
/// is a cheap way to hand each worker its own copy.
#[derive(Clone, Debug)]
pub struct HypervolumeIndicator {
    config: Arc<IndicatorConfig>,
}

impl HypervolumeIndicator {
    /// Creates an indicator from a validated configuration.
    #[must_use]
    pub fn new(config: IndicatorConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Creates an indicator with every setting at its default.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidObjectiveCount` if `n_objectives` is zero.
    pub fn with_defaults(n_objectives: usize) -> Result<Self> {
        Ok(Self::new(IndicatorConfig::builder(n_objectives).build()?))
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Computes the hypervolume of a population snapshot.
    ///
    /// Runs the [preprocessing pipeline](crate::preprocess) and then the
    /// WFG core with the configured [`Traversal`]. An empty population, or
    /// one the reference-point policy empties, has hypervolume `0.0`.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if a member's evaluation vector
    /// does not have one value per objective.
    pub fn evaluate<E: Evaluated>(&self, population: &[E]) -> Result<f64> {
        let points = preprocess(population, &self.config)?;
        if points.is_empty() {
            return Ok(0.0);
        }

        let wfg = Wfg::new(self.config.reference_point());
        let value = match self.config.traversal() {
            Traversal::Recursive => wfg.hypervolume(&points),
            Traversal::Worklist => wfg.hypervolume_iterative(&points),
        };

        trace_info!(
            population = population.len(),
            front = points.len(),
            hypervolume = value,
            "hypervolume evaluated"
        );
        Ok(value)
    }

    /// Exclusive contribution of every point that survives preprocessing,
    /// in the order the WFG core sees them.
    ///
    /// The contributions sum to [`evaluate`](Self::evaluate)'s result.
    ///
    /// # Errors
    ///
    /// Returns `Error::DimensionMismatch` if a member's evaluation vector
    /// does not have one value per objective.
    pub fn contributions<E: Evaluated>(&self, population: &[E]) -> Result<Vec<PointContribution>> {
        let points = preprocess(population, &self.config)?;
        let wfg = Wfg::new(self.config.reference_point());
        let contributions = wfg.exclusive_contributions(&points);

        Ok(points
            .into_iter()
            .zip(contributions)
            .map(|(point, contribution)| PointContribution {
                point,
                contribution,
            })
            .collect())
    }

    /// Returns a new indicator with the same configuration and no other state.
    #[must_use]
    pub fn fresh_instance(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
        }
    }
}

impl Indicator for HypervolumeIndicator {
    fn name(&self) -> &'static str {
        "hypervolume"
    }

    fn compute(&self, points: &[Vec<f64>]) -> Result<f64> {
        self.evaluate(points)
    }

    fn fresh_instance(&self) -> Box<dyn Indicator> {
        Box::new(HypervolumeIndicator::fresh_instance(self))
    }
}
