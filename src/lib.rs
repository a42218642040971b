#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Exact hypervolume indicator for multi-objective optimization, computed
//! with the WFG (Walking Fish Group) exclusive-contribution algorithm.
//!
//! The hypervolume of a point set is the volume of the region dominated by
//! at least one of its points and bounded by a reference point. A **higher**
//! hypervolume means a better approximation of the Pareto front. All
//! computation happens in a minimization "comparison space"; optional
//! per-objective normalizers map raw objective values into it.
//!
//! # Getting Started
//!
//! ```
//! use hypervolume::prelude::*;
//!
//! let config = IndicatorConfig::builder(2)
//!     .reference_point(vec![5.0, 5.0])
//!     .build()
//!     .unwrap();
//! let indicator = HypervolumeIndicator::new(config);
//!
//! let population = vec![vec![0.0, 4.0], vec![2.0, 2.0], vec![3.0, 0.0]];
//! let hv = indicator.evaluate(&population).unwrap();
//! assert!((hv - 15.0).abs() < 1e-12);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`HypervolumeIndicator`] | Evaluate a population snapshot: preprocess, then run WFG. |
//! | [`IndicatorConfig`] | Objective count, reference point, normalizers and preprocessing switches. |
//! | [`Wfg`](wfg::Wfg) | The raw WFG engine over an already clean point set. |
//! | [`Evaluated`] | Anything that exposes one value per objective. |
//! | [`NonDominatedPolicy`] | Drop or keep points beyond the reference point. |
//!
//! # Preprocessing
//!
//! Before the WFG core runs, [`preprocess`](preprocess::preprocess) translates
//! points into comparison space, collapses near-duplicates, removes
//! dominated points, presorts by the first objective and applies the
//! reference-point policy. Each step except translation can be switched off
//! in the [`IndicatorConfig`].
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on [`Direction`], [`NonDominatedPolicy`] and [`Traversal`] | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) for each preprocessing step and evaluation | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod config;
mod error;
mod indicator;
pub mod normalization;
pub mod pareto;
pub mod preprocess;
mod types;
pub mod wfg;

pub use config::{IndicatorConfig, IndicatorConfigBuilder};
pub use error::{Error, Result};
pub use indicator::{Evaluated, HypervolumeIndicator, Indicator, PointContribution};
pub use types::{Direction, NonDominatedPolicy, Traversal};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use hypervolume::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{IndicatorConfig, IndicatorConfigBuilder};
    pub use crate::error::{Error, Result};
    pub use crate::indicator::{Evaluated, HypervolumeIndicator, Indicator, PointContribution};
    pub use crate::normalization::{MinMaxNormalizer, Normalization, Normalizer};
    pub use crate::types::{Direction, NonDominatedPolicy, Traversal};
    pub use crate::wfg::Wfg;
}
