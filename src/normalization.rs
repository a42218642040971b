//! Per-objective normalizers that map raw objective values into the
//! comparison space where dominance and hypervolume are computed.
//!
//! A normalization set holds one optional [`Normalizer`] per objective.
//! Objectives without a normalizer pass their raw value through unchanged.
//! Any `Fn(f64) -> f64 + Send + Sync` closure is a normalizer, and
//! [`MinMaxNormalizer`] covers the common "scale a known range onto
//! `[0, 1]`" case.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use hypervolume::normalization::{MinMaxNormalizer, Normalizer};
//!
//! let cost = MinMaxNormalizer::new(0.0, 200.0).unwrap();
//! assert!((cost.normalize(50.0) - 0.25).abs() < 1e-12);
//!
//! // Larger accuracy is better, so flip it into "smaller is better".
//! let accuracy = MinMaxNormalizer::maximizing(0.0, 1.0).unwrap();
//! assert!((accuracy.normalize(0.9) - 0.1).abs() < 1e-12);
//!
//! let log_scale: Arc<dyn Normalizer> = Arc::new(|v: f64| v.ln());
//! assert!(log_scale.normalize(1.0).abs() < 1e-12);
//! ```

use std::sync::Arc;

use crate::error::{Error, Result};

/// Maps one raw objective value into comparison space.
///
/// Implementations must be pure: the same input always yields the same
/// output, and calls may happen concurrently from several threads.
pub trait Normalizer: Send + Sync {
    /// Returns the comparison-space value for `value`.
    fn normalize(&self, value: f64) -> f64;
}

impl<F> Normalizer for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn normalize(&self, value: f64) -> f64 {
        self(value)
    }
}

/// One optional normalizer per objective.
pub type Normalization = Vec<Option<Arc<dyn Normalizer>>>;

/// Linear map of a known value range onto the unit interval.
///
/// Values outside `[low, high]` are extrapolated, not clamped, so the
/// reference-point policy still sees them as out of range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxNormalizer {
    low: f64,
    high: f64,
    maximizing: bool,
}

impl MinMaxNormalizer {
    /// Maps `low` to `0.0` and `high` to `1.0`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidNormalizerRange` if either bound is not finite
    /// or `low >= high`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hypervolume::normalization::MinMaxNormalizer;
    ///
    /// assert!(MinMaxNormalizer::new(0.0, 10.0).is_ok());
    /// assert!(MinMaxNormalizer::new(3.0, 3.0).is_err());
    /// assert!(MinMaxNormalizer::new(f64::NAN, 1.0).is_err());
    /// ```
    pub fn new(low: f64, high: f64) -> Result<Self> {
        Self::with_direction(low, high, false)
    }

    /// Maps `high` to `0.0` and `low` to `1.0`, for objectives where
    /// larger raw values are better.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidNormalizerRange` under the same conditions as
    /// [`new`](Self::new).
    pub fn maximizing(low: f64, high: f64) -> Result<Self> {
        Self::with_direction(low, high, true)
    }

    fn with_direction(low: f64, high: f64, maximizing: bool) -> Result<Self> {
        // Rejects NaN too: every comparison with NaN is false.
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(Error::InvalidNormalizerRange { low, high });
        }
        Ok(Self {
            low,
            high,
            maximizing,
        })
    }

    /// Returns the lower end of the raw range.
    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the upper end of the raw range.
    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns whether larger raw values map to smaller normalized values.
    #[must_use]
    pub fn is_maximizing(&self) -> bool {
        self.maximizing
    }
}

impl Normalizer for MinMaxNormalizer {
    fn normalize(&self, value: f64) -> f64 {
        let scaled = (value - self.low) / (self.high - self.low);
        if self.maximizing { 1.0 - scaled } else { scaled }
    }
}

/// Translates one raw point into comparison space.
///
/// `normalization` is either empty (raw coordinates are used unchanged) or
/// holds exactly one entry per coordinate.
pub(crate) fn translate(raw: &[f64], normalization: &[Option<Arc<dyn Normalizer>>]) -> Vec<f64> {
    if normalization.is_empty() {
        return raw.to_vec();
    }
    debug_assert_eq!(raw.len(), normalization.len());

    raw.iter()
        .zip(normalization)
        .map(|(&v, n)| n.as_ref().map_or(v, |n| n.normalize(v)))
        .collect()
}
