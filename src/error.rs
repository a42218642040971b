#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the configuration has no objectives.
    #[error("invalid objective count: {0} (at least one objective is required)")]
    InvalidObjectiveCount(usize),

    /// Returned when the reference point length differs from the objective count.
    #[error("reference point dimension mismatch: expected {expected} coordinates but got {got}")]
    ReferencePointDimensionMismatch {
        /// The configured number of objectives.
        expected: usize,
        /// The length of the supplied reference point.
        got: usize,
    },

    /// Returned when a reference point coordinate is NaN or infinite.
    #[error("reference point coordinate {index} is not finite")]
    NonFiniteReferencePoint {
        /// The index of the offending coordinate.
        index: usize,
    },

    /// Returned when the normalization set length differs from the objective count.
    #[error("normalization dimension mismatch: expected {expected} normalizers but got {got}")]
    NormalizationDimensionMismatch {
        /// The configured number of objectives.
        expected: usize,
        /// The length of the supplied normalization set.
        got: usize,
    },

    /// Returned when a single normalizer targets an objective the
    /// configuration does not have.
    #[error("normalizer objective index {objective} out of range for {n_objectives} objectives")]
    NormalizerObjectiveOutOfRange {
        /// The objective index passed to the builder.
        objective: usize,
        /// The configured number of objectives.
        n_objectives: usize,
    },

    /// Returned when a min-max normalizer range is not finite or not increasing.
    #[error("invalid normalizer range: [{low}, {high}] must be finite with low < high")]
    InvalidNormalizerRange {
        /// The lower end of the raw range.
        low: f64,
        /// The upper end of the raw range.
        high: f64,
    },

    /// Returned when the duplicate tolerance is negative or NaN.
    #[error("invalid duplicate tolerance: {0} must be non-negative")]
    InvalidTolerance(f64),

    /// Returned when a point's length differs from the objective count.
    #[error(
        "dimension mismatch: expected {expected} objective values but point {point_index} has {got}"
    )]
    DimensionMismatch {
        /// The configured number of objectives.
        expected: usize,
        /// The actual number of values in the point.
        got: usize,
        /// The index of the point within the supplied population.
        point_index: usize,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
