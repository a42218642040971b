//! Core types for the hypervolume library.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The direction of optimization for one objective.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Smaller values are better.
    Minimize,
    /// Larger values are better.
    Maximize,
}

/// How points that do not weakly dominate the reference point are handled
/// before the hypervolume is computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NonDominatedPolicy {
    /// Discard every point that is worse than the reference point in at
    /// least one objective. If nothing survives, the hypervolume is `0.0`.
    #[default]
    Ignore,
    /// Keep every point. Points beyond the reference point contribute the
    /// absolute size of their box, so the result is not clamped.
    NoPolicy,
}

/// How the WFG decomposition is driven.
///
/// Both variants visit the same sub-problems in the same order and return
/// bit-identical results. `Worklist` keeps its frames on the heap and is
/// not limited by the thread's stack size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Traversal {
    /// Plain function-call recursion.
    #[default]
    Recursive,
    /// Explicit stack of pending frames.
    Worklist,
}
