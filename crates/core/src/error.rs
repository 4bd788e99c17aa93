//! Error types for the flow-net core.

use thiserror::Error;

/// Precondition failures reported by input validation.
///
/// This is the only error kind the core produces. Every variant is raised
/// before any grid is allocated; well-formed inputs never fail during
/// evaluation. Numeric pathologies such as sampling exactly at a well
/// center propagate as non-finite field values, not as errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// `num_points` was zero.
    #[error("num_points must be a positive integer")]
    ZeroNumPoints,

    /// `levels` was zero.
    #[error("levels must be a positive integer")]
    ZeroLevels,

    /// A range was not ordered min < max.
    #[error("invalid {axis} range: ({min}, {max}) must satisfy min < max")]
    UnorderedRange {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    /// A range bound was NaN or infinite.
    #[error("invalid {axis} range: bounds must be finite, got ({min}, {max})")]
    NonFiniteRange {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    /// A caller-supplied field function panicked when probed at (0, 0).
    #[error("{which} function failed when probed at (0, 0): {reason}")]
    ProbeFailed {
        which: &'static str,
        reason: String,
    },
}
