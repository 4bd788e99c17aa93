//! Error types for the scenario and snapshot layer.

use thiserror::Error;

/// Errors produced by scenario lookup and snapshot rendering.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The requested scenario name is not registered.
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    /// The grid dimensions do not fit the image backend.
    #[error("invalid snapshot dimensions: grid size must fit in u32")]
    InvalidDimensions,

    /// An I/O failure while writing a snapshot.
    #[error("i/o error: {0}")]
    Io(String),
}
