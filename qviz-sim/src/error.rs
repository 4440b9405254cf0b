//! Error types for the probability model

use thiserror::Error;

/// Errors that can occur while computing a distribution
#[derive(Debug, Error)]
pub enum SimError {
    /// Angle was NaN or infinite
    #[error("Angle must be finite, got {0}")]
    NonFiniteAngle(f64),

    /// Circuit construction failed
    #[error("Circuit construction failed: {0}")]
    Circuit(#[from] qviz_core::QuantumError),

    /// State operation failed
    #[error("State operation failed: {0}")]
    State(#[from] qviz_state::StateError),
}
