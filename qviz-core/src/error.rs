//! Error types for circuit construction

use thiserror::Error;

/// Errors that can occur while building or validating a circuit
#[derive(Debug, Error)]
pub enum QuantumError {
    /// Gate targets a qubit outside the register
    #[error("Invalid qubit index {0}: circuit has only {1} qubits")]
    InvalidQubit(usize, usize),

    /// Generic circuit validation error
    #[error("Circuit validation failed: {0}")]
    ValidationError(String),
}

impl QuantumError {
    /// Create an invalid qubit error
    pub fn invalid_qubit(qubit: usize, num_qubits: usize) -> Self {
        Self::InvalidQubit(qubit, num_qubits)
    }
}
