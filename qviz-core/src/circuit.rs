//! Quantum circuit representation

use crate::gate::Gate;
use crate::{GateOp, QuantumError, QubitId, Result};
use std::sync::Arc;

/// A quantum circuit
///
/// An ordered sequence of single-qubit gate operations over a register.
///
/// # Example
/// ```
/// use qviz_core::{Circuit, QubitId, RotationY};
/// use std::sync::Arc;
///
/// let mut circuit = Circuit::new(1);
/// circuit.add_gate(Arc::new(RotationY::new(0.8)), QubitId::new(0)).unwrap();
/// assert_eq!(circuit.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<GateOp>,
}

impl Circuit {
    /// Create a new quantum circuit with the specified number of qubits
    ///
    /// # Panics
    /// Panics if `num_qubits` is 0
    pub fn new(num_qubits: usize) -> Self {
        assert!(num_qubits > 0, "Circuit must have at least one qubit");
        Self {
            num_qubits,
            operations: Vec::new(),
        }
    }

    /// Get the number of qubits in the circuit
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the number of operations in the circuit
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the circuit is empty (no operations)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Add a gate operation to the circuit
    ///
    /// # Errors
    /// Returns error if the target qubit index is out of bounds
    pub fn add_gate(&mut self, gate: Arc<dyn Gate>, target: QubitId) -> Result<()> {
        if target.index() >= self.num_qubits {
            return Err(QuantumError::invalid_qubit(target.index(), self.num_qubits));
        }

        self.operations.push(GateOp::new(gate, target));
        Ok(())
    }

    /// Get an iterator over the operations
    pub fn operations(&self) -> impl Iterator<Item = &GateOp> {
        self.operations.iter()
    }

    /// Validate the circuit
    ///
    /// Checks that every operation targets a qubit inside the register.
    pub fn validate(&self) -> Result<()> {
        for (i, op) in self.operations.iter().enumerate() {
            if op.target().index() >= self.num_qubits {
                return Err(QuantumError::ValidationError(format!(
                    "Operation {} uses invalid qubit {}",
                    i,
                    op.target()
                )));
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Circuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Circuit({} qubits, {} operations)",
            self.num_qubits,
            self.len()
        )?;
        for (i, op) in self.operations.iter().enumerate() {
            writeln!(f, "  {}: {}", i, op)?;
        }
        Ok(())
    }
}
