//! Interchangeable probability computation backends

use crate::distribution::ProbabilityDistribution;
use crate::error::SimError;
use crate::Result;
use qviz_core::{Circuit, QubitId, RotationY};
use qviz_state::StateVector;
use std::sync::Arc;

/// Trait for one-qubit probability computation backends
///
/// A backend maps a rotation angle to the measurement distribution of
/// RY(angle)|0⟩. Any conforming backend is interchangeable; implementations
/// must agree within floating-point tolerance.
pub trait ProbabilityBackend: Send + Sync {
    /// Short backend identifier for logging
    fn name(&self) -> &str;

    /// Compute the measurement distribution for the given angle
    ///
    /// # Errors
    /// Returns [`SimError::NonFiniteAngle`] for NaN or infinite input.
    fn compute(&self, angle: f64) -> Result<ProbabilityDistribution>;
}

fn check_finite(angle: f64) -> Result<()> {
    if angle.is_finite() {
        Ok(())
    } else {
        Err(SimError::NonFiniteAngle(angle))
    }
}

/// Closed-form backend
///
/// Evaluates P(0) = cos²(θ/2), P(1) = sin²(θ/2) directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosedForm;

impl ProbabilityBackend for ClosedForm {
    fn name(&self) -> &str {
        "closed-form"
    }

    fn compute(&self, angle: f64) -> Result<ProbabilityDistribution> {
        check_finite(angle)?;

        let half = angle / 2.0;
        let cos_val = half.cos();
        let sin_val = half.sin();
        Ok(ProbabilityDistribution::new(
            cos_val * cos_val,
            sin_val * sin_val,
        ))
    }
}

/// State-vector backend
///
/// Builds a one-qubit circuit with a single RY gate, evolves |0⟩ through it
/// and reads probabilities as squared amplitude magnitudes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateVectorBackend;

impl ProbabilityBackend for StateVectorBackend {
    fn name(&self) -> &str {
        "state-vector"
    }

    fn compute(&self, angle: f64) -> Result<ProbabilityDistribution> {
        check_finite(angle)?;

        let mut circuit = Circuit::new(1);
        circuit.add_gate(Arc::new(RotationY::new(angle)), QubitId::new(0))?;

        let mut state = StateVector::new(1)?;
        for op in circuit.operations() {
            state.apply_single_qubit_gate(&op.gate().matrix(), op.target().index())?;
        }

        Ok(ProbabilityDistribution::new(
            state.probability(0)?,
            state.probability(1)?,
        ))
    }
}
