//! State probability model
//!
//! Maps a rotation angle to the two-outcome measurement distribution of a
//! single qubit prepared as RY(θ)|0⟩. Two interchangeable backends implement
//! the computation behind [`ProbabilityBackend`]: a closed-form evaluation
//! and a state-vector simulation driving the circuit types from qviz-core.
//!
//! # Example
//! ```
//! use qviz_sim::compute_distribution;
//! use std::f64::consts::PI;
//!
//! let dist = compute_distribution(PI).unwrap();
//! assert!(dist.p_one() > 0.999_999_999);
//! ```

pub mod backend;
pub mod distribution;
pub mod error;

pub use backend::{ClosedForm, ProbabilityBackend, StateVectorBackend};
pub use distribution::{ProbabilityDistribution, BASIS_LABELS};
pub use error::SimError;

/// Type alias for results in qviz-sim
pub type Result<T> = std::result::Result<T, SimError>;

/// Compute the measurement distribution for RY(angle) applied to |0⟩
///
/// Uses the state-vector backend. Accepts any finite angle; the mapping is
/// periodic, so values outside [0, 2π] remain valid.
///
/// # Errors
/// Returns [`SimError::NonFiniteAngle`] for NaN or infinite input.
pub fn compute_distribution(angle: f64) -> Result<ProbabilityDistribution> {
    StateVectorBackend.compute(angle)
}
