//! Dense quantum state representation and measurement readout
//!
//! Provides [`StateVector`], a heap-allocated complex amplitude vector with
//! single-qubit gate application and computational-basis probability readout.

pub mod error;
pub mod state_vector;

pub use error::StateError;
pub use state_vector::StateVector;

/// Type alias for results in qviz-state
pub type Result<T> = std::result::Result<T, StateError>;
