//! Core types for building single-qubit visualization circuits
//!
//! This crate provides the vocabulary the rest of the workspace speaks:
//! - [`QubitId`]: Type-safe qubit addressing
//! - [`Gate`]: Trait for single-qubit unitaries
//! - [`RotationY`]: The parameterized rotation driven by the UI angle
//! - [`Circuit`]: Ordered gate sequence over a register
//!
//! # Example
//! ```
//! use qviz_core::{Circuit, QubitId, RotationY};
//! use std::sync::Arc;
//!
//! let mut circuit = Circuit::new(1);
//! circuit.add_gate(Arc::new(RotationY::new(0.5)), QubitId::new(0)).unwrap();
//! assert_eq!(circuit.len(), 1);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod gates;
pub mod qubit;

// Re-exports for convenience
pub use circuit::Circuit;
pub use error::QuantumError;
pub use gate::{Gate, GateOp};
pub use gates::RotationY;
pub use num_complex::Complex64;
pub use qubit::QubitId;

/// Type alias for results in qviz-core
pub type Result<T> = std::result::Result<T, QuantumError>;
