//! Dense state vector with gate application and probability readout

use crate::error::StateError;
use crate::Result;
use num_complex::Complex64;

/// Largest register size we will allocate (2^20 amplitudes, 16 MiB)
const MAX_QUBITS: usize = 20;

/// Quantum state vector
///
/// Represents a quantum state as a complex-valued vector of dimension
/// 2^num_qubits, initialized to the computational basis state |0...0⟩.
///
/// # Example
///
/// ```
/// use qviz_state::StateVector;
///
/// let state = StateVector::new(1).unwrap();
/// assert_eq!(state.num_qubits(), 1);
/// assert_eq!(state.dimension(), 2);
/// assert_eq!(state.probability(0).unwrap(), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create a new state vector initialized to |0...0⟩
    ///
    /// # Errors
    /// Returns error if `num_qubits` exceeds the supported maximum
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(StateError::TooManyQubits {
                num_qubits,
                max_qubits: MAX_QUBITS,
            });
        }

        let dimension = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dimension];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Create a state vector from raw amplitude data
    ///
    /// # Errors
    /// Returns error if `amplitudes` does not have length 2^num_qubits
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(StateError::TooManyQubits {
                num_qubits,
                max_qubits: MAX_QUBITS,
            });
        }

        let dimension = 1 << num_qubits;
        if amplitudes.len() != dimension {
            return Err(StateError::DimensionMismatch {
                expected: dimension,
                actual: amplitudes.len(),
            });
        }

        Ok(Self {
            num_qubits,
            amplitudes: amplitudes.to_vec(),
        })
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the state dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Get a reference to the state amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Apply a single-qubit gate to the given qubit
    ///
    /// The matrix is applied to every amplitude pair that differs only in
    /// the target qubit's bit.
    ///
    /// # Errors
    /// Returns error if `qubit` is out of range for this state
    pub fn apply_single_qubit_gate(
        &mut self,
        matrix: &[[Complex64; 2]; 2],
        qubit: usize,
    ) -> Result<()> {
        if qubit >= self.num_qubits {
            return Err(StateError::InvalidQubitIndex {
                index: qubit,
                num_qubits: self.num_qubits,
            });
        }

        let stride = 1usize << qubit;
        for base in 0..self.amplitudes.len() {
            if base & stride == 0 {
                let pair = base | stride;
                let a0 = self.amplitudes[base];
                let a1 = self.amplitudes[pair];
                self.amplitudes[base] = matrix[0][0] * a0 + matrix[0][1] * a1;
                self.amplitudes[pair] = matrix[1][0] * a0 + matrix[1][1] * a1;
            }
        }

        Ok(())
    }

    /// Compute the norm of the state vector
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Normalize the state vector
    ///
    /// Scales all amplitudes so that the norm equals 1. A zero state is
    /// left untouched.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 1e-10 {
            let inv_norm = 1.0 / norm;
            for amplitude in &mut self.amplitudes {
                *amplitude *= inv_norm;
            }
        }
    }

    /// Check if the state is normalized (norm ≈ 1)
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    /// Reset the state to |0...0⟩
    pub fn reset(&mut self) {
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    /// Get the probability of measuring a specific computational basis state
    ///
    /// # Errors
    /// Returns error if `basis_state` is outside the state dimension
    pub fn probability(&self, basis_state: usize) -> Result<f64> {
        self.amplitudes
            .get(basis_state)
            .map(|a| a.norm_sqr())
            .ok_or(StateError::InvalidBasisState {
                basis_state,
                dimension: self.amplitudes.len(),
            })
    }

    /// Get probabilities for all computational basis states
    ///
    /// Returns |amplitude[i]|² for every basis state i.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn ry(theta: f64) -> [[Complex64; 2]; 2] {
        let half = theta / 2.0;
        [
            [
                Complex64::new(half.cos(), 0.0),
                Complex64::new(-half.sin(), 0.0),
            ],
            [
                Complex64::new(half.sin(), 0.0),
                Complex64::new(half.cos(), 0.0),
            ],
        ]
    }

    #[test]
    fn test_initial_state() {
        let state = StateVector::new(1).unwrap();
        assert_eq!(state.amplitudes()[0], Complex64::new(1.0, 0.0));
        assert_eq!(state.amplitudes()[1], Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_too_many_qubits() {
        let result = StateVector::new(64);
        assert!(matches!(result, Err(StateError::TooManyQubits { .. })));
    }

    #[test]
    fn test_from_amplitudes_dimension_mismatch() {
        let amplitudes = vec![Complex64::new(1.0, 0.0)];
        let result = StateVector::from_amplitudes(1, &amplitudes);
        assert!(matches!(result, Err(StateError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_ry_pi_flips_to_one() {
        let mut state = StateVector::new(1).unwrap();
        state.apply_single_qubit_gate(&ry(PI), 0).unwrap();

        assert_relative_eq!(state.probability(0).unwrap(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(state.probability(1).unwrap(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ry_half_pi_equal_superposition() {
        let mut state = StateVector::new(1).unwrap();
        state.apply_single_qubit_gate(&ry(PI / 2.0), 0).unwrap();

        let probs = state.probabilities();
        assert_relative_eq!(probs[0], 0.5, epsilon = 1e-9);
        assert_relative_eq!(probs[1], 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_gate_preserves_norm() {
        let mut state = StateVector::new(1).unwrap();
        for &theta in &[0.1, 0.9, 2.3, 5.5] {
            state.apply_single_qubit_gate(&ry(theta), 0).unwrap();
            assert!(state.is_normalized(1e-10));
        }
    }

    #[test]
    fn test_apply_to_invalid_qubit() {
        let mut state = StateVector::new(1).unwrap();
        let result = state.apply_single_qubit_gate(&ry(1.0), 1);
        assert_eq!(
            result,
            Err(StateError::InvalidQubitIndex {
                index: 1,
                num_qubits: 1
            })
        );
    }

    #[test]
    fn test_apply_on_second_qubit_of_two() {
        // RY(π) on qubit 1 of |00⟩ gives |10⟩ (basis index 2)
        let mut state = StateVector::new(2).unwrap();
        state.apply_single_qubit_gate(&ry(PI), 1).unwrap();

        let probs = state.probabilities();
        assert_relative_eq!(probs[0], 0.0, epsilon = 1e-9);
        assert_relative_eq!(probs[2], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_normalize() {
        let amplitudes = vec![Complex64::new(3.0, 0.0), Complex64::new(4.0, 0.0)];
        let mut state = StateVector::from_amplitudes(1, &amplitudes).unwrap();
        state.normalize();

        assert_relative_eq!(state.norm(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(state.probability(0).unwrap(), 0.36, epsilon = 1e-10);
    }

    #[test]
    fn test_reset() {
        let mut state = StateVector::new(1).unwrap();
        state.apply_single_qubit_gate(&ry(1.3), 0).unwrap();
        state.reset();

        assert_eq!(state.amplitudes()[0], Complex64::new(1.0, 0.0));
        assert_eq!(state.amplitudes()[1], Complex64::new(0.0, 0.0));
    }

    #[test]
    fn test_probability_out_of_range() {
        let state = StateVector::new(1).unwrap();
        assert!(matches!(
            state.probability(2),
            Err(StateError::InvalidBasisState { .. })
        ));
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let mut state = StateVector::new(1).unwrap();
        state.apply_single_qubit_gate(&ry(1.234), 0).unwrap();

        let total: f64 = state.probabilities().iter().sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-9);
    }
}
