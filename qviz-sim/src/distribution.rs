//! Two-outcome probability distribution

use serde::Serialize;

/// Display labels for the computational basis outcomes, in basis order
pub const BASIS_LABELS: [&str; 2] = ["|0⟩", "|1⟩"];

/// Measurement probability distribution of a single qubit
///
/// An ordered pair of non-negative reals summing to 1 within floating-point
/// tolerance, indexed by the basis outcomes "0" and "1". Recomputed per
/// interaction; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProbabilityDistribution {
    p_zero: f64,
    p_one: f64,
}

impl ProbabilityDistribution {
    /// Create a distribution from the two outcome probabilities
    pub fn new(p_zero: f64, p_one: f64) -> Self {
        Self { p_zero, p_one }
    }

    /// Probability of measuring |0⟩
    #[inline]
    pub fn p_zero(&self) -> f64 {
        self.p_zero
    }

    /// Probability of measuring |1⟩
    #[inline]
    pub fn p_one(&self) -> f64 {
        self.p_one
    }

    /// Both probabilities in basis order
    #[inline]
    pub fn values(&self) -> [f64; 2] {
        [self.p_zero, self.p_one]
    }

    /// Sum of both probabilities
    pub fn total(&self) -> f64 {
        self.p_zero + self.p_one
    }

    /// Check that both values lie in [0, 1] and sum to 1 within `epsilon`
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (0.0..=1.0).contains(&self.p_zero)
            && (0.0..=1.0).contains(&self.p_one)
            && (self.total() - 1.0).abs() < epsilon
    }
}
