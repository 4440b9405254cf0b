//! Process-wide application context

use qviz_chart::{probability_chart, ChartSpec};
use qviz_sim::{ProbabilityBackend, Result, StateVectorBackend};

/// Application context, constructed once at startup
///
/// Shared immutably across handlers; holds the probability backend behind
/// its trait so any conforming backend can be swapped in. There is no other
/// mutable state: every request computes from its own input.
pub struct AppContext {
    backend: Box<dyn ProbabilityBackend>,
}

impl AppContext {
    /// Create a context with the default state-vector backend
    pub fn new() -> Self {
        Self::with_backend(Box::new(StateVectorBackend))
    }

    /// Create a context with a specific backend
    pub fn with_backend(backend: Box<dyn ProbabilityBackend>) -> Self {
        Self { backend }
    }

    /// Name of the active backend, for startup logging
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Handle one angle change: compute the distribution, format the chart
    ///
    /// Each call is independent and stateless.
    pub fn chart_for(&self, angle: f64) -> Result<ChartSpec> {
        let dist = self.backend.compute(angle)?;
        Ok(probability_chart(angle, &dist))
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qviz_sim::{ClosedForm, SimError};

    #[test]
    fn test_chart_for_formats_angle() {
        let ctx = AppContext::new();
        let spec = ctx.chart_for(0.0).unwrap();
        assert_eq!(spec.title, "Quantum State Probabilities (Angle = 0.00 rad)");
        assert_eq!(spec.values[0], 1.0);
    }

    #[test]
    fn test_chart_for_rejects_non_finite() {
        let ctx = AppContext::new();
        let result = ctx.chart_for(f64::NAN);
        assert!(matches!(result, Err(SimError::NonFiniteAngle(_))));
    }

    #[test]
    fn test_backend_is_swappable() {
        let ctx = AppContext::with_backend(Box::new(ClosedForm));
        assert_eq!(ctx.backend_name(), "closed-form");
        assert!(ctx.chart_for(1.0).is_ok());
    }
}
