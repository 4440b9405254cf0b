//! Renderable chart description for the probability bar chart
//!
//! [`ChartSpec`] is a value object: labels, y-values, per-category colors,
//! title and axis metadata, derived fresh from an angle and its distribution
//! on every update and shipped to the browser as JSON. It is never mutated,
//! only replaced.

use qviz_sim::{ProbabilityDistribution, BASIS_LABELS};
use serde::Serialize;

/// Bar colors per basis outcome, in basis order
pub const BAR_COLORS: [&str; 2] = ["blue", "orange"];

/// X-axis caption
pub const X_AXIS_TITLE: &str = "State";

/// Y-axis caption
pub const Y_AXIS_TITLE: &str = "Probability";

/// Renderable description of the probability bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Chart title, includes the angle to 2 decimal places
    pub title: String,

    /// Category labels, one per basis outcome
    pub labels: [&'static str; 2],

    /// Bar heights (outcome probabilities)
    pub values: [f64; 2],

    /// Bar colors, one per category
    pub colors: [&'static str; 2],

    /// X-axis caption
    pub x_axis_title: &'static str,

    /// Y-axis caption
    pub y_axis_title: &'static str,

    /// Probability axis bounds, fixed to [0, 1] for visual stability
    pub y_range: [f64; 2],
}

/// Build the chart spec for an angle and its computed distribution
///
/// Formatting rules: the title renders the angle to 2 decimal places, the
/// labels and colors are fixed per category, and the y-range is pinned to
/// [0, 1] regardless of the data.
///
/// # Example
/// ```
/// use qviz_chart::probability_chart;
/// use qviz_sim::ProbabilityDistribution;
///
/// let spec = probability_chart(1.57, &ProbabilityDistribution::new(0.5, 0.5));
/// assert_eq!(spec.title, "Quantum State Probabilities (Angle = 1.57 rad)");
/// assert_eq!(spec.y_range, [0.0, 1.0]);
/// ```
pub fn probability_chart(angle: f64, dist: &ProbabilityDistribution) -> ChartSpec {
    ChartSpec {
        title: format!("Quantum State Probabilities (Angle = {:.2} rad)", angle),
        labels: BASIS_LABELS,
        values: dist.values(),
        colors: BAR_COLORS,
        x_axis_title: X_AXIS_TITLE,
        y_axis_title: Y_AXIS_TITLE,
        y_range: [0.0, 1.0],
    }
}
