//! Property-based tests for the probability model.

use proptest::prelude::*;
use std::f64::consts::PI;

use qviz_sim::{compute_distribution, ClosedForm, ProbabilityBackend, StateVectorBackend};

const TOLERANCE: f64 = 1e-9;

/// Strategy: angles sampled densely over [0, 4π].
fn angle_strategy() -> impl Strategy<Value = f64> {
    0.0..(4.0 * PI)
}

proptest! {
    // 1. Probabilities always sum to 1
    #[test]
    fn probabilities_sum_to_one(theta in angle_strategy()) {
        let dist = compute_distribution(theta).unwrap();
        prop_assert!(
            (dist.total() - 1.0).abs() < TOLERANCE,
            "total={} for theta={theta}", dist.total()
        );
    }

    // 2. Distribution matches the closed form cos²(θ/2) / sin²(θ/2)
    #[test]
    fn matches_closed_form(theta in angle_strategy()) {
        let dist = compute_distribution(theta).unwrap();
        let half = theta / 2.0;
        prop_assert!((dist.p_zero() - half.cos().powi(2)).abs() < TOLERANCE);
        prop_assert!((dist.p_one() - half.sin().powi(2)).abs() < TOLERANCE);
    }

    // 3. Both backends agree
    #[test]
    fn backends_agree(theta in angle_strategy()) {
        let sv = StateVectorBackend.compute(theta).unwrap();
        let cf = ClosedForm.compute(theta).unwrap();
        prop_assert!((sv.p_zero() - cf.p_zero()).abs() < TOLERANCE);
        prop_assert!((sv.p_one() - cf.p_one()).abs() < TOLERANCE);
    }

    // 4. The mapping is 4π-periodic
    #[test]
    fn periodic_in_four_pi(theta in angle_strategy()) {
        let a = compute_distribution(theta).unwrap();
        let b = compute_distribution(theta + 4.0 * PI).unwrap();
        prop_assert!((a.p_zero() - b.p_zero()).abs() < TOLERANCE);
        prop_assert!((a.p_one() - b.p_one()).abs() < TOLERANCE);
    }

    // 5. Every finite angle is valid, including negatives
    #[test]
    fn finite_angles_always_valid(theta in -1000.0..1000.0f64) {
        let dist = compute_distribution(theta).unwrap();
        prop_assert!(dist.is_normalized(TOLERANCE));
    }

    // 6. Values stay within [0, 1]
    #[test]
    fn values_within_unit_interval(theta in angle_strategy()) {
        let dist = compute_distribution(theta).unwrap();
        prop_assert!((0.0..=1.0).contains(&dist.p_zero()));
        prop_assert!((0.0..=1.0).contains(&dist.p_one()));
    }
}
