//! Segment resistances and the NM-I-S network combination.
//!
//! The external fitting driver relies on two properties of
//! [`junction_resistance`]:
//! - it is a pure function of `(T, θ)` with a fixed positional θ ordering
//! - it allocates nothing per call, so it can be evaluated once per
//!   candidate parameter vector per temperature sample without overhead

use crate::domain::{JunctionParams, THETA_LEN};
use crate::math::transition;

/// Normal-metal resistance, linear in temperature:
///
/// `R = r0 * (1 + alpha * T)`
///
/// Valid for any real `T`; monotonic in `T` when `alpha > 0`.
pub fn resistance_nm(t: f64, r0: f64, alpha: f64) -> f64 {
    r0 * (1.0 + alpha * t)
}

/// Interface (tunnel barrier) resistance, sigmoidal in temperature:
///
/// `R = 0.5 * r0 * (1 + tanh((T - tc) / width))`
///
/// `R → 0` for `T ≪ tc` and `R → r0` for `T ≫ tc`. `width == 0` produces
/// NaN at `T == tc` (caller responsibility, see crate error policy).
pub fn resistance_interface(t: f64, r0: f64, tc: f64, width: f64) -> f64 {
    r0 * transition(t, tc, width)
}

/// Superconductor resistance. Identical functional form to
/// [`resistance_interface`], independent parameter set.
pub fn resistance_superconductor(t: f64, r0: f64, tc: f64, width: f64) -> f64 {
    r0 * transition(t, tc, width)
}

/// Equivalent resistance of the NM-I-S network:
///
/// `R_eq = (R_NM * (R_I + R_S)) / (R_NM + R_I + R_S)`
///
/// i.e. `R_NM` in parallel with the series combination `R_I + R_S`.
/// Degenerate when the denominator is zero (all-zero resistances in
/// practice); the division then yields NaN/Inf per IEEE semantics.
pub fn equivalent_resistance(r_nm: f64, r_i: f64, r_s: f64) -> f64 {
    (r_nm * (r_i + r_s)) / (r_nm + r_i + r_s)
}

/// Equivalent junction resistance at temperature `t` for the full parameter
/// set. This is the composition an external fitting driver minimizes
/// residuals against.
pub fn junction_resistance(t: f64, params: &JunctionParams) -> f64 {
    let r_nm = resistance_nm(t, params.nm.r0, params.nm.alpha);
    let r_i = resistance_interface(
        t,
        params.interface.r0,
        params.interface.tc,
        params.interface.width,
    );
    let r_s = resistance_superconductor(
        t,
        params.superconductor.r0,
        params.superconductor.tc,
        params.superconductor.width,
    );
    equivalent_resistance(r_nm, r_i, r_s)
}

/// [`junction_resistance`] over the flat fit vector
/// `(R0_NM, α_NM, R0_I, TC_I, ΔT_I, R0_S, TC_S, ΔT_S)`.
pub fn junction_resistance_theta(t: f64, theta: &[f64; THETA_LEN]) -> f64 {
    junction_resistance(t, &JunctionParams::from_theta(theta))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nm_is_affine_in_temperature() {
        let r0 = 10.0;
        let alpha = 0.001;
        for &(t1, t2) in &[(0.0, 1.0), (-50.0, 300.0), (4.2, 9.2)] {
            let dr = resistance_nm(t2, r0, alpha) - resistance_nm(t1, r0, alpha);
            let expected = r0 * alpha * (t2 - t1);
            assert!(
                (dr - expected).abs() < 1e-12,
                "ΔR={dr} should equal R0·α·ΔT={expected}"
            );
        }
    }

    #[test]
    fn nm_concrete_scenario() {
        assert_eq!(resistance_nm(300.0, 10.0, 0.001), 13.0);
    }

    #[test]
    fn interface_half_r0_at_critical_temperature() {
        assert_eq!(resistance_interface(9.2, 5.0, 9.2, 0.5), 2.5);
        assert_eq!(resistance_superconductor(7.1, 3.0, 7.1, 0.2), 1.5);
    }

    #[test]
    fn transition_asymptotes_within_ten_widths() {
        let (r0, tc, width) = (5.0, 9.2, 0.5);
        let lo = resistance_interface(tc - 10.0 * width, r0, tc, width);
        let hi = resistance_interface(tc + 10.0 * width, r0, tc, width);
        assert!(lo.abs() < 1e-7, "R(TC - 10ΔT) should be ~0, got {lo}");
        assert!((hi - r0).abs() < 1e-7, "R(TC + 10ΔT) should be ~R0, got {hi}");
    }

    #[test]
    fn equivalent_resistance_symmetric_in_series_pair() {
        for &(r_nm, r_i, r_s) in &[(13.0, 2.5, 3.0), (1.0, 0.0, 4.0), (7.5, 0.3, 0.3)] {
            assert_eq!(
                equivalent_resistance(r_nm, r_i, r_s),
                equivalent_resistance(r_nm, r_s, r_i)
            );
        }
    }

    #[test]
    fn equivalent_resistance_concrete_scenario() {
        let r_eq = equivalent_resistance(13.0, 2.5, 3.0);
        let expected = (13.0 * 5.5) / 18.5;
        assert!((r_eq - expected).abs() < 1e-12);
        assert!((r_eq - 3.8649).abs() < 1e-4);
    }

    #[test]
    fn all_zero_network_propagates_nan() {
        assert!(equivalent_resistance(0.0, 0.0, 0.0).is_nan());
    }

    #[test]
    fn junction_resistance_matches_manual_composition() {
        let theta = [10.0, 0.001, 5.0, 9.2, 0.5, 3.0, 7.1, 0.2];
        let params = crate::domain::JunctionParams::from_theta(&theta);

        for &t in &[1.0, 4.2, 7.1, 9.2, 300.0] {
            let r_nm = resistance_nm(t, 10.0, 0.001);
            let r_i = resistance_interface(t, 5.0, 9.2, 0.5);
            let r_s = resistance_superconductor(t, 3.0, 7.1, 0.2);
            let manual = equivalent_resistance(r_nm, r_i, r_s);

            assert_eq!(junction_resistance(t, &params), manual);
            assert_eq!(junction_resistance_theta(t, &theta), manual);
        }
    }

    #[test]
    fn junction_resistance_well_above_tc_approaches_normal_state_network() {
        // Far above both critical temperatures every segment is normal, so
        // R_eq should match the network of normal-state resistances.
        let theta = [10.0, 0.0, 5.0, 9.2, 0.5, 3.0, 7.1, 0.2];
        let r = junction_resistance_theta(300.0, &theta);
        let expected = equivalent_resistance(10.0, 5.0, 3.0);
        assert!((r - expected).abs() < 1e-9, "R={r}, expected {expected}");
    }

    #[test]
    fn zero_width_propagates_non_finite_at_tc() {
        let theta = [10.0, 0.001, 5.0, 9.2, 0.0, 3.0, 7.1, 0.2];
        assert!(!junction_resistance_theta(9.2, &theta).is_finite());
    }
}
