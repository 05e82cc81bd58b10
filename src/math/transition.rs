//! Sigmoidal transition factor shared by both superconducting segments.
//!
//! The factor is:
//!
//! `s(T) = 0.5 * (1 + tanh((T - TC) / ΔT))`
//!
//! Numerical notes:
//! - `s(TC) = 0.5` exactly (`tanh(0) = 0`).
//! - For `ΔT > 0`, `s → 0` as `T → -∞` and `s → 1` as `T → +∞`; `tanh`
//!   saturates to machine precision around `|T - TC| ≳ 10·ΔT`, so no special
//!   asymptotic handling is needed.
//! - `ΔT = 0` divides by zero: the result is `s = 0` or `1` away from `TC`
//!   (`tanh(±∞) = ±1`) and NaN at `T == TC` (`0/0`). The factor is
//!   intentionally not guarded; callers treat non-finite outputs as a
//!   fit-failure signal.

/// Compute the transition factor `0.5 * (1 + tanh((t - tc) / width))`.
pub fn transition(t: f64, tc: f64, width: f64) -> f64 {
    0.5 * (1.0 + ((t - tc) / width).tanh())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_exactly_half() {
        assert_eq!(transition(9.2, 9.2, 0.5), 0.5);
        assert_eq!(transition(-3.0, -3.0, 10.0), 0.5);
    }

    #[test]
    fn saturates_at_ten_widths() {
        let tc = 9.2;
        let width = 0.5;
        let lo = transition(tc - 10.0 * width, tc, width);
        let hi = transition(tc + 10.0 * width, tc, width);
        assert!(lo < 1e-8, "s(TC - 10ΔT) should be ~0, got {lo}");
        assert!((hi - 1.0).abs() < 1e-8, "s(TC + 10ΔT) should be ~1, got {hi}");
    }

    #[test]
    fn monotonic_for_positive_width() {
        let tc = 5.0;
        let width = 1.0;
        let mut prev = transition(0.0, tc, width);
        for i in 1..=100 {
            let t = i as f64 * 0.1;
            let s = transition(t, tc, width);
            assert!(s >= prev, "transition not monotone at T={t}");
            prev = s;
        }
    }

    #[test]
    fn zero_width_is_nan_at_tc_and_saturated_elsewhere() {
        assert!(transition(5.0, 5.0, 0.0).is_nan());
        assert_eq!(transition(4.0, 5.0, 0.0), 0.0);
        assert_eq!(transition(6.0, 5.0, 0.0), 1.0);
    }
}
