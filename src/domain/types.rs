//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - passed to an external fitting driver as a flat parameter vector
//! - exported to JSON alongside sweep outputs
//! - reloaded later for plotting or comparisons

use serde::{Deserialize, Serialize};

/// Number of free parameters in the full junction model.
///
/// The flat ordering is fixed and must not be reordered (an external fitting
/// driver addresses parameters positionally):
///
/// `(R0_NM, α_NM, R0_I, TC_I, ΔT_I, R0_S, TC_S, ΔT_S)`
pub const THETA_LEN: usize = 8;

/// Parameters of the normal-metal segment.
///
/// The segment resistance is linear in temperature:
/// `R(T) = r0 * (1 + alpha * T)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalMetalParams {
    /// Normal-state resistance `R0_NM`.
    pub r0: f64,
    /// Linear temperature coefficient `α_NM`.
    pub alpha: f64,
}

/// Parameters of a superconducting-transition segment (interface or
/// superconductor).
///
/// The segment resistance follows a sigmoidal transition:
/// `R(T) = 0.5 * r0 * (1 + tanh((T - tc) / width))`.
///
/// `width == 0` is not rejected here; it produces NaN/Inf per IEEE semantics
/// (see the crate's error-handling policy in `models`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionParams {
    /// Normal-state resistance `R0`.
    pub r0: f64,
    /// Critical temperature `TC`.
    pub tc: f64,
    /// Transition width `ΔT` (sigmoid steepness).
    pub width: f64,
}

/// The full NM-I-S junction parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JunctionParams {
    pub nm: NormalMetalParams,
    pub interface: TransitionParams,
    pub superconductor: TransitionParams,
}

impl JunctionParams {
    /// Build from the flat fit vector, in the documented order.
    pub fn from_theta(theta: &[f64; THETA_LEN]) -> Self {
        Self {
            nm: NormalMetalParams {
                r0: theta[0],
                alpha: theta[1],
            },
            interface: TransitionParams {
                r0: theta[2],
                tc: theta[3],
                width: theta[4],
            },
            superconductor: TransitionParams {
                r0: theta[5],
                tc: theta[6],
                width: theta[7],
            },
        }
    }

    /// Flatten to the fit vector, in the documented order.
    pub fn to_theta(&self) -> [f64; THETA_LEN] {
        [
            self.nm.r0,
            self.nm.alpha,
            self.interface.r0,
            self.interface.tc,
            self.interface.width,
            self.superconductor.r0,
            self.superconductor.tc,
            self.superconductor.width,
        ]
    }
}

/// Which current-divider formulation to use.
///
/// Both formulations are preserved on purpose; they encode different circuit
/// assumptions about which resistances appear as "total" and are selectable
/// per experiment. They agree exactly when the equivalent resistance handed
/// to `EquivalentRatio` is the `equivalent_resistance` combination of the
/// same three segment resistances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerConvention {
    /// Variant A: ratios against an externally supplied equivalent
    /// resistance `R_E`:
    ///
    /// `I_NM = (R_E / R_NM) * i`, `I_IS = (R_E / (R_I + R_S)) * i`
    ///
    /// Does *not* conserve total current for arbitrary `R_E`.
    EquivalentRatio,
    /// Variant B: the standard two-branch divider for `R_NM` in parallel
    /// with the series pair `R_I + R_S`:
    ///
    /// `I_NM = ((R_I + R_S) / ΣR) * i`, `I_IS = (R_NM / ΣR) * i`
    ///
    /// Conserves total current by algebraic identity.
    TwoBranch,
}

impl DividerConvention {
    /// Human-readable label for output headers.
    pub fn display_name(self) -> &'static str {
        match self {
            DividerConvention::EquivalentRatio => "equivalent-ratio (A)",
            DividerConvention::TwoBranch => "two-branch (B)",
        }
    }
}

/// Branch currents through the junction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BranchCurrents {
    /// Current through the normal-metal branch.
    pub nm: f64,
    /// Current through the interface + superconductor branch.
    pub is: f64,
}

/// A temperature grid for sweep evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepGrid {
    pub temperatures: Vec<f64>,
}

/// Element-wise model outputs over a temperature grid.
///
/// All vectors have the same length as `temperatures`. This is exactly the
/// array bundle an external plotting layer consumes; no data flows back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JunctionSweep {
    pub temperatures: Vec<f64>,
    pub r_nm: Vec<f64>,
    pub r_interface: Vec<f64>,
    pub r_superconductor: Vec<f64>,
    pub r_eq: Vec<f64>,
    pub i_nm: Vec<f64>,
    pub i_is: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theta_round_trip_preserves_order() {
        let theta = [10.0, 0.001, 5.0, 9.2, 0.5, 3.0, 7.1, 0.2];
        let params = JunctionParams::from_theta(&theta);

        assert_eq!(params.nm.r0, 10.0);
        assert_eq!(params.nm.alpha, 0.001);
        assert_eq!(params.interface.r0, 5.0);
        assert_eq!(params.interface.tc, 9.2);
        assert_eq!(params.interface.width, 0.5);
        assert_eq!(params.superconductor.r0, 3.0);
        assert_eq!(params.superconductor.tc, 7.1);
        assert_eq!(params.superconductor.width, 0.2);

        assert_eq!(params.to_theta(), theta);
    }
}
