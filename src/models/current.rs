//! Current-divider outputs for the NM-I-S network.
//!
//! Two formulations exist and both are kept under distinct names (they encode
//! different circuit assumptions, not accidental duplication):
//!
//! - Variant A ([`branch_currents_equivalent`]) ratios each branch against an
//!   externally supplied equivalent resistance `R_E`. It conserves total
//!   current only when `R_E` is exactly the
//!   [`equivalent_resistance`](crate::models::equivalent_resistance)
//!   combination of the same three segment resistances.
//! - Variant B ([`branch_currents_divider`]) is the standard two-branch
//!   divider and conserves total current by algebraic identity.

use crate::domain::{BranchCurrents, DividerConvention};

/// Variant A: branch currents from an explicit equivalent resistance.
///
/// `I_NM = (r_eq / r_nm) * i`, `I_IS = (r_eq / (r_i + r_s)) * i`
pub fn branch_currents_equivalent(
    i: f64,
    r_eq: f64,
    r_nm: f64,
    r_i: f64,
    r_s: f64,
) -> BranchCurrents {
    BranchCurrents {
        nm: (r_eq / r_nm) * i,
        is: (r_eq / (r_i + r_s)) * i,
    }
}

/// Variant B: the two-branch current divider for `r_nm` in parallel with the
/// series pair `r_i + r_s`.
///
/// `I_NM = ((r_i + r_s) / ΣR) * i`, `I_IS = (r_nm / ΣR) * i`
///
/// `I_NM + I_IS == i` exactly by construction.
pub fn branch_currents_divider(i: f64, r_nm: f64, r_i: f64, r_s: f64) -> BranchCurrents {
    let total = r_nm + r_i + r_s;
    BranchCurrents {
        nm: ((r_i + r_s) / total) * i,
        is: (r_nm / total) * i,
    }
}

/// Dispatch on the caller-selected divider convention.
///
/// `r_eq` is only consulted by [`DividerConvention::EquivalentRatio`]; the
/// two-branch form is fully determined by the segment resistances.
pub fn branch_currents(
    convention: DividerConvention,
    i: f64,
    r_eq: f64,
    r_nm: f64,
    r_i: f64,
    r_s: f64,
) -> BranchCurrents {
    match convention {
        DividerConvention::EquivalentRatio => branch_currents_equivalent(i, r_eq, r_nm, r_i, r_s),
        DividerConvention::TwoBranch => branch_currents_divider(i, r_nm, r_i, r_s),
    }
}
