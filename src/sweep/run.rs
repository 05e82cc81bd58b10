//! Element-wise junction evaluation over a temperature grid.
//!
//! Every sample is independent (no cross-element ordering dependency), so the
//! evaluation is parallelized with rayon. The scalar `total_current`
//! broadcasts across the grid.

use rayon::prelude::*;

use crate::domain::{DividerConvention, JunctionParams, JunctionSweep, SweepGrid};
use crate::models::{
    branch_currents, equivalent_resistance, resistance_interface, resistance_nm,
    resistance_superconductor,
};

/// One evaluated grid sample.
#[derive(Debug, Clone, Copy)]
struct Sample {
    r_nm: f64,
    r_i: f64,
    r_s: f64,
    r_eq: f64,
    i_nm: f64,
    i_is: f64,
}

fn evaluate_sample(
    t: f64,
    params: &JunctionParams,
    total_current: f64,
    convention: DividerConvention,
) -> Sample {
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
    let r_eq = equivalent_resistance(r_nm, r_i, r_s);
    let currents = branch_currents(convention, total_current, r_eq, r_nm, r_i, r_s);

    Sample {
        r_nm,
        r_i,
        r_s,
        r_eq,
        i_nm: currents.nm,
        i_is: currents.is,
    }
}

/// Evaluate segment resistances, equivalent resistance and branch currents
/// at every grid temperature.
pub fn sweep_junction(
    grid: &SweepGrid,
    params: &JunctionParams,
    total_current: f64,
    convention: DividerConvention,
) -> JunctionSweep {
    let samples: Vec<Sample> = grid
        .temperatures
        .par_iter()
        .map(|&t| evaluate_sample(t, params, total_current, convention))
        .collect();

    let n = samples.len();
    let mut out = JunctionSweep {
        temperatures: grid.temperatures.clone(),
        r_nm: Vec::with_capacity(n),
        r_interface: Vec::with_capacity(n),
        r_superconductor: Vec::with_capacity(n),
        r_eq: Vec::with_capacity(n),
        i_nm: Vec::with_capacity(n),
        i_is: Vec::with_capacity(n),
    };
    for s in samples {
        out.r_nm.push(s.r_nm);
        out.r_interface.push(s.r_i);
        out.r_superconductor.push(s.r_s);
        out.r_eq.push(s.r_eq);
        out.i_nm.push(s.i_nm);
        out.i_is.push(s.i_is);
    }
    out
}
