//! `nmis-model` library crate.
//!
//! Closed-form resistance and current models for a normal-metal / interface /
//! superconductor (NM-I-S) junction as functions of temperature.
//!
//! The crate is organized so that:
//!
//! - the model functions stay pure and fit-routine-friendly (an external
//!   curve-fitting driver calls [`models::junction_resistance`] once per
//!   candidate parameter vector per temperature sample)
//! - array-shaped evaluation lives in one place ([`sweep`])
//! - plotting stays a thin consumer of sweep arrays ([`plot`])

pub mod domain;
pub mod error;
pub mod math;
pub mod models;
pub mod plot;
pub mod sweep;
