//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - per-segment parameter structs (`NormalMetalParams`, `TransitionParams`)
//! - the full junction parameter set (`JunctionParams`) and its flat
//!   fit-vector form
//! - the current-divider convention selector (`DividerConvention`)
//! - sweep output containers (`SweepGrid`, `JunctionSweep`)

pub mod types;

pub use types::*;
