//! Plotting collaborator surface.
//!
//! The model never depends on anything here; data flows one way, from sweep
//! arrays into plots. Cosmetic configuration lives in [`style::PlotStyle`]
//! instead of process-wide mutable state.

pub mod ascii;
pub mod style;

pub use ascii::*;
pub use style::*;
