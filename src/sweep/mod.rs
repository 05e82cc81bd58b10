//! Array-shaped model evaluation.
//!
//! Responsibilities:
//!
//! - generate temperature grids (`grid`)
//! - evaluate the junction model element-wise over a grid (`run`)
//!
//! Keeping vectorized evaluation here lets the model functions in
//! [`crate::models`] stay scalar, pure and allocation-free.

pub mod grid;
pub mod run;

pub use grid::*;
pub use run::*;
