//! Mathematical utilities: the sigmoidal transition factor.

pub mod transition;

pub use transition::*;
