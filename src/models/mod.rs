//! Closed-form junction models.
//!
//! Two families of operations:
//!
//! - per-segment resistances and their network combination (`resistance`)
//! - current-divider outputs in both preserved conventions (`current`)
//!
//! Every function here is a stateless pure function; numeric-domain failures
//! (zero transition width, all-zero resistances) propagate as NaN/Inf rather
//! than erroring.

pub mod current;
pub mod resistance;

pub use current::*;
pub use resistance::*;
