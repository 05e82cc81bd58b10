//! Temperature grid generation.
//!
//! Grids are linear in temperature: superconducting transitions live in a
//! narrow absolute-temperature window, so there is nothing to gain from
//! log spacing here.

use crate::domain::SweepGrid;
use crate::error::ModelError;

/// Generate `steps` linearly spaced points between `min` and `max` (inclusive).
pub fn lin_space(min: f64, max: f64, steps: usize) -> Result<Vec<f64>, ModelError> {
    if !(min.is_finite() && max.is_finite() && max > min) {
        return Err(ModelError::new(format!(
            "Invalid temperature range: min={min}, max={max} (must be finite and max>min)."
        )));
    }
    if steps < 2 {
        return Err(ModelError::new("Temperature steps must be >= 2."));
    }

    let step = (max - min) / (steps as f64 - 1.0);
    let mut out = Vec::with_capacity(steps);
    for i in 0..steps {
        out.push(min + step * i as f64);
    }
    Ok(out)
}

impl SweepGrid {
    /// Build an inclusive linear grid over `[min, max]`.
    pub fn linear(min: f64, max: f64, steps: usize) -> Result<Self, ModelError> {
        Ok(Self {
            temperatures: lin_space(min, max, steps)?,
        })
    }

    /// Wrap caller-supplied temperature samples (e.g. measured data points).
    pub fn from_temperatures(temperatures: Vec<f64>) -> Result<Self, ModelError> {
        if temperatures.is_empty() {
            return Err(ModelError::new("Temperature grid is empty."));
        }
        Ok(Self { temperatures })
    }

    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }
}
