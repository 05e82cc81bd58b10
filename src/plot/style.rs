//! Cosmetic plot configuration.
//!
//! These settings are initialization-only and consumed exclusively by
//! plotting code; the model functions never read them. Keeping them in a
//! value type (rather than globals) lets callers run different styles side
//! by side.

use serde::{Deserialize, Serialize};

/// Style settings for plot rendering.
///
/// The font/alpha fields target richer external backends; the ascii renderer
/// in this crate only consumes the canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    /// Curve line width.
    pub line_width: f64,
    /// Tick label font size.
    pub tick_font_size: f64,
    /// Axis label font size.
    pub label_font_size: f64,
    /// Alpha for primary curves.
    pub alpha_line: f64,
    /// Alpha for filled regions.
    pub alpha_fill: f64,
    /// Alpha for grid lines / secondary elements.
    pub alpha_grid: f64,
    /// Ascii canvas width in characters.
    pub canvas_width: usize,
    /// Ascii canvas height in rows.
    pub canvas_height: usize,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            line_width: 1.3,
            tick_font_size: 7.5,
            label_font_size: 9.0,
            alpha_line: 1.0,
            alpha_fill: 0.2,
            alpha_grid: 0.5,
            canvas_width: 72,
            canvas_height: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_carries_reference_constants() {
        let style = PlotStyle::default();
        assert_eq!(style.line_width, 1.3);
        assert_eq!(style.tick_font_size, 7.5);
        assert_eq!(style.label_font_size, 9.0);
        assert_eq!(style.alpha_line, 1.0);
        assert_eq!(style.alpha_fill, 0.2);
        assert_eq!(style.alpha_grid, 0.5);
    }
}
