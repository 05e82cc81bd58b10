//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks of a sweep in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Richer rendering belongs to the external plotting layer; this module only
//! proves out the one-way sweep → plot data flow.

use crate::domain::JunctionSweep;
use crate::plot::style::PlotStyle;

/// Which sweep series to plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotSeries {
    NormalMetal,
    Interface,
    Superconductor,
    Equivalent,
    CurrentNm,
    CurrentIs,
}

impl PlotSeries {
    /// Short label used in the plot header.
    pub fn label(self) -> &'static str {
        match self {
            PlotSeries::NormalMetal => "R_NM",
            PlotSeries::Interface => "R_I",
            PlotSeries::Superconductor => "R_S",
            PlotSeries::Equivalent => "R_eq",
            PlotSeries::CurrentNm => "I_NM",
            PlotSeries::CurrentIs => "I_IS",
        }
    }

    fn values(self, sweep: &JunctionSweep) -> &[f64] {
        match self {
            PlotSeries::NormalMetal => &sweep.r_nm,
            PlotSeries::Interface => &sweep.r_interface,
            PlotSeries::Superconductor => &sweep.r_superconductor,
            PlotSeries::Equivalent => &sweep.r_eq,
            PlotSeries::CurrentNm => &sweep.i_nm,
            PlotSeries::CurrentIs => &sweep.i_is,
        }
    }
}

/// Render one sweep series as a fixed-size ascii line plot.
pub fn render_ascii_plot(sweep: &JunctionSweep, series: PlotSeries, style: &PlotStyle) -> String {
    let width = style.canvas_width.max(10);
    let height = style.canvas_height.max(5);

    let curve: Vec<(f64, f64)> = sweep
        .temperatures
        .iter()
        .zip(series.values(sweep).iter())
        .filter(|(t, y)| t.is_finite() && y.is_finite())
        .map(|(&t, &y)| (t, y))
        .collect();

    let (t_min, t_max) = t_range(&curve).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = y_range(&curve).unwrap_or((0.0, 1.0));
    let (y_min, y_max) = pad_range(y_min, y_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];
    draw_curve(&mut grid, &curve, t_min, t_max, y_min, y_max);

    let mut out = String::new();
    out.push_str(&format!(
        "{}: T=[{t_min:.3}, {t_max:.3}] | y=[{y_min:.2}, {y_max:.2}]\n",
        series.label()
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
    out
}

fn t_range(curve: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_t = f64::INFINITY;
    let mut max_t = f64::NEG_INFINITY;
    for &(t, _) in curve {
        min_t = min_t.min(t);
        max_t = max_t.max(t);
    }
    if min_t.is_finite() && max_t.is_finite() && max_t > min_t {
        Some((min_t, max_t))
    } else {
        None
    }
}

fn y_range(curve: &[(f64, f64)]) -> Option<(f64, f64)> {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for &(_, y) in curve {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    if min_y.is_finite() && max_y.is_finite() && max_y > min_y {
        Some((min_y, max_y))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(
    grid: &mut [Vec<char>],
    curve: &[(f64, f64)],
    t_min: f64,
    t_max: f64,
    y_min: f64,
    y_max: f64,
) {
    if curve.is_empty() {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(t, y) in curve {
        let x = map_x(t, t_min, t_max, width);
        let yy = map_y(y, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, x, yy, '-');
        } else {
            grid[yy][x] = '-';
        }
        prev = Some((x, yy));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
