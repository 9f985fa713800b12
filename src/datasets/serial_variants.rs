//! Serial SOR variants timed on five grid sizes.
//!
//! Times are the benchmark's printed values (`CPNS * 1e9 * seconds`) and are
//! plotted as nanoseconds. The Reversed and Blocked iteration counts are the same
//! numbers as Standard SOR; they are kept exactly as recorded.
use crate::charts::derived::time_per_iteration;
use crate::charts::{Figure, LineStyle, Marker, Result, Series, Style};

/// boundary rows/columns added around every grid
pub const GHOST: u32 = 2;
/// grid row length is `GHOST + A*x^2 + B*x + C` for test `x`
pub const A: u32 = 8;
pub const B: u32 = 16;
pub const C: u32 = 32;
pub const NUM_TESTS: u32 = 5;

pub const GRID_SIZES: [u32; 5] = [34, 58, 98, 154, 226];

pub const SOR_TIMES: [f64; 5] = [8.14e5, 9.212e6, 5.381e7, 3.615e8, 7.046e8];
pub const SOR_ITERS: [u32; 5] = [62, 210, 385, 1033, 908];

pub const REDBLACK_TIMES: [f64; 5] = [4.62e5, 3.67e6, 3.116e7, 1.902e8, 2.532e8];
pub const REDBLACK_ITERS: [u32; 5] = [93, 249, 637, 672, 1015];

pub const REVERSED_TIMES: [f64; 5] = [1.422e6, 1.542e7, 8.786e7, 5.942e8, 1.149e9];
pub const REVERSED_ITERS: [u32; 5] = [62, 210, 385, 1033, 908];

pub const BLOCKED_TIMES: [f64; 5] = [5.52e5, 5.614e6, 3.124e7, 2.13e8, 4.005e8];
pub const BLOCKED_ITERS: [u32; 5] = [62, 210, 385, 1033, 908];

/// Row lengths the serial benchmark generated, ghost zone included.
pub fn benchmark_grid_sizes() -> Vec<u32> {
    (0..NUM_TESTS).map(|x| GHOST + A * x * x + B * x + C).collect()
}

pub struct Variant {
    pub label: &'static str,
    pub times: &'static [f64],
    pub iterations: &'static [u32],
    pub style: Style,
}

pub fn variants() -> [Variant; 4] {
    [
        Variant {
            label: "Standard SOR",
            times: &SOR_TIMES,
            iterations: &SOR_ITERS,
            style: Style::marked(Marker::Circle, LineStyle::Solid),
        },
        Variant {
            label: "Red/Black SOR",
            times: &REDBLACK_TIMES,
            iterations: &REDBLACK_ITERS,
            style: Style::marked(Marker::Square, LineStyle::Dashed),
        },
        Variant {
            label: "Reversed SOR",
            times: &REVERSED_TIMES,
            iterations: &REVERSED_ITERS,
            style: Style::marked(Marker::Diamond, LineStyle::DashDot),
        },
        Variant {
            label: "Blocked SOR",
            times: &BLOCKED_TIMES,
            iterations: &BLOCKED_ITERS,
            style: Style::marked(Marker::Cross, LineStyle::Dotted),
        },
    ]
}

pub fn figure() -> Result<Figure> {
    let mut fig = Figure::new("Time per Innermost Loop Iteration for SOR Methods")
        .x_label("Grid Size")
        .y_label("Time per Iteration (ns)")
        .figsize(8.0, 5.0);
    for v in variants() {
        let per_iter = time_per_iteration(v.times, v.iterations, &GRID_SIZES)?;
        fig.add_series(Series::from_xy(v.label, &GRID_SIZES, &per_iter, v.style)?);
    }
    Ok(fig)
}
