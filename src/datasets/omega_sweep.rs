use crate::charts::{Figure, LineStyle, Marker, Result, Series, Style};

/// relaxation parameters tried
pub const OMEGA_VALUES: [f64; 10] = [1.0, 1.1, 1.2, 1.3, 1.4, 1.5, 1.6, 1.7, 1.8, 1.9];

pub const ITERATIONS_32X32: [u32; 10] = [346, 274, 224, 187, 161, 142, 125, 113, 102, 94];
pub const ITERATIONS_64X64: [u32; 10] = [1212, 949, 777, 645, 551, 478, 428, 386, 350, 323];
pub const ITERATIONS_128X128: [u32; 10] =
    [4471, 3577, 2930, 2462, 2134, 1862, 1661, 1484, 1342, 1227];
pub const ITERATIONS_256X256: [u32; 10] =
    [17265, 14008, 11558, 9734, 8373, 7245, 6413, 5733, 5191, 4737];

/// (grid label, iterations per omega, marker)
pub fn grids() -> [(&'static str, &'static [u32], Marker); 4] {
    [
        ("32x32 Grid", &ITERATIONS_32X32, Marker::Circle),
        ("64x64 Grid", &ITERATIONS_64X64, Marker::Square),
        ("128x128 Grid", &ITERATIONS_128X128, Marker::TriangleUp),
        ("256x256 Grid", &ITERATIONS_256X256, Marker::Diamond),
    ]
}

pub fn figure() -> Result<Figure> {
    let mut fig = Figure::new("SOR Iterations vs. Relaxation Parameter for Different Grid Sizes")
        .x_label("Relaxation Parameter (ω)")
        .y_label("Iterations to Convergence")
        .figsize(10.0, 6.0);
    for (label, iterations, marker) in grids() {
        fig.add_series(Series::from_xy(
            label,
            &OMEGA_VALUES,
            iterations,
            Style::marked(marker, LineStyle::Solid),
        )?);
    }
    Ok(fig)
}
