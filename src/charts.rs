//! building blocks of a chart: series, figures, derived series and the error type
/// errors raised while building and rendering charts
pub mod plot_error;
/// (x, y) series with label and marker/line style
pub mod series;
/// figure: series sharing axes, title, labels, legend, grid
pub mod figure;
/// series computed elementwise from measured data (time per iteration, speedup)
pub mod derived;

pub use figure::{Figure, LegendPosition};
pub use plot_error::{PlotError, Result};
pub use series::{LineStyle, Marker, Series, Style};
