//! Rendering of figures: a backend independent layout plan, plotters for PNG/SVG
//! files and gnuplot for interactive windows.
use crate::charts::{Figure, PlotError, Result};
use log::info;
use std::path::{Path, PathBuf};
use strum_macros::{Display, EnumString};

/// axis ranges, colours and legend ownership computed from a figure
pub mod layout;
/// plotters drawing of a layout plan onto bitmap or svg backends
pub mod plotters_render;
/// gnuplot drawing of a layout plan: interactive window or png
pub mod gnuplot_render;

pub use layout::{ChartPlan, PlannedSeries};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }

    /// format implied by the file extension, case insensitive
    pub fn from_path(path: &Path) -> Option<OutputFormat> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        ext.parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Backend {
    Plotters,
    Gnuplot,
}

/// `<dir>/<stem>.<ext>`
pub fn output_path(dir: &Path, stem: &str, format: OutputFormat) -> PathBuf {
    dir.join(format!("{}.{}", stem, format.extension()))
}

/// Renders `fig` into `path`. Parent directories are created as needed.
/// The gnuplot backend only writes PNG.
pub fn render_to_file(
    fig: &Figure,
    path: &Path,
    format: OutputFormat,
    backend: Backend,
) -> Result<()> {
    let plan = ChartPlan::from_figure(fig)?;
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    match (backend, format) {
        (Backend::Plotters, OutputFormat::Png) => plotters_render::draw_png(&plan, path)?,
        (Backend::Plotters, OutputFormat::Svg) => plotters_render::draw_svg(&plan, path)?,
        (Backend::Gnuplot, OutputFormat::Png) => gnuplot_render::save_png(&plan, path)?,
        (Backend::Gnuplot, OutputFormat::Svg) => {
            return Err(PlotError::Render(
                "gnuplot backend writes png only".to_string(),
            ));
        }
    }
    info!("'{}' written to {}", fig.title, path.display());
    Ok(())
}

/// Opens an interactive gnuplot window with the figure.
pub fn show(fig: &Figure) -> Result<()> {
    let plan = ChartPlan::from_figure(fig)?;
    gnuplot_render::show(&plan)?;
    info!("'{}' shown", fig.title);
    Ok(())
}
