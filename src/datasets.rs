//! Benchmark results as measured by the SOR and threading experiments, and the
//! figures built from them.
use crate::charts::{Figure, PlotError, Result};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// iterations to convergence versus relaxation parameter, four grid sizes
pub mod omega_sweep;
/// time per innermost loop iteration of four serial SOR variants
pub mod serial_variants;
/// execution time of threaded SOR for 1, 2 and 4 threads
pub mod thread_scaling;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum ChartId {
    OmegaSweep,
    SerialVariants,
    ThreadScaling,
}

impl ChartId {
    pub fn all() -> Vec<ChartId> {
        ChartId::iter().collect()
    }

    /// Parses a chart name; accepts `-` in place of `_`.
    pub fn parse(name: &str) -> Result<ChartId> {
        name.trim()
            .replace('-', "_")
            .parse::<ChartId>()
            .map_err(|_| PlotError::UnknownChart(name.to_string()))
    }

    pub fn file_stem(&self) -> String {
        self.to_string()
    }

    pub fn build(&self) -> Result<Figure> {
        match self {
            ChartId::OmegaSweep => omega_sweep::figure(),
            ChartId::SerialVariants => serial_variants::figure(),
            ChartId::ThreadScaling => thread_scaling::figure(),
        }
    }
}
