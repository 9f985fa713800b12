//! A figure: several series over one pair of axes, with title, labels, legend and grid.
use crate::charts::plot_error::{PlotError, Result};
use crate::charts::series::Series;
use std::ops::Range;
use strum_macros::{Display, EnumString};

/// matplotlib's default margin around the data extent
pub const AXIS_MARGIN: f64 = 0.05;
/// pixels per inch used to turn figure sizes in inches into pixels
pub const DPI: f64 = 100.0;

/// matplotlib "tab10" colour cycle, as RGB
pub const TAB10: [(u8, u8, u8); 10] = [
    (0x1f, 0x77, 0xb4),
    (0xff, 0x7f, 0x0e),
    (0x2c, 0xa0, 0x2c),
    (0xd6, 0x27, 0x28),
    (0x94, 0x67, 0xbd),
    (0x8c, 0x56, 0x4b),
    (0xe3, 0x77, 0xc2),
    (0x7f, 0x7f, 0x7f),
    (0xbc, 0xbd, 0x22),
    (0x17, 0xbe, 0xcf),
];

pub fn series_color(index: usize) -> (u8, u8, u8) {
    TAB10[index % TAB10.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum LegendPosition {
    /// position covering the fewest data points, picked when the chart is laid out
    Best,
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
    CenterLeft,
    CenterRight,
    LowerCenter,
    UpperCenter,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    /// width and height in pixels
    pub size: (u32, u32),
    pub grid: bool,
    pub legend: Option<LegendPosition>,
}

impl Figure {
    pub fn new(title: impl Into<String>) -> Self {
        Figure {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            series: Vec::new(),
            size: (800, 500),
            grid: true,
            legend: Some(LegendPosition::Best),
        }
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    /// size in inches, converted with [`DPI`]
    pub fn figsize(mut self, width: f64, height: f64) -> Self {
        self.size = ((width * DPI).round() as u32, (height * DPI).round() as u32);
        self
    }

    pub fn size_px(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn grid(mut self, on: bool) -> Self {
        self.grid = on;
        self
    }

    pub fn legend(mut self, position: Option<LegendPosition>) -> Self {
        self.legend = position;
        self
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Checks everything a backend needs before drawing: at least one series,
    /// no empty series, finite values only.
    pub fn validate(&self) -> Result<()> {
        if self.series.is_empty() {
            return Err(PlotError::EmptyFigure(self.title.clone()));
        }
        for s in &self.series {
            if s.is_empty() {
                return Err(PlotError::EmptySeries(s.label.clone()));
            }
            s.check_finite()?;
        }
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(PlotError::Render(format!(
                "figure '{}' has zero size {:?}",
                self.title, self.size
            )));
        }
        Ok(())
    }

    pub fn x_range(&self) -> Result<Range<f64>> {
        self.validate()?;
        Ok(padded_range(self.series.iter().flat_map(|s| s.xs())))
    }

    pub fn y_range(&self) -> Result<Range<f64>> {
        self.validate()?;
        Ok(padded_range(self.series.iter().flat_map(|s| s.ys())))
    }

    /// x values shared by every series, if all series have identical x
    pub fn shared_x(&self) -> Option<Vec<f64>> {
        let first: Vec<f64> = self.series.first()?.xs().collect();
        self.series
            .iter()
            .all(|s| s.xs().eq(first.iter().copied()))
            .then_some(first)
    }
}

/// Data extent padded by [`AXIS_MARGIN`] on both sides; a single value is
/// widened by 0.5 each way. Empty input gives `0.0..1.0`.
pub fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min > max {
        return 0.0..1.0;
    }
    if min == max {
        return (min - 0.5)..(max + 0.5);
    }
    let pad = (max - min) * AXIS_MARGIN;
    (min - pad)..(max + pad)
}
