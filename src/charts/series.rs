//! Series of (x, y) points with a legend label and a marker/line style.
//!
//! Styles can be given explicitly or with the short format strings familiar from
//! matplotlib: a marker character (`o s ^ d x .`) and a line code (`- -- -. :`),
//! in either order, e.g. `"o-"`, `"s--"`, `"-.d"`, `"x"`.
use crate::charts::plot_error::{PlotError, Result, check_len};
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    combinator::{eof, opt, value},
};
use strum_macros::{Display, EnumIter, EnumString};

/// point marker drawn at every data point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Marker {
    Circle,
    Square,
    TriangleUp,
    Diamond,
    Cross,
    Point,
}

/// stroke pattern of the line connecting the points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dashed,
    DashDot,
    Dotted,
    /// markers only
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub marker: Option<Marker>,
    pub line: LineStyle,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            marker: None,
            line: LineStyle::Solid,
        }
    }
}

fn parse_marker(input: &str) -> IResult<&str, Marker> {
    alt((
        value(Marker::Circle, tag("o")),
        value(Marker::Square, tag("s")),
        value(Marker::TriangleUp, tag("^")),
        value(Marker::Diamond, tag("d")),
        value(Marker::Cross, tag("x")),
        value(Marker::Point, tag(".")),
    ))
    .parse(input)
}

fn parse_line(input: &str) -> IResult<&str, LineStyle> {
    // longest codes first: "-." and "--" share a prefix with "-"
    alt((
        value(LineStyle::DashDot, tag("-.")),
        value(LineStyle::Dashed, tag("--")),
        value(LineStyle::Solid, tag("-")),
        value(LineStyle::Dotted, tag(":")),
    ))
    .parse(input)
}

fn parse_fmt(input: &str) -> IResult<&str, (Option<Marker>, Option<LineStyle>, Option<Marker>)> {
    let (input, (leading, line, trailing, _)) =
        (opt(parse_marker), opt(parse_line), opt(parse_marker), eof).parse(input)?;
    Ok((input, (leading, line, trailing)))
}

impl Style {
    pub fn new(marker: Option<Marker>, line: LineStyle) -> Self {
        Style { marker, line }
    }

    pub fn marked(marker: Marker, line: LineStyle) -> Self {
        Style {
            marker: Some(marker),
            line,
        }
    }

    /// Parses a format shorthand like `"o-"` or `"s--"`.
    ///
    /// A marker with no line code gives markers only, a line code with no marker
    /// gives a plain line. A marker may appear before or after the line code but not
    /// on both sides.
    pub fn from_fmt(fmt: &str) -> Result<Self> {
        let fmt = fmt.trim();
        if fmt.is_empty() {
            return Err(PlotError::InvalidStyle("empty format string".to_string()));
        }
        let (_, (leading, line, trailing)) = parse_fmt(fmt)
            .map_err(|e| PlotError::InvalidStyle(format!("'{}': {:?}", fmt, e)))?;
        let marker = match (leading, trailing) {
            (Some(_), Some(_)) => {
                return Err(PlotError::InvalidStyle(format!(
                    "'{}' has two markers",
                    fmt
                )));
            }
            (m, None) | (None, m) => m,
        };
        let line = match (line, marker) {
            (Some(line), _) => line,
            (None, Some(_)) => LineStyle::None,
            (None, None) => LineStyle::Solid,
        };
        Ok(Style { marker, line })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub style: Style,
}

impl Series {
    /// Pairs `x` and `y` elementwise. Both must be non-empty and of equal length.
    pub fn from_xy<X, Y>(label: impl Into<String>, x: &[X], y: &[Y], style: Style) -> Result<Self>
    where
        X: Copy + Into<f64>,
        Y: Copy + Into<f64>,
    {
        let label = label.into();
        check_len(&format!("series '{}'", label), x.len(), y.len())?;
        if x.is_empty() {
            return Err(PlotError::EmptySeries(label));
        }
        let points = x
            .iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| (xi.into(), yi.into()))
            .collect();
        Ok(Series {
            label,
            points,
            style,
        })
    }

    pub fn from_fmt<X, Y>(label: impl Into<String>, x: &[X], y: &[Y], fmt: &str) -> Result<Self>
    where
        X: Copy + Into<f64>,
        Y: Copy + Into<f64>,
    {
        let style = Style::from_fmt(fmt)?;
        Self::from_xy(label, x, y, style)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.0)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.1)
    }

    /// fails on the first NaN or infinite coordinate
    pub fn check_finite(&self) -> Result<()> {
        match self
            .points
            .iter()
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            Some(index) => Err(PlotError::NonFiniteValue {
                label: self.label.clone(),
                index,
            }),
            None => Ok(()),
        }
    }
}
