use crate::charts::figure::series_color;
use crate::charts::{Figure, LegendPosition, LineStyle, Result, Style};
use std::ops::Range;

/// one series ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedSeries {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub style: Style,
    pub color: (u8, u8, u8),
}

impl PlannedSeries {
    /// The legend entry is attached to the markers when there are any, so the
    /// legend glyph can show both the marker and the line. Otherwise to the line.
    pub fn legend_on_markers(&self) -> bool {
        self.style.marker.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPlan {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub size: (u32, u32),
    pub grid: bool,
    pub legend: Option<LegendPosition>,
    pub entries: Vec<PlannedSeries>,
}

impl ChartPlan {
    pub fn from_figure(fig: &Figure) -> Result<Self> {
        fig.validate()?;
        let entries: Vec<PlannedSeries> = fig
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| PlannedSeries {
                label: s.label.clone(),
                points: s.points.clone(),
                style: s.style,
                color: series_color(i),
            })
            .collect();
        let x_range = fig.x_range()?;
        let y_range = fig.y_range()?;
        let legend = fig.legend.map(|pos| match pos {
            LegendPosition::Best => best_legend_position(&entries, &x_range, &y_range, fig.size),
            corner => corner,
        });
        Ok(ChartPlan {
            title: fig.title.clone(),
            x_label: fig.x_label.clone(),
            y_label: fig.y_label.clone(),
            x_range,
            y_range,
            size: fig.size,
            grid: fig.grid,
            legend,
            entries,
        })
    }
}

/// pixels taken from the figure size by margins, label areas and the caption
const FRAME_PX: (f64, f64) = (105.0, 105.0);
const LEGEND_ROW_PX: f64 = 20.0;
const LEGEND_PAD_PX: f64 = 12.0;
const LEGEND_CHAR_PX: f64 = 8.0;
const LEGEND_GLYPH_PX: f64 = 24.0;

/// Candidates for `Best`, in the order ties are resolved.
const BEST_CANDIDATES: [LegendPosition; 9] = [
    LegendPosition::UpperRight,
    LegendPosition::UpperLeft,
    LegendPosition::LowerLeft,
    LegendPosition::LowerRight,
    LegendPosition::CenterLeft,
    LegendPosition::CenterRight,
    LegendPosition::LowerCenter,
    LegendPosition::UpperCenter,
    LegendPosition::Center,
];

/// (x0, x1, y0, y1) in axes fractions
type Rect = (f64, f64, f64, f64);

/// Estimated legend box as a fraction of the plotting area.
fn legend_box(entries: &[PlannedSeries], size: (u32, u32)) -> (f64, f64) {
    let plot_w = (f64::from(size.0) - FRAME_PX.0).max(1.0);
    let plot_h = (f64::from(size.1) - FRAME_PX.1).max(1.0);
    let chars = entries.iter().map(|e| e.label.chars().count()).max().unwrap_or(0);
    let w = LEGEND_GLYPH_PX + 2.0 * LEGEND_PAD_PX + chars as f64 * LEGEND_CHAR_PX;
    let h = entries.len() as f64 * LEGEND_ROW_PX + 2.0 * LEGEND_PAD_PX;
    ((w / plot_w).min(1.0), (h / plot_h).min(1.0))
}

fn legend_rect(pos: LegendPosition, (w, h): (f64, f64)) -> Rect {
    use LegendPosition::*;
    let fx = match pos {
        UpperLeft | LowerLeft | CenterLeft => 0.0,
        UpperRight | LowerRight | CenterRight | Best => 1.0,
        UpperCenter | LowerCenter | Center => 0.5,
    };
    let fy = match pos {
        LowerLeft | LowerRight | LowerCenter => 0.0,
        UpperLeft | UpperRight | UpperCenter | Best => 1.0,
        CenterLeft | CenterRight | Center => 0.5,
    };
    let (x0, y0) = (fx * (1.0 - w), fy * (1.0 - h));
    (x0, x0 + w, y0, y0 + h)
}

fn contains((x0, x1, y0, y1): Rect, (u, v): (f64, f64)) -> bool {
    (x0..=x1).contains(&u) && (y0..=y1).contains(&v)
}

/// Liang-Barsky clip of the segment a-b against the rectangle
fn segment_hits((x0, x1, y0, y1): Rect, a: (f64, f64), b: (f64, f64)) -> bool {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    for (p, q) in [(-dx, a.0 - x0), (dx, x1 - a.0), (-dy, a.1 - y0), (dy, y1 - a.1)] {
        if p == 0.0 {
            if q < 0.0 {
                return false;
            }
        } else if p < 0.0 {
            t0 = t0.max(q / p);
        } else {
            t1 = t1.min(q / p);
        }
    }
    t0 <= t1
}

/// Picks the legend position covering the fewest data points plus line segments,
/// with the box size estimated from the entries and the figure size.
/// Ties go to the earlier candidate, upper right first.
pub fn best_legend_position(
    entries: &[PlannedSeries],
    x_range: &Range<f64>,
    y_range: &Range<f64>,
    size: (u32, u32),
) -> LegendPosition {
    let norm = |(x, y): (f64, f64)| {
        (
            (x - x_range.start) / (x_range.end - x_range.start),
            (y - y_range.start) / (y_range.end - y_range.start),
        )
    };
    let legend = legend_box(entries, size);
    let badness = |pos: LegendPosition| {
        let rect = legend_rect(pos, legend);
        entries
            .iter()
            .map(|e| {
                let points: Vec<(f64, f64)> = e.points.iter().copied().map(norm).collect();
                let vertices = points.iter().filter(|&&p| contains(rect, p)).count();
                let segments = if e.style.line == LineStyle::None {
                    0
                } else {
                    points
                        .windows(2)
                        .filter(|pair| segment_hits(rect, pair[0], pair[1]))
                        .count()
                };
                vertices + segments
            })
            .sum::<usize>()
    };
    BEST_CANDIDATES
        .into_iter()
        .min_by_key(|&pos| badness(pos))
        .unwrap_or(LegendPosition::UpperRight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::figure::TAB10;
    use crate::charts::{LineStyle, Marker, PlotError, Series};
    use crate::datasets::ChartId;

    #[test]
    fn test_plan_keeps_order_and_cycles_colours() {
        let fig = ChartId::SerialVariants.build().unwrap();
        let plan = ChartPlan::from_figure(&fig).unwrap();
        let labels: Vec<_> = plan.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Standard SOR", "Red/Black SOR", "Reversed SOR", "Blocked SOR"]
        );
        for (i, e) in plan.entries.iter().enumerate() {
            assert_eq!(e.color, TAB10[i]);
        }
        assert_eq!(plan.size, (800, 500));
        assert_eq!(plan.title, fig.title);
    }

    #[test]
    fn test_plan_ranges_cover_all_points() {
        let fig = ChartId::ThreadScaling.build().unwrap();
        let plan = ChartPlan::from_figure(&fig).unwrap();
        for e in &plan.entries {
            for &(x, y) in &e.points {
                assert!(plan.x_range.contains(&x));
                assert!(plan.y_range.contains(&y));
            }
        }
        // 10..100 padded by 5% of 90
        assert!((plan.x_range.start - 5.5).abs() < 1e-9);
        assert!((plan.x_range.end - 104.5).abs() < 1e-9);
    }

    #[test]
    fn test_legend_ownership() {
        let fig = Figure::new("f")
            .with_series(
                Series::from_xy("line", &[1.0f64, 2.0], &[1.0f64, 2.0], Style::default()).unwrap(),
            )
            .with_series(
                Series::from_xy(
                    "dots",
                    &[1.0f64, 2.0],
                    &[2.0f64, 3.0],
                    Style::marked(Marker::Point, LineStyle::None),
                )
                .unwrap(),
            );
        let plan = ChartPlan::from_figure(&fig).unwrap();
        assert!(!plan.entries[0].legend_on_markers());
        assert!(plan.entries[1].legend_on_markers());
    }

    #[test]
    fn test_plan_rejects_empty_figure() {
        assert!(matches!(
            ChartPlan::from_figure(&Figure::new("e")),
            Err(PlotError::EmptyFigure(_))
        ));
    }

    #[test]
    fn test_best_legend_per_chart() {
        let plan = |id: ChartId| ChartPlan::from_figure(&id.build().unwrap()).unwrap();
        assert_eq!(plan(ChartId::OmegaSweep).legend, Some(LegendPosition::UpperRight));
        assert_eq!(plan(ChartId::ThreadScaling).legend, Some(LegendPosition::UpperLeft));
        // the Reversed SOR curve ends in the upper right corner
        assert_eq!(
            plan(ChartId::SerialVariants).legend,
            Some(LegendPosition::UpperCenter)
        );
    }

    #[test]
    fn test_best_legend_avoids_data() {
        // rising line through lower left to upper right leaves the other two corners free
        let fig = Figure::new("rising").with_series(
            Series::from_xy(
                "y = x",
                &[0.0f64, 1.0, 2.0, 3.0, 4.0],
                &[0.0f64, 1.0, 2.0, 3.0, 4.0],
                Style::marked(Marker::Circle, LineStyle::Solid),
            )
            .unwrap(),
        );
        assert_eq!(
            ChartPlan::from_figure(&fig).unwrap().legend,
            Some(LegendPosition::UpperLeft)
        );
        let fixed = fig.legend(Some(LegendPosition::LowerRight));
        assert_eq!(
            ChartPlan::from_figure(&fixed).unwrap().legend,
            Some(LegendPosition::LowerRight)
        );
    }

    #[test]
    fn test_segment_hits() {
        let rect = (0.4, 0.6, 0.4, 0.6);
        assert!(segment_hits(rect, (0.0, 0.0), (1.0, 1.0)));
        assert!(!segment_hits(rect, (0.0, 0.9), (1.0, 0.9)));
        assert!(segment_hits(rect, (0.5, 0.5), (0.5, 0.5)));
        assert!(!segment_hits(rect, (0.0, 0.0), (0.3, 0.3)));
    }
}
