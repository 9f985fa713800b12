use crate::charts::{LegendPosition, LineStyle, Marker, PlotError, Result};
use crate::render::layout::{ChartPlan, PlannedSeries};
use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use std::path::Path;

const LINE_WIDTH: u32 = 2;
const MARKER_SIZE: i32 = 4;
const LEGEND_LINE: i32 = 24;

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn render_err<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Render(err.to_string())
}

pub fn draw_png(plan: &ChartPlan, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, plan.size).into_drawing_area();
    draw_plan(&root, plan)
}

pub fn draw_svg(plan: &ChartPlan, path: &Path) -> Result<()> {
    let svg = svg_string(plan)?;
    std::fs::write(path, svg)?;
    Ok(())
}

/// svg document as a string, nothing is written to disk
pub fn svg_string(plan: &ChartPlan) -> Result<String> {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, plan.size).into_drawing_area();
        draw_plan(&root, plan)?;
    }
    Ok(buf)
}

fn label_position(pos: LegendPosition) -> SeriesLabelPosition {
    match pos {
        LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
        // `Best` is resolved to a corner by the layout plan
        LegendPosition::UpperRight | LegendPosition::Best => SeriesLabelPosition::UpperRight,
        LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
        LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
        LegendPosition::CenterLeft => SeriesLabelPosition::MiddleLeft,
        LegendPosition::CenterRight => SeriesLabelPosition::MiddleRight,
        LegendPosition::LowerCenter => SeriesLabelPosition::LowerMiddle,
        LegendPosition::UpperCenter => SeriesLabelPosition::UpperMiddle,
        LegendPosition::Center => SeriesLabelPosition::MiddleMiddle,
    }
}

/// (dash length, gap) in pixels; `None` for solid or absent lines
pub fn dash_pattern(line: LineStyle) -> Option<(i32, i32)> {
    match line {
        LineStyle::Dashed => Some((8, 5)),
        // plotters has no dash-dot stroke, a long dash with short gaps stands in
        LineStyle::DashDot => Some((14, 4)),
        LineStyle::Dotted => Some((2, 4)),
        LineStyle::Solid | LineStyle::None => None,
    }
}

pub fn draw_plan<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, plan: &ChartPlan) -> Result<()> {
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&plan.title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(75)
        .build_cartesian_2d(plan.x_range.clone(), plan.y_range.clone())
        .map_err(render_err)?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(plan.x_label.as_str())
            .y_desc(plan.y_label.as_str())
            .bold_line_style(BLACK.mix(0.15))
            .max_light_lines(0);
        if !plan.grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(render_err)?;
    }

    for entry in &plan.entries {
        let color = RGBColor(entry.color.0, entry.color.1, entry.color.2);
        draw_line(&mut chart, entry, color)?;
        draw_markers(&mut chart, entry, color)?;
    }

    if let Some(pos) = plan.legend {
        chart
            .configure_series_labels()
            .position(label_position(pos))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    Ok(())
}

fn draw_line<'a, DB: DrawingBackend + 'a>(
    chart: &mut Chart<'a, DB>,
    entry: &PlannedSeries,
    color: RGBColor,
) -> Result<()> {
    let style = ShapeStyle::from(&color).stroke_width(LINE_WIDTH);
    let points = entry.points.clone();
    let anno = match (entry.style.line, dash_pattern(entry.style.line)) {
        (LineStyle::None, _) => return Ok(()),
        (_, Some((dash, gap))) => chart
            .draw_series(DashedLineSeries::new(points, dash, gap, style))
            .map_err(render_err)?,
        (_, None) => chart
            .draw_series(LineSeries::new(points, style))
            .map_err(render_err)?,
    };
    if !entry.legend_on_markers() {
        anno.label(entry.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + LEGEND_LINE, y)], style));
    }
    Ok(())
}

fn draw_markers<'a, DB: DrawingBackend + 'a>(
    chart: &mut Chart<'a, DB>,
    entry: &PlannedSeries,
    color: RGBColor,
) -> Result<()> {
    let Some(marker) = entry.style.marker else {
        return Ok(());
    };
    let fill = color.filled();
    let stroke = ShapeStyle::from(&color).stroke_width(LINE_WIDTH);
    // legend glyph: line segment with the marker in its middle
    let legend_line = match entry.style.line {
        LineStyle::None => ShapeStyle::from(&TRANSPARENT),
        _ => stroke,
    };
    let mid = LEGEND_LINE / 2;
    let s = MARKER_SIZE;
    let label = entry.label.clone();
    let points = entry.points.iter().copied();

    match marker {
        Marker::Circle => {
            chart
                .draw_series(points.map(|c| Circle::new(c, s, fill)))
                .map_err(render_err)?
                .label(label)
                .legend(move |(x, y)| {
                    EmptyElement::at((x, y))
                        + PathElement::new(vec![(0, 0), (LEGEND_LINE, 0)], legend_line)
                        + Circle::new((mid, 0), s, fill)
                });
        }
        Marker::Point => {
            chart
                .draw_series(points.map(|c| Circle::new(c, s / 2, fill)))
                .map_err(render_err)?
                .label(label)
                .legend(move |(x, y)| {
                    EmptyElement::at((x, y))
                        + PathElement::new(vec![(0, 0), (LEGEND_LINE, 0)], legend_line)
                        + Circle::new((mid, 0), s / 2, fill)
                });
        }
        Marker::Square => {
            chart
                .draw_series(
                    points.map(|c| EmptyElement::at(c) + Rectangle::new([(-s, -s), (s, s)], fill)),
                )
                .map_err(render_err)?
                .label(label)
                .legend(move |(x, y)| {
                    EmptyElement::at((x, y))
                        + PathElement::new(vec![(0, 0), (LEGEND_LINE, 0)], legend_line)
                        + Rectangle::new([(mid - s, -s), (mid + s, s)], fill)
                });
        }
        Marker::TriangleUp => {
            chart
                .draw_series(points.map(|c| TriangleMarker::new(c, s + 1, fill)))
                .map_err(render_err)?
                .label(label)
                .legend(move |(x, y)| {
                    EmptyElement::at((x, y))
                        + PathElement::new(vec![(0, 0), (LEGEND_LINE, 0)], legend_line)
                        + TriangleMarker::new((mid, 0), s + 1, fill)
                });
        }
        Marker::Diamond => {
            chart
                .draw_series(points.map(|c| {
                    EmptyElement::at(c)
                        + Polygon::new(vec![(0, -s - 1), (s, 0), (0, s + 1), (-s, 0)], fill)
                }))
                .map_err(render_err)?
                .label(label)
                .legend(move |(x, y)| {
                    EmptyElement::at((x, y))
                        + PathElement::new(vec![(0, 0), (LEGEND_LINE, 0)], legend_line)
                        + Polygon::new(
                            vec![(mid, -s - 1), (mid + s, 0), (mid, s + 1), (mid - s, 0)],
                            fill,
                        )
                });
        }
        Marker::Cross => {
            chart
                .draw_series(points.map(|c| Cross::new(c, s, stroke)))
                .map_err(render_err)?
                .label(label)
                .legend(move |(x, y)| {
                    EmptyElement::at((x, y))
                        + PathElement::new(vec![(0, 0), (LEGEND_LINE, 0)], legend_line)
                        + Cross::new((mid, 0), s, stroke)
                });
        }
    }
    Ok(())
}
