use crate::charts::{LegendPosition, LineStyle, Marker, PlotError, Result};
use crate::render::layout::ChartPlan;
use gnuplot::{
    AlignBottom, AlignCenter, AlignLeft, AlignRight, AlignTop, AlignType, AutoOption, AxesCommon,
    Caption, DashType, Figure, Graph, LineStyle as Dash, LineWidth, Placement, PlotOption,
    PointSize, PointSymbol,
};
use log::debug;
use std::path::Path;

/// gnuplot point symbol; upper case letters are the filled variants
pub fn point_symbol(marker: Marker) -> char {
    match marker {
        Marker::Circle => 'O',
        Marker::Square => 'S',
        Marker::TriangleUp => 'T',
        Marker::Diamond => 'D',
        Marker::Cross => 'x',
        Marker::Point => '.',
    }
}

pub fn dash_type(line: LineStyle) -> Option<DashType> {
    match line {
        LineStyle::Solid => Some(DashType::Solid),
        LineStyle::Dashed => Some(DashType::Dash),
        LineStyle::DashDot => Some(DashType::DotDash),
        LineStyle::Dotted => Some(DashType::Dot),
        LineStyle::None => None,
    }
}

/// key anchor in graph coordinates and its alignment around the anchor
fn key_placement(pos: LegendPosition) -> (f64, f64, AlignType, AlignType) {
    const NEAR: f64 = 0.02;
    const FAR: f64 = 0.98;
    match pos {
        LegendPosition::UpperRight | LegendPosition::Best => (FAR, FAR, AlignRight, AlignTop),
        LegendPosition::UpperLeft => (NEAR, FAR, AlignLeft, AlignTop),
        LegendPosition::LowerLeft => (NEAR, NEAR, AlignLeft, AlignBottom),
        LegendPosition::LowerRight => (FAR, NEAR, AlignRight, AlignBottom),
        LegendPosition::CenterLeft => (NEAR, 0.5, AlignLeft, AlignCenter),
        LegendPosition::CenterRight => (FAR, 0.5, AlignRight, AlignCenter),
        LegendPosition::LowerCenter => (0.5, NEAR, AlignCenter, AlignBottom),
        LegendPosition::UpperCenter => (0.5, FAR, AlignCenter, AlignTop),
        LegendPosition::Center => (0.5, 0.5, AlignCenter, AlignCenter),
    }
}

fn build_figure(plan: &ChartPlan) -> Figure {
    let mut fg = Figure::new();
    let axes = fg.axes2d();
    axes.set_title(&plan.title, &[])
        .set_x_label(&plan.x_label, &[])
        .set_y_label(&plan.y_label, &[])
        .set_x_range(
            AutoOption::Fix(plan.x_range.start),
            AutoOption::Fix(plan.x_range.end),
        )
        .set_y_range(
            AutoOption::Fix(plan.y_range.start),
            AutoOption::Fix(plan.y_range.end),
        )
        .set_x_grid(plan.grid)
        .set_y_grid(plan.grid);
    if let Some(pos) = plan.legend {
        let (x, y, horizontal, vertical) = key_placement(pos);
        axes.set_legend(Graph(x), Graph(y), &[Placement(horizontal, vertical)], &[]);
    }

    for entry in &plan.entries {
        let x: Vec<f64> = entry.points.iter().map(|p| p.0).collect();
        let y: Vec<f64> = entry.points.iter().map(|p| p.1).collect();
        let mut options: Vec<PlotOption<&str>> = vec![LineWidth(1.5)];
        if plan.legend.is_some() {
            options.push(Caption(entry.label.as_str()));
        }
        if let Some(marker) = entry.style.marker {
            options.push(PointSymbol(point_symbol(marker)));
            options.push(PointSize(1.0));
        }
        if let Some(dash) = dash_type(entry.style.line) {
            options.push(Dash(dash));
        }
        match (entry.style.marker, entry.style.line) {
            (Some(_), LineStyle::None) => {
                axes.points(x.as_slice(), y.as_slice(), &options);
            }
            (Some(_), _) => {
                axes.lines_points(x.as_slice(), y.as_slice(), &options);
            }
            (None, _) => {
                axes.lines(x.as_slice(), y.as_slice(), &options);
            }
        }
        debug!("gnuplot series '{}' with {} points", entry.label, x.len());
    }
    fg
}

fn gnuplot_err<E: std::fmt::Debug>(err: E) -> PlotError {
    PlotError::Render(format!("gnuplot: {:?}", err))
}

/// Opens the chart in a gnuplot window. Needs gnuplot on PATH.
pub fn show(plan: &ChartPlan) -> Result<()> {
    let mut fg = build_figure(plan);
    fg.show().map_err(gnuplot_err)?;
    Ok(())
}

pub fn save_png(plan: &ChartPlan, path: &Path) -> Result<()> {
    let mut fg = build_figure(plan);
    fg.save_to_png(path, plan.size.0, plan.size.1)
        .map_err(gnuplot_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::ChartId;
    use strum::IntoEnumIterator;

    fn script(plan: &ChartPlan) -> String {
        let mut out: Vec<u8> = Vec::new();
        build_figure(plan).echo(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }

    #[test]
    fn test_every_chart_builds_a_gnuplot_script() {
        for id in ChartId::all() {
            let plan = ChartPlan::from_figure(&id.build().unwrap()).unwrap();
            let text = script(&plan);
            assert!(text.contains(&plan.title), "{} title missing", id);
            assert!(text.contains(&plan.x_label));
            for entry in &plan.entries {
                assert!(
                    text.contains(&format!("t \"{}\"", entry.label)),
                    "{}: caption of {} missing",
                    id,
                    entry.label
                );
            }
        }
    }

    #[test]
    fn test_no_captions_without_legend() {
        let fig = ChartId::ThreadScaling.build().unwrap().legend(None);
        let text = script(&ChartPlan::from_figure(&fig).unwrap());
        assert!(!text.contains("t \"1 Thread\""));
    }

    #[test]
    fn test_key_placement_follows_legend_corner() {
        let (x, y, h, v) = key_placement(LegendPosition::LowerLeft);
        assert!(x < 0.5 && y < 0.5);
        assert!(matches!((h, v), (AlignLeft, AlignBottom)));
        let fig = ChartId::OmegaSweep.build().unwrap();
        let plan = ChartPlan::from_figure(&fig).unwrap();
        assert_eq!(plan.legend, Some(LegendPosition::UpperRight));
    }

    #[test]
    fn test_every_marker_has_a_distinct_symbol() {
        let symbols: Vec<char> = Marker::iter().map(point_symbol).collect();
        for (i, a) in symbols.iter().enumerate() {
            assert!(symbols[i + 1..].iter().all(|b| b != a));
        }
    }

    #[test]
    fn test_dash_types() {
        assert!(dash_type(LineStyle::None).is_none());
        assert!(matches!(dash_type(LineStyle::DashDot), Some(DashType::DotDash)));
        assert!(matches!(dash_type(LineStyle::Dashed), Some(DashType::Dash)));
    }
}
