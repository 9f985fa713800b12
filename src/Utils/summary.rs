/*
Pretty printed tables of the plotted data, in the spirit of the benchmarks' own
"Final Results" printout.
*/
use crate::charts::derived::best_point;
use crate::charts::{Figure, Result};
use crate::datasets::thread_scaling;
use itertools::izip;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct SeriesSummary {
    #[tabled(rename = "Series")]
    pub label: String,
    #[tabled(rename = "Points")]
    pub points: usize,
    #[tabled(rename = "Min")]
    pub min: String,
    #[tabled(rename = "Max")]
    pub max: String,
    #[tabled(rename = "x at min")]
    pub x_at_min: String,
}

fn fmt_value(v: f64) -> String {
    if v != 0.0 && (v.abs() >= 1.0e5 || v.abs() < 1.0e-3) {
        format!("{:.4e}", v)
    } else {
        format!("{:.4}", v)
    }
}

pub fn summarize(fig: &Figure) -> Vec<SeriesSummary> {
    fig.series
        .iter()
        .map(|s| {
            let max = s.ys().fold(f64::NEG_INFINITY, f64::max);
            let (x_min, y_min) = best_point(s).unwrap_or((f64::NAN, f64::NAN));
            SeriesSummary {
                label: s.label.clone(),
                points: s.len(),
                min: fmt_value(y_min),
                max: fmt_value(max),
                x_at_min: fmt_value(x_min),
            }
        })
        .collect()
}

/// table of one figure with its title as heading
pub fn summary_table(fig: &Figure) -> String {
    let rows = summarize(fig);
    let mut table = Table::new(&rows);
    table.with(Style::modern_rounded());
    format!("{}\n{}", fig.title, table)
}

#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct SpeedupRow {
    #[tabled(rename = "Row length")]
    pub row_length: u32,
    #[tabled(rename = "2 Threads")]
    pub two: String,
    #[tabled(rename = "4 Threads")]
    pub four: String,
}

/// speedup of the 2 and 4 thread runs over the single thread run, per row length
pub fn speedup_rows() -> Result<Vec<SpeedupRow>> {
    let [(_, two), (_, four)] = thread_scaling::speedups()?;
    Ok(izip!(thread_scaling::ROW_LENGTHS, two, four)
        .map(|(row_length, s2, s4)| SpeedupRow {
            row_length,
            two: format!("{:.2}x", s2),
            four: format!("{:.2}x", s4),
        })
        .collect())
}

pub fn speedup_table() -> Result<String> {
    let rows = speedup_rows()?;
    let mut table = Table::new(&rows);
    table.with(Style::modern_rounded());
    Ok(format!("Thread speedup over 1 thread\n{}", table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::ChartId;

    #[test]
    fn test_summary_rows() {
        let fig = ChartId::OmegaSweep.build().unwrap();
        let rows = summarize(&fig);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].label, "32x32 Grid");
        assert_eq!(rows[0].points, 10);
        assert_eq!(rows[0].min, "94.0000");
        assert_eq!(rows[0].max, "346.0000");
        assert_eq!(rows[0].x_at_min, "1.9000");
    }

    #[test]
    fn test_large_values_in_scientific_notation() {
        assert_eq!(fmt_value(1870000.0), "1.8700e6");
        assert_eq!(fmt_value(0.0), "0.0000");
        assert_eq!(fmt_value(11.357294), "11.3573");
    }

    #[test]
    fn test_table_contains_title_and_labels() {
        let fig = ChartId::SerialVariants.build().unwrap();
        let table = summary_table(&fig);
        assert!(table.starts_with("Time per Innermost Loop Iteration for SOR Methods"));
        assert!(table.contains("Red/Black SOR"));
        assert!(table.contains("x at min"));
    }

    #[test]
    fn test_speedup_rows() {
        let rows = speedup_rows().unwrap();
        assert_eq!(rows.len(), thread_scaling::ROW_LENGTHS.len());
        assert_eq!(rows[0].row_length, 10);
        let expected = thread_scaling::TIME_1_THREAD[0] / thread_scaling::TIME_2_THREADS[0];
        assert_eq!(rows[0].two, format!("{:.2}x", expected));
        let last = &rows[rows.len() - 1];
        assert_eq!(last.row_length, 100);
        assert_eq!(last.four, format!("{:.2}x", 1870000.0 / 788000.0));
        assert!(speedup_table().unwrap().contains("4 Threads"));
    }
}
