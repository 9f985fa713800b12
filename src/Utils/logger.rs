use crate::charts::{Figure, PlotError, Result};
use csv::WriterBuilder;
use log::info;
use std::path::Path;

/// Writes the data of `fig` as a table: first column x, one column per series.
/// Files ending in `.txt` or `.tsv` are tab separated, anything else comma separated.
/// All series must share the same x values.
pub fn save_figure_to_table(fig: &Figure, path: &Path) -> Result<()> {
    fig.validate()?;
    let x = fig.shared_x().ok_or_else(|| {
        PlotError::Csv(format!(
            "series of '{}' do not share x values, cannot write one table",
            fig.title
        ))
    })?;
    let delimiter = match path.extension().and_then(|e| e.to_str()) {
        Some("txt") | Some("tsv") => b'\t',
        _ => b',',
    };
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    let mut writer = WriterBuilder::new().delimiter(delimiter).from_path(path)?;

    // Prepare and write headers
    let arg = if fig.x_label.is_empty() {
        "x".to_string()
    } else {
        fig.x_label.clone()
    };
    let mut headers_with_x = vec![arg];
    headers_with_x.extend(fig.series.iter().map(|s| s.label.clone()));
    writer.write_record(&headers_with_x)?;

    // Write data rows
    for (i, xi) in x.iter().enumerate() {
        let mut row_data = vec![xi.to_string()];
        row_data.extend(fig.series.iter().map(|s| s.points[i].1.to_string()));
        writer.write_record(&row_data)?;
    }

    writer.flush()?;
    info!("data of '{}' saved to {}", fig.title, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{Series, Style};
    use crate::datasets::ChartId;
    use tempfile::tempdir;

    #[test]
    fn test_csv_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("threads.csv");
        let fig = ChartId::ThreadScaling.build().unwrap();
        save_figure_to_table(&fig, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["Row Length (Array Size)", "1 Thread", "2 Threads", "4 Threads"]
        );
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 10);
        assert_eq!(&rows[0][0], "10");
        assert_eq!(&rows[0][1], "26000");
        assert_eq!(&rows[9][3], "788000");
    }

    #[test]
    fn test_tab_separated_for_txt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("omega.txt");
        let fig = ChartId::OmegaSweep.build().unwrap();
        save_figure_to_table(&fig, &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let first_line = contents.lines().next().unwrap();
        assert_eq!(first_line.split('\t').count(), 5);
        assert!(first_line.starts_with("Relaxation Parameter (ω)\t32x32 Grid"));
    }

    #[test]
    fn test_rejects_unshared_x() {
        let dir = tempdir().unwrap();
        let fig = Figure::new("mixed")
            .with_series(Series::from_xy("a", &[1.0f64, 2.0], &[1.0f64, 2.0], Style::default()).unwrap())
            .with_series(Series::from_xy("b", &[1.0f64, 3.0], &[1.0f64, 2.0], Style::default()).unwrap());
        let path = dir.path().join("mixed.csv");
        assert!(matches!(
            save_figure_to_table(&fig, &path),
            Err(PlotError::Csv(_))
        ));
        assert!(!path.exists());
    }
}
