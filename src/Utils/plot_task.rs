//! # Plot task
//!
//! Settings for a plotting run read from a task file (see `task_parser`).
//!
//! ## Sections
//! - `output`: `dir`, `format` (png/svg), `backend` (plotters/gnuplot), `width`, `height`,
//!   `csv`, `summary`
//! - `logging`: `level` (off/error/warn/info/debug/trace), `file` (path or `auto`)
//! - `charts`: `enabled` - list of chart ids to draw
//! - `omega_sweep`, `serial_variants`, `thread_scaling`: `title`, `x_label`, `y_label`
//!
//! Every section and key is optional.
use crate::Utils::log_config::LogSettings;
use crate::Utils::task_parser::{DocumentMap, SectionMap, Value, parse_document_as};
use crate::charts::{Figure, PlotError, Result};
use crate::datasets::ChartId;
use crate::render::{Backend, OutputFormat};
use log::LevelFilter;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct OutputSettings {
    pub dir: PathBuf,
    pub format: OutputFormat,
    pub backend: Backend,
    /// overrides the size of every figure when set
    pub size: Option<(u32, u32)>,
    pub csv: bool,
    pub summary: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            dir: PathBuf::from("plots"),
            format: OutputFormat::Png,
            backend: Backend::Plotters,
            size: None,
            csv: false,
            summary: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartOverride {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotTask {
    pub output: OutputSettings,
    pub logging: LogSettings,
    pub charts: Vec<ChartId>,
    pub overrides: HashMap<ChartId, ChartOverride>,
}

impl Default for PlotTask {
    fn default() -> Self {
        PlotTask {
            output: OutputSettings::default(),
            logging: LogSettings::default(),
            charts: ChartId::all(),
            overrides: HashMap::new(),
        }
    }
}

const OUTPUT_KEYS: [&str; 7] = ["dir", "format", "backend", "width", "height", "csv", "summary"];
const LOGGING_KEYS: [&str; 2] = ["level", "file"];
const CHARTS_KEYS: [&str; 1] = ["enabled"];
const CHART_KEYS: [&str; 3] = ["title", "x_label", "y_label"];

/// every key of `section` must be one of `known`
fn check_keys(section: &SectionMap, title: &str, known: &[&str]) -> Result<()> {
    let mut unknown: Vec<&str> = section
        .keys()
        .map(String::as_str)
        .filter(|key| !known.contains(key))
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }
    unknown.sort_unstable();
    Err(PlotError::Config(format!(
        "unknown key(s) {} in section '{}', expected one of: {}",
        unknown.join(", "),
        title,
        known.join(", ")
    )))
}

fn first<'a>(section: &'a SectionMap, key: &str) -> Option<&'a Value> {
    section.get(key)?.as_ref()?.first()
}

fn string_value(section: &SectionMap, title: &str, key: &str) -> Result<Option<String>> {
    match first(section, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(PlotError::Config(format!(
            "{}.{} must be a string, got '{}'",
            title, key, other
        ))),
    }
}

fn bool_value(section: &SectionMap, title: &str, key: &str) -> Result<Option<bool>> {
    match first(section, key) {
        None => Ok(None),
        Some(v) => v.as_boolean().map(Some).ok_or_else(|| {
            PlotError::Config(format!("{}.{} must be true or false, got '{}'", title, key, v))
        }),
    }
}

fn pixels_value(section: &SectionMap, title: &str, key: &str) -> Result<Option<u32>> {
    match first(section, key) {
        None => Ok(None),
        Some(v) => v
            .as_integer()
            .and_then(|i| u32::try_from(i).ok())
            .filter(|&px| px > 0)
            .map(Some)
            .ok_or_else(|| {
                PlotError::Config(format!(
                    "{}.{} must be a positive integer, got '{}'",
                    title, key, v
                ))
            }),
    }
}

fn parse_enum<T: FromStr>(section: &SectionMap, title: &str, key: &str) -> Result<Option<T>> {
    match string_value(section, title, key)? {
        None => Ok(None),
        Some(s) => s
            .to_lowercase()
            .parse::<T>()
            .map(Some)
            .map_err(|_| PlotError::Config(format!("{}.{}: unknown value '{}'", title, key, s))),
    }
}

impl FromStr for PlotTask {
    type Err = PlotError;

    fn from_str(input: &str) -> Result<Self> {
        let doc = parse_document_as(input, None)?;
        Self::from_document(&doc)
    }
}

impl PlotTask {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Maps a parsed task document onto settings. Unknown sections and keys are
    /// errors so that typos do not pass silently.
    pub fn from_document(doc: &DocumentMap) -> Result<Self> {
        let mut task = PlotTask::default();
        for (title, section) in doc {
            match title.as_str() {
                "output" => {
                    check_keys(section, title, &OUTPUT_KEYS)?;
                    task.read_output(section)?
                }
                "logging" => {
                    check_keys(section, title, &LOGGING_KEYS)?;
                    task.read_logging(section)?
                }
                "charts" => {
                    check_keys(section, title, &CHARTS_KEYS)?;
                    task.read_charts(section)?
                }
                other => {
                    let id = ChartId::parse(other).map_err(|_| {
                        PlotError::Config(format!("unknown section '{}'", other))
                    })?;
                    check_keys(section, other, &CHART_KEYS)?;
                    let chart_override = ChartOverride {
                        title: string_value(section, other, "title")?,
                        x_label: string_value(section, other, "x_label")?,
                        y_label: string_value(section, other, "y_label")?,
                    };
                    task.overrides.insert(id, chart_override);
                }
            }
        }
        Ok(task)
    }

    fn read_output(&mut self, section: &SectionMap) -> Result<()> {
        let t = "output";
        if let Some(dir) = string_value(section, t, "dir")? {
            self.output.dir = PathBuf::from(dir);
        }
        if let Some(format) = parse_enum::<OutputFormat>(section, t, "format")? {
            self.output.format = format;
        }
        if let Some(backend) = parse_enum::<Backend>(section, t, "backend")? {
            self.output.backend = backend;
        }
        match (pixels_value(section, t, "width")?, pixels_value(section, t, "height")?) {
            (Some(w), Some(h)) => self.output.size = Some((w, h)),
            (None, None) => {}
            _ => {
                return Err(PlotError::Config(
                    "output.width and output.height must be given together".to_string(),
                ));
            }
        }
        if let Some(csv) = bool_value(section, t, "csv")? {
            self.output.csv = csv;
        }
        if let Some(summary) = bool_value(section, t, "summary")? {
            self.output.summary = summary;
        }
        Ok(())
    }

    fn read_logging(&mut self, section: &SectionMap) -> Result<()> {
        if let Some(level) = string_value(section, "logging", "level")? {
            self.logging.level = LevelFilter::from_str(&level).map_err(|_| {
                PlotError::Config(format!("logging.level: unknown level '{}'", level))
            })?;
        }
        if let Some(file) = string_value(section, "logging", "file")? {
            self.logging.file = Some(file);
        }
        Ok(())
    }

    fn read_charts(&mut self, section: &SectionMap) -> Result<()> {
        if let Some(Some(values)) = section.get("enabled") {
            let mut charts = Vec::new();
            for v in values {
                let id = ChartId::parse(&v.to_string_value())?;
                if !charts.contains(&id) {
                    charts.push(id);
                }
            }
            if charts.is_empty() {
                return Err(PlotError::Config("charts.enabled is empty".to_string()));
            }
            self.charts = charts;
        }
        Ok(())
    }

    /// Applies title/label overrides and the output size to a built figure.
    pub fn apply(&self, id: ChartId, mut fig: Figure) -> Figure {
        if let Some(o) = self.overrides.get(&id) {
            if let Some(title) = &o.title {
                fig.title = title.clone();
            }
            if let Some(x_label) = &o.x_label {
                fig.x_label = x_label.clone();
            }
            if let Some(y_label) = &o.y_label {
                fig.y_label = y_label.clone();
            }
        }
        if let Some((w, h)) = self.output.size {
            fig = fig.size_px(w, h);
        }
        fig
    }
}

pub const TEMPLATE: &str = r#"// Task file for sorplots. Every section and key is optional.
output
  // directory for images and csv files
  dir: plots
  // png or svg
  format: png
  // plotters or gnuplot (gnuplot writes png only)
  backend: plotters
  // pixel size applied to every figure
  // width: 800
  // height: 500
  csv: false
  summary: false
logging
  // off, error, warn, info, debug or trace
  level: info
  // path of a log file, or auto for log_<date>_<time>.txt
  // file: auto
charts
  enabled: omega_sweep, serial_variants, thread_scaling
// per chart overrides, values with spaces must be quoted
// serial_variants
//   title: "Time per Innermost Loop Iteration for SOR Methods"
"#;

pub fn create_template_file(path: &Path) -> Result<()> {
    std::fs::write(path, TEMPLATE)?;
    Ok(())
}
