#![allow(non_snake_case)]
use SORplots::Utils::logger::save_figure_to_table;
use SORplots::Utils::plot_task::{PlotTask, create_template_file};
use SORplots::Utils::summary::{speedup_table, summary_table};
use SORplots::charts::{PlotError, Result};
use SORplots::datasets::ChartId;
use SORplots::render::{self, Backend, OutputFormat, output_path, render_to_file};
use clap::Parser;
use log::{LevelFilter, error, info};
use std::path::PathBuf;
use std::str::FromStr;

/// Charts of the SOR relaxation and threading benchmarks.
/// Without arguments all charts are written as png files into ./plots
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// chart to draw: omega_sweep, serial_variants or thread_scaling (repeatable)
    #[arg(short, long = "chart")]
    charts: Vec<String>,

    /// image format: png or svg
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// plotters or gnuplot
    #[arg(short, long)]
    backend: Option<Backend>,

    /// directory for images and csv files (default: plots)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// open interactive gnuplot windows instead of writing files
    #[arg(long)]
    show: bool,

    /// also write the data of every chart as csv
    #[arg(long)]
    csv: bool,

    /// print a table of every series
    #[arg(long)]
    summary: bool,

    /// task file with output, logging and chart settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// off, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,

    /// log file, `auto` for a timestamped name
    #[arg(long)]
    log_file: Option<String>,

    /// write a commented task file and exit
    #[arg(long)]
    template: Option<PathBuf>,
}

impl Cli {
    /// builds the task: defaults, then the task file, then command line flags
    fn task(&self) -> Result<PlotTask> {
        let mut task = match &self.config {
            Some(path) => PlotTask::from_file(path)?,
            None => PlotTask::default(),
        };
        if !self.charts.is_empty() {
            let mut charts = Vec::new();
            for name in &self.charts {
                let id = ChartId::parse(name)?;
                if !charts.contains(&id) {
                    charts.push(id);
                }
            }
            task.charts = charts;
        }
        if let Some(format) = self.format {
            task.output.format = format;
        }
        if let Some(backend) = self.backend {
            task.output.backend = backend;
        }
        if let Some(dir) = &self.out_dir {
            task.output.dir = dir.clone();
        }
        task.output.csv |= self.csv;
        task.output.summary |= self.summary;
        if let Some(level) = &self.log_level {
            task.logging.level = LevelFilter::from_str(level)
                .map_err(|_| PlotError::Config(format!("unknown log level '{}'", level)))?;
        }
        if let Some(file) = &self.log_file {
            task.logging.file = Some(file.clone());
        }
        Ok(task)
    }
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(path) = &cli.template {
        create_template_file(path)?;
        println!("task template written to {}", path.display());
        return Ok(());
    }
    let task = cli.task()?;
    task.logging.init_logger();
    info!(
        "charts: {:?}, output: {} ({}, {})",
        task.charts,
        task.output.dir.display(),
        task.output.format,
        task.output.backend
    );

    for &id in &task.charts {
        let fig = task.apply(id, id.build()?);
        if cli.show {
            render::show(&fig)?;
        } else {
            let path = output_path(&task.output.dir, &id.file_stem(), task.output.format);
            render_to_file(&fig, &path, task.output.format, task.output.backend)?;
        }
        if task.output.csv {
            let path = task.output.dir.join(format!("{}.csv", id.file_stem()));
            save_figure_to_table(&fig, &path)?;
        }
        if task.output.summary {
            println!("{}", summary_table(&fig));
        }
    }
    if task.output.summary && task.charts.contains(&ChartId::ThreadScaling) {
        println!("{}", speedup_table()?);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        if log::log_enabled!(log::Level::Error) {
            error!("{}", e);
        } else {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_gives_default_task() {
        let cli = Cli::try_parse_from(["sorplots"]).unwrap();
        assert_eq!(cli.task().unwrap(), PlotTask::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "sorplots",
            "--chart",
            "thread-scaling",
            "-c",
            "omega_sweep",
            "--chart",
            "thread_scaling",
            "--format",
            "svg",
            "--out-dir",
            "out",
            "--csv",
            "--log-level",
            "warn",
        ])
        .unwrap();
        let task = cli.task().unwrap();
        assert_eq!(task.charts, vec![ChartId::ThreadScaling, ChartId::OmegaSweep]);
        assert_eq!(task.output.format, OutputFormat::Svg);
        assert_eq!(task.output.dir, PathBuf::from("out"));
        assert!(task.output.csv);
        assert!(!task.output.summary);
        assert_eq!(task.logging.level, LevelFilter::Warn);
    }

    #[test]
    fn test_every_flag_has_help() {
        use clap::CommandFactory;
        let cmd = Cli::command();
        for arg in cmd.get_arguments() {
            if arg.get_id() == "help" || arg.get_id() == "version" {
                continue;
            }
            assert!(arg.get_help().is_some(), "--{} has no help text", arg.get_id());
        }
    }

    #[test]
    fn test_bad_values() {
        assert!(Cli::try_parse_from(["sorplots", "--format", "pdf"]).is_err());
        let cli = Cli::try_parse_from(["sorplots", "--chart", "pie"]).unwrap();
        assert!(matches!(cli.task(), Err(PlotError::UnknownChart(_))));
        let cli = Cli::try_parse_from(["sorplots", "--log-level", "loud"]).unwrap();
        assert!(matches!(cli.task(), Err(PlotError::Config(_))));
    }

    #[test]
    fn test_config_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("task.txt");
        std::fs::write(&path, "output\n  format: svg\n  dir: from_file\n").unwrap();
        let cli = Cli::try_parse_from([
            "sorplots",
            "--config",
            path.to_str().unwrap(),
            "--out-dir",
            "from_cli",
        ])
        .unwrap();
        let task = cli.task().unwrap();
        assert_eq!(task.output.format, OutputFormat::Svg);
        assert_eq!(task.output.dir, PathBuf::from("from_cli"));
    }
}
