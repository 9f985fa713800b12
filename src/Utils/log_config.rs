use chrono::Local;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;

/// file name used when the log file is given as `auto`
pub const AUTO_LOG_FILE: &str = "auto";

#[derive(Debug, Clone, PartialEq)]
pub struct LogSettings {
    pub level: LevelFilter,
    /// path of a log file; `auto` picks `log_<date>_<time>.txt`
    pub file: Option<String>,
    pub console: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            level: LevelFilter::Info,
            file: None,
            console: true,
        }
    }
}

impl LogSettings {
    /// Set logging level (Off, Error, Warn, Info, Debug, Trace)
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// log file name with `auto` resolved to a timestamped name
    pub fn resolved_file(&self) -> Option<String> {
        self.file.as_ref().map(|f| {
            if f == AUTO_LOG_FILE {
                let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
                format!("log_{}.txt", date_and_time)
            } else {
                f.clone()
            }
        })
    }

    /// Initialize the global logger. Returns false when nothing was installed:
    /// logging is off, no sink is enabled, or a logger already exists.
    pub fn init_logger(&self) -> bool {
        if self.level == LevelFilter::Off {
            return false;
        }
        let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

        if self.console {
            loggers.push(TermLogger::new(
                self.level,
                Config::default(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            ));
        }

        if let Some(filename) = self.resolved_file() {
            match File::create(&filename) {
                Ok(file) => loggers.push(WriteLogger::new(self.level, Config::default(), file)),
                Err(e) => eprintln!("cannot create log file {}: {}", filename, e),
            }
        }

        if loggers.is_empty() {
            return false;
        }
        CombinedLogger::init(loggers).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = LogSettings::default();
        assert_eq!(s.level, LevelFilter::Info);
        assert!(s.console);
        assert_eq!(s.resolved_file(), None);
    }

    #[test]
    fn test_auto_file_name() {
        let s = LogSettings::default().with_file(AUTO_LOG_FILE);
        let name = s.resolved_file().unwrap();
        assert!(name.starts_with("log_"));
        assert!(name.ends_with(".txt"));
        let s = LogSettings::default().with_file("run.log");
        assert_eq!(s.resolved_file().as_deref(), Some("run.log"));
    }

    #[test]
    fn test_off_installs_nothing() {
        let s = LogSettings::default().with_level(LevelFilter::Off);
        assert!(!s.init_logger());
        let s = LogSettings {
            console: false,
            ..LogSettings::default()
        };
        assert!(!s.init_logger());
    }
}
