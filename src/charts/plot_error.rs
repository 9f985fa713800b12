use std::fmt;

/// Error types for building and rendering charts
#[derive(Debug)]
pub enum PlotError {
    /// two sequences that must be paired elementwise have different lengths
    LengthMismatch {
        what: String,
        expected: usize,
        found: usize,
    },
    /// iteration count of zero found at `index` while deriving time per iteration
    ZeroIterations { index: usize },
    EmptySeries(String),
    EmptyFigure(String),
    NonFiniteValue { label: String, index: usize },
    InvalidStyle(String),
    UnknownChart(String),
    Config(String),
    Render(String),
    Io(std::io::Error),
    Csv(String),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlotError::LengthMismatch {
                what,
                expected,
                found,
            } => write!(
                f,
                "length mismatch in {}: expected {} values, found {}",
                what, expected, found
            ),
            PlotError::ZeroIterations { index } => {
                write!(f, "iteration count is zero at index {}", index)
            }
            PlotError::EmptySeries(label) => write!(f, "series '{}' has no points", label),
            PlotError::EmptyFigure(title) => write!(f, "figure '{}' has no series", title),
            PlotError::NonFiniteValue { label, index } => write!(
                f,
                "series '{}' has a non-finite value at index {}",
                label, index
            ),
            PlotError::InvalidStyle(msg) => write!(f, "invalid style: {}", msg),
            PlotError::UnknownChart(name) => write!(f, "unknown chart: {}", name),
            PlotError::Config(msg) => write!(f, "config error: {}", msg),
            PlotError::Render(msg) => write!(f, "render error: {}", msg),
            PlotError::Io(err) => write!(f, "io error: {}", err),
            PlotError::Csv(msg) => write!(f, "csv error: {}", msg),
        }
    }
}

impl std::error::Error for PlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlotError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlotError {
    fn from(err: std::io::Error) -> Self {
        PlotError::Io(err)
    }
}

impl From<csv::Error> for PlotError {
    fn from(err: csv::Error) -> Self {
        PlotError::Csv(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;

/// checks that `found` sequence length matches `expected`
pub fn check_len(what: &str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(PlotError::LengthMismatch {
            what: what.to_string(),
            expected,
            found,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = PlotError::LengthMismatch {
            what: "iterations".to_string(),
            expected: 5,
            found: 4,
        };
        assert_eq!(
            err.to_string(),
            "length mismatch in iterations: expected 5 values, found 4"
        );
        let err = PlotError::ZeroIterations { index: 2 };
        assert_eq!(err.to_string(), "iteration count is zero at index 2");
    }

    #[test]
    fn test_check_len() {
        assert!(check_len("x", 3, 3).is_ok());
        match check_len("y", 3, 2) {
            Err(PlotError::LengthMismatch {
                what,
                expected,
                found,
            }) => {
                assert_eq!(what, "y");
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: PlotError = io.into();
        assert!(matches!(err, PlotError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
