use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Which coefficient a calibration file failed to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coefficient {
    Slope,
    Offset,
}

impl std::fmt::Display for Coefficient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Coefficient::Slope => f.write_str("slope"),
            Coefficient::Offset => f.write_str("offset"),
        }
    }
}

/// Failures raised by calibration commands.
///
/// Everything except [`CalibrationError::InputClosed`] and
/// [`CalibrationError::Terminal`] is recoverable: the session reports it and
/// goes back to the menu.
#[derive(Debug, Error)]
pub enum CalibrationError {
    #[error("All raw readings are identical. Cannot compute calibration.")]
    Degenerate,
    #[error("at least 2 data points are required, got {count}")]
    TooFewPoints { count: usize },
    #[error("raw readings ({raw}) and reference values ({reference}) differ in length")]
    LengthMismatch { raw: usize, reference: usize },
    #[error("No calibration loaded. Run regression (option 1) or load a file (option 2) first.")]
    NotCalibrated,
    #[error("No calibration to save. Run regression (option 1) or load a file (option 2) first.")]
    NoCalibration,
    #[error("Cannot open file '{}': file not found", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("Cannot open file '{}': {source}", .path.display())]
    FileOpen { path: PathBuf, source: io::Error },
    #[error("Cannot read file '{}': {source}", .path.display())]
    FileRead { path: PathBuf, source: io::Error },
    #[error("Cannot create file '{}': {source}", .path.display())]
    FileWrite { path: PathBuf, source: io::Error },
    #[error("Cannot read {field} from file '{}'", .path.display())]
    Parse { field: Coefficient, path: PathBuf },
    #[error("Too many invalid entries ({attempts}). Returning to menu.")]
    RetriesExhausted { attempts: usize },
    #[error("input closed before exit was chosen")]
    InputClosed,
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),
}

impl CalibrationError {
    /// Whether the session can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CalibrationError::InputClosed | CalibrationError::Terminal(_))
    }
}

impl From<CalibrationError> for AppError {
    fn from(err: CalibrationError) -> Self {
        AppError::new(1, err.to_string())
    }
}
