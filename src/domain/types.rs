//! Shared domain types.
//!
//! These types are intentionally small and `Copy` so the session can hand them
//! between the regression engine, the file codec and the converter without
//! any shared ownership.

use crate::error::CalibrationError;

/// Coefficients of the linear model `value = slope × raw + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    pub slope: f64,
    pub offset: f64,
}

impl Calibration {
    pub fn new(slope: f64, offset: f64) -> Self {
        Self { slope, offset }
    }

    /// Convert a raw reading into a calibrated value.
    pub fn apply(&self, raw: f64) -> f64 {
        self.slope * raw + self.offset
    }
}

/// Holds the currently active calibration.
///
/// The store is either empty (nothing fitted or loaded yet) or holds one
/// complete `Calibration`. Updates always replace both coefficients at once;
/// there is no history.
#[derive(Debug, Clone, Default)]
pub struct CalibrationStore {
    current: Option<Calibration>,
}

impl CalibrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active calibration and mark the store valid.
    pub fn set(&mut self, calibration: Calibration) {
        self.current = Some(calibration);
    }

    /// The active calibration, or `NotCalibrated` when none has been set.
    pub fn get(&self) -> Result<Calibration, CalibrationError> {
        self.current.ok_or(CalibrationError::NotCalibrated)
    }

    pub fn is_valid(&self) -> bool {
        self.current.is_some()
    }
}

/// One calibration observation entered by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    /// Trusted ground-truth value (dependent variable).
    pub reference_value: f64,
    /// Uncalibrated sensor measurement (independent variable).
    pub raw_reading: f64,
}

/// Main menu commands, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    EnterData,
    Load,
    Convert,
    Save,
    Exit,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::EnterData,
        Command::Load,
        Command::Convert,
        Command::Save,
        Command::Exit,
    ];

    /// Map a menu number (1-5) to its command.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Command::EnterData),
            2 => Some(Command::Load),
            3 => Some(Command::Convert),
            4 => Some(Command::Save),
            5 => Some(Command::Exit),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Command::EnterData => 1,
            Command::Load => 2,
            Command::Convert => 3,
            Command::Save => 4,
            Command::Exit => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Command::EnterData => "Enter new calibration data",
            Command::Load => "Load existing calibration from file",
            Command::Convert => "Convert a raw reading",
            Command::Save => "Save current calibration to file",
            Command::Exit => "Exit",
        }
    }
}
