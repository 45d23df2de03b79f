//! The interactive menu loop.
//!
//! A `Session` owns the calibration store and the prompter. Each menu command
//! runs to completion before the menu is shown again:
//!
//! ```text
//! MENU -> {enter data | load | convert | save} -> MENU
//! MENU -> exit
//! ```
//!
//! Command failures are reported and the session goes back to the menu with
//! the store unchanged. Only losing the terminal (end of input or an I/O error
//! on stdout) ends the loop early.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::cli::Prompter;
use crate::config::Config;
use crate::domain::{CalibrationStore, Command, DataPoint};
use crate::error::CalibrationError;
use crate::io::{read_calibration, write_calibration};
use crate::math::fit_points;
use crate::report::{
    format_banner, format_coefficients, format_conversion, format_current, format_formula,
    format_menu,
};

/// Fewest data points accepted for a fit.
pub const MIN_POINTS: usize = 2;

const INVALID_NUMBER: &str = "Invalid input. Enter a number.";

/// What the menu loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    store: CalibrationStore,
    pause_after_command: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(prompter: Prompter<R, W>, config: &Config) -> Self {
        Self {
            prompter: prompter.with_max_retries(config.max_retries),
            store: CalibrationStore::new(),
            pause_after_command: config.pause_after_command,
        }
    }

    pub fn store(&self) -> &CalibrationStore {
        &self.store
    }

    pub fn prompter(&self) -> &Prompter<R, W> {
        &self.prompter
    }

    /// Print the banner and serve menu commands until the user exits.
    pub fn run(&mut self) -> Result<(), CalibrationError> {
        self.prompter.say(&format_banner())?;

        loop {
            let Some(command) = self.next_command()? else {
                self.pause()?;
                continue;
            };
            if self.dispatch(command)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Show the menu and read one choice; `None` means the choice was rejected.
    fn next_command(&mut self) -> Result<Option<Command>, CalibrationError> {
        let answer = self.prompter.ask(&format_menu())?;

        let Ok(choice) = answer.parse::<i64>() else {
            log::debug!("non-numeric menu choice {answer:?}");
            self.prompter
                .line("\nInvalid input. Enter a number between 1 and 5.")?;
            return Ok(None);
        };

        match Command::from_choice(choice) {
            Some(command) => Ok(Some(command)),
            None => {
                log::debug!("menu choice {choice} out of range");
                self.prompter.line("\nInvalid option. Choose between 1 and 5.")?;
                Ok(None)
            }
        }
    }

    /// Run one command and report any recoverable failure.
    pub fn dispatch(&mut self, command: Command) -> Result<Flow, CalibrationError> {
        let result = match command {
            Command::EnterData => self.enter_calibration_data(),
            Command::Load => self.load_calibration(),
            Command::Convert => self.convert_readings(),
            Command::Save => self.save_calibration(),
            Command::Exit => {
                self.prompter.line("\nExiting program. Goodbye!")?;
                return Ok(Flow::Exit);
            }
        };

        match result {
            // A finished conversion session goes straight back to the menu.
            Ok(()) if command == Command::Convert => {}
            Ok(()) => self.pause()?,
            Err(err) if err.is_recoverable() => {
                log::warn!("{} failed: {err}", command.label());
                self.prompter.line(&format!("\nError: {err}"))?;
                self.pause()?;
            }
            Err(err) => return Err(err),
        }
        Ok(Flow::Continue)
    }

    fn enter_calibration_data(&mut self) -> Result<(), CalibrationError> {
        self.prompter.line("\n=== ENTER CALIBRATION DATA ===")?;

        let count = self.prompter.ask_count(
            "Enter number of data points (minimum 2): ",
            "Invalid input. Enter an integer >= 2.",
            MIN_POINTS,
        )?;

        let mut points = Vec::new();
        for i in 1..=count {
            self.prompter.line(&format!("\nPoint {i}:"))?;
            let reference_value = self
                .prompter
                .ask_number("  Reference value: ", &format!("  {INVALID_NUMBER}"))?;
            let raw_reading = self
                .prompter
                .ask_number("  Raw reading: ", &format!("  {INVALID_NUMBER}"))?;
            points.push(DataPoint {
                reference_value,
                raw_reading,
            });
        }

        let calibration = fit_points(&points)?;
        self.store.set(calibration);
        log::info!(
            "fitted slope={} offset={} from {} points",
            calibration.slope,
            calibration.offset,
            points.len()
        );

        self.prompter.say("\n--- CALIBRATION RESULTS ---\n")?;
        self.prompter.say(&format_coefficients(&calibration))?;
        self.prompter.line("\nCalibration updated successfully.")?;
        self.prompter.line(&format_formula(&calibration))?;
        Ok(())
    }

    fn load_calibration(&mut self) -> Result<(), CalibrationError> {
        self.prompter.line("\n=== LOAD CALIBRATION ===")?;
        let filename = self.prompter.ask("Enter filename (e.g., calibration.txt): ")?;

        let calibration = read_calibration(Path::new(&filename))?;
        self.store.set(calibration);

        self.prompter.say("\n--- LOADED CALIBRATION ---\n")?;
        self.prompter.say(&format_coefficients(&calibration))?;
        self.prompter
            .line(&format!("\nCalibration loaded successfully from '{filename}'"))?;
        Ok(())
    }

    fn convert_readings(&mut self) -> Result<(), CalibrationError> {
        self.prompter.line("\n=== CONVERT RAW READING ===")?;
        let calibration = self.store.get()?;
        self.prompter.line(&format!("{}\n", format_current(&calibration)))?;

        loop {
            let raw = self
                .prompter
                .ask_number("Enter raw sensor reading: ", INVALID_NUMBER)?;
            let real = calibration.apply(raw);
            log::debug!("converted raw={raw} -> {real}");
            self.prompter.say(&format_conversion(raw, real))?;

            if !self.prompter.confirm("\nConvert another reading? (y/n): ")? {
                return Ok(());
            }
            self.prompter.say("\n")?;
        }
    }

    fn save_calibration(&mut self) -> Result<(), CalibrationError> {
        self.prompter.line("\n=== SAVE CALIBRATION ===")?;
        let calibration = self
            .store
            .get()
            .map_err(|_| CalibrationError::NoCalibration)?;

        let filename = self
            .prompter
            .ask("Enter filename to save (e.g., calibration.txt): ")?;
        write_calibration(Path::new(&filename), &calibration)?;

        self.prompter
            .line(&format!("\nCalibration saved successfully to '{filename}'"))?;
        self.prompter.say(&format_coefficients(&calibration))?;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), CalibrationError> {
        if self.pause_after_command {
            self.prompter.pause()?;
        }
        Ok(())
    }
}
