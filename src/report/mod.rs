//! Formatted terminal output.
//!
//! All user-facing text lives here so the session code stays about control
//! flow and output changes are localized.

use crate::domain::{Calibration, Command};

/// Decimal places used for coefficients and values shown on screen.
pub const DISPLAY_PRECISION: usize = 4;

pub fn format_banner() -> String {
    let rule = "=".repeat(40);
    format!("\n{rule}\n    SENSOR CALIBRATION TOOL\n{rule}\n\n")
}

/// Main menu, ending with the choice prompt (no trailing newline).
pub fn format_menu() -> String {
    let mut out = String::from("\n--- MAIN MENU ---\n");
    for cmd in Command::ALL {
        out.push_str(&format!("{}. {}\n", cmd.number(), cmd.label()));
    }
    out.push_str("\nChoose an option: ");
    out
}

/// Slope/offset block shown after a fit, load or save.
pub fn format_coefficients(calibration: &Calibration) -> String {
    format!(
        "Slope:  {:.p$}\nOffset: {:.p$}\n",
        calibration.slope,
        calibration.offset,
        p = DISPLAY_PRECISION
    )
}

pub fn format_formula(calibration: &Calibration) -> String {
    format!(
        "Formula: Real Value = {:.p$} × Raw Reading + {:.p$}",
        calibration.slope,
        calibration.offset,
        p = DISPLAY_PRECISION
    )
}

/// One-line summary printed at the start of a conversion session.
pub fn format_current(calibration: &Calibration) -> String {
    format!(
        "Current calibration: Slope = {:.p$}, Offset = {:.p$}",
        calibration.slope,
        calibration.offset,
        p = DISPLAY_PRECISION
    )
}

pub fn format_conversion(raw: f64, real: f64) -> String {
    format!(
        "\nRaw Reading: {raw:.p$}\nReal Value:  {real:.p$}\n",
        p = DISPLAY_PRECISION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_all_commands_in_order() {
        let menu = format_menu();
        let expected = "\n--- MAIN MENU ---\n\
                        1. Enter new calibration data\n\
                        2. Load existing calibration from file\n\
                        3. Convert a raw reading\n\
                        4. Save current calibration to file\n\
                        5. Exit\n\
                        \nChoose an option: ";
        assert_eq!(menu, expected);
    }

    #[test]
    fn coefficients_use_four_decimals() {
        let cal = Calibration::new(2.0, -0.123456);
        assert_eq!(format_coefficients(&cal), "Slope:  2.0000\nOffset: -0.1235\n");
        assert_eq!(
            format_formula(&cal),
            "Formula: Real Value = 2.0000 × Raw Reading + -0.1235"
        );
    }

    #[test]
    fn conversion_shows_raw_and_real() {
        let text = format_conversion(5.0, 10.0);
        assert!(text.contains("Raw Reading: 5.0000"));
        assert!(text.contains("Real Value:  10.0000"));
    }
}
