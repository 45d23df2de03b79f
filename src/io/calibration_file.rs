//! Read/write calibration coefficient files.
//!
//! The format is plain text holding two numbers, slope first, then offset.
//! Files are written one value per line with 10 fractional digits:
//!
//! ```text
//! 1.5000000000
//! 3.0000000000
//! ```
//!
//! Reading is token based: any whitespace separates the two values (so both
//! on one line is fine) and anything after the offset is ignored.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use crate::domain::Calibration;
use crate::error::{CalibrationError, Coefficient};

/// Fractional digits used when writing coefficients.
pub const SAVE_PRECISION: usize = 10;

/// Render a calibration in the on-disk format.
pub fn format_calibration(calibration: &Calibration) -> String {
    format!(
        "{:.prec$}\n{:.prec$}\n",
        calibration.slope,
        calibration.offset,
        prec = SAVE_PRECISION
    )
}

/// Write a calibration file, creating or truncating `path`.
pub fn write_calibration(path: &Path, calibration: &Calibration) -> Result<(), CalibrationError> {
    let write_err = |source: io::Error| CalibrationError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(format_calibration(calibration).as_bytes())
        .map_err(write_err)?;
    file.flush().map_err(write_err)?;

    log::info!(
        "saved calibration slope={} offset={} to {}",
        calibration.slope,
        calibration.offset,
        path.display()
    );
    Ok(())
}

/// Read a calibration file.
pub fn read_calibration(path: &Path) -> Result<Calibration, CalibrationError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CalibrationError::FileNotFound {
            path: path.to_path_buf(),
        },
        io::ErrorKind::PermissionDenied => CalibrationError::FileOpen {
            path: path.to_path_buf(),
            source,
        },
        _ => CalibrationError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let text = String::from_utf8_lossy(&bytes);
    let calibration = parse_calibration(&text).map_err(|field| CalibrationError::Parse {
        field,
        path: path.to_path_buf(),
    })?;

    log::info!(
        "loaded calibration slope={} offset={} from {}",
        calibration.slope,
        calibration.offset,
        path.display()
    );
    Ok(calibration)
}

/// Parse the first two whitespace-separated tokens as slope and offset.
///
/// On failure returns the coefficient that was missing or unparseable.
pub fn parse_calibration(text: &str) -> Result<Calibration, Coefficient> {
    let mut tokens = text.split_whitespace();
    let slope = tokens
        .next()
        .and_then(parse_finite)
        .ok_or(Coefficient::Slope)?;
    let offset = tokens
        .next()
        .and_then(parse_finite)
        .ok_or(Coefficient::Offset)?;
    Ok(Calibration::new(slope, offset))
}

/// Parse a finite `f64`; `inf`/`NaN` spellings are rejected.
pub fn parse_finite(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("calib_{}_{name}", std::process::id()))
    }

    #[test]
    fn format_uses_ten_fixed_digits() {
        let text = format_calibration(&Calibration::new(1.5, -0.25));
        assert_eq!(text, "1.5000000000\n-0.2500000000\n");
    }

    #[test]
    fn parse_accepts_lines_or_single_line() {
        assert_eq!(parse_calibration("1.5\n3.0\n"), Ok(Calibration::new(1.5, 3.0)));
        assert_eq!(parse_calibration("  1.5   3.0"), Ok(Calibration::new(1.5, 3.0)));
        assert_eq!(
            parse_calibration("2e-3\n-7\ntrailing notes 42\n"),
            Ok(Calibration::new(0.002, -7.0))
        );
    }

    #[test]
    fn parse_reports_missing_coefficient() {
        assert_eq!(parse_calibration(""), Err(Coefficient::Slope));
        assert_eq!(parse_calibration("slope\n1.0\n"), Err(Coefficient::Slope));
        assert_eq!(parse_calibration("1.0\n"), Err(Coefficient::Offset));
        assert_eq!(parse_calibration("1.0\nabc\n"), Err(Coefficient::Offset));
        assert_eq!(parse_calibration("1.0\nNaN\n"), Err(Coefficient::Offset));
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_path("round_trip.txt");
        let original = Calibration::new(1.234_567_890_123, -98.765_432_1);

        write_calibration(&path, &original).unwrap();
        let loaded = read_calibration(&path).unwrap();
        let _ = fs::remove_file(&path);

        assert!((loaded.slope - original.slope).abs() <= 5e-11);
        assert!((loaded.offset - original.offset).abs() <= 5e-11);
    }

    #[test]
    fn load_scenario_file() {
        let path = temp_path("scenario.txt");
        fs::write(&path, "1.5\n3.0\n").unwrap();
        let loaded = read_calibration(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(loaded.unwrap(), Calibration::new(1.5, 3.0));
    }

    #[test]
    fn load_missing_file_names_the_path() {
        let path = temp_path("does_not_exist.txt");
        let err = read_calibration(&path).unwrap_err();
        assert!(matches!(err, CalibrationError::FileNotFound { .. }));
        assert!(err.to_string().contains("does_not_exist.txt"));
    }

    #[test]
    fn load_garbage_is_a_parse_error() {
        let path = temp_path("garbage.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();
        let err = read_calibration(&path).unwrap_err();
        let _ = fs::remove_file(&path);

        assert!(matches!(
            err,
            CalibrationError::Parse { field: Coefficient::Slope, .. }
        ));
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let path = temp_path("no_such_dir").join("cal.txt");
        let err = write_calibration(&path, &Calibration::new(1.0, 0.0)).unwrap_err();
        assert!(matches!(err, CalibrationError::FileWrite { .. }));
        assert!(!path.exists());
    }
}
