//! Input/output helpers.
//!
//! - calibration coefficient files (`calibration_file`)

pub mod calibration_file;

pub use calibration_file::*;
