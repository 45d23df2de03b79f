//! Domain types used throughout the tool.
//!
//! This module defines:
//!
//! - the linear calibration model (`Calibration`)
//! - the single store holding the active calibration (`CalibrationStore`)
//! - regression inputs (`DataPoint`)
//! - menu commands (`Command`)

pub mod types;

pub use types::*;
