//! `sensor-calibrate` library crate.
//!
//! Fits a linear sensor calibration (`value = slope × raw + offset`) by least
//! squares, stores it in a two-number text file, and converts raw readings.
//!
//! The binary (`calib`) is a thin wrapper around this library so the session
//! can be driven from tests with in-memory input and output.

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod report;
