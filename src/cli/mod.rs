//! Terminal interaction.
//!
//! The tool takes no command-line flags; everything is asked interactively.
//! This module keeps the line-reading and re-prompt rules apart from the
//! calibration logic so the session can be driven from any reader/writer pair.

pub mod prompt;

pub use prompt::*;
