//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - initializes logging
//! - loads configuration
//! - runs the interactive session over stdin/stdout

use std::io;

use crate::cli::Prompter;
use crate::config::Config;
use crate::error::AppError;

pub mod session;

pub use session::{Flow, Session};

/// Entry point for the `calib` binary.
pub fn run() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env()?;
    log::debug!("starting with {config:?}");

    let prompter = Prompter::new(io::stdin().lock(), io::stdout());
    let mut session = Session::new(prompter, &config);
    session.run()?;
    Ok(())
}
