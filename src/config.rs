//! Runtime configuration.
//!
//! The tool takes no flags. A couple of knobs can be set through the
//! environment (or a `.env` file):
//!
//! - `CALIB_MAX_RETRIES`: cap on malformed answers per prompt (default: no cap)
//! - `CALIB_PAUSE`: whether to wait for Enter after each command (default: on)

use crate::error::AppError;

pub const ENV_MAX_RETRIES: &str = "CALIB_MAX_RETRIES";
pub const ENV_PAUSE: &str = "CALIB_PAUSE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_retries: Option<usize>,
    pub pause_after_command: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_retries: None,
            pause_after_command: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Config::default();

        if let Some(raw) = lookup(ENV_MAX_RETRIES) {
            let max = raw.trim().parse::<usize>().map_err(|_| {
                AppError::new(
                    2,
                    format!("{ENV_MAX_RETRIES} must be a non-negative integer (got '{raw}')."),
                )
            })?;
            config.max_retries = Some(max);
        }

        if let Some(raw) = lookup(ENV_PAUSE) {
            config.pause_after_command = parse_flag(&raw).ok_or_else(|| {
                AppError::new(2, format!("{ENV_PAUSE} must be true or false (got '{raw}')."))
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
