//! Application configuration.
//!
//! Defaults can be overridden through `SHADOW2D_*` environment variables,
//! the same way `RUST_LOG` drives the logger.

use std::str::FromStr;

use crate::error::ConfigError;

pub const WIDTH_VAR: &str = "SHADOW2D_WIDTH";
pub const HEIGHT_VAR: &str = "SHADOW2D_HEIGHT";
pub const TITLE_VAR: &str = "SHADOW2D_TITLE";
pub const HIDDEN_VAR: &str = "SHADOW2D_HIDDEN";
pub const FRAMES_VAR: &str = "SHADOW2D_FRAMES";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub hidden: bool,
    /// Number of frames the demo runs before ending itself.
    pub frame_limit: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "shadow2d".to_string(),
            hidden: false,
            frame_limit: None,
        }
    }
}

impl AppConfig {
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        Self {
            width,
            height,
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_frame_limit(mut self, frame_limit: Option<u64>) -> Self {
        self.frame_limit = frame_limit;
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from defaults, overriding every key `lookup` resolves.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(WIDTH_VAR) {
            config.width = parse_size(WIDTH_VAR, &value)?;
        }
        if let Some(value) = lookup(HEIGHT_VAR) {
            config.height = parse_size(HEIGHT_VAR, &value)?;
        }
        if let Some(value) = lookup(TITLE_VAR) {
            config.title = value;
        }
        if let Some(value) = lookup(HIDDEN_VAR) {
            config.hidden = parse_flag(HIDDEN_VAR, &value)?;
        }
        if let Some(value) = lookup(FRAMES_VAR) {
            config.frame_limit = Some(parse_number(FRAMES_VAR, &value)?);
        }

        Ok(config)
    }
}

fn parse_number<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_size(key: &'static str, value: &str) -> Result<u32, ConfigError> {
    match parse_number(key, value)? {
        0 => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        size => Ok(size),
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}
