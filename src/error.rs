//! Error types for the windowing layer and configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("failed to initialise windowing subsystem: {0}")]
    Init(String),
    #[error("failed to create window: {0}")]
    WindowCreation(String),
    #[error("failed to make OpenGL context current: {0}")]
    Context(String),
    #[error("failed to initialise OpenGL function loader: {0}")]
    Loader(String),
    #[error("windowing subsystem is not initialised")]
    NotInitialised,
    #[error("no window has been created")]
    NoWindow,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
