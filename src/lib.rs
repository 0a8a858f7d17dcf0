//! A thin application shell: one window, one OpenGL context, one frame per call.

pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;

// Re-export main types for convenience
pub use app::{AppContext, AppHandler, Application};
pub use config::AppConfig;
pub use error::{ConfigError, PlatformError};
