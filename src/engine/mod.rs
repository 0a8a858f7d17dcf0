//! Engine module containing graphics, input, and window management.

pub mod graphics;
pub mod input;
pub mod platform;
pub mod window;

// Re-export commonly used types
pub use graphics::GlError;
pub use platform::Platform;
pub use window::WindowManager;
