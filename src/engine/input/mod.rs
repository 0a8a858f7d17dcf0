//! Keyboard input handling.
//! Maps winit key events to `KeyInput` and provides the default key callback.

pub mod handler;

pub use handler::{default_key_callback, KeyAction, KeyCallback, KeyInput, WindowFlags};
