//! The windowing and graphics subsystem as seen by `Application`.

use std::io::BufRead;

use log::warn;

use crate::engine::graphics::GlError;
use crate::engine::input::KeyCallback;
use crate::error::PlatformError;

/// Operations `Application` needs from a native windowing library with an
/// OpenGL context.
///
/// Implementations own at most one window. Calls that need a window are
/// no-ops without one, and `terminate` must be safe after a failed `init`.
pub trait Platform {
    fn init(&mut self) -> Result<(), PlatformError>;

    /// Releases the window (if any) and the subsystem itself.
    fn terminate(&mut self);

    /// Applies to the next `create_window` call.
    fn hint_visible(&mut self, visible: bool);

    fn create_window(&mut self, width: u32, height: u32, title: &str) -> Result<(), PlatformError>;

    fn make_context_current(&mut self) -> Result<(), PlatformError>;

    /// Resolves OpenGL function pointers for the current context.
    fn load_gl(&mut self) -> Result<(), PlatformError>;

    fn set_key_callback(&mut self, callback: KeyCallback);

    fn has_window(&self) -> bool;

    fn destroy_window(&mut self);

    /// Processes pending events without blocking.
    fn poll_events(&mut self);

    /// Monotonic seconds since `init`, or `0.0` before it.
    fn time(&self) -> f64;

    fn swap_buffers(&mut self);

    fn set_title(&mut self, title: &str);

    fn set_should_close(&mut self, value: bool);

    fn should_close(&self) -> bool;

    /// Pops the pending OpenGL error, if any.
    fn gl_error(&mut self) -> Option<GlError>;

    /// Blocks until the operator enters a line on stdin.
    fn wait_for_acknowledgement(&mut self) {
        read_acknowledgement(&mut std::io::stdin().lock());
    }
}

/// Consumes one line. A read error is logged and treated as acknowledged.
pub(crate) fn read_acknowledgement(input: &mut impl BufRead) -> bool {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) => true,
        Err(e) => {
            warn!("Failed to read acknowledgement from stdin: {}", e);
            false
        }
    }
}
