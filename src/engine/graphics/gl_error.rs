//! OpenGL error codes as reported by `glGetError`.

use std::fmt;

use gl::types::GLenum;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlError(GLenum);

impl GlError {
    /// `None` for `GL_NO_ERROR`.
    pub fn from_code(code: GLenum) -> Option<Self> {
        if code == gl::NO_ERROR {
            None
        } else {
            Some(Self(code))
        }
    }

    pub fn code(&self) -> GLenum {
        self.0
    }

    /// Same wording as `gluErrorString`.
    pub fn description(&self) -> &'static str {
        match self.0 {
            gl::INVALID_ENUM => "invalid enumerant",
            gl::INVALID_VALUE => "invalid value",
            gl::INVALID_OPERATION => "invalid operation",
            gl::STACK_OVERFLOW => "stack overflow",
            gl::STACK_UNDERFLOW => "stack underflow",
            gl::OUT_OF_MEMORY => "out of memory",
            gl::INVALID_FRAMEBUFFER_OPERATION => "invalid framebuffer operation",
            _ => "unknown error",
        }
    }
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:04X})", self.description(), self.0)
    }
}
