pub mod gl_error;

pub use gl_error::GlError;
