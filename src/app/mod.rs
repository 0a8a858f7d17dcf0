//! The application shell: window lifecycle, frame loop and user hooks.

pub mod application;
pub mod frame_stats;
pub mod handler;

pub use application::Application;
pub use frame_stats::FrameStats;
pub use handler::{AppContext, AppHandler};
