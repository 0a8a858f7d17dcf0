//! A single window with an OpenGL context, driven one frame per `run` call.

use log::{error, info};

use crate::app::frame_stats::FrameStats;
use crate::app::handler::{AppContext, AppHandler};
use crate::config::AppConfig;
use crate::engine::input::default_key_callback;
use crate::engine::platform::Platform;
use crate::engine::window::WindowManager;
use crate::error::PlatformError;

/// Owns the platform window and drives an `AppHandler`.
///
/// Construction never fails outright. If the windowing subsystem, the window
/// or the GL loader cannot be set up, the failure is logged and the
/// application is left not running; check `is_running` before looping.
pub struct Application<H: AppHandler, P: Platform = WindowManager> {
    handler: H,
    platform: P,
    running: bool,
    stats: FrameStats,
}

impl<H: AppHandler> Application<H, WindowManager> {
    pub fn new(config: &AppConfig, handler: H) -> Self {
        Self::with_platform(config, handler, WindowManager::new())
    }
}

impl<H: AppHandler, P: Platform> Application<H, P> {
    pub fn with_platform(config: &AppConfig, handler: H, mut platform: P) -> Self {
        let stats = FrameStats::new(platform.time());

        let running = match initialise(&mut platform, config) {
            Ok(()) => {
                info!("Application \"{}\" started", config.title);
                true
            }
            Err(e) => {
                error!("{}", e);
                false
            }
        };

        Self {
            handler,
            platform,
            running,
            stats,
        }
    }

    /// Runs one frame and reports whether the application is still running.
    ///
    /// Does nothing once the application has stopped.
    pub fn run(&mut self) -> bool {
        if !self.running {
            return false;
        }

        self.platform.poll_events();

        let now = self.platform.time();
        let dt = self.stats.tick(now);
        let fps = self.stats.fps();

        {
            let mut ctx = AppContext::new(&mut self.platform, &mut self.running, fps);
            self.handler.update(&mut ctx, dt);
            self.handler.render(&mut ctx);
        }

        self.platform.swap_buffers();

        self.check_gl_error();

        self.running
    }

    pub fn set_title(&mut self, title: &str) {
        if self.platform.has_window() {
            self.platform.set_title(title);
        }
    }

    pub fn end(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Set by the default key handler on Escape and by the window's close
    /// button. `run` does not look at it.
    pub fn should_close(&self) -> bool {
        self.platform.should_close()
    }

    pub fn fps(&self) -> u32 {
        self.stats.fps()
    }

    pub fn frame_count(&self) -> u32 {
        self.stats.frame_count()
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Any OpenGL error is fatal: report it, wait for the operator, stop.
    fn check_gl_error(&mut self) {
        if let Some(e) = self.platform.gl_error() {
            error!("OpenGL error: {}\nPress return to continue", e);
            self.platform.wait_for_acknowledgement();
            self.running = false;
        }
    }
}

impl<H: AppHandler, P: Platform> Drop for Application<H, P> {
    fn drop(&mut self) {
        if self.platform.has_window() {
            self.platform.destroy_window();
        }
        self.platform.terminate();
    }
}

fn initialise<P: Platform>(platform: &mut P, config: &AppConfig) -> Result<(), PlatformError> {
    platform.init()?;

    if config.hidden {
        platform.hint_visible(false);
    }

    platform.create_window(config.width, config.height, &config.title)?;
    platform.make_context_current()?;
    platform.load_gl()?;
    platform.set_key_callback(Box::new(default_key_callback));

    Ok(())
}
