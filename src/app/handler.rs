use crate::engine::platform::Platform;

/// What a hook may do to the application it runs in.
pub struct AppContext<'a> {
    platform: &'a mut dyn Platform,
    running: &'a mut bool,
    fps: u32,
}

impl<'a> AppContext<'a> {
    pub(crate) fn new(platform: &'a mut dyn Platform, running: &'a mut bool, fps: u32) -> Self {
        Self {
            platform,
            running,
            fps,
        }
    }

    /// No-op when there is no window.
    pub fn set_title(&mut self, title: &str) {
        if self.platform.has_window() {
            self.platform.set_title(title);
        }
    }

    /// Stops the application after the current frame.
    pub fn end(&mut self) {
        *self.running = false;
    }

    pub fn is_running(&self) -> bool {
        *self.running
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn time(&self) -> f64 {
        self.platform.time()
    }
}

/// User code driven once per frame by `Application::run`.
///
/// `update` is always called before `render`.
pub trait AppHandler {
    fn update(&mut self, ctx: &mut AppContext<'_>, dt: f64);

    fn render(&mut self, ctx: &mut AppContext<'_>);
}
