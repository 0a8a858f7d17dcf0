//! Scripted platform and handler shared by the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use shadow2d::engine::input::{KeyCallback, KeyInput, WindowFlags};
use shadow2d::engine::{GlError, Platform};
use shadow2d::{AppContext, AppHandler, PlatformError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    Window,
    Context,
    Loader,
}

#[derive(Default)]
pub struct MockState {
    pub calls: Vec<String>,
    /// Simulated clock, advanced by `step` on every poll.
    pub now: f64,
    pub step: f64,
    pub fail_at: Option<Stage>,
    pub window: bool,
    pub title: Option<String>,
    pub flags: WindowFlags,
    pub key_callback: Option<KeyCallback>,
    pub queued_keys: Vec<KeyInput>,
    pub gl_errors: VecDeque<u32>,
    pub acknowledgements: usize,
}

pub type Shared = Rc<RefCell<MockState>>;

pub struct MockPlatform {
    state: Shared,
}

impl MockPlatform {
    pub fn new(step: f64) -> (Self, Shared) {
        let state = Rc::new(RefCell::new(MockState {
            step,
            ..MockState::default()
        }));
        (Self { state: state.clone() }, state)
    }

    pub fn failing_at(stage: Stage) -> (Self, Shared) {
        let (platform, state) = Self::new(0.1);
        state.borrow_mut().fail_at = Some(stage);
        (platform, state)
    }

    fn record(&self, call: impl Into<String>) {
        self.state.borrow_mut().calls.push(call.into());
    }

    fn fails_at(&self, stage: Stage) -> bool {
        self.state.borrow().fail_at == Some(stage)
    }
}

impl Platform for MockPlatform {
    fn init(&mut self) -> Result<(), PlatformError> {
        self.record("init");
        if self.fails_at(Stage::Init) {
            return Err(PlatformError::Init("no display".to_string()));
        }
        Ok(())
    }

    fn terminate(&mut self) {
        self.record("terminate");
        self.state.borrow_mut().window = false;
    }

    fn hint_visible(&mut self, visible: bool) {
        self.record(format!("hint_visible({visible})"));
    }

    fn create_window(&mut self, width: u32, height: u32, title: &str) -> Result<(), PlatformError> {
        self.record("create_window");
        if self.fails_at(Stage::Window) {
            return Err(PlatformError::WindowCreation(format!("{width}x{height} refused")));
        }
        let mut state = self.state.borrow_mut();
        state.window = true;
        state.title = Some(title.to_string());
        Ok(())
    }

    fn make_context_current(&mut self) -> Result<(), PlatformError> {
        self.record("make_context_current");
        if self.fails_at(Stage::Context) {
            return Err(PlatformError::Context("lost".to_string()));
        }
        Ok(())
    }

    fn load_gl(&mut self) -> Result<(), PlatformError> {
        self.record("load_gl");
        if self.fails_at(Stage::Loader) {
            return Err(PlatformError::Loader("missing symbols".to_string()));
        }
        Ok(())
    }

    fn set_key_callback(&mut self, callback: KeyCallback) {
        self.record("set_key_callback");
        self.state.borrow_mut().key_callback = Some(callback);
    }

    fn has_window(&self) -> bool {
        self.state.borrow().window
    }

    fn destroy_window(&mut self) {
        self.record("destroy_window");
        self.state.borrow_mut().window = false;
    }

    fn poll_events(&mut self) {
        self.record("poll_events");
        let mut state = self.state.borrow_mut();
        let state = &mut *state;
        state.now += state.step;
        let keys: Vec<KeyInput> = state.queued_keys.drain(..).collect();
        if let Some(callback) = state.key_callback.as_mut() {
            for key in &keys {
                callback(key, &mut state.flags);
            }
        }
    }

    fn time(&self) -> f64 {
        self.state.borrow().now
    }

    fn swap_buffers(&mut self) {
        self.record("swap_buffers");
    }

    fn set_title(&mut self, title: &str) {
        self.record("set_title");
        self.state.borrow_mut().title = Some(title.to_string());
    }

    fn set_should_close(&mut self, value: bool) {
        self.state.borrow_mut().flags.set_should_close(value);
    }

    fn should_close(&self) -> bool {
        self.state.borrow().flags.should_close()
    }

    fn gl_error(&mut self) -> Option<GlError> {
        self.record("gl_error");
        let code = self.state.borrow_mut().gl_errors.pop_front()?;
        GlError::from_code(code)
    }

    fn wait_for_acknowledgement(&mut self) {
        self.record("wait_for_acknowledgement");
        self.state.borrow_mut().acknowledgements += 1;
    }
}

/// Handler that logs its hooks into the platform's call list.
pub struct Recorder {
    state: Shared,
    pub dts: Vec<f64>,
    pub fps_seen: Vec<u32>,
    pub updates: usize,
    pub renders: usize,
    /// Calls `end()` from `update` on this (1-based) frame.
    pub end_on_update: Option<usize>,
    pub retitle: bool,
}

impl Recorder {
    pub fn new(state: &Shared) -> Self {
        Self {
            state: state.clone(),
            dts: Vec::new(),
            fps_seen: Vec::new(),
            updates: 0,
            renders: 0,
            end_on_update: None,
            retitle: false,
        }
    }
}

impl AppHandler for Recorder {
    fn update(&mut self, ctx: &mut AppContext<'_>, dt: f64) {
        self.state.borrow_mut().calls.push("update".to_string());
        self.updates += 1;
        self.dts.push(dt);
        self.fps_seen.push(ctx.fps());
        if self.retitle {
            ctx.set_title(&format!("frame {}", self.updates));
        }
        if self.end_on_update == Some(self.updates) {
            ctx.end();
            assert!(!ctx.is_running());
        }
    }

    fn render(&mut self, _ctx: &mut AppContext<'_>) {
        self.state.borrow_mut().calls.push("render".to_string());
        self.renders += 1;
    }
}

pub fn calls(state: &Shared) -> Vec<String> {
    state.borrow().calls.clone()
}

pub fn clear_calls(state: &Shared) {
    state.borrow_mut().calls.clear();
}
