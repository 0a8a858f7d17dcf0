use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: KeyCode,
    pub action: KeyAction,
}

impl KeyInput {
    pub fn new(key: KeyCode, action: KeyAction) -> Self {
        Self { key, action }
    }

    /// Returns `None` for keys winit could not map to a physical key code.
    pub fn from_event(event: &KeyEvent) -> Option<Self> {
        let PhysicalKey::Code(key) = event.physical_key else {
            return None;
        };
        let action = match (event.state, event.repeat) {
            (ElementState::Pressed, false) => KeyAction::Press,
            (ElementState::Pressed, true) => KeyAction::Repeat,
            (ElementState::Released, _) => KeyAction::Release,
        };
        Some(Self { key, action })
    }
}

/// Per-window state that key callbacks may change.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WindowFlags {
    should_close: bool,
}

impl WindowFlags {
    pub fn request_close(&mut self) {
        self.should_close = true;
    }

    pub fn set_should_close(&mut self, value: bool) {
        self.should_close = value;
    }

    pub fn should_close(&self) -> bool {
        self.should_close
    }
}

pub type KeyCallback = Box<dyn FnMut(&KeyInput, &mut WindowFlags)>;

/// Escape asks the window to close. Nothing else is handled.
pub fn default_key_callback(input: &KeyInput, flags: &mut WindowFlags) {
    if input.key == KeyCode::Escape && input.action == KeyAction::Press {
        debug!("Escape pressed, window close requested");
        flags.request_close();
    }
}
