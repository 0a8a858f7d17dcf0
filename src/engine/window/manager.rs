//! Window management implementation.

use std::ffi::CString;
use std::num::NonZeroU32;
use std::panic::{self, AssertUnwindSafe};
use std::ptr;
use std::time::{Duration, Instant};

use glutin::config::ConfigTemplateBuilder;
use glutin::context::{ContextAttributesBuilder, NotCurrentContext, PossiblyCurrentContext};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use log::{debug, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::raw_window_handle::HasWindowHandle;
use winit::window::{Window, WindowId};

use crate::engine::graphics::GlError;
use crate::engine::input::{KeyCallback, KeyInput, WindowFlags};
use crate::engine::platform::Platform;
use crate::error::PlatformError;

// Field order is drop order: GL objects go before the window they draw to.
struct GlTarget {
    context: Option<PossiblyCurrentContext>,
    pending_context: Option<NotCurrentContext>,
    surface: Surface<WindowSurface>,
    window: Window,
    gl_loaded: bool,
}

/// Native window with an OpenGL context, backed by winit and glutin.
///
/// Must be created and driven on the main thread: winit panics when its
/// event loop is built anywhere else, so that case never reaches
/// `PlatformError::Init`. GLFW carries the same restriction.
pub struct WindowManager {
    target: Option<GlTarget>,
    event_loop: Option<EventLoop<()>>,
    clock: Option<Instant>,
    visible: bool,
    flags: WindowFlags,
    key_callback: Option<KeyCallback>,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self {
            target: None,
            event_loop: None,
            clock: None,
            visible: true,
            flags: WindowFlags::default(),
            key_callback: None,
        }
    }
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_window(&self) -> Option<&Window> {
        self.target.as_ref().map(|target| &target.window)
    }

    /// Keeps the GL surface in step with the window on platforms that need it.
    fn resize_surface(&self, width: u32, height: u32) {
        let (Some(width), Some(height)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return;
        };
        if let Some(target) = &self.target {
            if let Some(context) = &target.context {
                target.surface.resize(context, width, height);
            }
        }
    }
}

impl Platform for WindowManager {
    fn init(&mut self) -> Result<(), PlatformError> {
        if self.event_loop.is_some() {
            return Ok(());
        }
        let event_loop = EventLoop::new().map_err(|e| PlatformError::Init(e.to_string()))?;
        self.event_loop = Some(event_loop);
        self.clock = Some(Instant::now());
        info!("Windowing subsystem initialised");
        Ok(())
    }

    fn terminate(&mut self) {
        self.target = None;
        if self.event_loop.take().is_some() {
            info!("Windowing subsystem terminated");
        }
        self.clock = None;
    }

    fn hint_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn create_window(&mut self, width: u32, height: u32, title: &str) -> Result<(), PlatformError> {
        let event_loop = self.event_loop.as_ref().ok_or(PlatformError::NotInitialised)?;

        let attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(LogicalSize::new(width, height))
            .with_visible(self.visible);
        let template = ConfigTemplateBuilder::new().with_alpha_size(8);

        let (window, gl_config) = catch_missing_config(|| {
            DisplayBuilder::new()
                .with_window_attributes(Some(attributes))
                .build(event_loop, template, |configs| {
                    require_config(best_by_samples(configs, |config| config.num_samples()))
                })
        })?
        .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;
        let window = window.ok_or_else(|| {
            PlatformError::WindowCreation("display builder returned no window".to_string())
        })?;

        let raw_window_handle = window.window_handle().ok().map(|handle| handle.as_raw());
        let gl_display = gl_config.display();
        let context_attributes = ContextAttributesBuilder::new().build(raw_window_handle);
        let pending_context = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;
        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;

        info!("Created {}x{} window \"{}\"", width, height, title);
        self.target = Some(GlTarget {
            context: None,
            pending_context: Some(pending_context),
            surface,
            window,
            gl_loaded: false,
        });
        Ok(())
    }

    fn make_context_current(&mut self) -> Result<(), PlatformError> {
        let target = self.target.as_mut().ok_or(PlatformError::NoWindow)?;
        let Some(pending) = target.pending_context.take() else {
            return match target.context {
                Some(_) => Ok(()),
                None => Err(PlatformError::Context("context was lost".to_string())),
            };
        };
        let context = pending
            .make_current(&target.surface)
            .map_err(|e| PlatformError::Context(e.to_string()))?;
        target.context = Some(context);
        Ok(())
    }

    fn load_gl(&mut self) -> Result<(), PlatformError> {
        let target = self.target.as_mut().ok_or(PlatformError::NoWindow)?;
        let context = target
            .context
            .as_ref()
            .ok_or_else(|| PlatformError::Loader("no current context".to_string()))?;

        let display = context.display();
        gl::load_with(|symbol| match CString::new(symbol) {
            Ok(symbol) => display.get_proc_address(&symbol),
            Err(_) => ptr::null(),
        });

        if !gl::GetError::is_loaded() {
            return Err(PlatformError::Loader("glGetError could not be resolved".to_string()));
        }
        target.gl_loaded = true;
        Ok(())
    }

    fn set_key_callback(&mut self, callback: KeyCallback) {
        self.key_callback = Some(callback);
    }

    fn has_window(&self) -> bool {
        self.target.is_some()
    }

    fn destroy_window(&mut self) {
        if self.target.take().is_some() {
            debug!("Window destroyed");
        }
    }

    fn poll_events(&mut self) {
        let Some(event_loop) = self.event_loop.as_mut() else {
            return;
        };

        let mut pump = EventPump {
            flags: &mut self.flags,
            key_callback: self.key_callback.as_mut(),
            resized: None,
        };
        let status = event_loop.pump_app_events(Some(Duration::ZERO), &mut pump);
        let resized = pump.resized;

        if let PumpStatus::Exit(code) = status {
            warn!("Event loop exited with code {}", code);
            self.flags.request_close();
        }
        if let Some((width, height)) = resized {
            self.resize_surface(width, height);
        }
    }

    fn time(&self) -> f64 {
        self.clock.map_or(0.0, |clock| clock.elapsed().as_secs_f64())
    }

    fn swap_buffers(&mut self) {
        let Some(target) = &self.target else {
            return;
        };
        if let Some(context) = &target.context {
            if let Err(e) = target.surface.swap_buffers(context) {
                warn!("Failed to swap buffers: {}", e);
            }
        }
    }

    fn set_title(&mut self, title: &str) {
        if let Some(window) = self.get_window() {
            window.set_title(title);
        }
    }

    fn set_should_close(&mut self, value: bool) {
        self.flags.set_should_close(value);
    }

    fn should_close(&self) -> bool {
        self.flags.should_close()
    }

    fn gl_error(&mut self) -> Option<GlError> {
        let target = self.target.as_ref()?;
        if target.context.is_none() || !target.gl_loaded {
            return None;
        }
        GlError::from_code(unsafe { gl::GetError() })
    }
}

/// Prefers the configuration with the most samples; `None` for an empty list.
fn best_by_samples<T>(configs: impl Iterator<Item = T>, samples: impl Fn(&T) -> u8) -> Option<T> {
    configs.reduce(|best, config| {
        if samples(&config) > samples(&best) {
            config
        } else {
            best
        }
    })
}

/// Unwind payload for a display that offered no matching configuration.
struct NoMatchingConfig;

/// The glutin picker must return a config, so an empty list unwinds with
/// `NoMatchingConfig` for `catch_missing_config` to turn into an error.
fn require_config<T>(picked: Option<T>) -> T {
    match picked {
        Some(config) => config,
        None => panic::resume_unwind(Box::new(NoMatchingConfig)),
    }
}

fn catch_missing_config<R>(build: impl FnOnce() -> R) -> Result<R, PlatformError> {
    match panic::catch_unwind(AssertUnwindSafe(build)) {
        Ok(built) => Ok(built),
        Err(payload) if payload.is::<NoMatchingConfig>() => Err(PlatformError::WindowCreation(
            "no matching OpenGL config".to_string(),
        )),
        Err(payload) => panic::resume_unwind(payload),
    }
}

/// Routes one batch of winit events into the window's flags and key callback.
struct EventPump<'a> {
    flags: &'a mut WindowFlags,
    key_callback: Option<&'a mut KeyCallback>,
    resized: Option<(u32, u32)>,
}

impl ApplicationHandler for EventPump<'_> {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.flags.request_close();
            }
            WindowEvent::Resized(size) => {
                self.resized = Some((size.width, size.height));
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let (Some(input), Some(callback)) =
                    (KeyInput::from_event(&event), self.key_callback.as_mut())
                {
                    callback(&input, &mut *self.flags);
                }
            }
            _ => (),
        }
    }
}
