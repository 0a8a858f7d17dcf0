//! Demo application: clears the window to a slowly cycling colour.

use std::f32::consts::TAU;

use glam::Vec4;
use log::info;

use crate::app::{AppContext, AppHandler};

/// Seconds for one full trip around the colour wheel.
const CYCLE_SECONDS: f64 = 4.0;

pub struct Pulse {
    title: String,
    elapsed: f64,
    frames: u64,
    frame_limit: Option<u64>,
    shown_fps: Option<u32>,
    colour: Vec4,
}

impl Pulse {
    pub fn new(title: impl Into<String>, frame_limit: Option<u64>) -> Self {
        Self {
            title: title.into(),
            elapsed: 0.0,
            frames: 0,
            frame_limit,
            shown_fps: None,
            colour: pulse_colour(0.0),
        }
    }

    pub fn colour(&self) -> Vec4 {
        self.colour
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Opaque colour whose channels are sines a third of a turn apart.
pub fn pulse_colour(elapsed: f64) -> Vec4 {
    let phase = (elapsed / CYCLE_SECONDS).fract() as f32 * TAU;
    let channel = |offset: f32| 0.5 + 0.5 * (phase + offset * TAU).sin();
    Vec4::new(channel(0.0), channel(1.0 / 3.0), channel(2.0 / 3.0), 1.0)
}

impl AppHandler for Pulse {
    fn update(&mut self, ctx: &mut AppContext<'_>, dt: f64) {
        self.elapsed += dt;
        self.frames += 1;
        self.colour = pulse_colour(self.elapsed);

        let fps = ctx.fps();
        if self.shown_fps != Some(fps) {
            ctx.set_title(&format!("{} | {} fps", self.title, fps));
            self.shown_fps = Some(fps);
        }

        if let Some(limit) = self.frame_limit {
            if self.frames >= limit {
                info!("Frame limit of {} reached", limit);
                ctx.end();
            }
        }
    }

    fn render(&mut self, _ctx: &mut AppContext<'_>) {
        let [r, g, b, a] = self.colour.to_array();
        unsafe {
            gl::ClearColor(r, g, b, a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }
}
