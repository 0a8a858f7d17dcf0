//! Frame timing and FPS bookkeeping.

use log::debug;

/// Delta time between frames and an FPS value refreshed once per second.
///
/// The FPS value is the number of frames counted in the last completed
/// interval of at least one second, not a rolling average.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameStats {
    last_update: f64,
    last_fps_update: f64,
    fps: u32,
    frame_count: u32,
}

impl FrameStats {
    pub fn new(now: f64) -> Self {
        Self {
            last_update: now,
            last_fps_update: now,
            fps: 0,
            frame_count: 0,
        }
    }

    /// Records a frame at `now` and returns the time since the previous one.
    pub fn tick(&mut self, now: f64) -> f64 {
        let dt = now - self.last_update;
        let fps_dt = now - self.last_fps_update;

        self.last_update = now;
        self.frame_count += 1;

        if fps_dt >= 1.0 {
            self.fps = self.frame_count;
            self.frame_count = 0;
            self.last_fps_update = now;
            debug!("FPS: {}", self.fps);
        }

        dt
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn last_update(&self) -> f64 {
        self.last_update
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let stats = FrameStats::new(3.0);
        assert_eq!(stats.fps(), 0);
        assert_eq!(stats.frame_count(), 0);
        assert_eq!(stats.last_update(), 3.0);
    }

    #[test]
    fn dt_is_difference_between_samples() {
        let mut stats = FrameStats::new(0.0);
        assert_eq!(stats.tick(0.25), 0.25);
        assert_eq!(stats.tick(0.75), 0.5);
        assert_eq!(stats.tick(0.75), 0.0);
    }

    #[test]
    fn fps_only_refreshes_after_a_full_second() {
        let mut stats = FrameStats::new(0.0);
        for i in 1..=4 {
            stats.tick(i as f64 * 0.2);
        }
        assert_eq!(stats.fps(), 0);
        assert_eq!(stats.frame_count(), 4);

        stats.tick(1.0);
        assert_eq!(stats.fps(), 5);
        assert_eq!(stats.frame_count(), 0);

        stats.tick(1.5);
        assert_eq!(stats.fps(), 5);
        assert_eq!(stats.frame_count(), 1);
    }

    #[test]
    fn long_frame_counts_as_one() {
        let mut stats = FrameStats::new(0.0);
        assert_eq!(stats.tick(2.5), 2.5);
        assert_eq!(stats.fps(), 1);

        // The next interval is measured from the refresh, not from zero.
        stats.tick(3.0);
        assert_eq!(stats.fps(), 1);
        assert_eq!(stats.frame_count(), 1);
    }
}
