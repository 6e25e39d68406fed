use super::Config;
use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces the frame loop: the device advances one generation per frame, so the
/// frame rate is also the simulation speed.
pub struct FrameClock {
    frame_start: Instant,
    frametime_smoothed: f64,
    frames: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            frame_start: Instant::now(),
            frametime_smoothed: 0.,
            frames: 0,
        }
    }
}

impl FrameClock {
    /// Smoothed frames per second, 0 before the first frame completes.
    pub fn fps(&self) -> f64 {
        if self.frametime_smoothed > 0. {
            1. / self.frametime_smoothed
        } else {
            0.
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn target_frametime(max_fps: f64) -> Duration {
        Duration::from_secs_f64(1. / max_fps)
    }

    /// Blocks until the current frame has lasted `1 / Config::max_fps()`.
    pub fn wait_for_next_frame(&mut self) {
        let elapsed = self.frame_start.elapsed();
        let target = Self::target_frametime(Config::max_fps());
        if target > elapsed {
            sleep(target - elapsed);
        }

        let frametime = self.frame_start.elapsed().as_secs_f64();
        if self.frames == 0 {
            self.frametime_smoothed = frametime;
        } else {
            self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;
        }
        self.frames += 1;
        self.frame_start = Instant::now();
    }
}
