use std::sync::{Mutex, MutexGuard, OnceLock};

/// Width of the field, in cells (the handheld's screen is 80x64 pixels).
pub const GRID_WIDTH: usize = 80;
pub const GRID_HEIGHT: usize = 64;

/// Process-wide runtime settings, filled from the command line at start-up.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    seed: Option<u64>,
    max_fps: f64,
    start_paused: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            max_fps: Self::DEFAULT_MAX_FPS,
            start_paused: false,
        }
    }
}

impl Config {
    /// The device refreshes at 25 frames per second; one generation per frame.
    pub const DEFAULT_MAX_FPS: f64 = 25.;
    /// Frame rate used to convert effect durations from seconds to frames.
    pub const EFFECT_FRAME_RATE: f32 = 25.;

    fn get() -> MutexGuard<'static, Config> {
        static CONFIG: OnceLock<Mutex<Config>> = OnceLock::new();
        CONFIG
            .get_or_init(|| Mutex::new(Config::default()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot() -> Config {
        Self::get().clone()
    }

    pub fn seed() -> Option<u64> {
        Self::get().seed
    }

    pub fn set_seed(seed: Option<u64>) {
        Self::get().seed = seed;
    }

    pub fn max_fps() -> f64 {
        Self::get().max_fps
    }

    /// Non-positive or non-finite rates fall back to the default.
    pub fn set_max_fps(max_fps: f64) {
        Self::get().max_fps = if max_fps.is_finite() && max_fps > 0. {
            max_fps
        } else {
            Self::DEFAULT_MAX_FPS
        };
    }

    pub fn start_paused() -> bool {
        Self::get().start_paused
    }

    pub fn set_start_paused(paused: bool) {
        Self::get().start_paused = paused;
    }
}
