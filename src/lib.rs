mod automaton;
pub mod controller;
mod error;
mod gui;
mod pattern;
pub mod render;
mod utils;

pub use automaton::{AutomatonGrid, MAX_AGE, NEWBORN};
pub use error::{GridError, PatternError};
pub use gui::App;
pub use pattern::{Pattern, Preset, PRESETS};
pub use utils::{parse_rle, Config, FrameClock, GRID_HEIGHT, GRID_WIDTH};

/// The field of the handheld: 80x64 cells.
pub type DefaultGrid = AutomatonGrid<GRID_WIDTH, GRID_HEIGHT>;
