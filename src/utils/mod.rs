mod config;
mod fps_limit;
mod parse_rle;

pub use config::{Config, GRID_HEIGHT, GRID_WIDTH};
pub use fps_limit::FrameClock;
pub use parse_rle::parse_rle;
