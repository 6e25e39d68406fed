mod app;
mod draw;
mod style;

pub use app::App;
use style::Style;
