#![warn(clippy::all)]

use agelife::{App, Config, Pattern};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Game of Life with aging cells on an 80x64 torus.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seed for the random field (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Generations per second
    #[arg(long, default_value_t = Config::DEFAULT_MAX_FPS)]
    max_fps: f64,

    /// Start suspended instead of running
    #[arg(long)]
    paused: bool,

    /// RLE pattern stamped at the centre of an empty field
    #[arg(long, value_name = "FILE")]
    pattern: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    Config::set_seed(args.seed);
    Config::set_max_fps(args.max_fps);
    Config::set_start_paused(args.paused);
    tracing::info!(config = ?Config::snapshot(), "starting");

    let pattern = args.pattern.and_then(|path| match Pattern::from_rle_file(&path) {
        Ok(pattern) => Some(pattern),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring pattern file");
            None
        }
    });

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1100., 620.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, pattern)))),
    )
}
