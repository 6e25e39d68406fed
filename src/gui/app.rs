use super::Style;
use crate::{
    controller::{Direction, GameController, Light},
    FrameClock, Pattern, Preset, GRID_HEIGHT, GRID_WIDTH,
};
use eframe::egui::{
    CentralPanel, ColorImage, Context, Frame, Key, Margin, TextureHandle, TextureOptions,
};
use egui_file::FileDialog;
use std::{
    path::{Path, PathBuf},
    time::Instant,
};

pub struct App {
    pub(super) game: GameController<Light, GRID_WIDTH, GRID_HEIGHT>,
    pub(super) pixels: Vec<u8>,            // RGBA buffer of the field.
    pub(super) texture: TextureHandle,     // Texture handle of the field.
    pub(super) frame_clock: FrameClock,    // Paces frames, and therefore generations.
    pub(super) last_update_duration: f64,  // Duration of the last frame's tick in seconds.
    pub(super) file_dialog: Option<FileDialog>,
    pub(super) opened_file: Option<PathBuf>, // Last RLE file stamped onto the field.
    pub(super) status: String,             // Last user-facing message.
}

impl App {
    /// `pattern` is stamped at the centre of a cleared field instead of
    /// starting from a random one.
    pub fn new(ctx: &Context, pattern: Option<Pattern>) -> Self {
        let mut game = GameController::new(Light::default());
        game.begin();
        let mut status = String::new();
        if let Some(pattern) = pattern {
            game.clear();
            let (x, y) = game.cursor().position();
            game.add_pattern(
                &pattern,
                x + GRID_WIDTH - pattern.width() / 2 % GRID_WIDTH,
                y + GRID_HEIGHT - pattern.height() / 2 % GRID_HEIGHT,
            );
            status = format!("Loaded {}x{} pattern", pattern.width(), pattern.height());
        }
        Self {
            game,
            pixels: vec![0; 4 * GRID_WIDTH * GRID_HEIGHT],
            texture: ctx.load_texture(
                "Life field",
                ColorImage::default(),
                TextureOptions::NEAREST,
            ),
            frame_clock: FrameClock::default(),
            last_update_duration: 0.,
            file_dialog: None,
            opened_file: None,
            status,
        }
    }

    /// Mirrors the handheld's buttons: A starts / spawns, B steps / stops /
    /// kills, Escape leaves the editor.
    fn handle_keys(&mut self, ctx: &Context) {
        let pressed = |key: Key| ctx.input(|input| input.key_pressed(key));
        let game = &mut self.game;

        if pressed(Key::Escape) {
            if game.is_editing() {
                game.stop_edit();
            } else {
                game.stop();
            }
            return;
        }

        if game.is_editing() {
            for (key, direction) in [
                (Key::ArrowUp, Direction::Up),
                (Key::ArrowDown, Direction::Down),
                (Key::ArrowLeft, Direction::Left),
                (Key::ArrowRight, Direction::Right),
            ] {
                if pressed(key) {
                    game.move_cursor(direction);
                }
            }
            if pressed(Key::A) {
                game.spawn_at_cursor();
            } else if pressed(Key::B) {
                game.kill_at_cursor();
            }
        } else if game.is_waiting() {
            if pressed(Key::A) || pressed(Key::E) {
                game.start();
            } else if pressed(Key::B) || pressed(Key::Space) {
                game.step();
            }
        } else if pressed(Key::B) || pressed(Key::E) {
            game.stop();
        }
    }

    fn update_game(&mut self) {
        let timer = Instant::now();
        self.game.tick();
        self.last_update_duration = timer.elapsed().as_secs_f64();
    }

    pub(super) fn load_preset(&mut self, preset: &Preset) {
        self.game.open_menu();
        self.status = match self.game.load_preset(preset) {
            Ok(()) => format!("Preset: {}", preset.name),
            Err(err) => {
                tracing::warn!(name = preset.name, %err, "preset rejected");
                format!("Cannot load {}: {}", preset.name, err)
            }
        };
    }

    pub(super) fn open_file_dialog(&mut self) {
        let mut dialog = FileDialog::open_file(self.opened_file.clone());
        dialog.open();
        self.file_dialog = Some(dialog);
    }

    fn poll_file_dialog(&mut self, ctx: &Context) {
        let mut selected = None;
        if let Some(dialog) = &mut self.file_dialog {
            if dialog.show(ctx).selected() {
                selected = dialog.path().map(Path::to_path_buf);
            }
        }
        if let Some(path) = selected {
            self.file_dialog = None;
            self.stamp_file(path);
        }
    }

    /// Stamps an RLE file with its top left corner at the cursor.
    fn stamp_file(&mut self, path: PathBuf) {
        match Pattern::from_rle_file(&path) {
            Ok(pattern) => {
                let (x, y) = self.game.cursor().position();
                self.game.add_pattern(&pattern, x, y);
                self.status = format!("Stamped {}", path.display());
                tracing::info!(path = %path.display(), x, y, "pattern file stamped");
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "cannot load pattern file");
                self.status = format!("Cannot load {}: {}", path.display(), err);
            }
        }
        self.opened_file = Some(path);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Style::FRAME_MARGIN))
                    .fill(Style::PANEL_FILL_COLOR),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_keys(ctx);

                self.draw(ui);

                self.update_game();
            });

        self.poll_file_dialog(ctx);

        self.frame_clock.wait_for_next_frame();
    }
}
