use super::{App, Style};
use crate::{render, Config, GRID_HEIGHT, GRID_WIDTH, PRESETS};
use eframe::egui::{
    load::SizedTexture, vec2, Button, Color32, ColorImage, Image, Rect, RichText, Sense, Slider,
    Stroke, TextureOptions, Ui, Vec2,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Style::TEXT_COLOR)
            .size(Style::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Style::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Style::BUTTON_STROKE_WIDTH,
                Style::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_game_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let text = if self.game.is_running() { "Pause" } else { "Play" };
            if ui
                .add_enabled(!self.game.is_editing(), Self::new_button(text))
                .clicked()
            {
                self.game.toggle_running();
            }

            if ui
                .add_enabled(self.game.is_waiting(), Self::new_button("Next step"))
                .clicked()
            {
                self.game.step();
            }
        });

        ui.horizontal(|ui| {
            let text = if self.game.is_editing() { "Done" } else { "Edit" };
            if ui.add(Self::new_button(text)).clicked() {
                if self.game.is_editing() {
                    self.game.stop_edit();
                } else {
                    self.game.start_edit();
                }
            }

            if ui.add(Self::new_button("Clear")).clicked() {
                self.game.open_menu();
                self.game.clear();
            }

            if ui.add(Self::new_button("Randomize")).clicked() {
                self.game.open_menu();
                self.game.randomize();
            }
        });

        ui.add_space(Style::WIDGET_GAP);
        ui.label(Self::new_text("Patterns:"));
        ui.horizontal_wrapped(|ui| {
            for preset in PRESETS {
                if ui.add(Self::new_button(preset.name)).clicked() {
                    self.load_preset(preset);
                }
            }
        });

        if ui.add(Self::new_button("Stamp RLE file at cursor")).clicked() {
            self.open_file_dialog();
        }
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        let mut max_fps = Config::max_fps();
        ui.horizontal(|ui| {
            ui.label(Self::new_text("Speed: "));
            if ui
                .add(Slider::new(&mut max_fps, 1.0..=240.0).logarithmic(true))
                .changed()
            {
                Config::set_max_fps(max_fps);
            }
        });

        let (x, y) = self.game.cursor().position();
        ui.label(Self::new_text(&format!(
            "State: {:?}\nGeneration: {}\nPopulation: {}\nCursor: ({}, {})\nFPS: {:3}\nLast update: {:.3} ms",
            self.game.state(),
            self.game.generation(),
            self.game.grid().population(),
            x,
            y,
            self.frame_clock.fps().round() as u32,
            self.last_update_duration * 1e3,
        )));

        if !self.status.is_empty() {
            ui.label(Self::new_text(&self.status));
        }
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Style::CONTROL_PANEL_WIDTH);
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_game_controls(ui);
                });
            });
            ui.add_space(Style::WIDGET_GAP);
            ui.group(|ui| {
                ui.vertical(|ui| {
                    self.draw_stats(ui);
                });
            });
        });
    }

    fn draw_light(&self, ui: &mut Ui, width: f32) {
        let [r, g, b] = self.game.effects().rgb();
        let (rect, _) =
            ui.allocate_exact_size(vec2(width, Style::LIGHT_STRIP_HEIGHT), Sense::hover());
        ui.painter().rect_filled(rect, 0., Color32::from_rgb(r, g, b));
    }

    fn draw_field(&mut self, ui: &mut Ui, cell_px: f32) {
        render::draw(self.game.grid(), &mut self.pixels);
        let image = ColorImage::from_rgba_unmultiplied([GRID_WIDTH, GRID_HEIGHT], &self.pixels);
        self.texture.set(image, TextureOptions::NEAREST);

        let size = vec2(GRID_WIDTH as f32, GRID_HEIGHT as f32) * cell_px;
        let source = SizedTexture::new(self.texture.id(), size);
        let response = ui.add(Image::from_texture(source).sense(Sense::click()));
        let field = response.rect;

        if self.game.is_editing() {
            let (x, y) = self.game.cursor().position();
            let min = field.min + vec2(x as f32, y as f32) * cell_px;
            ui.painter().rect_stroke(
                Rect::from_min_size(min, Vec2::splat(cell_px)),
                0.,
                Stroke::new(Style::CURSOR_STROKE_WIDTH, Style::CURSOR_COLOR),
            );

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let p = (pos - field.min) / cell_px;
                    if p.x >= 0. && p.y >= 0. {
                        self.game.toggle_at(p.x as usize, p.y as usize);
                    }
                }
            }
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        let area = ui.available_size();

        let cell_px = ((area.x - Style::CONTROL_PANEL_WIDTH - Style::FRAME_MARGIN)
            / GRID_WIDTH as f32)
            .min((area.y - Style::LIGHT_STRIP_HEIGHT - Style::FRAME_MARGIN) / GRID_HEIGHT as f32)
            .max(1.);
        ui.horizontal(|ui| {
            self.draw_controls(ui);

            ui.add_space(Style::FRAME_MARGIN);

            ui.vertical(|ui| {
                self.draw_light(ui, GRID_WIDTH as f32 * cell_px);
                self.draw_field(ui, cell_px);
            });
        });
    }
}
