use eframe::egui::Color32;

pub struct Style;

impl Style {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 320.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const PANEL_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const WIDGET_GAP: f32 = 20.;
    pub const LIGHT_STRIP_HEIGHT: f32 = 12.;
    pub const CURSOR_STROKE_WIDTH: f32 = 1.5;
    pub const CURSOR_COLOR: Color32 = Color32::RED;
}
