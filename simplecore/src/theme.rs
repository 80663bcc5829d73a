//! Calculator theme
//!
//! Black on white, 1px outlines, square corners. Uses egui's built-in fonts.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Palette used by the calculator.
pub struct CalcColors;

impl CalcColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
    /// Fill for disabled widgets and text selection.
    pub const GREY: Color32 = Color32::from_rgb(160, 160, 160);
}

/// Theme configuration
pub struct CalcTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 18.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 5.0,
        }
    }
}

impl CalcTheme {
    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_style(self.style());
    }

    /// Build the style without touching a context.
    pub fn style(&self) -> Style {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();

        visuals.window_fill = CalcColors::WHITE;
        visuals.panel_fill = CalcColors::WHITE;
        visuals.faint_bg_color = CalcColors::WHITE;
        visuals.extreme_bg_color = CalcColors::WHITE;

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, CalcColors::BLACK);

        let bw = |ws: &mut egui::style::WidgetVisuals| {
            ws.bg_fill = CalcColors::WHITE;
            ws.weak_bg_fill = CalcColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, CalcColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, CalcColors::BLACK);
            ws.rounding = Rounding::ZERO;
        };
        bw(&mut visuals.widgets.noninteractive);
        bw(&mut visuals.widgets.inactive);
        bw(&mut visuals.widgets.hovered);
        bw(&mut visuals.widgets.active);
        bw(&mut visuals.widgets.open);

        // pressed buttons read as inverted
        visuals.widgets.active.weak_bg_fill = CalcColors::BLACK;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, CalcColors::WHITE);

        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        visuals.selection.bg_fill = CalcColors::GREY;
        visuals.selection.stroke = Stroke::new(1.0, CalcColors::BLACK);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        style
    }
}
