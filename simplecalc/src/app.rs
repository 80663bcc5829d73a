//! SimpleCalc application

use egui::Context;
use simplecore::safety::catch_or;
use simplecore::widgets::{notice_window, readonly_field};

use crate::compute::Operation;
use crate::panel::PanelState;

/// Window settings, fixed at build time.
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    pub title: &'static str,
    pub inner_size: [f32; 2],
    /// Gap between grid cells, both axes.
    pub spacing: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Simple Calculator",
            inner_size: [300.0, 250.0],
            spacing: 5.0,
        }
    }
}

/// Rows in the panel grid: three fields, two button rows.
const GRID_ROWS: f32 = 5.0;

pub struct SimpleCalcApp {
    panel: PanelState,
    config: WindowConfig,
}

impl SimpleCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: WindowConfig) -> Self {
        Self {
            panel: PanelState::new(),
            config,
        }
    }

    fn render(&mut self, ctx: &Context) {
        let spacing = self.config.spacing;
        let enabled = !self.panel.is_blocked();
        let mut pressed = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            let cell = egui::vec2(
                (ui.available_width() - spacing) / 2.0,
                (ui.available_height() - spacing * (GRID_ROWS - 1.0)) / GRID_ROWS,
            );

            ui.add_enabled_ui(enabled, |ui| {
                egui::Grid::new("calculator_grid")
                    .num_columns(2)
                    .spacing([spacing, spacing])
                    .min_col_width(cell.x)
                    .show(ui, |ui| {
                        ui.label("Number 1:");
                        ui.add_sized(cell, egui::TextEdit::singleline(&mut self.panel.first));
                        ui.end_row();

                        ui.label("Number 2:");
                        ui.add_sized(cell, egui::TextEdit::singleline(&mut self.panel.second));
                        ui.end_row();

                        ui.label("Result:");
                        readonly_field(ui, cell, self.panel.result());
                        ui.end_row();

                        for row in Operation::ALL.chunks(2) {
                            for &op in row {
                                if ui.add_sized(cell, egui::Button::new(op.label())).clicked() {
                                    pressed = Some(op);
                                }
                            }
                            ui.end_row();
                        }
                    });
            });
        });

        if let Some(op) = pressed {
            self.panel.press(op);
        }

        let dismissed = match self.panel.notice() {
            Some(notice) => notice_window(ctx, &notice.title, &notice.message),
            None => false,
        };
        if dismissed {
            self.panel.dismiss_notice();
        }
    }
}

impl eframe::App for SimpleCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        catch_or((), || self.render(ctx));
    }
}
