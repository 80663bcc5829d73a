//! Custom widgets

use egui::{Align2, Context, Id, Stroke, Ui};
use crate::theme::CalcColors;

/// Title used for notices when the caller has nothing better.
pub const NOTICE_TITLE: &str = "Message";

/// Show a centred notice window with a single "OK" button.
///
/// Returns `true` on the frame the user dismisses it. The caller is expected
/// to disable the rest of its UI while the notice is open.
pub fn notice_window(ctx: &Context, title: &str, message: &str) -> bool {
    let mut dismissed = false;

    egui::Window::new(title)
        .id(Id::new("simplecore_notice"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label(message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    dismissed
}

/// Framed, read-only text box: white bg, 1px black outline.
pub fn readonly_field(ui: &mut Ui, size: egui::Vec2, text: &str) -> egui::Response {
    let mut shown = text;
    egui::Frame::none()
        .fill(CalcColors::WHITE)
        .stroke(Stroke::new(1.0, CalcColors::BLACK))
        .show(ui, |ui| {
            ui.add_sized(
                size,
                egui::TextEdit::singleline(&mut shown).frame(false),
            )
        })
        .inner
}
