//! SimpleCalc - a four-operation desktop calculator
//!
//! Two operand fields, a result field, and add/subtract/multiply/divide.

mod app;
mod compute;
mod panel;

use app::{SimpleCalcApp, WindowConfig};
use eframe::NativeOptions;
use simplecore::CalcTheme;

fn main() -> eframe::Result<()> {
    simplecore::logging::init();

    let config = WindowConfig::default();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.inner_size)
            .with_resizable(false)
            .with_title(config.title),
        ..Default::default()
    };

    tracing::info!(title = config.title, "starting calculator");

    eframe::run_native(
        config.title,
        options,
        Box::new(move |cc| {
            CalcTheme::default().apply(&cc.egui_ctx);
            Box::new(SimpleCalcApp::new(cc, config))
        }),
    )
}
