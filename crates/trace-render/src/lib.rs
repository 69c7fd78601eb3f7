pub mod app;
pub mod plot_view;
pub mod ui;

use app::App;
use trace_core::{TraceConfig, TraceFigure};

/// Open the viewer window and block until it is closed.
pub fn run(config: TraceConfig, figure: TraceFigure) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Trace Plot: game sound amplitude per tick")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Trace Plot",
        native_options,
        Box::new(|_cc| Ok(Box::new(App::new(config, figure)))),
    )
}
