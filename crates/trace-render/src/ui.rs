// egui side panel: load summary, per-category counters, display controls.

use trace_core::{TraceConfig, TraceFigure};

use crate::plot_view::to_color32;

/// Viewer-only state that doesn't belong in TraceConfig.
pub struct UiState {
    pub trace_alpha: f32,
    /// Message from the last failed reload, cleared on success.
    pub last_error: Option<String>,
}

impl UiState {
    pub fn new(config: &TraceConfig) -> Self {
        Self {
            trace_alpha: config.trace_alpha,
            last_error: None,
        }
    }
}

/// Draw the right-side panel. Returns `true` if the user asked for the sample
/// files to be read again.
pub fn draw_controls(
    ctx: &egui::Context,
    config: &TraceConfig,
    figure: &TraceFigure,
    ui_state: &mut UiState,
) -> bool {
    let mut reload = false;

    egui::SidePanel::right("controls")
        .min_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Sample Files");
            ui.separator();

            ui.label(format!("Directory: {}", config.directory.display()));
            ui.label(format!("Runs scanned: {}", figure.runs_scanned));
            ui.label(format!("Files read: {}", figure.files_read));
            ui.label(format!("Traces: {}", figure.traces.len()));
            ui.label(format!("Last tick: {}", figure.max_x));

            ui.separator();

            egui::Grid::new("category_stats")
                .striped(true)
                .num_columns(5)
                .show(ui, |ui| {
                    ui.strong("");
                    ui.strong("Category");
                    ui.strong("Offset");
                    ui.strong("Files");
                    ui.strong("Series");
                    ui.end_row();

                    for (category, stats) in &figure.stats {
                        let swatch = figure
                            .legend
                            .iter()
                            .find(|entry| &entry.category == category)
                            .map(|entry| to_color32(entry.color));
                        let (rect, _) = ui
                            .allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                        match swatch {
                            Some(color) => ui.painter().rect_filled(rect, 2.0, color),
                            // Searched but unplottable: no color configured.
                            None => ui.painter().rect_stroke(
                                rect,
                                2.0,
                                egui::Stroke::new(1.0, egui::Color32::GRAY),
                                egui::StrokeKind::Inside,
                            ),
                        };
                        ui.label(category);
                        ui.label(stats.offset.to_string());
                        ui.label(stats.files.to_string());
                        ui.label(stats.series.to_string());
                        ui.end_row();
                    }
                });

            ui.separator();

            ui.label("Trace Opacity");
            ui.add(egui::Slider::new(&mut ui_state.trace_alpha, 0.02..=1.0));

            ui.separator();

            if ui.add(egui::Button::new("Reload")).clicked() {
                reload = true;
            }
            if let Some(err) = &ui_state.last_error {
                ui.colored_label(egui::Color32::LIGHT_RED, err);
            }
        });

    reload
}
