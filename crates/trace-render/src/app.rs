// eframe application: owns the figure and redraws it every frame.

use tracing::{error, info};
use trace_core::{TraceConfig, TraceFigure};

use crate::{plot_view, ui, ui::UiState};

pub struct App {
    config: TraceConfig,
    figure: TraceFigure,
    ui_state: UiState,
}

impl App {
    pub fn new(config: TraceConfig, figure: TraceFigure) -> Self {
        let ui_state = UiState::new(&config);
        Self {
            config,
            figure,
            ui_state,
        }
    }

    /// Re-read every sample file. On failure the current figure stays.
    fn reload(&mut self, ctx: &egui::Context) {
        match trace_core::compute(&self.config) {
            Ok(figure) => {
                info!("reloaded {} traces", figure.traces.len());
                self.figure = figure;
                self.ui_state.last_error = None;
                // This frame was drawn with the old figure.
                ctx.request_repaint();
            }
            Err(e) => {
                error!("reload failed: {e}");
                self.ui_state.last_error = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let reload = ui::draw_controls(ctx, &self.config, &self.figure, &mut self.ui_state);
        let spacing = (self.config.tick_step * self.config.tick_thin) as f64;
        plot_view::draw_trace_plot(ctx, &self.figure, self.ui_state.trace_alpha, spacing);

        if reload {
            self.reload(ctx);
        }
    }
}
