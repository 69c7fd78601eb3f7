// Amplitude-over-game-tick plot via egui_plot.

use egui_plot::{Corner, GridMark, Legend, Line, Plot};
use trace_core::{Rgb, Tick, TraceFigure, X_AXIS_LABEL, Y_AXIS_LABEL};

pub fn to_color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Grid marks at exactly the computed tick positions.
///
/// `spacing` is handed to egui_plot as the step size of every mark; it only
/// controls how strongly the grid lines are drawn.
pub fn tick_marks(ticks: &[Tick], spacing: f64) -> Vec<GridMark> {
    ticks
        .iter()
        .map(|tick| GridMark {
            value: tick.position as f64,
            step_size: spacing,
        })
        .collect()
}

/// Label for the grid mark at `value`. Positions without a tick get no label.
pub fn tick_label(ticks: &[Tick], value: f64) -> String {
    ticks
        .iter()
        .find(|tick| (tick.position as f64 - value).abs() < 0.5)
        .map(|tick| format!("{}", tick.label))
        .unwrap_or_default()
}

/// Draw every trace in the central panel.
pub fn draw_trace_plot(ctx: &egui::Context, figure: &TraceFigure, trace_alpha: f32, spacing: f64) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Sound Event Amplitude");

        let marks = tick_marks(&figure.ticks, spacing);
        let labels = figure.ticks.clone();

        Plot::new("trace_plot")
            .x_axis_label(X_AXIS_LABEL)
            .y_axis_label(Y_AXIS_LABEL)
            .legend(Legend::default().position(Corner::LeftBottom))
            .x_grid_spacer(move |_input| marks.clone())
            .x_axis_formatter(move |mark, _range| tick_label(&labels, mark.value))
            .show(ui, |plot_ui| {
                // Legend items are merged by name, so each swatch must use the
                // same color as its traces. Empty lines keep categories without
                // data in the legend.
                for entry in &figure.legend {
                    plot_ui.line(
                        Line::new(Vec::<[f64; 2]>::new())
                            .name(&entry.category)
                            .color(to_color32(entry.color).gamma_multiply(trace_alpha)),
                    );
                }

                for trace in &figure.traces {
                    plot_ui.line(
                        Line::new(trace.points())
                            .name(&trace.category)
                            .color(to_color32(trace.color).gamma_multiply(trace_alpha)),
                    );
                }
            });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks() -> Vec<Tick> {
        trace_core::ticks::compute_ticks(2_000, 100, 10)
    }

    #[test]
    fn test_marks_follow_tick_positions() {
        let marks = tick_marks(&ticks(), 1_000.0);
        let values: Vec<f64> = marks.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![0.0, 1_000.0, 2_000.0]);
        assert!(marks.iter().all(|m| m.step_size == 1_000.0));
    }

    #[test]
    fn test_labels_lookup_by_position() {
        let ticks = ticks();
        assert_eq!(tick_label(&ticks, 0.0), "0");
        assert_eq!(tick_label(&ticks, 1_000.0), "10");
        assert_eq!(tick_label(&ticks, 2_000.0), "100");
        assert_eq!(tick_label(&ticks, 1_500.0), "");
    }

    #[test]
    fn test_empty_figure_labels_origin_with_step() {
        let ticks = trace_core::ticks::compute_ticks(0, 100, 10);
        assert_eq!(tick_label(&ticks, 0.0), "100");
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(to_color32(Rgb::new(255, 165, 0)), egui::Color32::from_rgb(255, 165, 0));
    }
}
