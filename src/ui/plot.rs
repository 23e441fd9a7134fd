use eframe::egui::{self, Color32, TextStyle, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use lfo_tools::layout::channel_title;

use crate::state::{AppState, SeriesKind};

/// Smallest row height; rows beyond the panel are reached by scrolling.
const MIN_CELL_HEIGHT: f32 = 80.0;

// ---------------------------------------------------------------------------
// Channel grid (central panel)
// ---------------------------------------------------------------------------

/// Render one subplot per channel following the state's layout.
pub fn channel_grid(ui: &mut Ui, state: &AppState) {
    let layout = &state.layout;
    if layout.rows == 0 {
        return;
    }

    // Measured outside the scroll area, whose own height is unbounded.
    let spacing = ui.spacing().item_spacing.y;
    let available = ui.available_height();
    let cell_height = layout.row_height(available, spacing, MIN_CELL_HEIGHT);
    // The mouse wheel belongs to the scroll area once rows overflow.
    let wheel_pans_plots = layout.content_height(cell_height, spacing) <= available;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for row in 0..layout.rows {
                ui.columns(layout.cols, |columns: &mut [Ui]| {
                    for (col, col_ui) in columns.iter_mut().enumerate() {
                        if let Some(channel) = layout.cell(row, col) {
                            channel_plot(col_ui, state, channel, cell_height, wheel_pans_plots);
                        }
                    }
                });
            }
        });
}

fn series_color(kind: SeriesKind) -> Color32 {
    match kind {
        SeriesKind::Reference => Color32::LIGHT_BLUE,
        SeriesKind::Candidate => Color32::from_rgb(255, 140, 0),
        SeriesKind::Difference => Color32::LIGHT_RED,
    }
}

/// Overlay reference and candidate (or their difference) for one channel.
fn channel_plot(ui: &mut Ui, state: &AppState, channel: usize, height: f32, wheel_pans: bool) {
    let mut plot_height = height;

    if state.layout.titled {
        let title = match state.channel_mse(channel) {
            Some(mse) => format!("{}  (MSE {:.2e})", channel_title(channel), mse),
            None => channel_title(channel),
        };
        ui.vertical_centered(|ui: &mut Ui| {
            ui.strong(title);
        });
        plot_height -= ui.text_style_height(&TextStyle::Body) + ui.spacing().item_spacing.y;
    }

    Plot::new(("lfo_plot", channel))
        .height(plot_height.max(MIN_CELL_HEIGHT / 2.0))
        .legend(Legend::default())
        .x_axis_label("Time (s)")
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(wheel_pans)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in state.series(channel) {
                let points: PlotPoints = series.points.into();
                let line = Line::new(points)
                    .name(series.kind.name())
                    .color(series_color(series.kind))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_series_kind_has_its_own_colour() {
        let reference = series_color(SeriesKind::Reference);
        let candidate = series_color(SeriesKind::Candidate);
        let difference = series_color(SeriesKind::Difference);
        assert_ne!(reference, candidate);
        assert_ne!(reference, difference);
        assert_ne!(candidate, difference);
    }
}
