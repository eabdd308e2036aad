use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Plot};

use crate::classify::model::LABELS;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Score chart (side panel)
// ---------------------------------------------------------------------------

/// Render the latest score vector as one bar per label.
pub fn score_chart(ui: &mut Ui, state: &AppState) {
    let Some(scores) = &state.scores else {
        ui.label("Scores appear here after the first photo.");
        return;
    };

    let bars: Vec<Bar> = scores
        .scores()
        .iter()
        .enumerate()
        .map(|(i, &score)| {
            Bar::new(i as f64, score as f64)
                .name(LABELS[i])
                .fill(state.label_colors.color_for(LABELS[i]))
                .width(0.6)
        })
        .collect();

    Plot::new("score_chart")
        .include_y(0.0)
        .include_y(1.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(|mark, _range| {
            let rounded = mark.value.round();
            if rounded < 0.0 || (mark.value - rounded).abs() > 1e-6 {
                return String::new();
            }
            LABELS
                .get(rounded as usize)
                .map(|l| l.to_string())
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
