use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::state::{AppState, ModelStatus};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            let open = ui.add_enabled(state.model_ready(), egui::Button::new("Open photo…"));
            if open.clicked() {
                open_photo_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        match &state.model_status {
            ModelStatus::Loading => {
                ui.spinner();
                ui.label("Loading model…");
            }
            ModelStatus::Ready => {
                ui.label("Model ready");
            }
            ModelStatus::Failed(e) => {
                ui.label(RichText::new(format!("Model failed: {e}")).color(Color32::RED));
            }
        }

        if state.classifying {
            ui.separator();
            ui.spinner();
            ui.label("Classifying…");
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel – photo preview and prediction readout
// ---------------------------------------------------------------------------

/// Render the photo preview plus the prediction banner.
pub fn photo_panel(ui: &mut Ui, state: &mut AppState) {
    let (uri, bytes, name) = match &state.photo {
        Some(photo) => (photo.uri.clone(), photo.bytes.clone(), photo.name.clone()),
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a photo to classify it  (File → Open photo…)");
            });
            return;
        }
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(8.0);
        ui.add(
            egui::Image::from_bytes(uri, bytes)
                .max_height(ui.available_height() * 0.6)
                .max_width(ui.available_width() * 0.9)
                .rounding(4.0),
        );
        ui.label(RichText::new(name).weak());
        ui.add_space(12.0);
        prediction_banner(ui, state);
    });
}

/// Label text, confidence indicator, and percentage readout.
fn prediction_banner(ui: &mut Ui, state: &mut AppState) {
    let Some(prediction) = state.prediction else {
        if !state.classifying {
            ui.label("No prediction yet.");
        }
        return;
    };

    let color = state.label_colors.color_for(prediction.label);
    ui.heading(RichText::new(prediction.label).color(color).size(32.0));
    ui.label(format!("confidence {:.2}", prediction.confidence));

    // The indicator stays draggable, and the percentage text follows
    // whatever value it currently holds.
    ui.add(
        Slider::new(&mut state.indicator_value, 0.0..=100.0)
            .show_value(false)
            .trailing_fill(true),
    );
    ui.label(format!("{:.0}%", state.indicator_value));
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_photo_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open photo")
        .add_filter("Images", &["png", "jpg", "jpeg", "webp", "bmp", "gif"])
        .pick_file();

    if let Some(path) = file {
        state.open_photo(&path);
    }
}
