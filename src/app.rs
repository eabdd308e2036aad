use eframe::egui;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::ui::{overlay, panels, scores};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CritterLensApp {
    pub state: AppState,
}

impl CritterLensApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        // Install image loaders so egui can render the photo preview.
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self {
            state: AppState::new(config, cc.egui_ctx.clone()),
        }
    }
}

impl eframe::App for CritterLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        self.state.poll_events(now);
        self.state.tick(now);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Right side panel: per-label scores ----
        egui::SidePanel::right("score_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("Scores");
                ui.separator();
                scores::score_chart(ui, &self.state);
            });

        // ---- Central panel: photo preview + prediction ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::photo_panel(ui, &mut self.state);
        });

        // ---- Foreground: celebration overlay ----
        overlay::show(ctx, &self.state);
    }
}
