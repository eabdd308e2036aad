mod app;
mod classify;
mod color;
mod config;
mod state;
mod ui;
mod worker;

use app::CritterLensApp;
use config::AppConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Bad config, using defaults: {e:#}");
            AppConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Critter Lens – Animal Classifier",
        options,
        Box::new(move |cc| Ok(Box::new(CritterLensApp::new(cc, &config)))),
    )
}
