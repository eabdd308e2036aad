use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use eframe::egui;

use crate::classify::model::{Classifier, Prediction, ScoreVector};
use crate::classify::ClassifyError;
use crate::color::LabelColors;
use crate::config::AppConfig;
use crate::ui::overlay::Overlay;
use crate::worker::{self, Event};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Where the startup model load currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelStatus {
    Loading,
    Ready,
    Failed(String),
}

/// The photo currently shown in the preview.
pub struct Photo {
    /// Unique URI keying egui's texture cache; changes per upload.
    pub uri: String,
    pub bytes: Arc<[u8]>,
    pub name: String,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub model_status: ModelStatus,
    pub classifier: Option<Arc<Classifier>>,

    /// Currently previewed photo (None until the first upload).
    pub photo: Option<Photo>,
    /// Scores from the latest completed classification.
    pub scores: Option<ScoreVector>,
    /// Winning label and confidence derived from `scores`.
    pub prediction: Option<Prediction>,
    /// Confidence indicator position (0–100); user-draggable.
    pub indicator_value: f32,
    /// Active celebration overlay, if any.
    pub overlay: Option<Overlay>,

    /// Whether a classification is in flight.
    pub classifying: bool,
    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    pub label_colors: LabelColors,

    /// Single-slot pipeline token; results from older generations are
    /// dropped.
    generation: u64,
    events: Receiver<Event>,
    sender: Sender<Event>,
    egui_ctx: egui::Context,
}

impl AppState {
    /// Build the state and kick off the startup model load.
    pub fn new(config: &AppConfig, egui_ctx: egui::Context) -> Self {
        let state = Self::idle(egui_ctx);
        worker::spawn_model_loader(
            config.model_source(),
            state.sender.clone(),
            state.egui_ctx.clone(),
        );
        state
    }

    /// State with no model load in flight; starting point for [`Self::new`].
    fn idle(egui_ctx: egui::Context) -> Self {
        let (sender, events) = mpsc::channel();
        AppState {
            model_status: ModelStatus::Loading,
            classifier: None,
            photo: None,
            scores: None,
            prediction: None,
            indicator_value: 0.0,
            overlay: None,
            classifying: false,
            status_message: None,
            label_colors: LabelColors::new(),
            generation: 0,
            events,
            sender,
            egui_ctx,
        }
    }

    pub fn model_ready(&self) -> bool {
        self.model_status == ModelStatus::Ready
    }

    /// Drain worker events; `now` is the frame time in seconds.
    pub fn poll_events(&mut self, now: f64) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event, now);
        }
    }

    fn handle_event(&mut self, event: Event, now: f64) {
        match event {
            Event::ModelLoaded(Ok(classifier)) => {
                log::info!("Classifier ready");
                self.classifier = Some(Arc::new(classifier));
                self.model_status = ModelStatus::Ready;
            }
            Event::ModelLoaded(Err(e)) => {
                log::error!("Model load failed: {e:#}");
                self.model_status = ModelStatus::Failed(format!("{e:#}"));
            }
            Event::Classified { generation, result } => {
                if generation != self.generation {
                    log::debug!("Dropping result from superseded pipeline {generation}");
                    return;
                }
                self.classifying = false;
                match result {
                    Ok(scores) => self.present(scores, now),
                    Err(e) => {
                        log::error!("Classification failed: {e:#}");
                        self.status_message = Some(format!("Error: {e:#}"));
                    }
                }
            }
        }
    }

    /// Install a finished prediction into the UI state.
    fn present(&mut self, scores: ScoreVector, now: f64) {
        let prediction = scores.select();
        log::info!("Predicted {} ({:.2})", prediction.label, prediction.confidence);
        self.indicator_value = prediction.indicator_value();
        self.overlay = Overlay::begin(prediction.label, now);
        self.prediction = Some(prediction);
        self.scores = Some(scores);
        self.status_message = None;
    }

    /// Start a new upload cycle for the given file.
    ///
    /// The preview updates immediately; decoding and inference happen on
    /// a worker thread, and any in-flight pipeline is superseded.
    pub fn open_photo(&mut self, path: &std::path::Path) {
        let bytes: Arc<[u8]> = match std::fs::read(path) {
            Ok(bytes) => bytes.into(),
            Err(e) => {
                log::error!("Failed to read {}: {e}", path.display());
                self.status_message =
                    Some(format!("Error: could not read {}", path.display()));
                return;
            }
        };

        self.generation += 1;
        if let Some(old) = self.photo.take() {
            self.egui_ctx.forget_image(&old.uri);
        }
        self.photo = Some(Photo {
            uri: format!("bytes://photo-{}", self.generation),
            bytes: bytes.clone(),
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        });

        match self.start_classification(bytes) {
            Ok(()) => {
                self.classifying = true;
                self.status_message = None;
            }
            Err(e) => {
                log::warn!("Classification not started: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Hand the photo bytes to a worker; fails if the model is not ready.
    fn start_classification(&mut self, bytes: Arc<[u8]>) -> Result<(), ClassifyError> {
        let classifier = self
            .classifier
            .clone()
            .ok_or(ClassifyError::ModelNotLoaded)?;
        worker::spawn_classification(
            classifier,
            bytes,
            self.generation,
            self.sender.clone(),
            self.egui_ctx.clone(),
        );
        Ok(())
    }

    /// Drop the overlay once its auto-hide deadline passes.
    pub fn tick(&mut self, now: f64) {
        if let Some(overlay) = &self.overlay {
            if overlay.expired(now) {
                self.overlay = None;
            }
        }
    }
}
