use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use eframe::egui;

use crate::classify::model::{Classifier, ScoreVector};
use crate::classify::{loader, preprocess, ClassifyError};
use crate::config::ModelSource;

// ---------------------------------------------------------------------------
// Background jobs and the events they deliver
// ---------------------------------------------------------------------------

/// Results delivered from worker threads to the UI thread.
pub enum Event {
    /// The startup model load finished.
    ModelLoaded(anyhow::Result<Classifier>),
    /// A classification pipeline finished.
    Classified {
        /// Pipeline generation that produced this result; the receiver
        /// drops anything from a superseded generation.
        generation: u64,
        result: anyhow::Result<ScoreVector>,
    },
}

/// Fetch and build the classifier off the UI thread.
pub fn spawn_model_loader(source: ModelSource, tx: Sender<Event>, ctx: egui::Context) {
    thread::spawn(move || {
        let result = loader::load(&source);
        let _ = tx.send(Event::ModelLoaded(result));
        ctx.request_repaint();
    });
}

/// Decode, preprocess, and classify one photo off the UI thread.
pub fn spawn_classification(
    classifier: Arc<Classifier>,
    bytes: Arc<[u8]>,
    generation: u64,
    tx: Sender<Event>,
    ctx: egui::Context,
) {
    thread::spawn(move || {
        let result = classify_bytes(&classifier, &bytes);
        let _ = tx.send(Event::Classified { generation, result });
        ctx.request_repaint();
    });
}

fn classify_bytes(classifier: &Classifier, bytes: &[u8]) -> anyhow::Result<ScoreVector> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| ClassifyError::UnsupportedImage(e.to_string()))?;
    let tensor = preprocess::to_input_tensor(&img);
    Ok(classifier.predict(tensor)?)
}
