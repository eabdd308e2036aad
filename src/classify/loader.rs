use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use tract_onnx::prelude::*;

use super::model::{Classifier, INPUT_SIZE, LABELS};
use crate::config::ModelSource;

// ---------------------------------------------------------------------------
// Model artifact loading
// ---------------------------------------------------------------------------

/// Fetch and build the classifier from the configured source.
///
/// Runs once at startup on a worker thread. The artifact is held in
/// memory only; nothing is cached on disk.
pub fn load(source: &ModelSource) -> Result<Classifier> {
    let bytes = match source {
        ModelSource::Url(url) => download(url)?,
        ModelSource::Path(path) => read_local(path)?,
    };
    build(&bytes)
}

fn download(url: &str) -> Result<Vec<u8>> {
    log::info!("Downloading model from {url}");
    let response = reqwest::blocking::get(url)
        .with_context(|| format!("fetching model from {url}"))?
        .error_for_status()
        .context("model server returned an error status")?;
    let bytes = response.bytes().context("reading model body")?;
    log::info!("Model artifact: {} bytes", bytes.len());
    Ok(bytes.to_vec())
}

fn read_local(path: &Path) -> Result<Vec<u8>> {
    log::info!("Loading model from {}", path.display());
    std::fs::read(path).with_context(|| format!("reading model file {}", path.display()))
}

/// Parse the ONNX graph, pin it to the fixed input contract, and
/// optimize it into a runnable plan.
fn build(bytes: &[u8]) -> Result<Classifier> {
    let side = INPUT_SIZE as usize;
    let plan = tract_onnx::onnx()
        .model_for_read(&mut Cursor::new(bytes))
        .context("parsing ONNX model")?
        .with_input_fact(0, f32::fact([1, side, side, 3]).into())
        .context("pinning model input shape")?
        .into_optimized()
        .context("optimizing model")?
        .into_runnable()
        .context("building runnable plan")?;

    log::info!("Classifier ready ({} labels)", LABELS.len());
    Ok(Classifier::from_plan(plan))
}
