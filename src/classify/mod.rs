//! Classification pipeline: model loading, preprocessing, inference.
//!
//! Architecture:
//! ```text
//!  model.onnx (remote URL)        photo bytes (user file)
//!         │                             │
//!         ▼                             ▼
//!    ┌──────────┐                ┌────────────┐
//!    │  loader   │ fetch + build │ preprocess  │ decode → (1,224,224,3)
//!    └──────────┘                └────────────┘
//!         │                             │
//!         └──────────────┬──────────────┘
//!                        ▼
//!          ┌───────────────────────────┐
//!          │ Classifier::predict        │ forward pass → ScoreVector
//!          └───────────────────────────┘
//!                        │
//!                        ▼
//!          ScoreVector::select → Prediction (arg-max)
//! ```

pub mod loader;
pub mod model;
pub mod preprocess;

use thiserror::Error;

/// Errors produced by the classification pipeline.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("model is not loaded yet")]
    ModelNotLoaded,
    #[error("model returned {actual} scores for {expected} labels")]
    ScoreLengthMismatch { expected: usize, actual: usize },
    #[error("could not decode image: {0}")]
    UnsupportedImage(String),
    #[error("inference failed: {0}")]
    Inference(String),
}
