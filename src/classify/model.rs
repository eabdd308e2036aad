use tract_onnx::prelude::*;

use super::ClassifyError;

// ---------------------------------------------------------------------------
// Label set
// ---------------------------------------------------------------------------

/// Ordered label set; index `i` names the `i`-th entry of the model output.
pub const LABELS: [&str; 6] = ["cat", "dog", "eagle", "fish", "crocodile", "turtle"];

/// Side of the square model input, in pixels.
pub const INPUT_SIZE: u32 = 224;

// ---------------------------------------------------------------------------
// ScoreVector – one model output
// ---------------------------------------------------------------------------

/// One score per label, in label-set order. Scores sum to ~1 but are not
/// renormalized here; the model owns its own calibration.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreVector(Vec<f32>);

impl ScoreVector {
    /// Wrap a raw model output, checking it lines up with the label set.
    pub fn new(scores: Vec<f32>) -> Result<Self, ClassifyError> {
        if scores.len() != LABELS.len() {
            return Err(ClassifyError::ScoreLengthMismatch {
                expected: LABELS.len(),
                actual: scores.len(),
            });
        }
        Ok(ScoreVector(scores))
    }

    /// Per-label scores in label-set order.
    pub fn scores(&self) -> &[f32] {
        &self.0
    }

    /// Pick the winning label: arg-max, ties broken by the lowest index.
    pub fn select(&self) -> Prediction {
        let mut index = 0;
        for (i, &score) in self.0.iter().enumerate() {
            if score > self.0[index] {
                index = i;
            }
        }
        Prediction {
            label: LABELS[index],
            confidence: (self.0[index] * 100.0).round() / 100.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Prediction – the selected label
// ---------------------------------------------------------------------------

/// Winning label with its display confidence (rounded to 2 decimals).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: &'static str,
    pub confidence: f32,
}

impl Prediction {
    /// Value for the 0–100 confidence indicator.
    pub fn indicator_value(&self) -> f32 {
        self.confidence * 100.0
    }
}

// ---------------------------------------------------------------------------
// Classifier – the loaded model handle
// ---------------------------------------------------------------------------

/// Optimized runnable plan as produced by `tract_onnx`.
pub(crate) type RunnablePlan = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

/// A loaded, optimized, ready-to-run classifier.
///
/// Read-only after construction; shared across threads behind an `Arc`.
pub struct Classifier {
    plan: RunnablePlan,
}

impl Classifier {
    pub(crate) fn from_plan(plan: RunnablePlan) -> Self {
        Classifier { plan }
    }

    /// Run the forward pass on a preprocessed `(1, 224, 224, 3)` tensor.
    pub fn predict(&self, input: Tensor) -> Result<ScoreVector, ClassifyError> {
        let outputs = self
            .plan
            .run(tvec!(input.into()))
            .map_err(|e| ClassifyError::Inference(e.to_string()))?;

        let scores = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| ClassifyError::Inference(e.to_string()))?
            .iter()
            .copied()
            .collect();

        ScoreVector::new(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_the_highest_score() {
        let scores = ScoreVector::new(vec![0.05, 0.81, 0.02, 0.01, 0.10, 0.01]).unwrap();
        let prediction = scores.select();
        assert_eq!(prediction.label, "dog");
        assert_eq!(prediction.confidence, 0.81);
        assert_eq!(prediction.indicator_value(), 81.0);
    }

    #[test]
    fn ties_break_toward_the_lowest_index() {
        let scores = ScoreVector::new(vec![0.4, 0.1, 0.4, 0.05, 0.03, 0.02]).unwrap();
        assert_eq!(scores.select().label, "cat");
    }

    #[test]
    fn repeated_selection_is_deterministic() {
        let scores = ScoreVector::new(vec![0.05, 0.81, 0.02, 0.01, 0.10, 0.01]).unwrap();
        assert_eq!(scores.select(), scores.select());
    }

    #[test]
    fn confidence_is_rounded_to_two_decimals() {
        let scores = ScoreVector::new(vec![0.0, 0.0, 0.87654, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(scores.select().confidence, 0.88);
    }

    #[test]
    fn wrong_length_vector_is_rejected() {
        let err = ScoreVector::new(vec![0.5, 0.5]).unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::ScoreLengthMismatch { expected: 6, actual: 2 }
        ));
    }
}
