use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::classify::model::LABELS;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Label colours: one stable colour per label
// ---------------------------------------------------------------------------

/// Maps each classifier label to a distinct colour, shared by the score
/// chart and the celebration overlay.
#[derive(Debug, Clone)]
pub struct LabelColors {
    mapping: BTreeMap<&'static str, Color32>,
    default_color: Color32,
}

impl Default for LabelColors {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelColors {
    /// Assign hues to labels in label-set order.
    pub fn new() -> Self {
        let palette = generate_palette(LABELS.len());
        let mapping: BTreeMap<&'static str, Color32> =
            LABELS.iter().copied().zip(palette).collect();
        LabelColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_label_gets_a_distinct_colour() {
        let colors = LabelColors::new();
        let mut seen = std::collections::BTreeSet::new();
        for label in LABELS {
            assert!(seen.insert(colors.color_for(label).to_array()));
        }
    }

    #[test]
    fn unknown_labels_fall_back_to_grey() {
        let colors = LabelColors::new();
        assert_eq!(colors.color_for("zebra"), Color32::GRAY);
    }
}
