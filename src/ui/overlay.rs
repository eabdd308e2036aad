use eframe::egui::{self, Align2, Color32, FontId, Id, LayerId, Order};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Celebration overlay: hidden → visible+animating → hidden
// ---------------------------------------------------------------------------

/// Auto-hide deadline, seconds after the overlay appears. Applies to
/// every label regardless of its flash duration.
pub const AUTO_HIDE_SECS: f64 = 4.0;

/// Presentation descriptor for one label's overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlaySpec {
    pub label: &'static str,
    pub emoji: &'static str,
    /// One flash cycle, in seconds. The turtle's cycle outlives the
    /// auto-hide deadline and is truncated mid-flash, matching the
    /// historical behaviour.
    pub flash_secs: f64,
}

/// One descriptor per label; adding a label is a data change.
pub const OVERLAY_SPECS: [OverlaySpec; 6] = [
    OverlaySpec { label: "cat", emoji: "🐱", flash_secs: 2.5 },
    OverlaySpec { label: "dog", emoji: "🐶", flash_secs: 2.5 },
    OverlaySpec { label: "eagle", emoji: "🦅", flash_secs: 2.5 },
    OverlaySpec { label: "fish", emoji: "🐟", flash_secs: 2.5 },
    OverlaySpec { label: "crocodile", emoji: "🐊", flash_secs: 2.0 },
    OverlaySpec { label: "turtle", emoji: "🐢", flash_secs: 5.0 },
];

/// Find the descriptor for a label; unknown labels get no overlay.
pub fn spec_for(label: &str) -> Option<&'static OverlaySpec> {
    OVERLAY_SPECS.iter().find(|s| s.label == label)
}

/// A visible overlay and the frame time it appeared at.
#[derive(Debug, Clone, Copy)]
pub struct Overlay {
    pub spec: &'static OverlaySpec,
    pub shown_at: f64,
}

impl Overlay {
    /// Start the overlay for a label, if one is defined for it.
    pub fn begin(label: &str, now: f64) -> Option<Self> {
        spec_for(label).map(|spec| Overlay { spec, shown_at: now })
    }

    /// Past the auto-hide deadline?
    pub fn expired(&self, now: f64) -> bool {
        now - self.shown_at >= AUTO_HIDE_SECS
    }

    /// Flash opacity at `now`: full at the start of each cycle, fading
    /// out and back over `flash_secs`.
    pub fn alpha(&self, now: f64) -> f32 {
        let elapsed = (now - self.shown_at).max(0.0);
        let phase = (elapsed / self.spec.flash_secs).fract();
        (0.5 + 0.5 * (std::f64::consts::TAU * phase).cos()) as f32
    }
}

// ---------------------------------------------------------------------------
// Painting
// ---------------------------------------------------------------------------

/// Paint the active overlay across the whole window.
pub fn show(ctx: &egui::Context, state: &AppState) {
    let Some(overlay) = &state.overlay else {
        return;
    };
    let now = ctx.input(|i| i.time);

    let alpha = overlay.alpha(now);
    let color = state.label_colors.color_for(overlay.spec.label);
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("overlay")));
    let rect = ctx.screen_rect();

    painter.rect_filled(rect, 0.0, color.gamma_multiply(0.25 * alpha));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        format!("{} {}", overlay.spec.emoji, overlay.spec.label),
        FontId::proportional(72.0),
        Color32::WHITE.gamma_multiply(alpha),
    );

    // Keep animating until the state tick retires the overlay.
    ctx.request_repaint();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_label_flash_durations() {
        assert_eq!(spec_for("dog").unwrap().flash_secs, 2.5);
        assert_eq!(spec_for("cat").unwrap().flash_secs, 2.5);
        assert_eq!(spec_for("eagle").unwrap().flash_secs, 2.5);
        assert_eq!(spec_for("fish").unwrap().flash_secs, 2.5);
        assert_eq!(spec_for("crocodile").unwrap().flash_secs, 2.0);
        assert_eq!(spec_for("turtle").unwrap().flash_secs, 5.0);
    }

    #[test]
    fn every_label_has_an_overlay() {
        for label in crate::classify::model::LABELS {
            assert!(spec_for(label).is_some(), "missing overlay for {label}");
        }
    }

    #[test]
    fn unknown_label_gets_no_overlay() {
        assert!(spec_for("zebra").is_none());
        assert!(Overlay::begin("zebra", 0.0).is_none());
    }

    #[test]
    fn hides_at_the_deadline_regardless_of_flash_duration() {
        let overlay = Overlay::begin("turtle", 10.0).unwrap();
        assert!(!overlay.expired(13.999));
        assert!(overlay.expired(14.0));
        assert!(overlay.expired(20.0));
    }

    #[test]
    fn flash_starts_fully_opaque_and_stays_in_range() {
        let overlay = Overlay::begin("dog", 0.0).unwrap();
        assert!((overlay.alpha(0.0) - 1.0).abs() < 1e-6);
        for i in 0..100 {
            let alpha = overlay.alpha(i as f64 * 0.04);
            assert!((0.0..=1.0).contains(&alpha));
        }
    }
}
