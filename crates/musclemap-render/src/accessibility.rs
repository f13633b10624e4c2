use crate::renderer::BodyRenderer;
use musclemap_core::geom::{Rect, Size};
use musclemap_core::{Muscle, MuscleSide};
use rustc_hash::FxHashSet;

/// One focusable region for assistive technology.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccessibilityItem {
    pub muscle: Muscle,
    /// Canvas bounds of every shape drawn for the muscle.
    pub rect: Rect,
    pub is_selected: bool,
}

impl AccessibilityItem {
    pub fn label(&self) -> &'static str {
        self.muscle.display_name()
    }

    /// Activating an item reports the muscle with [`MuscleSide::Both`].
    pub fn activation(&self) -> (Muscle, MuscleSide) {
        (self.muscle, MuscleSide::Both)
    }
}

/// Interactive muscles of the current view, once each, ordered top to bottom.
///
/// Uses the renderer's visibility policy, so hidden sub-groups never appear and always-visible
/// ones do. Muscles with an empty bounding rect are skipped.
pub fn visible_muscles(renderer: &BodyRenderer, size: Size) -> Vec<AccessibilityItem> {
    let policy = renderer.policy();
    let mut seen = FxHashSet::default();
    let mut items: Vec<AccessibilityItem> = renderer
        .geometry()
        .parts
        .iter()
        .filter_map(|part| policy.resolve_slug(part.part.slug).muscle())
        .filter(|muscle| seen.insert(*muscle))
        .filter_map(|muscle| {
            let rect = renderer.bounding_rect(muscle, size)?;
            (!rect.is_empty()).then(|| AccessibilityItem {
                muscle,
                rect,
                is_selected: renderer.is_selected(muscle),
            })
        })
        .collect();
    // Stable, so equal tops keep draw order.
    items.sort_by(|a, b| a.rect.min_y().total_cmp(&b.rect.min_y()));
    items
}
