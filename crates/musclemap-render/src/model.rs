use musclemap_core::geom::{Size, Transform};
use musclemap_core::{BodySlug, Color, Muscle, MuscleSide, PathGeometry};
use serde::{Deserialize, Serialize};

/// Caller-supplied paint for one muscle. Replaced wholesale on every update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MuscleHighlight {
    pub muscle: Muscle,
    pub color: Color,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

fn default_opacity() -> f64 {
    1.0
}

impl MuscleHighlight {
    pub fn new(muscle: Muscle, color: Color, opacity: f64) -> Self {
        Self {
            muscle,
            color,
            opacity,
        }
    }
}

/// One shape to draw, with its paint already resolved.
///
/// `path` and `geometry` are in body view box coordinates; combine with
/// [`RenderedBody::transform`] to place them on the canvas.
#[derive(Debug, Clone, Copy)]
pub struct RenderedRegion {
    pub slug: BodySlug,
    /// `None` for outline slugs that map to no muscle.
    pub muscle: Option<Muscle>,
    pub side: MuscleSide,
    /// SVG path data.
    pub path: &'static str,
    pub geometry: &'static PathGeometry,
    pub fill: Color,
    pub opacity: f64,
    pub stroke: Color,
    pub stroke_width: f64,
    pub is_selected: bool,
    /// False for cosmetic parts; those are drawn but never hit.
    pub is_interactive: bool,
}

#[derive(Debug, Clone)]
pub struct RenderedBody {
    pub size: Size,
    /// Body view box to canvas.
    pub transform: Transform,
    pub regions: Vec<RenderedRegion>,
}
