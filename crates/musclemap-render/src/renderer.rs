use crate::model::{MuscleHighlight, RenderedBody, RenderedRegion};
use crate::style::BodyViewStyle;
use crate::visibility::{Visibility, VisibilityPolicy};
use musclemap_core::geom::{Point, Rect, Size, Viewport};
use musclemap_core::{
    BodyGender, BodyGeometry, BodySide, BodySlug, Color, Muscle, MuscleSide, PathGeometry, geometry,
    view_box,
};
use rustc_hash::{FxHashMap, FxHashSet};

/// A configured view of one body catalog.
///
/// Every query runs against the same [`VisibilityPolicy`], so drawing, hit testing, bounding rects
/// and accessibility regions never disagree about which identity owns a point.
#[derive(Debug, Clone)]
pub struct BodyRenderer {
    gender: BodyGender,
    side: BodySide,
    highlights: FxHashMap<Muscle, MuscleHighlight>,
    selected: FxHashSet<Muscle>,
    style: BodyViewStyle,
    policy: VisibilityPolicy,
    geometry: &'static BodyGeometry,
}

impl BodyRenderer {
    pub fn new(gender: BodyGender, side: BodySide) -> Self {
        tracing::trace!(%gender, %side, "new body renderer");
        Self {
            gender,
            side,
            highlights: FxHashMap::default(),
            selected: FxHashSet::default(),
            style: BodyViewStyle::default(),
            policy: VisibilityPolicy::default(),
            geometry: geometry(gender, side),
        }
    }

    pub fn with_highlights(mut self, highlights: FxHashMap<Muscle, MuscleHighlight>) -> Self {
        self.highlights = highlights;
        self
    }

    pub fn highlight(mut self, muscle: Muscle, color: Color, opacity: f64) -> Self {
        self.highlights
            .insert(muscle, MuscleHighlight::new(muscle, color, opacity));
        self
    }

    pub fn with_style(mut self, style: BodyViewStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_selected(mut self, selected: impl IntoIterator<Item = Muscle>) -> Self {
        self.selected = selected.into_iter().collect();
        self
    }

    pub fn hide_sub_groups(mut self, hide: bool) -> Self {
        self.policy = VisibilityPolicy::new(hide);
        self
    }

    pub fn gender(&self) -> BodyGender {
        self.gender
    }

    pub fn side(&self) -> BodySide {
        self.side
    }

    pub fn style(&self) -> &BodyViewStyle {
        &self.style
    }

    pub fn policy(&self) -> VisibilityPolicy {
        self.policy
    }

    pub fn highlights(&self) -> &FxHashMap<Muscle, MuscleHighlight> {
        &self.highlights
    }

    pub fn selected_muscles(&self) -> &FxHashSet<Muscle> {
        &self.selected
    }

    pub fn is_selected(&self, muscle: Muscle) -> bool {
        self.selected.contains(&muscle)
    }

    pub fn geometry(&self) -> &'static BodyGeometry {
        self.geometry
    }

    /// Aspect-fit placement of the body on a canvas of `size`.
    pub fn viewport(&self, size: Size) -> Option<Viewport> {
        Viewport::fit(view_box(), size)
    }

    /// Paint-resolved regions in draw order, in body coordinates.
    ///
    /// Hidden sub-groups are omitted; their area shows the parent drawn beneath.
    pub fn regions(&self) -> Vec<RenderedRegion> {
        let geometry: &'static BodyGeometry = self.geometry;
        let mut out = Vec::new();
        for part in &geometry.parts {
            let slug = part.part.slug;
            let visibility = self.policy.resolve_slug(slug);
            if !visibility.is_drawn() {
                continue;
            }
            for shape in &part.shapes {
                out.push(self.paint(slug, visibility, shape.side, shape.d, &shape.geometry));
            }
        }
        out
    }

    /// Regions plus the transform placing them on a canvas of `size`.
    ///
    /// Returns `None` when `size` cannot hold the body.
    pub fn render(&self, size: Size) -> Option<RenderedBody> {
        let viewport = self.viewport(size)?;
        let regions = self.regions();
        tracing::debug!(
            gender = %self.gender,
            side = %self.side,
            regions = regions.len(),
            hide_sub_groups = self.policy.hide_sub_groups,
            "rendered body"
        );
        Some(RenderedBody {
            size,
            transform: viewport.transform(),
            regions,
        })
    }

    /// Canvas bounds of every shape drawn for `muscle`.
    ///
    /// `None` when the muscle is not interactive under the current policy, is absent from this
    /// view, or `size` is degenerate.
    pub fn bounding_rect(&self, muscle: Muscle, size: Size) -> Option<Rect> {
        if !self.policy.is_interactive(muscle) {
            return None;
        }
        let viewport = self.viewport(size)?;
        let bounds = self
            .geometry
            .parts
            .iter()
            .filter(|part| part.part.muscle() == Some(muscle))
            .filter_map(|part| part.bounds())
            .reduce(|a, b| a.union(&b))?;
        Some(viewport.rect_to_canvas(&bounds))
    }

    /// The muscle and side under a canvas point.
    ///
    /// Parts are tested topmost first, so a visible sub-group wins over the parent it sits on.
    /// Hidden and decorative parts are transparent.
    pub fn hit_test(&self, point: Point, size: Size) -> Option<(Muscle, MuscleSide)> {
        let viewport = self.viewport(size)?;
        let p = viewport.to_body(point);
        let hit = self.geometry.parts.iter().rev().find_map(|part| {
            let Visibility::Interactive(muscle) = self.policy.resolve_slug(part.part.slug) else {
                return None;
            };
            part.side_containing(p).map(|side| (muscle, side))
        });
        if let Some((muscle, side)) = hit {
            tracing::trace!(%muscle, %side, x = point.x, y = point.y, "hit");
        }
        hit
    }

    fn paint(
        &self,
        slug: BodySlug,
        visibility: Visibility,
        side: MuscleSide,
        path: &'static str,
        geometry: &'static PathGeometry,
    ) -> RenderedRegion {
        let style = &self.style;
        let mut region = RenderedRegion {
            slug,
            muscle: slug.muscle(),
            side,
            path,
            geometry,
            fill: style.default_fill,
            opacity: style.default_opacity,
            stroke: style.stroke_color,
            stroke_width: style.stroke_width,
            is_selected: false,
            is_interactive: false,
        };

        let Visibility::Interactive(muscle) = visibility else {
            region.fill = match slug {
                BodySlug::Hair => style.hair_color,
                _ => style.head_color,
            };
            return region;
        };

        region.is_interactive = true;
        region.is_selected = self.selected.contains(&muscle);
        if let Some(h) = self.highlights.get(&muscle) {
            region.fill = h.color;
            region.opacity = h.opacity.clamp(0.0, 1.0);
        } else if region.is_selected {
            region.fill = style.selection_color;
        }
        if region.is_selected {
            region.stroke = style.selection_stroke_color;
            region.stroke_width = style.selection_stroke_width;
        }
        region
    }

}
