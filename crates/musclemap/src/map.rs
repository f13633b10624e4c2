use crate::MapResult;
use crate::config::{MuscleMapConfig, StyleConfig};
use musclemap_core::geom::{Point, Size};
use musclemap_core::{BodyGender, BodySide, Color, Muscle, MuscleSide};
use musclemap_render::{
    AccessibilityItem, BodyRenderer, BodyViewStyle, ColorInterpolation, HeatmapColorScale,
    MuscleHighlight, MuscleIntensity, StylePreset, SvgRenderOptions, render_svg, visible_muscles,
};
use rustc_hash::{FxHashMap, FxHashSet};

/// Mutable state of one interactive body view.
///
/// Every query builds a fresh [`BodyRenderer`] from the current state, so changes are visible to
/// the next hit test without any invalidation step.
#[derive(Debug, Clone, PartialEq)]
pub struct MuscleMap {
    pub gender: BodyGender,
    pub side: BodySide,
    pub style: BodyViewStyle,
    pub show_sub_groups: bool,
    highlights: FxHashMap<Muscle, MuscleHighlight>,
    selected: FxHashSet<Muscle>,
}

impl Default for MuscleMap {
    fn default() -> Self {
        Self::new(BodyGender::Male, BodySide::Front)
    }
}

impl MuscleMap {
    pub fn new(gender: BodyGender, side: BodySide) -> Self {
        Self {
            gender,
            side,
            style: BodyViewStyle::default(),
            show_sub_groups: false,
            highlights: FxHashMap::default(),
            selected: FxHashSet::default(),
        }
    }

    pub fn from_config(config: &MuscleMapConfig) -> Self {
        let mut map = Self::new(config.gender, config.side);
        map.style = config.style.resolve();
        map.show_sub_groups = config.show_sub_groups;
        for h in &config.highlights {
            map.highlight(h.muscle, h.color, h.opacity);
        }
        if let Some(heatmap) = &config.heatmap {
            let scale = HeatmapColorScale::preset(heatmap.scale);
            map.set_heatmap_interpolated(&heatmap.entries, &scale, heatmap.interpolation);
        }
        map.selected = config.selected.iter().copied().collect();
        tracing::debug!(
            gender = %map.gender,
            side = %map.side,
            highlights = map.highlights.len(),
            selected = map.selected.len(),
            "muscle map from config"
        );
        map
    }

    pub fn from_json(text: &str) -> MapResult<Self> {
        Ok(Self::from_config(&MuscleMapConfig::from_json(text)?))
    }

    /// Snapshot of the current state, inverse of [`MuscleMap::from_config`].
    ///
    /// Highlights are listed in muscle declaration order so the output is stable.
    pub fn to_config(&self) -> MuscleMapConfig {
        let mut highlights: Vec<MuscleHighlight> = self.highlights.values().copied().collect();
        highlights.sort_by_key(|h| h.muscle);
        let mut selected: Vec<Muscle> = self.selected.iter().copied().collect();
        selected.sort();
        MuscleMapConfig {
            gender: self.gender,
            side: self.side,
            style: StyleConfig::Custom(self.style),
            show_sub_groups: self.show_sub_groups,
            highlights,
            selected,
            heatmap: None,
        }
    }

    pub fn highlights(&self) -> &FxHashMap<Muscle, MuscleHighlight> {
        &self.highlights
    }

    pub fn selected_muscles(&self) -> &FxHashSet<Muscle> {
        &self.selected
    }

    pub fn highlight(&mut self, muscle: Muscle, color: Color, opacity: f64) -> &mut Self {
        self.highlights
            .insert(muscle, MuscleHighlight::new(muscle, color, opacity));
        self
    }

    /// Like [`MuscleMap::highlight`], taking a raw muscle name and a hex color.
    pub fn highlight_named(
        &mut self,
        muscle: &str,
        color: &str,
        opacity: f64,
    ) -> MapResult<&mut Self> {
        let muscle: Muscle = muscle.parse()?;
        let color = Color::from_hex(color)?;
        Ok(self.highlight(muscle, color, opacity))
    }

    /// Replaces the style with a named preset such as `neon`.
    pub fn set_style_named(&mut self, preset: &str) -> MapResult<&mut Self> {
        let preset: StylePreset = preset.parse()?;
        self.style = BodyViewStyle::preset(preset);
        Ok(self)
    }

    pub fn highlight_all(
        &mut self,
        muscles: impl IntoIterator<Item = Muscle>,
        color: Color,
        opacity: f64,
    ) -> &mut Self {
        for muscle in muscles {
            self.highlight(muscle, color, opacity);
        }
        self
    }

    /// Replaces every highlight with scale colors for integer levels. Levels clamp to `0..=4`.
    pub fn set_intensities(
        &mut self,
        levels: impl IntoIterator<Item = (Muscle, i32)>,
        scale: &HeatmapColorScale,
    ) -> &mut Self {
        self.highlights = levels
            .into_iter()
            .map(|(muscle, level)| {
                let intensity = f64::from(level.clamp(0, 4)) / 4.0;
                (muscle, MuscleHighlight::new(muscle, scale.color(intensity), 1.0))
            })
            .collect();
        self
    }

    /// Replaces every highlight with heatmap colors, linear interpolation.
    pub fn set_heatmap(
        &mut self,
        entries: &[MuscleIntensity],
        scale: &HeatmapColorScale,
    ) -> &mut Self {
        self.set_heatmap_interpolated(entries, scale, ColorInterpolation::Linear)
    }

    pub fn set_heatmap_interpolated(
        &mut self,
        entries: &[MuscleIntensity],
        scale: &HeatmapColorScale,
        interpolation: ColorInterpolation,
    ) -> &mut Self {
        self.highlights = entries
            .iter()
            .map(|entry| {
                let color = entry.resolve_color(scale, interpolation);
                (entry.muscle, MuscleHighlight::new(entry.muscle, color, 1.0))
            })
            .collect();
        self
    }

    pub fn clear_highlights(&mut self) -> &mut Self {
        self.highlights.clear();
        self
    }

    pub fn select(&mut self, muscle: Muscle) -> &mut Self {
        self.selected.insert(muscle);
        self
    }

    pub fn deselect(&mut self, muscle: Muscle) -> &mut Self {
        self.selected.remove(&muscle);
        self
    }

    /// Returns whether `muscle` is selected afterwards.
    pub fn toggle_selection(&mut self, muscle: Muscle) -> bool {
        if self.selected.remove(&muscle) {
            false
        } else {
            self.selected.insert(muscle);
            true
        }
    }

    pub fn clear_selection(&mut self) -> &mut Self {
        self.selected.clear();
        self
    }

    pub fn flip(&mut self) -> &mut Self {
        self.side = self.side.flipped();
        self
    }

    pub fn renderer(&self) -> BodyRenderer {
        BodyRenderer::new(self.gender, self.side)
            .with_style(self.style)
            .with_highlights(self.highlights.clone())
            .with_selected(self.selected.iter().copied())
            .hide_sub_groups(!self.show_sub_groups)
    }

    pub fn hit_test(&self, point: Point, size: Size) -> Option<(Muscle, MuscleSide)> {
        self.renderer().hit_test(point, size)
    }

    /// Hit tests `point` and toggles the selection of the muscle found there.
    pub fn tap(&mut self, point: Point, size: Size) -> Option<(Muscle, MuscleSide)> {
        let hit = self.hit_test(point, size)?;
        self.toggle_selection(hit.0);
        Some(hit)
    }

    pub fn accessibility_items(&self, size: Size) -> Vec<AccessibilityItem> {
        visible_muscles(&self.renderer(), size)
    }

    pub fn render_svg(&self, size: Size, options: &SvgRenderOptions) -> String {
        render_svg(&self.renderer(), size, options)
    }
}
