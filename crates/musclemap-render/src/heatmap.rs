//! Intensity to color mapping for heatmap views, plus the legend that explains it.

use musclemap_core::{Color, Muscle};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Easing applied to a normalized intensity before it is mapped onto a scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorInterpolation {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Quantizes to this many evenly spaced levels, both ends included.
    Step(u32),
}

impl ColorInterpolation {
    pub fn apply(self, t: f64) -> f64 {
        let t = clamp_unit(t);
        match self {
            ColorInterpolation::Linear => t,
            ColorInterpolation::EaseIn => t * t,
            ColorInterpolation::EaseOut => t * (2.0 - t),
            ColorInterpolation::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            ColorInterpolation::Step(steps) if steps >= 2 => {
                let n = f64::from(steps - 1);
                (t * n).round() / n
            }
            ColorInterpolation::Step(_) => t,
        }
    }
}

fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
}

/// Evenly spaced color stops from low to high intensity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapColorScale {
    pub colors: Vec<Color>,
}

impl Default for HeatmapColorScale {
    fn default() -> Self {
        Self::workout()
    }
}

impl HeatmapColorScale {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn workout() -> Self {
        Self::new(vec![
            Color::from_rgb8(0xff, 0xe0, 0x82),
            Color::from_rgb8(0xff, 0xb7, 0x4d),
            Color::from_rgb8(0xff, 0x70, 0x43),
            Color::from_rgb8(0xe5, 0x39, 0x35),
            Color::from_rgb8(0xb7, 0x1c, 0x1c),
        ])
    }

    pub fn thermal() -> Self {
        Self::new(vec![
            Color::from_rgb8(0x00, 0x00, 0xff),
            Color::from_rgb8(0x00, 0xff, 0xff),
            Color::from_rgb8(0x00, 0xff, 0x00),
            Color::from_rgb8(0xff, 0xff, 0x00),
            Color::from_rgb8(0xff, 0x00, 0x00),
        ])
    }

    pub fn medical() -> Self {
        Self::new(vec![
            Color::from_rgb8(0x4c, 0xaf, 0x50),
            Color::from_rgb8(0xcd, 0xdc, 0x39),
            Color::from_rgb8(0xff, 0xc1, 0x07),
            Color::from_rgb8(0xff, 0x98, 0x00),
            Color::from_rgb8(0xf4, 0x43, 0x36),
        ])
    }

    pub fn monochrome(base: Color) -> Self {
        Self::new(vec![base.with_alpha(0.2), base])
    }

    pub fn preset(preset: HeatmapPreset) -> Self {
        match preset {
            HeatmapPreset::Workout => Self::workout(),
            HeatmapPreset::Thermal => Self::thermal(),
            HeatmapPreset::Medical => Self::medical(),
            HeatmapPreset::Monochrome => Self::monochrome(Color::RED),
        }
    }

    pub fn color(&self, intensity: f64) -> Color {
        self.color_for(intensity, ColorInterpolation::Linear)
    }

    /// Color at `intensity` (clamped to `0..=1`) after easing.
    ///
    /// An empty scale yields [`Color::CLEAR`].
    pub fn color_for(&self, intensity: f64, interpolation: ColorInterpolation) -> Color {
        let t = interpolation.apply(intensity);
        match self.colors.as_slice() {
            [] => Color::CLEAR,
            [only] => *only,
            colors => {
                let last = colors.len() - 1;
                let scaled = t * last as f64;
                let i = (scaled.floor() as usize).min(last - 1);
                colors[i].lerp(colors[i + 1], scaled - i as f64)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeatmapPreset {
    #[default]
    Workout,
    Thermal,
    Medical,
    Monochrome,
}

impl FromStr for HeatmapPreset {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "workout" => Ok(Self::Workout),
            "thermal" => Ok(Self::Thermal),
            "medical" => Ok(Self::Medical),
            "monochrome" => Ok(Self::Monochrome),
            _ => Err(crate::Error::UnknownHeatmapPreset {
                name: s.to_string(),
            }),
        }
    }
}

/// A normalized intensity for one muscle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MuscleIntensity {
    pub muscle: Muscle,
    pub intensity: f64,
    /// Used instead of the scale when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl MuscleIntensity {
    pub fn new(muscle: Muscle, intensity: f64) -> Self {
        Self {
            muscle,
            intensity,
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn resolve_color(
        &self,
        scale: &HeatmapColorScale,
        interpolation: ColorInterpolation,
    ) -> Color {
        self.color
            .unwrap_or_else(|| scale.color_for(self.intensity, interpolation))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LegendOrientation {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

/// Gradient bar with low/high labels describing a [`HeatmapColorScale`].
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapLegend {
    pub scale: HeatmapColorScale,
    pub interpolation: ColorInterpolation,
    pub orientation: LegendOrientation,
    pub bar_thickness: f64,
    pub label_min: Option<String>,
    pub label_max: Option<String>,
}

impl HeatmapLegend {
    pub const DEFAULT_BAR_THICKNESS: f64 = 16.0;

    pub fn new(scale: HeatmapColorScale) -> Self {
        Self {
            scale,
            interpolation: ColorInterpolation::Linear,
            orientation: LegendOrientation::Horizontal,
            bar_thickness: Self::DEFAULT_BAR_THICKNESS,
            label_min: None,
            label_max: None,
        }
    }

    pub fn with_interpolation(mut self, interpolation: ColorInterpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn with_orientation(mut self, orientation: LegendOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_bar_thickness(mut self, thickness: f64) -> Self {
        self.bar_thickness = thickness;
        self
    }

    pub fn with_labels(mut self, low: impl Into<String>, high: impl Into<String>) -> Self {
        self.label_min = Some(low.into());
        self.label_max = Some(high.into());
        self
    }

    pub fn min_label(&self) -> &str {
        self.label_min.as_deref().unwrap_or("Low")
    }

    pub fn max_label(&self) -> &str {
        self.label_max.as_deref().unwrap_or("High")
    }

    /// `samples` stops (at least two) spread evenly over `0..=1`.
    pub fn gradient_stops(&self, samples: usize) -> Vec<GradientStop> {
        let n = samples.max(2);
        let last = (n - 1) as f64;
        (0..n)
            .map(|i| {
                let offset = i as f64 / last;
                GradientStop {
                    offset,
                    color: self.scale.color_for(offset, self.interpolation),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_endpoints_match_first_and_last_colors() {
        let scale = HeatmapColorScale::thermal();
        assert_eq!(scale.color(0.0), scale.colors[0]);
        assert_eq!(scale.color(1.0), scale.colors[4]);
        assert_eq!(scale.color(-3.0), scale.colors[0]);
        assert_eq!(scale.color(7.0), scale.colors[4]);
        assert_eq!(scale.color(f64::NAN), scale.colors[0]);
    }

    #[test]
    fn scale_interpolates_between_neighbors() {
        let scale = HeatmapColorScale::new(vec![Color::BLACK, Color::WHITE]);
        let mid = scale.color(0.5);
        assert!((mid.r - 0.5).abs() < 1e-9);
        assert!((mid.g - 0.5).abs() < 1e-9);

        let thermal = HeatmapColorScale::thermal();
        assert_eq!(thermal.color(0.25), thermal.colors[1]);
    }

    #[test]
    fn degenerate_scales() {
        assert_eq!(HeatmapColorScale::new(vec![]).color(0.5), Color::CLEAR);
        assert_eq!(HeatmapColorScale::new(vec![Color::BLUE]).color(0.9), Color::BLUE);
    }

    #[test]
    fn easing_curves_keep_endpoints() {
        for interpolation in [
            ColorInterpolation::Linear,
            ColorInterpolation::EaseIn,
            ColorInterpolation::EaseOut,
            ColorInterpolation::EaseInOut,
            ColorInterpolation::Step(4),
        ] {
            assert_eq!(interpolation.apply(0.0), 0.0, "{interpolation:?}");
            assert_eq!(interpolation.apply(1.0), 1.0, "{interpolation:?}");
        }
        assert!(ColorInterpolation::EaseIn.apply(0.5) < 0.5);
        assert!(ColorInterpolation::EaseOut.apply(0.5) > 0.5);
        assert_eq!(ColorInterpolation::EaseInOut.apply(0.5), 0.5);
    }

    #[test]
    fn step_quantizes_to_levels() {
        let step = ColorInterpolation::Step(3);
        assert_eq!(step.apply(0.2), 0.0);
        assert_eq!(step.apply(0.4), 0.5);
        assert_eq!(step.apply(0.8), 1.0);
        assert_eq!(ColorInterpolation::Step(1).apply(0.3), 0.3);
    }

    #[test]
    fn explicit_color_overrides_the_scale() {
        let scale = HeatmapColorScale::workout();
        let plain = MuscleIntensity::new(Muscle::Chest, 1.0);
        assert_eq!(
            plain.resolve_color(&scale, ColorInterpolation::Linear),
            scale.colors[4]
        );
        let custom = plain.with_color(Color::GREEN);
        assert_eq!(
            custom.resolve_color(&scale, ColorInterpolation::Linear),
            Color::GREEN
        );
    }

    #[test]
    fn legend_defaults() {
        let legend = HeatmapLegend::new(HeatmapColorScale::medical());
        assert_eq!(legend.min_label(), "Low");
        assert_eq!(legend.max_label(), "High");
        assert_eq!(legend.bar_thickness, 16.0);
        assert_eq!(legend.orientation, LegendOrientation::Horizontal);

        let labeled = legend.with_labels("Rest", "Max");
        assert_eq!(labeled.min_label(), "Rest");
        assert_eq!(labeled.max_label(), "Max");
    }

    #[test]
    fn legend_stops_span_the_scale() {
        let legend = HeatmapLegend::new(HeatmapColorScale::thermal());
        let stops = legend.gradient_stops(5);
        assert_eq!(stops.len(), 5);
        assert_eq!(stops[0].offset, 0.0);
        assert_eq!(stops[4].offset, 1.0);
        assert_eq!(stops[2].color, legend.scale.colors[2]);
        assert_eq!(legend.gradient_stops(0).len(), 2);
    }

    #[test]
    fn presets_parse_by_name() {
        assert_eq!("Thermal".parse::<HeatmapPreset>(), Ok(HeatmapPreset::Thermal));
        assert_eq!(
            "rainbow".parse::<HeatmapPreset>(),
            Err(crate::Error::UnknownHeatmapPreset {
                name: "rainbow".to_string()
            })
        );
    }

    #[test]
    fn intensity_json_uses_muscle_raw_values() {
        let parsed: MuscleIntensity =
            serde_json::from_str(r#"{"muscle":"upper-chest","intensity":0.75}"#).unwrap();
        assert_eq!(parsed, MuscleIntensity::new(Muscle::UpperChest, 0.75));
    }
}
