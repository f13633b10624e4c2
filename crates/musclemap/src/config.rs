use crate::MapResult;
use musclemap_core::{BodyGender, BodySide, Muscle};
use musclemap_render::{
    BodyViewStyle, ColorInterpolation, HeatmapPreset, MuscleHighlight, MuscleIntensity,
    StylePreset,
};
use serde::{Deserialize, Serialize};

/// Serializable [`crate::MuscleMap`] state. Every field is optional in JSON.
///
/// ```json
/// {
///   "gender": "female",
///   "side": "back",
///   "style": "neon",
///   "showSubGroups": true,
///   "highlights": [{ "muscle": "gluteal", "color": "#ff0000", "opacity": 0.8 }],
///   "selected": ["upper-back"]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MuscleMapConfig {
    pub gender: BodyGender,
    pub side: BodySide,
    pub style: StyleConfig,
    pub show_sub_groups: bool,
    pub highlights: Vec<MuscleHighlight>,
    pub selected: Vec<Muscle>,
    /// Applied after `highlights`, replacing them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heatmap: Option<HeatmapConfig>,
}

impl MuscleMapConfig {
    pub fn from_json(text: &str) -> MapResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> MapResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A preset name or a full style object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleConfig {
    Preset(StylePreset),
    Custom(BodyViewStyle),
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig::Preset(StylePreset::Default)
    }
}

impl StyleConfig {
    pub fn resolve(self) -> BodyViewStyle {
        match self {
            StyleConfig::Preset(preset) => BodyViewStyle::preset(preset),
            StyleConfig::Custom(style) => style,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeatmapConfig {
    pub scale: HeatmapPreset,
    pub interpolation: ColorInterpolation,
    pub entries: Vec<MuscleIntensity>,
}
