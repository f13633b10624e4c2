use musclemap_core::Color;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Paint defaults for the body.
///
/// Stroke widths are in canvas pixels and do not scale with the body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BodyViewStyle {
    pub default_fill: Color,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub selection_color: Color,
    pub selection_stroke_color: Color,
    pub selection_stroke_width: f64,
    pub head_color: Color,
    pub hair_color: Color,
    pub default_opacity: f64,
}

impl Default for BodyViewStyle {
    fn default() -> Self {
        Self {
            default_fill: Color::from_rgb8(0x3a, 0x3a, 0x3c),
            stroke_color: Color::from_rgb8(0x1c, 0x1c, 0x1e),
            stroke_width: 0.5,
            selection_color: Color::from_rgb8(0x0a, 0x84, 0xff),
            selection_stroke_color: Color::WHITE,
            selection_stroke_width: 2.0,
            head_color: Color::from_rgb8(0x5a, 0x5a, 0x5e),
            hair_color: Color::from_rgb8(0x2c, 0x2c, 0x2e),
            default_opacity: 1.0,
        }
    }
}

impl BodyViewStyle {
    pub fn minimal() -> Self {
        Self {
            default_fill: Color::from_rgb8(0xe5, 0xe5, 0xea),
            stroke_color: Color::from_rgb8(0xc7, 0xc7, 0xcc),
            selection_color: Color::from_rgb8(0x00, 0x7a, 0xff),
            selection_stroke_color: Color::from_rgb8(0x00, 0x51, 0xa8),
            selection_stroke_width: 1.5,
            head_color: Color::from_rgb8(0xd1, 0xd1, 0xd6),
            hair_color: Color::from_rgb8(0xae, 0xae, 0xb2),
            ..Self::default()
        }
    }

    pub fn neon() -> Self {
        Self {
            default_fill: Color::from_rgb8(0x10, 0x10, 0x20),
            stroke_color: Color::from_rgb8(0x00, 0xff, 0xff),
            stroke_width: 1.0,
            selection_color: Color::from_rgb8(0xff, 0x00, 0xff),
            selection_stroke_color: Color::from_rgb8(0xff, 0xff, 0x00),
            head_color: Color::from_rgb8(0x1a, 0x1a, 0x2e),
            hair_color: Color::from_rgb8(0x0f, 0x0f, 0x1a),
            ..Self::default()
        }
    }

    pub fn medical() -> Self {
        Self {
            default_fill: Color::from_rgb8(0xf2, 0xd7, 0xc9),
            stroke_color: Color::from_rgb8(0x8e, 0x5b, 0x4a),
            stroke_width: 0.75,
            selection_color: Color::from_rgb8(0xd7, 0x26, 0x3d),
            selection_stroke_color: Color::from_rgb8(0x7a, 0x10, 0x1e),
            head_color: Color::from_rgb8(0xea, 0xcb, 0xb8),
            hair_color: Color::from_rgb8(0x6b, 0x4f, 0x3f),
            ..Self::default()
        }
    }

    pub fn preset(preset: StylePreset) -> Self {
        match preset {
            StylePreset::Default => Self::default(),
            StylePreset::Minimal => Self::minimal(),
            StylePreset::Neon => Self::neon(),
            StylePreset::Medical => Self::medical(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StylePreset {
    #[default]
    Default,
    Minimal,
    Neon,
    Medical,
}

impl FromStr for StylePreset {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "minimal" => Ok(Self::Minimal),
            "neon" => Ok(Self::Neon),
            "medical" => Ok(Self::Medical),
            _ => Err(crate::Error::UnknownStylePreset {
                name: s.to_string(),
            }),
        }
    }
}
