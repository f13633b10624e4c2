#![forbid(unsafe_code)]

//! `musclemap` is a headless interactive muscle map.
//!
//! The taxonomy and body catalogs live in `musclemap-core`, drawing and hit testing in
//! `musclemap-render`. This crate ties them together behind [`MuscleMap`], a mutable view state
//! that can be built from a JSON [`MuscleMapConfig`].

pub use musclemap_core::*;

pub mod render {
    pub use musclemap_render::{
        AccessibilityItem, BodyRenderer, BodyViewStyle, ColorInterpolation, GradientStop,
        HeatmapColorScale, HeatmapLegend, HeatmapPreset, LegendOrientation, MuscleHighlight,
        MuscleIntensity, RenderedBody, RenderedRegion, StylePreset, SvgRenderOptions, Visibility,
        VisibilityPolicy, render_legend_svg, render_svg, visible_muscles,
    };
}

mod config;
mod map;

pub use config::{HeatmapConfig, MuscleMapConfig, StyleConfig};
pub use map::MuscleMap;

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error(transparent)]
    Core(#[from] musclemap_core::Error),
    #[error(transparent)]
    Render(#[from] musclemap_render::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type MapResult<T> = std::result::Result<T, MapError>;

#[cfg(test)]
mod tests;
