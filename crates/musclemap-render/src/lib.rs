#![forbid(unsafe_code)]

//! Headless body rendering.
//!
//! [`BodyRenderer`] resolves paint for every region of a body catalog, answers hit tests and
//! reports accessibility regions. All of it goes through one [`VisibilityPolicy`], so what is
//! drawn is exactly what can be hit.

pub mod accessibility;
pub mod heatmap;
pub mod model;
pub mod renderer;
pub mod style;
pub mod svg;
pub mod visibility;

pub use accessibility::{AccessibilityItem, visible_muscles};
pub use heatmap::{
    ColorInterpolation, GradientStop, HeatmapColorScale, HeatmapLegend, HeatmapPreset,
    LegendOrientation, MuscleIntensity,
};
pub use model::{MuscleHighlight, RenderedBody, RenderedRegion};
pub use renderer::BodyRenderer;
pub use style::{BodyViewStyle, StylePreset};
pub use svg::{SvgRenderOptions, render_svg, render_legend_svg};
pub use visibility::{Visibility, VisibilityPolicy};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("unknown style preset: {name} (expected `default`, `minimal`, `neon` or `medical`)")]
    UnknownStylePreset { name: String },
    #[error(
        "unknown heatmap preset: {name} (expected `workout`, `thermal`, `medical` or `monochrome`)"
    )]
    UnknownHeatmapPreset { name: String },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
