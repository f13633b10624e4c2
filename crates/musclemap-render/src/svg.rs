use crate::heatmap::{HeatmapLegend, LegendOrientation};
use crate::renderer::BodyRenderer;
use musclemap_core::Color;
use musclemap_core::geom::Size;
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Adds a `<title>` with the muscle's display name to every interactive region.
    pub include_titles: bool,
    /// Optional canvas fill drawn behind the body.
    pub background: Option<Color>,
    /// Optional id for the root element; also prefixes gradient ids.
    pub diagram_id: Option<String>,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            include_titles: true,
            background: None,
            diagram_id: None,
        }
    }
}

/// Serializes the renderer's current view as a standalone SVG document.
///
/// A degenerate `size` yields an empty document of that size.
pub fn render_svg(renderer: &BodyRenderer, size: Size, options: &SvgRenderOptions) -> String {
    let mut out = String::new();
    open_svg(&mut out, size, options.diagram_id.as_deref(), "musclemap");
    if let Some(bg) = options.background {
        let _ = write!(
            &mut out,
            r#"<rect width="{}" height="{}" fill="{}"/>"#,
            fmt(size.width),
            fmt(size.height),
            bg.to_hex()
        );
    }

    let Some(body) = renderer.render(size) else {
        out.push_str("</svg>");
        return out;
    };

    let t = body.transform;
    let _ = write!(
        &mut out,
        r#"<g class="body {} {}" transform="matrix({} {} {} {} {} {})">"#,
        renderer.gender(),
        renderer.side(),
        fmt(t.m11),
        fmt(t.m12),
        fmt(t.m21),
        fmt(t.m22),
        fmt(t.m31),
        fmt(t.m32)
    );
    for region in &body.regions {
        let _ = write!(
            &mut out,
            r#"<path class="{}" d="{}" fill="{}" fill-opacity="{}" fill-rule="evenodd" stroke="{}" stroke-width="{}" vector-effect="non-scaling-stroke""#,
            region.slug,
            region.path,
            region.fill.to_hex(),
            fmt(region.opacity),
            region.stroke.to_hex(),
            fmt(region.stroke_width)
        );
        match region.muscle.filter(|_| region.is_interactive) {
            Some(muscle) => {
                let _ = write!(
                    &mut out,
                    r#" data-muscle="{}" data-side="{}""#,
                    muscle, region.side
                );
                if region.is_selected {
                    out.push_str(r#" aria-selected="true""#);
                }
                if options.include_titles {
                    let _ = write!(&mut out, "><title>{}</title></path>", muscle.display_name());
                } else {
                    out.push_str("/>");
                }
            }
            None => out.push_str(r#" aria-hidden="true"/>"#),
        }
    }
    out.push_str("</g></svg>");
    out
}

/// Serializes a legend as a gradient bar of `length` along its orientation, labels at the ends.
pub fn render_legend_svg(legend: &HeatmapLegend, length: f64, diagram_id: Option<&str>) -> String {
    const LABEL_SIZE: f64 = 12.0;
    const GAP: f64 = 4.0;
    const STOPS: usize = 16;

    let length = if length.is_finite() { length.max(0.0) } else { 0.0 };
    let thickness = legend.bar_thickness.max(0.0);
    let vertical = legend.orientation == LegendOrientation::Vertical;
    let size = if vertical {
        Size::new(thickness + GAP + LABEL_SIZE * 4.0, length)
    } else {
        Size::new(length, thickness + GAP + LABEL_SIZE)
    };
    let gradient_id = match diagram_id {
        Some(id) => format!("{}-legend-gradient", escape_xml(id)),
        None => "legend-gradient".to_string(),
    };

    let mut out = String::new();
    open_svg(&mut out, size, diagram_id, "musclemap-legend");
    // Vertical bars read high at the top.
    let (x1, y1, x2, y2) = if vertical {
        ("0", "1", "0", "0")
    } else {
        ("0", "0", "1", "0")
    };
    let _ = write!(
        &mut out,
        r#"<defs><linearGradient id="{gradient_id}" x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}">"#
    );
    for stop in legend.gradient_stops(STOPS) {
        let _ = write!(
            &mut out,
            r#"<stop offset="{}" stop-color="{}"/>"#,
            fmt(stop.offset),
            stop.color.to_hex()
        );
    }
    out.push_str("</linearGradient></defs>");

    let (bar_w, bar_h) = if vertical {
        (thickness, length)
    } else {
        (length, thickness)
    };
    let _ = write!(
        &mut out,
        r#"<rect class="legend-bar" width="{}" height="{}" fill="url(#{gradient_id})"/>"#,
        fmt(bar_w),
        fmt(bar_h)
    );

    let low = escape_xml(legend.min_label());
    let high = escape_xml(legend.max_label());
    if vertical {
        let x = fmt(thickness + GAP);
        let _ = write!(
            &mut out,
            r#"<text class="legend-high" x="{x}" y="{}" font-size="{}">{high}</text>"#,
            fmt(LABEL_SIZE),
            fmt(LABEL_SIZE)
        );
        let _ = write!(
            &mut out,
            r#"<text class="legend-low" x="{x}" y="{}" font-size="{}">{low}</text>"#,
            fmt(length),
            fmt(LABEL_SIZE)
        );
    } else {
        let y = fmt(thickness + GAP + LABEL_SIZE);
        let _ = write!(
            &mut out,
            r#"<text class="legend-low" x="0" y="{y}" font-size="{}">{low}</text>"#,
            fmt(LABEL_SIZE)
        );
        let _ = write!(
            &mut out,
            r#"<text class="legend-high" x="{}" y="{y}" font-size="{}" text-anchor="end">{high}</text>"#,
            fmt(length),
            fmt(LABEL_SIZE)
        );
    }
    out.push_str("</svg>");
    out
}

fn open_svg(out: &mut String, size: Size, diagram_id: Option<&str>, class: &str) {
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg""#);
    if let Some(id) = diagram_id {
        let _ = write!(out, r#" id="{}""#, escape_xml(id));
    }
    let w = fmt(size.width.max(0.0));
    let h = fmt(size.height.max(0.0));
    let _ = write!(
        out,
        r#" class="{class}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
}

/// Fixed three-decimal output with trailing zeros trimmed; non-finite values print as `0`.
fn fmt(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{rounded:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
