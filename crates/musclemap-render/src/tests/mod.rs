mod hit_test;

use musclemap_core::geom::{Point, Rect, Size, point, size};
use musclemap_core::{BodyGender, BodySide};

pub(crate) fn canvas() -> Size {
    size(300.0, 600.0)
}

/// Canvas points on a regular grid, edges included.
pub(crate) fn grid(canvas: Size, step: f64) -> impl Iterator<Item = Point> {
    let cols = (canvas.width / step) as usize;
    let rows = (canvas.height / step) as usize;
    (0..=cols).flat_map(move |i| (0..=rows).map(move |j| point(i as f64 * step, j as f64 * step)))
}

pub(crate) fn all_views() -> impl Iterator<Item = (BodyGender, BodySide)> {
    BodyGender::ALL
        .into_iter()
        .flat_map(|g| BodySide::ALL.into_iter().map(move |s| (g, s)))
}

#[track_caller]
pub(crate) fn assert_rect_approx(actual: Rect, x: f64, y: f64, w: f64, h: f64) {
    let eps = 1e-6;
    assert!(
        (actual.origin.x - x).abs() < eps
            && (actual.origin.y - y).abs() < eps
            && (actual.size.width - w).abs() < eps
            && (actual.size.height - h).abs() < eps,
        "expected ({x}, {y}, {w}, {h}), got {actual:?}"
    );
}
