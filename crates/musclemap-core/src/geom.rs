#![forbid(unsafe_code)]

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Size = euclid::Size2D<f64, Unit>;
pub type Rect = euclid::Rect<f64, Unit>;
pub type Transform = euclid::Transform2D<f64, Unit, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

pub fn size(width: f64, height: f64) -> Size {
    euclid::size2(width, height)
}

/// Maps the body view box onto a canvas of a given size.
///
/// The view box is scaled uniformly to fit the canvas and centered along the axis with spare
/// room, so the same `Viewport` serves both drawing (body -> canvas) and input (canvas -> body).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    to_canvas: Transform,
    to_body: Transform,
}

impl Viewport {
    /// Returns `None` when `size` is not positive and finite in both dimensions, or when the view
    /// box is degenerate.
    pub fn fit(view_box: Rect, size: Size) -> Option<Self> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(size.width)
            || !usable(size.height)
            || !usable(view_box.size.width)
            || !usable(view_box.size.height)
        {
            return None;
        }

        let scale = (size.width / view_box.size.width).min(size.height / view_box.size.height);
        let offset = vector(
            (size.width - view_box.size.width * scale) / 2.0,
            (size.height - view_box.size.height * scale) / 2.0,
        );
        let to_canvas = Transform::translation(-view_box.origin.x, -view_box.origin.y)
            .then_scale(scale, scale)
            .then_translate(offset);
        let to_body = to_canvas.inverse()?;
        Some(Self { to_canvas, to_body })
    }

    pub fn transform(&self) -> Transform {
        self.to_canvas
    }

    pub fn scale(&self) -> f64 {
        self.to_canvas.m11
    }

    pub fn to_canvas(&self, p: Point) -> Point {
        self.to_canvas.transform_point(p)
    }

    pub fn to_body(&self, p: Point) -> Point {
        self.to_body.transform_point(p)
    }

    pub fn rect_to_canvas(&self, r: &Rect) -> Rect {
        self.to_canvas.outer_transformed_rect(r)
    }
}
