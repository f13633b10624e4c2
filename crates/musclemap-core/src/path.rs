//! SVG path data flattened into polygons for containment and bounds queries.

use crate::geom::{Point, Rect, point};
use svgtypes::{PathParser, PathSegment};

/// Number of line segments used per Bézier curve or arc.
pub const CURVE_SEGMENTS: usize = 16;

/// A parsed shape: one closed polygon per subpath, in body view box coordinates.
///
/// Containment uses the even-odd rule so a subpath drawn inside another one punches a hole,
/// matching `fill-rule="evenodd"` in the SVG output.
#[derive(Debug, Clone, PartialEq)]
pub struct PathGeometry {
    subpaths: Vec<Vec<Point>>,
    bounds: Option<Rect>,
}

impl PathGeometry {
    pub fn parse(d: &str) -> Result<Self, svgtypes::Error> {
        let segments = PathParser::from(d).collect::<Result<Vec<PathSegment>, _>>()?;
        let subpaths = flatten(&segments);
        let bounds = {
            let mut points = subpaths.iter().flatten().peekable();
            points.peek().is_some().then(|| Rect::from_points(points))
        };
        Ok(Self { subpaths, bounds })
    }

    pub fn subpaths(&self) -> &[Vec<Point>] {
        &self.subpaths
    }

    /// Axis-aligned bounds of all vertices, `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn contains(&self, p: Point) -> bool {
        if !self.bounds.is_some_and(|b| contains_inclusive(&b, p)) {
            return false;
        }
        let mut inside = false;
        for poly in &self.subpaths {
            if poly.len() < 3 {
                continue;
            }
            let mut j = poly.len() - 1;
            for i in 0..poly.len() {
                let (a, b) = (poly[i], poly[j]);
                if (a.y > p.y) != (b.y > p.y) {
                    let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
                    if p.x < x_cross {
                        inside = !inside;
                    }
                }
                j = i;
            }
        }
        inside
    }
}

fn contains_inclusive(r: &Rect, p: Point) -> bool {
    p.x >= r.min_x() && p.x <= r.max_x() && p.y >= r.min_y() && p.y <= r.max_y()
}

struct Flattener {
    subpaths: Vec<Vec<Point>>,
    current: Vec<Point>,
    pos: Point,
    start: Point,
    // Reflection sources for `S` and `T`.
    last_cubic_ctrl: Option<Point>,
    last_quad_ctrl: Option<Point>,
}

impl Flattener {
    fn new() -> Self {
        Self {
            subpaths: Vec::new(),
            current: Vec::new(),
            pos: point(0.0, 0.0),
            start: point(0.0, 0.0),
            last_cubic_ctrl: None,
            last_quad_ctrl: None,
        }
    }

    fn finish_subpath(&mut self) {
        let poly = std::mem::take(&mut self.current);
        if poly.len() >= 2 {
            self.subpaths.push(poly);
        }
    }

    fn resolve(&self, abs: bool, x: f64, y: f64) -> Point {
        if abs {
            point(x, y)
        } else {
            point(self.pos.x + x, self.pos.y + y)
        }
    }

    fn move_to(&mut self, p: Point) {
        self.finish_subpath();
        self.current.push(p);
        self.pos = p;
        self.start = p;
    }

    fn line_to(&mut self, p: Point) {
        if self.current.is_empty() {
            self.current.push(self.pos);
        }
        self.current.push(p);
        self.pos = p;
    }

    fn cubic_to(&mut self, c1: Point, c2: Point, to: Point) {
        let from = self.pos;
        for i in 1..=CURVE_SEGMENTS {
            let t = i as f64 / CURVE_SEGMENTS as f64;
            let mt = 1.0 - t;
            let a = mt * mt * mt;
            let b = 3.0 * mt * mt * t;
            let c = 3.0 * mt * t * t;
            let d = t * t * t;
            self.line_to(point(
                a * from.x + b * c1.x + c * c2.x + d * to.x,
                a * from.y + b * c1.y + c * c2.y + d * to.y,
            ));
        }
        self.last_cubic_ctrl = Some(c2);
    }

    fn quad_to(&mut self, c: Point, to: Point) {
        let from = self.pos;
        for i in 1..=CURVE_SEGMENTS {
            let t = i as f64 / CURVE_SEGMENTS as f64;
            let mt = 1.0 - t;
            self.line_to(point(
                mt * mt * from.x + 2.0 * mt * t * c.x + t * t * to.x,
                mt * mt * from.y + 2.0 * mt * t * c.y + t * t * to.y,
            ));
        }
        self.last_quad_ctrl = Some(c);
    }

    fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        rotation_deg: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    ) {
        let from = self.pos;
        if from == to {
            return;
        }
        let (mut rx, mut ry) = (rx.abs(), ry.abs());
        if rx == 0.0 || ry == 0.0 {
            self.line_to(to);
            return;
        }

        // Endpoint to center parameterization (SVG 1.1, appendix F.6.5).
        let (sin_phi, cos_phi) = rotation_deg.to_radians().sin_cos();
        let dx2 = (from.x - to.x) / 2.0;
        let dy2 = (from.y - to.y) / 2.0;
        let x1p = cos_phi * dx2 + sin_phi * dy2;
        let y1p = -sin_phi * dx2 + cos_phi * dy2;

        let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
        if lambda > 1.0 {
            let s = lambda.sqrt();
            rx *= s;
            ry *= s;
        }

        let num = rx * rx * ry * ry - rx * rx * y1p * y1p - ry * ry * x1p * x1p;
        let den = rx * rx * y1p * y1p + ry * ry * x1p * x1p;
        let mut coef = if den == 0.0 {
            0.0
        } else {
            (num / den).max(0.0).sqrt()
        };
        if large_arc == sweep {
            coef = -coef;
        }
        let cxp = coef * rx * y1p / ry;
        let cyp = -coef * ry * x1p / rx;
        let cx = cos_phi * cxp - sin_phi * cyp + (from.x + to.x) / 2.0;
        let cy = sin_phi * cxp + cos_phi * cyp + (from.y + to.y) / 2.0;

        let angle =
            |ux: f64, uy: f64, vx: f64, vy: f64| (ux * vy - uy * vx).atan2(ux * vx + uy * vy);
        let ux = (x1p - cxp) / rx;
        let uy = (y1p - cyp) / ry;
        let vx = (-x1p - cxp) / rx;
        let vy = (-y1p - cyp) / ry;
        let theta1 = angle(1.0, 0.0, ux, uy);
        let mut delta = angle(ux, uy, vx, vy);
        if !sweep && delta > 0.0 {
            delta -= std::f64::consts::TAU;
        } else if sweep && delta < 0.0 {
            delta += std::f64::consts::TAU;
        }

        for i in 1..CURVE_SEGMENTS {
            let t = theta1 + delta * (i as f64 / CURVE_SEGMENTS as f64);
            let (sin_t, cos_t) = t.sin_cos();
            self.line_to(point(
                cos_phi * rx * cos_t - sin_phi * ry * sin_t + cx,
                sin_phi * rx * cos_t + cos_phi * ry * sin_t + cy,
            ));
        }
        // Land exactly on the endpoint so following relative commands do not drift.
        self.line_to(to);
    }

    fn close(&mut self) {
        self.finish_subpath();
        self.pos = self.start;
    }
}

fn flatten(segments: &[PathSegment]) -> Vec<Vec<Point>> {
    let mut f = Flattener::new();
    for seg in segments {
        let mut cubic_ctrl = None;
        let mut quad_ctrl = None;
        match *seg {
            PathSegment::MoveTo { abs, x, y } => {
                let p = f.resolve(abs, x, y);
                f.move_to(p);
            }
            PathSegment::LineTo { abs, x, y } => {
                let p = f.resolve(abs, x, y);
                f.line_to(p);
            }
            PathSegment::HorizontalLineTo { abs, x } => {
                let x = if abs { x } else { f.pos.x + x };
                f.line_to(point(x, f.pos.y));
            }
            PathSegment::VerticalLineTo { abs, y } => {
                let y = if abs { y } else { f.pos.y + y };
                f.line_to(point(f.pos.x, y));
            }
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let c1 = f.resolve(abs, x1, y1);
                let c2 = f.resolve(abs, x2, y2);
                let to = f.resolve(abs, x, y);
                f.cubic_to(c1, c2, to);
                cubic_ctrl = f.last_cubic_ctrl;
            }
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                let c1 = match f.last_cubic_ctrl {
                    Some(c) => point(2.0 * f.pos.x - c.x, 2.0 * f.pos.y - c.y),
                    None => f.pos,
                };
                let c2 = f.resolve(abs, x2, y2);
                let to = f.resolve(abs, x, y);
                f.cubic_to(c1, c2, to);
                cubic_ctrl = f.last_cubic_ctrl;
            }
            PathSegment::Quadratic { abs, x1, y1, x, y } => {
                let c = f.resolve(abs, x1, y1);
                let to = f.resolve(abs, x, y);
                f.quad_to(c, to);
                quad_ctrl = f.last_quad_ctrl;
            }
            PathSegment::SmoothQuadratic { abs, x, y } => {
                let c = match f.last_quad_ctrl {
                    Some(c) => point(2.0 * f.pos.x - c.x, 2.0 * f.pos.y - c.y),
                    None => f.pos,
                };
                let to = f.resolve(abs, x, y);
                f.quad_to(c, to);
                quad_ctrl = f.last_quad_ctrl;
            }
            PathSegment::EllipticalArc {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => {
                let to = f.resolve(abs, x, y);
                f.arc_to(rx, ry, x_axis_rotation, large_arc, sweep, to);
            }
            PathSegment::ClosePath { .. } => f.close(),
        }
        f.last_cubic_ctrl = cubic_ctrl;
        f.last_quad_ctrl = quad_ctrl;
    }
    f.finish_subpath();
    f.subpaths
}
