//! Curved link geometry for the graph view.
//!
//! Links are drawn as cubic Bezier curves that bow upward (toward negative y)
//! for left-to-right links, with a height proportional to the horizontal
//! distance covered.

use std::fmt;

/// Arc height as a fraction of the horizontal distance.
pub const LINK_ARC: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Start, two control points, end.
///
/// `Display` writes SVG path data. Coordinates use the shortest decimal that
/// round-trips (`10`, `2.5`) and negative zero prints as `0`. Very large or
/// very small magnitudes are written out in full (`0.0000004`), never in
/// exponent form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkCurve {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

fn arc_height(x1: f64, x2: f64) -> f64 {
    -(x2 - x1) * LINK_ARC
}

impl LinkCurve {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let dx = x2 - x1;
        let arc = arc_height(x1, x2);

        Self {
            start: Point::new(x1, y1),
            control1: Point::new(x1 + dx / 4.0, y1 + arc),
            control2: Point::new(x2 - dx / 4.0, y2 + arc),
            end: Point::new(x2, y2),
        }
    }

    /// Point on the curve at parameter `t` in `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);

        Point::new(
            a * self.start.x + b * self.control1.x + c * self.control2.x + d * self.end.x,
            a * self.start.y + b * self.control1.y + c * self.control2.y + d * self.end.y,
        )
    }
}

fn coordinate(value: f64) -> f64 {
    // -0.0 == 0.0, so this folds negative zero
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// SVG path data (`M… C…`).
impl fmt::Display for LinkCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M{},{} C{},{} {},{} {},{}",
            coordinate(self.start.x),
            coordinate(self.start.y),
            coordinate(self.control1.x),
            coordinate(self.control1.y),
            coordinate(self.control2.x),
            coordinate(self.control2.y),
            coordinate(self.end.x),
            coordinate(self.end.y)
        )
    }
}

pub fn link_curve(x1: f64, y1: f64, x2: f64, y2: f64) -> LinkCurve {
    LinkCurve::new(x1, y1, x2, y2)
}

/// SVG path data for a link from `(x1, y1)` to `(x2, y2)`.
pub fn link_path_segment(x1: f64, y1: f64, x2: f64, y2: f64) -> String {
    link_curve(x1, y1, x2, y2).to_string()
}

/// Vertical extent of the link: the curve's y at its midpoint when both
/// ends share a y coordinate.
pub fn link_path_y_max(x1: f64, y1: f64, x2: f64, _y2: f64) -> f64 {
    y1 + arc_height(x1, x2) * 0.75
}
