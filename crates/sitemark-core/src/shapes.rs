//! Committed mark shapes and their geometry helpers.
//!
//! A shape is a value describing one finished annotation. Shapes are
//! rasterized immediately after a gesture completes; nothing retains them
//! afterwards, so they carry geometry only and no identity.

use kurbo::Point;

/// One finished annotation, keyed by the tool that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Straight shaft from `start` to `end` with a chevron head at `end`.
    Arrow { start: Point, end: Point },
    /// Full stroked circle around `center`.
    Circle { center: Point, radius: f64 },
    /// Axis-aligned stroked rectangle; corners may arrive in any order.
    Rect { start: Point, end: Point },
    /// Text label with its baseline anchored at `anchor`.
    Label { anchor: Point, content: String },
    /// Freehand polyline through the sampled points.
    Stroke { points: Vec<Point> },
}

impl Shape {
    /// Circle from a gesture: radius is the distance start to end.
    pub fn circle_from_gesture(start: Point, end: Point) -> Self {
        Shape::Circle {
            center: start,
            radius: distance(start, end),
        }
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Half-angle of the arrowhead chevron (30 degrees).
pub const HEAD_ANGLE: f64 = std::f64::consts::FRAC_PI_6;

/// Endpoints of the two chevron segments of an arrowhead.
///
/// Each segment runs from `end` back along the shaft, rotated plus or
/// minus [`HEAD_ANGLE`] from the reversed shaft direction, with length
/// `head_length`. A degenerate shaft (start == end) yields `None`.
pub fn arrow_head_points(start: Point, end: Point, head_length: f64) -> Option<(Point, Point)> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if dx == 0.0 && dy == 0.0 {
        return None;
    }
    let angle = dy.atan2(dx);
    let left = Point::new(
        end.x - head_length * (angle - HEAD_ANGLE).cos(),
        end.y - head_length * (angle - HEAD_ANGLE).sin(),
    );
    let right = Point::new(
        end.x - head_length * (angle + HEAD_ANGLE).cos(),
        end.y - head_length * (angle + HEAD_ANGLE).sin(),
    );
    Some((left, right))
}
