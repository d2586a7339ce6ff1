//! Per-tool drawing primitives.
//!
//! Each primitive is a deterministic, side-effect-only-on-the-pixmap
//! routine; degenerate geometry degrades to a no-op rather than an error.

use crate::text::LabelFont;
use kurbo::Point;
use sitemark_core::palette::PaintStyle;
use sitemark_core::shapes::{self, Shape};
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Rasterize one shape onto the pixmap.
pub(crate) fn rasterize(pixmap: &mut Pixmap, shape: &Shape, style: &PaintStyle, font: &LabelFont) {
    match shape {
        Shape::Arrow { start, end } => arrow(pixmap, *start, *end, style),
        Shape::Circle { center, radius } => circle(pixmap, *center, *radius, style),
        Shape::Rect { start, end } => rect(pixmap, *start, *end, style),
        Shape::Stroke { points } => polyline(pixmap, points, style),
        Shape::Label { anchor, content } => font.draw_label(pixmap, *anchor, content, style),
    }
}

fn stroke_paint(style: &PaintStyle) -> Paint<'static> {
    let [r, g, b, a] = style.color.rgba8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn arrow(pixmap: &mut Pixmap, start: Point, end: Point, style: &PaintStyle) {
    let mut pb = PathBuilder::new();
    pb.move_to(start.x as f32, start.y as f32);
    pb.line_to(end.x as f32, end.y as f32);

    let head_length = style.thickness.head_length();
    if let Some((left, right)) = shapes::arrow_head_points(start, end, head_length) {
        pb.move_to(end.x as f32, end.y as f32);
        pb.line_to(left.x as f32, left.y as f32);
        pb.move_to(end.x as f32, end.y as f32);
        pb.line_to(right.x as f32, right.y as f32);
    }

    let Some(path) = pb.finish() else { return };
    let stroke = Stroke {
        width: style.thickness.width() as f32,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &stroke_paint(style), &stroke, Transform::identity(), None);
}

fn circle(pixmap: &mut Pixmap, center: Point, radius: f64, style: &PaintStyle) {
    // A zero-radius gesture is a valid (invisible) circle.
    if radius <= 0.0 {
        return;
    }
    let mut pb = PathBuilder::new();
    pb.push_circle(center.x as f32, center.y as f32, radius as f32);
    let Some(path) = pb.finish() else { return };
    let stroke = Stroke {
        width: style.thickness.width() as f32,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &stroke_paint(style), &stroke, Transform::identity(), None);
}

fn rect(pixmap: &mut Pixmap, start: Point, end: Point, style: &PaintStyle) {
    // Corners may arrive in any order; normalize before building the path.
    let left = start.x.min(end.x) as f32;
    let top = start.y.min(end.y) as f32;
    let right = start.x.max(end.x) as f32;
    let bottom = start.y.max(end.y) as f32;
    let Some(r) = tiny_skia::Rect::from_ltrb(left, top, right, bottom) else {
        return;
    };
    let mut pb = PathBuilder::new();
    pb.push_rect(r);
    let Some(path) = pb.finish() else { return };
    let stroke = Stroke {
        width: style.thickness.width() as f32,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &stroke_paint(style), &stroke, Transform::identity(), None);
}

fn polyline(pixmap: &mut Pixmap, points: &[Point], style: &PaintStyle) {
    // Fewer than two samples leave no visible mark.
    if points.len() < 2 {
        return;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(points[0].x as f32, points[0].y as f32);
    for p in &points[1..] {
        pb.line_to(p.x as f32, p.y as f32);
    }
    let Some(path) = pb.finish() else { return };
    let stroke = Stroke {
        width: style.thickness.width() as f32,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &stroke_paint(style), &stroke, Transform::identity(), None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitemark_core::palette::{MarkColor, Thickness};

    fn blank(w: u32, h: u32) -> Pixmap {
        Pixmap::new(w, h).unwrap()
    }

    fn is_blank(pixmap: &Pixmap) -> bool {
        pixmap.data().iter().all(|&b| b == 0)
    }

    fn style() -> PaintStyle {
        PaintStyle::new(MarkColor::Red, Thickness::Medium)
    }

    #[test]
    fn test_arrow_marks_pixels() {
        let mut pixmap = blank(100, 100);
        arrow(
            &mut pixmap,
            Point::new(10.0, 10.0),
            Point::new(80.0, 80.0),
            &style(),
        );
        assert!(!is_blank(&pixmap));
    }

    #[test]
    fn test_zero_radius_circle_is_invisible() {
        let mut pixmap = blank(100, 100);
        circle(&mut pixmap, Point::new(50.0, 50.0), 0.0, &style());
        assert!(is_blank(&pixmap));
    }

    #[test]
    fn test_rect_with_swapped_corners_still_renders() {
        let mut pixmap = blank(100, 100);
        rect(
            &mut pixmap,
            Point::new(80.0, 70.0),
            Point::new(20.0, 10.0),
            &style(),
        );
        assert!(!is_blank(&pixmap));

        // Same rectangle drawn corner-first must cover the same pixels.
        let mut forward = blank(100, 100);
        rect(
            &mut forward,
            Point::new(20.0, 10.0),
            Point::new(80.0, 70.0),
            &style(),
        );
        assert_eq!(pixmap.data(), forward.data());
    }

    #[test]
    fn test_single_point_polyline_is_noop() {
        let mut pixmap = blank(100, 100);
        polyline(&mut pixmap, &[Point::new(50.0, 50.0)], &style());
        assert!(is_blank(&pixmap));
    }

    #[test]
    fn test_polyline_marks_pixels() {
        let mut pixmap = blank(100, 100);
        polyline(
            &mut pixmap,
            &[
                Point::new(10.0, 10.0),
                Point::new(20.0, 20.0),
                Point::new(30.0, 30.0),
            ],
            &style(),
        );
        assert!(!is_blank(&pixmap));
    }
}
