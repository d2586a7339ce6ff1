//! Full session walkthrough: load, draw, undo, save.

use kurbo::Point;
use sitemark_session::{AnnotationSession, SessionConfig, Tool};

#[test]
fn pen_stroke_undo_save_walkthrough() {
    // A 1600x1200 source at max width 800 becomes an 800x600 session.
    let bitmap = image::RgbaImage::from_pixel(1600, 1200, image::Rgba([120, 110, 100, 255]));
    let mut session = AnnotationSession::new(bitmap, SessionConfig::default()).unwrap();

    let dims = session.dimensions();
    assert_eq!((dims.width, dims.height), (800, 600));
    assert!(!session.can_undo());

    // Draw a pen stroke through three points.
    session.set_tool(Tool::Pen);
    session.pointer_down(Point::new(10.0, 10.0));
    session.pointer_move(Point::new(20.0, 20.0));
    session.pointer_move(Point::new(30.0, 30.0));
    session.pointer_up(Point::new(30.0, 30.0));

    assert!(session.can_undo());
    assert!(!session.committed().is_blank());

    // Undo returns the surface to blank and disables undo again.
    assert!(session.undo());
    assert!(!session.can_undo());
    assert!(session.committed().is_blank());

    // Draw again so the export carries a visible mark.
    session.pointer_down(Point::new(100.0, 100.0));
    session.pointer_move(Point::new(200.0, 150.0));
    session.pointer_up(Point::new(200.0, 150.0));

    // Save hands the sink exactly one PNG at the session dimensions.
    let mut sink_calls = 0;
    let mut png_bytes = Vec::new();
    session
        .save(|bytes| {
            sink_calls += 1;
            png_bytes = bytes.to_vec();
        })
        .unwrap();
    assert_eq!(sink_calls, 1);

    let exported = image::load_from_memory(&png_bytes).unwrap().to_rgba8();
    assert_eq!(exported.dimensions(), (800, 600));

    // The export contains both the bitmap and the stroke.
    assert_eq!(exported.get_pixel(0, 0).0, [120, 110, 100, 255]);
    assert_ne!(exported.get_pixel(150, 125).0, [120, 110, 100, 255]);
}
