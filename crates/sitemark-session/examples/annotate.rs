//! Annotate a photo from the command line.
//!
//! Usage: annotate <input-image> <output.png>
//!
//! Draws a sample set of marks (arrow, circle, rectangle, label, pen
//! stroke) over the input image and writes the flattened PNG.

use kurbo::Point;
use sitemark_session::{AnnotationSession, MarkColor, SessionConfig, Thickness, Tool};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        eprintln!("usage: annotate <input-image> <output.png>");
        std::process::exit(2);
    };

    let bytes = std::fs::read(&input)?;
    let mut session = AnnotationSession::from_bytes(&bytes, SessionConfig::default())?;
    let dims = session.dimensions();
    let (w, h) = (dims.width as f64, dims.height as f64);

    session.set_tool(Tool::Arrow);
    session.set_color(MarkColor::Red);
    session.set_thickness(Thickness::Heavy);
    drag(&mut session, Point::new(w * 0.1, h * 0.1), Point::new(w * 0.4, h * 0.4));

    session.set_tool(Tool::Circle);
    session.set_color(MarkColor::Yellow);
    drag(&mut session, Point::new(w * 0.7, h * 0.3), Point::new(w * 0.78, h * 0.3));

    session.set_tool(Tool::Rectangle);
    session.set_color(MarkColor::Blue);
    drag(&mut session, Point::new(w * 0.2, h * 0.6), Point::new(w * 0.5, h * 0.85));

    session.set_tool(Tool::Text);
    session.pointer_down(Point::new(w * 0.55, h * 0.75));
    session.submit_text("Check this");

    session.set_tool(Tool::Pen);
    session.set_color(MarkColor::White);
    session.pointer_down(Point::new(w * 0.6, h * 0.5));
    for i in 1..=20 {
        let t = i as f64 / 20.0;
        session.pointer_move(Point::new(
            w * (0.6 + 0.25 * t),
            h * (0.5 + 0.1 * (t * 8.0).sin()),
        ));
    }
    session.pointer_up(Point::new(w * 0.85, h * 0.5));

    let mut saved = Vec::new();
    session.save(|png| saved = png.to_vec())?;
    std::fs::write(&output, &saved)?;
    println!("wrote {} ({} bytes)", output, saved.len());
    Ok(())
}

fn drag(session: &mut AnnotationSession, from: Point, to: Point) {
    session.pointer_down(from);
    session.pointer_move(to);
    session.pointer_up(to);
}
