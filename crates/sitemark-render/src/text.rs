//! Label rendering: glyph measurement and rasterization.

use crate::RenderError;
use ab_glyph::{Font, FontRef, PxScale, ScaleFont, point};
use kurbo::Point;
use sitemark_core::palette::PaintStyle;
use tiny_skia::{Paint, Pixmap, Transform};

/// Bundled label typeface.
static FONT_BYTES: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

/// Padding around the label text inside its background plate, in pixels.
const LABEL_PADDING: f32 = 4.0;

/// Semi-transparent dark background behind label text.
const LABEL_BACKGROUND: [u8; 4] = [0, 0, 0, 128];

/// The typeface used for text labels.
pub struct LabelFont {
    font: FontRef<'static>,
}

impl LabelFont {
    /// Load the bundled typeface.
    pub fn embedded() -> Result<Self, RenderError> {
        let font = FontRef::try_from_slice(FONT_BYTES)?;
        Ok(Self { font })
    }

    /// Measure `text` at `px` pixels, returning (width, height).
    pub fn measure(&self, text: &str, px: f64) -> (f64, f64) {
        let scaled = self.font.as_scaled(PxScale::from(px as f32));
        let mut width = 0.0f32;
        let mut prev = None;
        for ch in text.chars() {
            let id = self.font.glyph_id(ch);
            if let Some(p) = prev {
                width += scaled.kern(p, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        (width as f64, (scaled.ascent() - scaled.descent()) as f64)
    }

    /// Draw a label: a padded dark background plate sized to the measured
    /// text, then the glyphs in the active color. The text baseline sits
    /// at the anchor, so the label extends above and to the right of it.
    pub(crate) fn draw_label(
        &self,
        pixmap: &mut Pixmap,
        anchor: Point,
        content: &str,
        style: &PaintStyle,
    ) {
        let text = content.trim();
        if text.is_empty() {
            return;
        }

        let px = style.thickness.font_size() as f32;
        let scaled = self.font.as_scaled(PxScale::from(px));
        let (width, _) = self.measure(text, px as f64);
        let ascent = scaled.ascent();
        let descent = scaled.descent();

        let x = anchor.x as f32;
        let y = anchor.y as f32;
        if let Some(plate) = tiny_skia::Rect::from_ltrb(
            x - LABEL_PADDING,
            y - ascent - LABEL_PADDING,
            x + width as f32 + LABEL_PADDING,
            y - descent + LABEL_PADDING,
        ) {
            let [r, g, b, a] = LABEL_BACKGROUND;
            let mut paint = Paint::default();
            paint.set_color_rgba8(r, g, b, a);
            paint.anti_alias = true;
            pixmap.fill_rect(plate, &paint, Transform::identity(), None);
        }

        let color = style.color.rgba8();
        let mut caret = x;
        let mut prev = None;
        for ch in text.chars() {
            let id = self.font.glyph_id(ch);
            if let Some(p) = prev {
                caret += scaled.kern(p, id);
            }
            let glyph = id.with_scale_and_position(PxScale::from(px), point(caret, y));
            if let Some(outline) = self.font.outline_glyph(glyph) {
                let bounds = outline.px_bounds();
                outline.draw(|gx, gy, coverage| {
                    blend_coverage(
                        pixmap,
                        bounds.min.x as i32 + gx as i32,
                        bounds.min.y as i32 + gy as i32,
                        color,
                        coverage,
                    );
                });
            }
            caret += scaled.h_advance(id);
            prev = Some(id);
        }
    }
}

/// Source-over blend of a straight-alpha color scaled by glyph coverage
/// into the premultiplied pixmap.
fn blend_coverage(pixmap: &mut Pixmap, x: i32, y: i32, color: [u8; 4], coverage: f32) {
    if coverage <= 0.0 {
        return;
    }
    let (w, h) = (pixmap.width() as i32, pixmap.height() as i32);
    if x < 0 || y < 0 || x >= w || y >= h {
        return;
    }

    let alpha = (coverage.min(1.0) * color[3] as f32).round() as u16;
    if alpha == 0 {
        return;
    }
    // Floor division keeps every premultiplied component <= alpha.
    let src = |c: u8| (c as u16 * alpha) / 255;
    let inv = 255 - alpha;

    let idx = (y * w + x) as usize;
    let pixels = pixmap.pixels_mut();
    let dst = pixels[idx];
    let out_r = (src(color[0]) + dst.red() as u16 * inv / 255) as u8;
    let out_g = (src(color[1]) + dst.green() as u16 * inv / 255) as u8;
    let out_b = (src(color[2]) + dst.blue() as u16 * inv / 255) as u8;
    let out_a = (alpha + dst.alpha() as u16 * inv / 255) as u8;
    if let Some(px) = tiny_skia::PremultipliedColorU8::from_rgba(out_r, out_g, out_b, out_a) {
        pixels[idx] = px;
    }
}
