//! Raster surfaces for committed and preview annotation layers.

use crate::export::ImageDimensions;
use crate::text::LabelFont;
use crate::{RenderError, draw};
use image::RgbaImage;
use sitemark_core::palette::PaintStyle;
use sitemark_core::shapes::Shape;
use tiny_skia::Pixmap;

/// A full pixel copy of a surface, used to support undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    data: Vec<u8>,
}

/// An RGBA raster layer sized to the session's image dimensions.
///
/// Two of these back a session: the committed surface (exported) and the
/// transient preview surface (cleared after every gesture). Both start
/// fully transparent.
#[derive(Clone)]
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    /// Allocate a transparent surface.
    pub fn new(dims: ImageDimensions) -> Result<Self, RenderError> {
        let pixmap = Pixmap::new(dims.width, dims.height).ok_or(RenderError::Allocation {
            width: dims.width,
            height: dims.height,
        })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn dimensions(&self) -> ImageDimensions {
        ImageDimensions {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Wipe the surface back to fully transparent.
    pub fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    /// Whether every pixel is transparent.
    pub fn is_blank(&self) -> bool {
        self.pixmap.data().iter().all(|&b| b == 0)
    }

    /// Capture the full pixel contents.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            data: self.pixmap.data().to_vec(),
        }
    }

    /// Restore a snapshot taken from this surface.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        debug_assert_eq!(snapshot.data.len(), self.pixmap.data().len());
        self.pixmap.data_mut().copy_from_slice(&snapshot.data);
    }

    /// Rasterize one shape onto this surface with the given paint style.
    pub fn draw(&mut self, shape: &Shape, style: &PaintStyle, font: &LabelFont) {
        draw::rasterize(&mut self.pixmap, shape, style, font);
    }

    /// Raw premultiplied RGBA bytes, for embedding UIs that blit directly.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Copy out as a straight-alpha RGBA image.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width(), self.height());
        for (pixel, out) in self.pixmap.pixels().iter().zip(img.pixels_mut()) {
            let c = pixel.demultiply();
            *out = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        img
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use sitemark_core::palette::{MarkColor, PaintStyle, Thickness};

    fn surface() -> Surface {
        Surface::new(ImageDimensions {
            width: 64,
            height: 48,
        })
        .unwrap()
    }

    #[test]
    fn test_new_surface_is_blank() {
        assert!(surface().is_blank());
    }

    #[test]
    fn test_snapshot_restore_roundtrip() {
        let mut s = surface();
        let blank = s.snapshot();

        let style = PaintStyle::new(MarkColor::Red, Thickness::Medium);
        let font = LabelFont::embedded().unwrap();
        s.draw(
            &Shape::Rect {
                start: Point::new(5.0, 5.0),
                end: Point::new(40.0, 30.0),
            },
            &style,
            &font,
        );
        assert!(!s.is_blank());

        s.restore(&blank);
        assert!(s.is_blank());
        assert_eq!(s.snapshot(), blank);
    }

    #[test]
    fn test_clear_resets_pixels() {
        let mut s = surface();
        let style = PaintStyle::new(MarkColor::Blue, Thickness::Heavy);
        let font = LabelFont::embedded().unwrap();
        s.draw(
            &Shape::Circle {
                center: Point::new(32.0, 24.0),
                radius: 10.0,
            },
            &style,
            &font,
        );
        assert!(!s.is_blank());

        s.clear();
        assert!(s.is_blank());
    }
}
