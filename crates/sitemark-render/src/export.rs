//! Bitmap decode, display scaling, flatten and PNG export.

use crate::RenderError;
use crate::surface::Surface;
use image::{RgbaImage, imageops};

/// Pixel size of the annotation session, derived once at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// Compute session dimensions from the intrinsic bitmap size and the
/// configured maximum display width. Images narrower than the limit keep
/// their intrinsic size; wider ones are scaled down proportionally.
pub fn scaled_dimensions(
    intrinsic_width: u32,
    intrinsic_height: u32,
    max_width: u32,
) -> ImageDimensions {
    if intrinsic_width <= max_width || intrinsic_width == 0 {
        return ImageDimensions {
            width: intrinsic_width,
            height: intrinsic_height,
        };
    }
    let height = (intrinsic_height as f64 * max_width as f64 / intrinsic_width as f64).round();
    ImageDimensions {
        width: max_width,
        height: (height as u32).max(1),
    }
}

/// Decode a source bitmap (PNG/JPEG/WebP) into straight-alpha RGBA.
pub fn decode_bitmap(bytes: &[u8]) -> Result<RgbaImage, RenderError> {
    let img = image::load_from_memory(bytes)?;
    let rgba = img.to_rgba8();
    log::debug!("decoded {}x{} source bitmap", rgba.width(), rgba.height());
    Ok(rgba)
}

/// Composite the original bitmap and the committed surface into one
/// output raster of exactly `dims` pixels.
pub fn flatten(original: &RgbaImage, committed: &Surface, dims: ImageDimensions) -> RgbaImage {
    let mut out = if original.dimensions() == (dims.width, dims.height) {
        original.clone()
    } else {
        imageops::resize(
            original,
            dims.width,
            dims.height,
            imageops::FilterType::Triangle,
        )
    };
    // The committed surface already has the session's pixel size, so it
    // composites one-to-one with no further scaling.
    imageops::overlay(&mut out, &committed.to_rgba_image(), 0, 0);
    out
}

/// Encode an RGBA image as a lossless PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut data, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(image.as_raw())?;
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::LabelFont;
    use kurbo::Point;
    use sitemark_core::palette::{MarkColor, PaintStyle, Thickness};
    use sitemark_core::shapes::Shape;

    #[test]
    fn test_scaled_dimensions_downscale() {
        let dims = scaled_dimensions(1600, 1200, 800);
        assert_eq!(
            dims,
            ImageDimensions {
                width: 800,
                height: 600
            }
        );
    }

    #[test]
    fn test_scaled_dimensions_no_upscale() {
        let dims = scaled_dimensions(640, 480, 800);
        assert_eq!(
            dims,
            ImageDimensions {
                width: 640,
                height: 480
            }
        );
    }

    #[test]
    fn test_scaled_dimensions_rounding() {
        // 1000x333 at max width 800 scales to 800x266 (266.4 rounds down).
        let dims = scaled_dimensions(1000, 333, 800);
        assert_eq!(dims.width, 800);
        assert_eq!(dims.height, 266);
    }

    #[test]
    fn test_flatten_output_matches_session_dimensions() {
        for (w, h, max) in [(1600, 1200, 800), (300, 900, 800), (2000, 500, 640)] {
            let dims = scaled_dimensions(w, h, max);
            let original = RgbaImage::from_pixel(w, h, image::Rgba([10, 20, 30, 255]));
            let committed = Surface::new(dims).unwrap();
            let out = flatten(&original, &committed, dims);
            assert_eq!(out.dimensions(), (dims.width, dims.height));
        }
    }

    #[test]
    fn test_flatten_composites_annotations_over_bitmap() {
        let dims = ImageDimensions {
            width: 100,
            height: 100,
        };
        let original = RgbaImage::from_pixel(100, 100, image::Rgba([10, 20, 30, 255]));
        let mut committed = Surface::new(dims).unwrap();
        let style = PaintStyle::new(MarkColor::Red, Thickness::Heavy);
        let font = LabelFont::embedded().unwrap();
        committed.draw(
            &Shape::Rect {
                start: Point::new(20.0, 20.0),
                end: Point::new(80.0, 80.0),
            },
            &style,
            &font,
        );

        let out = flatten(&original, &committed, dims);
        // Unannotated corner keeps the bitmap color.
        assert_eq!(out.get_pixel(0, 0).0, [10, 20, 30, 255]);
        // A pixel on the rectangle edge is tinted by the stroke.
        assert_ne!(out.get_pixel(20, 50).0, [10, 20, 30, 255]);
    }

    #[test]
    fn test_encode_png_roundtrip() {
        let img = RgbaImage::from_pixel(17, 9, image::Rgba([200, 100, 50, 255]));
        let bytes = encode_png(&img).unwrap();
        let back = decode_bitmap(&bytes).unwrap();
        assert_eq!(back.dimensions(), (17, 9));
        assert_eq!(back.get_pixel(8, 4).0, [200, 100, 50, 255]);
    }

    #[test]
    fn test_decode_garbage_is_an_error() {
        assert!(decode_bitmap(b"not an image").is_err());
    }
}
