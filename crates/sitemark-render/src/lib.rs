//! SiteMark raster backend.
//!
//! CPU rasterization for the annotation engine: the committed and preview
//! surfaces, the per-tool drawing primitives, glyph rendering for labels,
//! the bounded undo history, and the decode/flatten/encode pipeline.

mod draw;
pub mod export;
pub mod history;
pub mod surface;
pub mod text;

use thiserror::Error;

pub use export::{ImageDimensions, decode_bitmap, encode_png, flatten, scaled_dimensions};
pub use history::History;
pub use surface::{Snapshot, Surface};
pub use text::LabelFont;

/// Raster backend errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface allocation failed for {width}x{height}")]
    Allocation { width: u32, height: u32 },
    #[error("embedded label font is invalid: {0}")]
    Font(#[from] ab_glyph::InvalidFont),
    #[error("bitmap decode failed: {0}")]
    Decode(#[from] image::ImageError),
    #[error("PNG encode failed: {0}")]
    Encode(#[from] png::EncodingError),
}
