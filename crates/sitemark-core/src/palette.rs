//! Tool, color and thickness selections exposed to the toolbar.

use serde::{Deserialize, Serialize};

/// Available annotation tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tool {
    Arrow,
    Circle,
    Rectangle,
    Text,
    #[default]
    Pen,
}

impl Tool {
    /// All tools in toolbar order.
    pub fn all() -> &'static [Tool] {
        &[
            Tool::Arrow,
            Tool::Circle,
            Tool::Rectangle,
            Tool::Text,
            Tool::Pen,
        ]
    }

    /// Whether the tool draws through a press-drag-release gesture.
    /// The text tool instead anchors a label and waits for string input.
    pub fn is_drawing(&self) -> bool {
        !matches!(self, Tool::Text)
    }
}

/// The fixed four-color marking palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MarkColor {
    #[default]
    Red,
    Yellow,
    Blue,
    White,
}

impl MarkColor {
    /// All palette colors in toolbar order.
    pub fn all() -> &'static [MarkColor] {
        &[
            MarkColor::Red,
            MarkColor::Yellow,
            MarkColor::Blue,
            MarkColor::White,
        ]
    }

    /// Opaque RGBA8 value for strokes and label text.
    pub fn rgba8(&self) -> [u8; 4] {
        match self {
            MarkColor::Red => [0xe5, 0x39, 0x35, 0xff],
            MarkColor::Yellow => [0xfd, 0xd8, 0x35, 0xff],
            MarkColor::Blue => [0x1e, 0x88, 0xe5, 0xff],
            MarkColor::White => [0xff, 0xff, 0xff, 0xff],
        }
    }
}

/// Stroke thickness presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Thickness {
    Thin,
    #[default]
    Medium,
    Heavy,
}

impl Thickness {
    /// All presets in toolbar order.
    pub fn all() -> &'static [Thickness] {
        &[Thickness::Thin, Thickness::Medium, Thickness::Heavy]
    }

    /// Stroke width in pixels.
    pub fn width(&self) -> f64 {
        match self {
            Thickness::Thin => 2.0,
            Thickness::Medium => 4.0,
            Thickness::Heavy => 6.0,
        }
    }

    /// Label font size scales with the stroke width.
    pub fn font_size(&self) -> f64 {
        16.0 + self.width() * 2.0
    }

    /// Arrowhead chevron length scales with the stroke width.
    pub fn head_length(&self) -> f64 {
        15.0 + self.width() * 2.0
    }
}

/// The paint state applied to committed marks and preview redraws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaintStyle {
    pub color: MarkColor,
    pub thickness: Thickness,
}

impl PaintStyle {
    pub fn new(color: MarkColor, thickness: Thickness) -> Self {
        Self { color, thickness }
    }
}
