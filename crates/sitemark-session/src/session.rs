//! The annotation session state machine.

use crate::SessionError;
use image::RgbaImage;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use sitemark_core::gesture::{GestureState, GestureTracker};
use sitemark_core::input::{CanvasBounds, PointerEvent, PointerPhase};
use sitemark_core::palette::{MarkColor, PaintStyle, Thickness, Tool};
use sitemark_core::shapes::Shape;
use sitemark_render::export::{self, ImageDimensions};
use sitemark_render::history::History;
use sitemark_render::surface::Surface;
use sitemark_render::text::LabelFont;

/// Default maximum display width in logical pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 800;

/// Session configuration supplied by the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum on-screen width; taller sources scale proportionally.
    pub max_width: u32,
    /// Initially selected tool.
    pub tool: Tool,
    /// Initially selected color.
    pub color: MarkColor,
    /// Initially selected thickness.
    pub thickness: Thickness,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            tool: Tool::default(),
            color: MarkColor::default(),
            thickness: Thickness::default(),
        }
    }
}

/// A single-image annotation session.
///
/// Owns the two raster layers (committed and preview), the undo history
/// and the in-progress gesture. The embedding UI feeds it pointer events
/// and toolbar actions; on save it hands a flattened PNG to the caller's
/// sink. Dropping the session (or calling [`AnnotationSession::cancel`])
/// abandons everything without persisting.
pub struct AnnotationSession {
    original: RgbaImage,
    dims: ImageDimensions,
    committed: Surface,
    preview: Surface,
    history: History,
    tracker: GestureTracker,
    style: PaintStyle,
    /// Anchor of the pending text label while the sub-dialog is open.
    text_anchor: Option<Point>,
    font: LabelFont,
}

impl AnnotationSession {
    /// Start a session over an already-decoded bitmap.
    pub fn new(original: RgbaImage, config: SessionConfig) -> Result<Self, SessionError> {
        let dims = export::scaled_dimensions(original.width(), original.height(), config.max_width);
        let committed = Surface::new(dims)?;
        let preview = Surface::new(dims)?;
        let font = LabelFont::embedded()?;
        let mut tracker = GestureTracker::new();
        tracker.current_tool = config.tool;
        log::info!(
            "annotation session opened: source {}x{}, surfaces {}x{}",
            original.width(),
            original.height(),
            dims.width,
            dims.height
        );
        Ok(Self {
            original,
            dims,
            committed,
            preview,
            history: History::new(),
            tracker,
            style: PaintStyle::new(config.color, config.thickness),
            text_anchor: None,
            font,
        })
    }

    /// Start a session from encoded bitmap bytes (PNG/JPEG/WebP).
    pub fn from_bytes(bytes: &[u8], config: SessionConfig) -> Result<Self, SessionError> {
        let original = export::decode_bitmap(bytes).inspect_err(|e| {
            log::error!("source bitmap failed to load: {e}");
        })?;
        Self::new(original, config)
    }

    // --- control surface ---

    pub fn dimensions(&self) -> ImageDimensions {
        self.dims
    }

    /// The committed annotation layer (what gets exported).
    pub fn committed(&self) -> &Surface {
        &self.committed
    }

    /// The transient preview layer showing the in-progress shape.
    pub fn preview(&self) -> &Surface {
        &self.preview
    }

    pub fn tool(&self) -> Tool {
        self.tracker.current_tool
    }

    /// Select a tool. Any gesture in progress is dropped; an open text
    /// sub-dialog stays open.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tracker.set_tool(tool);
        self.preview.clear();
    }

    pub fn color(&self) -> MarkColor {
        self.style.color
    }

    /// Select a color. An active gesture picks it up on its next preview
    /// redraw and commits with it.
    pub fn set_color(&mut self, color: MarkColor) {
        self.style.color = color;
        self.redraw_preview();
    }

    pub fn thickness(&self) -> Thickness {
        self.style.thickness
    }

    /// Select a thickness. Applies live, like [`Self::set_color`].
    pub fn set_thickness(&mut self, thickness: Thickness) {
        self.style.thickness = thickness;
        self.redraw_preview();
    }

    /// Whether the undo action is currently available.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Revert the most recent commit. No-op when history is empty.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.committed);
        if undone {
            log::info!("undo: {} history entries left", self.history.len());
        }
        undone
    }

    /// Wipe the committed surface and the history, and drop any active
    /// gesture along with its preview.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.history.clear();
        self.preview.clear();
        self.tracker.cancel();
        log::info!("cleared all annotations");
    }

    /// Whether the text sub-dialog is awaiting input.
    pub fn is_text_pending(&self) -> bool {
        self.text_anchor.is_some()
    }

    // --- pointer sequencing ---

    /// Feed a raw pointer event, mapping its client coordinates through
    /// the canvas bounds. Events whose coordinates cannot be mapped (an
    /// empty touch list) are dropped.
    pub fn handle_pointer(&mut self, event: &PointerEvent, bounds: CanvasBounds) {
        if event.phase == PointerPhase::Leave {
            self.pointer_leave();
            return;
        }
        let Some(point) = bounds.map(&event.source) else {
            log::debug!("pointer event with no mappable point dropped");
            return;
        };
        match event.phase {
            PointerPhase::Down => self.pointer_down(point),
            PointerPhase::Move => self.pointer_move(point),
            PointerPhase::Up => self.pointer_up(point),
            PointerPhase::Leave => unreachable!(),
        }
    }

    /// Pointer pressed at a canvas-local point.
    pub fn pointer_down(&mut self, point: Point) {
        // The text sub-dialog is modal.
        if self.text_anchor.is_some() {
            return;
        }
        if self.tracker.current_tool == Tool::Text {
            log::debug!("text anchor placed at {point:?}");
            self.text_anchor = Some(point);
            return;
        }
        self.tracker.begin(point);
    }

    /// Pointer moved to a canvas-local point.
    pub fn pointer_move(&mut self, point: Point) {
        if !self.tracker.is_active() {
            return;
        }
        self.tracker.update(point);
        self.redraw_preview();
    }

    /// Pointer released at a canvas-local point.
    pub fn pointer_up(&mut self, point: Point) {
        let shape = self.tracker.end(point);
        self.preview.clear();
        if let Some(shape) = shape {
            self.commit(&shape);
        }
    }

    /// Pointer left the canvas: ends the gesture exactly like a release
    /// at its last known position.
    pub fn pointer_leave(&mut self) {
        if let GestureState::Active { current, .. } = self.tracker.state() {
            self.pointer_up(current);
        }
    }

    // --- text sub-dialog ---

    /// Confirm the text sub-dialog. Whitespace-only input is an implicit
    /// cancel. Returns whether a label was committed.
    pub fn submit_text(&mut self, content: &str) -> bool {
        let Some(anchor) = self.text_anchor.take() else {
            return false;
        };
        let trimmed = content.trim();
        if trimmed.is_empty() {
            log::debug!("blank text submission treated as cancel");
            return false;
        }
        self.commit(&Shape::Label {
            anchor,
            content: trimmed.to_string(),
        });
        true
    }

    /// Dismiss the text sub-dialog without drawing anything.
    pub fn cancel_text(&mut self) {
        self.text_anchor = None;
    }

    // --- export ---

    /// Flatten the original bitmap and the committed annotations into one
    /// PNG and hand it to the sink. The sink is not invoked on failure.
    pub fn save<F: FnOnce(&[u8])>(&self, sink: F) -> Result<(), SessionError> {
        let raster = export::flatten(&self.original, &self.committed, self.dims);
        let data = export::encode_png(&raster).inspect_err(|e| {
            log::error!("flatten/export failed: {e}");
        })?;
        log::info!(
            "saved {}x{} annotated image ({} bytes)",
            self.dims.width,
            self.dims.height,
            data.len()
        );
        sink(&data);
        Ok(())
    }

    /// Abandon the session, signalling the caller's cancel sink. Nothing
    /// is persisted and all buffers are released.
    pub fn cancel<F: FnOnce()>(self, sink: F) {
        log::info!("annotation session cancelled");
        drop(self);
        sink();
    }

    // --- internals ---

    fn redraw_preview(&mut self) {
        self.preview.clear();
        // Style is read at redraw time, so changing color or thickness
        // mid-gesture updates the preview immediately.
        if let Some(shape) = self.tracker.preview_shape() {
            self.preview.draw(&shape, &self.style, &self.font);
        }
    }

    fn commit(&mut self, shape: &Shape) {
        self.history.push(self.committed.snapshot());
        self.committed.draw(shape, &self.style, &self.font);
        log::debug!(
            "committed mark with {:?}, history depth {}",
            self.tracker.current_tool,
            self.history.len()
        );
    }
}
