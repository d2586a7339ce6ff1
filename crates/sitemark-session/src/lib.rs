//! SiteMark annotation session.
//!
//! The embeddable composition layer: wires the gesture tracker, the
//! committed/preview surfaces and the undo history into one session type
//! the hosting UI drives with pointer events and toolbar actions.

mod session;

use sitemark_render::RenderError;
use thiserror::Error;

pub use session::{AnnotationSession, DEFAULT_MAX_WIDTH, SessionConfig};

// Re-export the types an embedding UI needs to drive a session.
pub use sitemark_core::{CanvasBounds, MarkColor, PointerEvent, PointerPhase, PointerSource, Thickness, Tool};
pub use sitemark_render::{ImageDimensions, Surface};

/// Session errors. Everything here is recoverable; the session can
/// always be abandoned via cancel.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Render(#[from] RenderError),
}
