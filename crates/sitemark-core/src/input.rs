//! Pointer input normalization for unified mouse/touch handling.
//!
//! Mouse and touch events are adapted into a single canvas-local `Point`
//! before they reach the gesture tracker, so there is exactly one gesture
//! code path.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Where a pointer event came from, with screen (client) coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerSource {
    /// Mouse event with a single client position.
    Mouse { client: Point },
    /// Touch event with zero or more active touch points.
    Touch { points: Vec<Point> },
}

/// Pointer event phase. Leaving the canvas ends a gesture like a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Leave,
}

/// A raw pointer event as delivered by the embedding UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub source: PointerSource,
}

impl PointerEvent {
    pub fn mouse(phase: PointerPhase, client: Point) -> Self {
        Self {
            phase,
            source: PointerSource::Mouse { client },
        }
    }

    pub fn touch(phase: PointerPhase, points: Vec<Point>) -> Self {
        Self {
            phase,
            source: PointerSource::Touch { points },
        }
    }
}

/// On-screen origin of the canvas, used to translate client coordinates
/// into canvas-local space. The canvas's logical pixel size equals its
/// displayed size, so translation is the only correction needed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub left: f64,
    pub top: f64,
}

impl CanvasBounds {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Map a pointer source to a canvas-local point.
    ///
    /// Touch events use the first touch point; an empty touch list yields
    /// `None` and the caller drops that gesture step.
    pub fn map(&self, source: &PointerSource) -> Option<Point> {
        let client = match source {
            PointerSource::Mouse { client } => *client,
            PointerSource::Touch { points } => *points.first()?,
        };
        Some(Point::new(client.x - self.left, client.y - self.top))
    }
}
