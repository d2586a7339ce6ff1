//! Gesture tracking: sequences pointer-down/move/up into shapes.

use crate::palette::Tool;
use crate::shapes::Shape;
use kurbo::Point;

/// State of the in-progress gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Pointer is down and dragging.
    Active {
        /// Point where the gesture started.
        start: Point,
        /// Most recent pointer position.
        current: Point,
    },
}

/// Tracks the active tool and the current gesture, producing a [`Shape`]
/// when a gesture completes.
///
/// The text tool never enters the tracker; the session records the anchor
/// and collects the string through its sub-dialog instead.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    /// Currently selected tool.
    pub current_tool: Tool,
    /// Current gesture state.
    state: GestureState,
    /// Points sampled during an active pen gesture.
    pen_points: Vec<Point>,
}

impl GestureTracker {
    /// Create a new tracker with the default tool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current tool, cancelling any gesture in progress.
    pub fn set_tool(&mut self, tool: Tool) {
        self.current_tool = tool;
        self.cancel();
    }

    /// Begin a gesture at `point`. Ignored for the text tool.
    pub fn begin(&mut self, point: Point) {
        if !self.current_tool.is_drawing() {
            log::debug!("begin ignored for non-drawing tool {:?}", self.current_tool);
            return;
        }
        if self.current_tool == Tool::Pen {
            self.pen_points.clear();
            self.pen_points.push(point);
        }
        self.state = GestureState::Active {
            start: point,
            current: point,
        };
    }

    /// Update the gesture with a new pointer position.
    pub fn update(&mut self, point: Point) {
        if let GestureState::Active { current, .. } = &mut self.state {
            *current = point;
            if self.current_tool == Tool::Pen {
                self.pen_points.push(point);
            }
        }
    }

    /// End the gesture and return the committed shape, if any.
    ///
    /// A gesture that was never begun, or a pen gesture with fewer than
    /// two sampled points, produces nothing.
    pub fn end(&mut self, point: Point) -> Option<Shape> {
        let GestureState::Active { start, .. } = self.state else {
            return None;
        };
        let shape = self.make_shape(start, point);
        self.state = GestureState::Idle;
        self.pen_points.clear();
        shape
    }

    /// Drop the gesture without producing a shape.
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
        self.pen_points.clear();
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.state, GestureState::Active { .. })
    }

    /// Current gesture state.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// The shape implied by the gesture so far, for the preview overlay.
    pub fn preview_shape(&self) -> Option<Shape> {
        let GestureState::Active { start, current } = self.state else {
            return None;
        };
        self.make_shape(start, current)
    }

    fn make_shape(&self, start: Point, end: Point) -> Option<Shape> {
        match self.current_tool {
            Tool::Arrow => Some(Shape::Arrow { start, end }),
            Tool::Circle => Some(Shape::circle_from_gesture(start, end)),
            Tool::Rectangle => Some(Shape::Rect { start, end }),
            Tool::Pen => {
                if self.pen_points.len() < 2 {
                    None
                } else {
                    Some(Shape::Stroke {
                        points: self.pen_points.clone(),
                    })
                }
            }
            Tool::Text => None,
        }
    }
}
