//! SiteMark Core Library
//!
//! Platform-agnostic types and gesture logic for the SiteMark photo
//! annotation engine.

pub mod gesture;
pub mod input;
pub mod palette;
pub mod shapes;

pub use gesture::{GestureState, GestureTracker};
pub use input::{CanvasBounds, PointerEvent, PointerPhase, PointerSource};
pub use palette::{MarkColor, PaintStyle, Thickness, Tool};
pub use shapes::Shape;
