//! Scrawl core library.
//!
//! A platform-agnostic engine for an interactive sketch canvas: the element
//! model, hit testing, the pan/zoom transform, snapshot history, and the
//! pointer state machine. The engine owns no window and no GPU; everything
//! that touches pixels goes through the [`backend::SketchBackend`] trait, so
//! the same document logic runs under any shell that can forward input
//! events and paint paths.

pub mod backend;
pub mod document;
pub mod editor;
pub mod elements;
pub mod geometry;
pub mod history;
pub mod input;
pub mod viewport;

pub use backend::{Sketch, SketchBackend, TextMetrics, draw_element};
pub use document::{Document, DocumentError, ElementUpdate};
pub use editor::{Action, Editor, Tool};
pub use elements::{
    Element, ElementId, ElementKind, Line, Pencil, Rectangle, Text, create_element,
};
pub use geometry::{HitPosition, distance, near_point, on_segment};
pub use history::History;
pub use input::{InputEvent, Modifiers, PointerInput};
pub use viewport::{MAX_SCALE, MIN_SCALE, Viewport};
