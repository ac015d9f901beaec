//! Scrawl render library.
//!
//! A headless rendering backend for the Scrawl engine. Frames come out as
//! display lists of resolved screen-space paint calls, so tests and
//! embedders can inspect or rasterize them with whatever they have.

pub mod display_list;
pub mod frame;

pub use display_list::{DisplayList, DisplayListBackend, PaintOp};
pub use frame::render_frame;
