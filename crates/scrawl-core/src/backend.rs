//! The boundary between the engine and whatever paints it.
//!
//! The engine never rasterizes. It asks a [`SketchBackend`] for opaque
//! drawables and text metrics while elements are built, and replays those
//! drawables through the same backend when a frame is painted.

use kurbo::{BezPath, Point};

use crate::elements::Element;

/// Opaque drawable handle built for line and rectangle elements.
///
/// Backends construct and consume these; the engine only stores and
/// clones them alongside the element coordinates.
#[derive(Debug, Clone, Default)]
pub struct Sketch(BezPath);

impl Sketch {
    /// Wrap a finished path.
    pub fn new(path: BezPath) -> Self {
        Self(path)
    }

    /// The path handed back at paint time.
    pub fn path(&self) -> &BezPath {
        &self.0
    }
}

/// Measured extent of a text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

/// Capabilities the engine borrows from its rendering collaborator.
///
/// Construction and painting share one trait so a backend can keep its
/// generator state (roughness seeds, font caches) in one place. All
/// coordinates are logical space; the backend owns any screen transform.
pub trait SketchBackend {
    /// Build the drawable for a line between two points.
    fn line_sketch(&mut self, start: Point, end: Point) -> Sketch;

    /// Build the drawable for a rectangle from its origin corner and raw
    /// width/height. Either may be negative when the drag ran up or left.
    fn rect_sketch(&mut self, origin: Point, width: f64, height: f64) -> Sketch;

    /// Expand a freehand point sequence into a fillable outline.
    fn outline_from_points(&mut self, points: &[Point]) -> BezPath;

    /// Measure a text run at the canvas font.
    fn measure_text(&mut self, text: &str) -> TextMetrics;

    /// Stroke a previously built sketch onto the active surface.
    fn paint(&mut self, sketch: &Sketch);

    /// Fill an outline produced by [`SketchBackend::outline_from_points`].
    fn fill_path(&mut self, outline: &BezPath);

    /// Draw a text run with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point);
}

/// Paint one element through the backend primitives.
///
/// Lines and rectangles replay their stored sketch; pencil strokes are
/// outlined and filled; text is drawn at its anchor.
pub fn draw_element(element: &Element, backend: &mut dyn SketchBackend) {
    match element {
        Element::Line(line) => backend.paint(&line.sketch),
        Element::Rectangle(rect) => backend.paint(&rect.sketch),
        Element::Pencil(pencil) => {
            let outline = backend.outline_from_points(&pencil.points);
            backend.fill_path(&outline);
        }
        Element::Text(text) => backend.draw_text(&text.content, text.anchor),
    }
}
