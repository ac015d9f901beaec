//! Headless display-list backend.

use kurbo::{Affine, BezPath, Point};
use scrawl_core::{Sketch, SketchBackend, TextMetrics};

/// Canvas font size, in logical pixels.
pub const FONT_SIZE: f64 = 24.0;
/// Average glyph advance as a fraction of the font size. Keeps measurement
/// deterministic without loading a font.
pub const CHAR_WIDTH_FACTOR: f64 = 0.6;

/// One recorded paint call, in screen coordinates.
#[derive(Debug, Clone)]
pub enum PaintOp {
    /// Stroke a path (line and rectangle sketches).
    Stroke(BezPath),
    /// Fill a path (freehand outlines).
    Fill(BezPath),
    /// Draw a text run with its top-left corner at `origin`.
    Text { content: String, origin: Point },
}

/// An ordered frame of paint calls, ready for any rasterizer to replay.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    pub ops: Vec<PaintOp>,
}

impl DisplayList {
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// A [`SketchBackend`] that records paint calls instead of rasterizing.
///
/// Sketches are built in logical coordinates; the viewport transform is
/// applied when they are painted, so a stored sketch stays valid across
/// pan and zoom changes.
#[derive(Debug, Default)]
pub struct DisplayListBackend {
    transform: Affine,
    list: DisplayList,
}

impl DisplayListBackend {
    /// Backend with an identity transform, for logical-space output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend painting under a viewport transform.
    pub fn with_transform(transform: Affine) -> Self {
        Self {
            transform,
            list: DisplayList::default(),
        }
    }

    /// Take the recorded frame.
    pub fn finish(self) -> DisplayList {
        self.list
    }

    fn to_screen(&self, path: &BezPath) -> BezPath {
        let mut screen = path.clone();
        screen.apply_affine(self.transform);
        screen
    }
}

impl SketchBackend for DisplayListBackend {
    fn line_sketch(&mut self, start: Point, end: Point) -> Sketch {
        let mut path = BezPath::new();
        path.move_to(start);
        path.line_to(end);
        Sketch::new(path)
    }

    fn rect_sketch(&mut self, origin: Point, width: f64, height: f64) -> Sketch {
        let mut path = BezPath::new();
        path.move_to(origin);
        path.line_to(Point::new(origin.x + width, origin.y));
        path.line_to(Point::new(origin.x + width, origin.y + height));
        path.line_to(Point::new(origin.x, origin.y + height));
        path.close_path();
        Sketch::new(path)
    }

    /// Closed loop of quadratics through segment midpoints, with the raw
    /// points as control points. Wraps around, so even a two-point stroke
    /// encloses a fillable sliver.
    fn outline_from_points(&mut self, points: &[Point]) -> BezPath {
        let mut path = BezPath::new();
        let Some(first) = points.first() else {
            return path;
        };
        path.move_to(*first);
        for (i, point) in points.iter().enumerate() {
            let next = points[(i + 1) % points.len()];
            path.quad_to(*point, point.midpoint(next));
        }
        path.close_path();
        path
    }

    fn measure_text(&mut self, text: &str) -> TextMetrics {
        let lines = text.lines().count().max(1);
        let longest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        TextMetrics {
            width: longest as f64 * FONT_SIZE * CHAR_WIDTH_FACTOR,
            height: lines as f64 * FONT_SIZE,
        }
    }

    fn paint(&mut self, sketch: &Sketch) {
        let screen = self.to_screen(sketch.path());
        self.list.ops.push(PaintOp::Stroke(screen));
    }

    fn fill_path(&mut self, outline: &BezPath) {
        let screen = self.to_screen(outline);
        self.list.ops.push(PaintOp::Fill(screen));
    }

    fn draw_text(&mut self, text: &str, origin: Point) {
        self.list.ops.push(PaintOp::Text {
            content: text.to_string(),
            origin: self.transform * origin,
        });
    }
}
