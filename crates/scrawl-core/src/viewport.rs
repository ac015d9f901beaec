//! Pan/zoom mapping between screen and logical space.

use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Smallest zoom factor.
pub const MIN_SCALE: f64 = 0.5;
/// Largest zoom factor.
pub const MAX_SCALE: f64 = 20.0;

/// Pan/zoom state mapping screen pixels to logical document space.
///
/// `scale_offset` keeps zoom anchored at the canvas center. It is derived
/// from the canvas size once per render pass, so pointer math between a
/// canvas resize and the next frame still uses the previous offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Pan offset in logical units, applied before scaling.
    pub pan_offset: Vec2,
    /// Zoom factor, within [`MIN_SCALE`]..=[`MAX_SCALE`].
    pub scale: f64,
    /// Center-anchoring correction, in screen units.
    pub scale_offset: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan_offset: Vec2::ZERO,
            scale: 1.0,
            scale_offset: Vec2::ZERO,
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen to logical: undo the pan and center correction, then divide
    /// out the zoom.
    pub fn to_logical(&self, screen: Point) -> Point {
        self.inverse_transform() * screen
    }

    /// Logical to screen; the inverse of [`Viewport::to_logical`]. Shells
    /// use this to place the text-edit overlay.
    pub fn to_screen(&self, logical: Point) -> Point {
        self.transform() * logical
    }

    /// Affine carrying logical space onto the screen.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.pan_offset * self.scale - self.scale_offset)
            * Affine::scale(self.scale)
    }

    /// Affine carrying the screen back into logical space.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.scale)
            * Affine::translate(self.scale_offset - self.pan_offset * self.scale)
    }

    /// Shift the pan offset. Unclamped.
    pub fn pan(&mut self, delta: Vec2) {
        self.pan_offset += delta;
    }

    /// Nudge the zoom factor, clamped to the valid range.
    pub fn zoom(&mut self, delta: f64) {
        self.scale = (self.scale + delta).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Back to identity: no pan, 1:1 zoom.
    pub fn reset(&mut self) {
        self.pan_offset = Vec2::ZERO;
        self.scale = 1.0;
    }

    /// Recompute the center-anchoring correction for the current canvas
    /// size. Called once per render pass, before painting.
    pub fn refresh_scale_offset(&mut self, canvas: Size) {
        self.scale_offset = Vec2::new(
            (canvas.width * self.scale - canvas.width) / 2.0,
            (canvas.height * self.scale - canvas.height) / 2.0,
        );
    }
}
