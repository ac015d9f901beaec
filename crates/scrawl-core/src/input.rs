//! Input-event objects fed to the editor by the application shell.
//!
//! The engine registers no listeners. The shell owns the event loop,
//! translates whatever windowing or DOM events it receives into these
//! records, and forwards them one at a time.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

use crate::geometry;

/// One pointer sample, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    /// Primary contact position.
    pub position: Point,
    /// Second contact position during two-finger gestures.
    pub second_touch: Option<Point>,
}

impl PointerInput {
    /// Single-contact sample (mouse, stylus, or one finger).
    pub fn single(position: Point) -> Self {
        Self {
            position,
            second_touch: None,
        }
    }

    /// Two-finger sample.
    pub fn two_finger(position: Point, second: Point) -> Self {
        Self {
            position,
            second_touch: Some(second),
        }
    }

    /// Distance between the two contacts, when both are present.
    pub fn pinch_distance(&self) -> Option<f64> {
        self.second_touch
            .map(|second| geometry::distance(self.position, second))
    }
}

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// The platform command chord: Ctrl on most systems, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Events the shell forwards to the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown(PointerInput),
    PointerMove(PointerInput),
    PointerUp(PointerInput),
    /// Wheel or trackpad scroll, in screen units.
    Scroll { delta: Vec2, modifiers: Modifiers },
    KeyDown { key: String, modifiers: Modifiers },
}
