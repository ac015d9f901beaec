//! Interaction state machine tying documents, history, and the viewport together.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

use crate::backend::SketchBackend;
use crate::document::{Document, ElementUpdate};
use crate::elements::{Element, ElementId, ElementKind, create_element};
use crate::history::History;
use crate::input::{InputEvent, Modifiers, PointerInput};
use crate::viewport::Viewport;

/// Minimum inter-finger distance change, in screen units, before a pinch
/// adjusts the zoom.
pub const PINCH_THRESHOLD: f64 = 10.0;

/// Divisor converting a pinch distance delta into a scale delta.
pub const PINCH_ZOOM_DIVISOR: f64 = 1000.0;

/// Scale delta per screen unit of command-scroll.
const SCROLL_ZOOM_RATE: f64 = 0.01;

/// The shape the next pointer-down will create, or selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    Selection,
    Line,
    #[default]
    Rectangle,
    Pencil,
    Text,
}

impl Tool {
    /// The element kind this tool creates. `None` for selection.
    pub fn element_kind(&self) -> Option<ElementKind> {
        match self {
            Tool::Selection => None,
            Tool::Line => Some(ElementKind::Line),
            Tool::Rectangle => Some(ElementKind::Rectangle),
            Tool::Pencil => Some(ElementKind::Pencil),
            Tool::Text => Some(ElementKind::Text),
        }
    }
}

/// What the pointer is currently doing.
///
/// `Moving` and `Resizing` are reserved for element dragging; no transition
/// enters them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Action {
    #[default]
    None,
    Drawing,
    Writing,
    PanningZooming,
    Moving,
    Resizing,
}

/// The drawing-state engine: a document under history, a viewport, and the
/// pointer interaction state.
///
/// The editor registers no event listeners. The embedding shell translates
/// its own input into [`InputEvent`]s and forwards them to
/// [`Editor::handle_event`]; screen coordinates are converted to logical
/// space here and nowhere else.
#[derive(Debug)]
pub struct Editor {
    history: History<Document>,
    /// Pan, zoom, and center-anchoring state. Public so shells can feed it
    /// to rendering and refresh its scale offset per frame.
    pub viewport: Viewport,
    tool: Tool,
    action: Action,
    selected: Option<ElementId>,
    pan_start: Point,
    pinch_start: f64,
}

impl Editor {
    pub fn new() -> Self {
        Self {
            history: History::new(Document::new()),
            viewport: Viewport::new(),
            tool: Tool::default(),
            action: Action::None,
            selected: None,
            pan_start: Point::ZERO,
            pinch_start: 0.0,
        }
    }

    /// The current document snapshot.
    pub fn document(&self) -> &Document {
        self.history.current()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// The element currently being drawn or edited.
    pub fn selected_element(&self) -> Option<ElementId> {
        self.selected
    }

    /// The element under text edit, which rendering should skip while the
    /// overlay covers it.
    pub fn writing_element(&self) -> Option<ElementId> {
        (self.action == Action::Writing)
            .then_some(self.selected)
            .flatten()
    }

    /// Feeds one event through the state machine.
    pub fn handle_event(&mut self, event: InputEvent, backend: &mut dyn SketchBackend) {
        match event {
            InputEvent::PointerDown(input) => self.pointer_down(input, backend),
            InputEvent::PointerMove(input) => self.pointer_move(input, backend),
            InputEvent::PointerUp(_) => self.pointer_up(),
            InputEvent::Scroll { delta, modifiers } => self.scroll(delta, modifiers),
            InputEvent::KeyDown { key, modifiers } => self.key_down(&key, modifiers),
        }
    }

    /// Starts a gesture: two-finger pan/zoom, a hit test, or a new element.
    pub fn pointer_down(&mut self, input: PointerInput, backend: &mut dyn SketchBackend) {
        if self.action == Action::Writing {
            // The text overlay still owns input until it commits on blur.
            return;
        }

        if input.second_touch.is_some() {
            self.action = Action::PanningZooming;
            self.pan_start = input.position;
            self.pinch_start = input.pinch_distance().unwrap_or_default();
            return;
        }

        let logical = self.viewport.to_logical(input.position);

        match self.tool.element_kind() {
            None => {
                // Dragging elements around is not wired up, so the hit
                // result goes unused for now.
                let _ = self.document().element_at(logical);
            }
            Some(kind) => {
                let id = self.document().next_id();
                let element = create_element(id, logical, logical, kind, backend);
                let mut next = self.document().clone();
                next.push(element);
                self.history.commit(next);
                self.selected = Some(id);
                self.action = if kind == ElementKind::Text {
                    Action::Writing
                } else {
                    Action::Drawing
                };
            }
        }
    }

    /// Continues the active gesture: pans/zooms or extends the stroke.
    pub fn pointer_move(&mut self, input: PointerInput, backend: &mut dyn SketchBackend) {
        match self.action {
            Action::PanningZooming => {
                // Pan measures from gesture entry; the pinch baseline
                // resamples every move.
                self.viewport.pan(input.position - self.pan_start);

                if let Some(pinch) = input.pinch_distance() {
                    let delta = pinch - self.pinch_start;
                    if delta.abs() > PINCH_THRESHOLD {
                        self.viewport.zoom(delta / PINCH_ZOOM_DIVISOR);
                    }
                    self.pinch_start = pinch;
                }
            }
            Action::Drawing => {
                let Some(id) = self.selected else { return };
                let logical = self.viewport.to_logical(input.position);
                let update = match self.document().get(id) {
                    Some(Element::Line(line)) => ElementUpdate::Reshape {
                        start: line.start,
                        end: logical,
                    },
                    Some(Element::Rectangle(rect)) => ElementUpdate::Reshape {
                        start: rect.start,
                        end: logical,
                    },
                    Some(Element::Pencil(_)) => ElementUpdate::AppendPoint(logical),
                    Some(Element::Text(_)) | None => return,
                };
                self.amend_document(id, update, backend);
            }
            _ => {}
        }
    }

    /// Ends the active gesture. A two-finger gesture keeps the selection;
    /// finishing a stroke clears it. Text editing continues until blur.
    pub fn pointer_up(&mut self) {
        match self.action {
            Action::Writing => {}
            Action::PanningZooming => {
                self.action = Action::None;
            }
            _ => {
                self.action = Action::None;
                self.selected = None;
            }
        }
    }

    /// Wheel scroll: pans, or zooms while the command chord is held.
    pub fn scroll(&mut self, delta: Vec2, modifiers: Modifiers) {
        if modifiers.command() {
            self.viewport.zoom(-delta.y * SCROLL_ZOOM_RATE);
        } else {
            self.viewport.pan(-delta);
        }
    }

    /// Keyboard shortcuts: command-Z undoes, command-shift-Z redoes.
    pub fn key_down(&mut self, key: &str, modifiers: Modifiers) {
        if modifiers.command() && key.eq_ignore_ascii_case("z") {
            if modifiers.shift {
                self.redo();
            } else {
                self.undo();
            }
        }
    }

    /// Steps the document back one snapshot. Ignored while a gesture is in
    /// progress, so an active stroke cannot lose the snapshot it amends.
    pub fn undo(&mut self) -> bool {
        if self.action != Action::None {
            return false;
        }
        self.history.undo()
    }

    /// Steps the document forward one snapshot. Ignored while a gesture is
    /// in progress.
    pub fn redo(&mut self) -> bool {
        if self.action != Action::None {
            return false;
        }
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Records the text overlay's content when it loses focus. The only
    /// path that sets a Text element's final content.
    pub fn commit_text(&mut self, content: &str, backend: &mut dyn SketchBackend) {
        if self.action != Action::Writing {
            log::warn!("text commit outside of writing mode; dropped");
            return;
        }
        let Some(id) = self.selected.take() else {
            log::warn!("text commit with no element under edit; dropped");
            return;
        };
        self.action = Action::None;
        self.amend_document(id, ElementUpdate::SetText(content.to_string()), backend);
    }

    /// Applies an update as an overwriting commit, so a multi-event gesture
    /// lands as a single history entry.
    fn amend_document(
        &mut self,
        id: ElementId,
        update: ElementUpdate,
        backend: &mut dyn SketchBackend,
    ) {
        let mut next = self.document().clone();
        if let Err(err) = next.update_element(id, update, backend) {
            log::error!("dropping element update: {err}");
            return;
        }
        self.history.amend(next);
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
