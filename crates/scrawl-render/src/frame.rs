//! Whole-frame rendering.

use kurbo::Size;
use scrawl_core::{Document, ElementId, Viewport, draw_element};

use crate::display_list::{DisplayList, DisplayListBackend};

/// Record one frame of the document as a display list.
///
/// Refreshes the viewport's scale offset for the given canvas size, then
/// replays every element in ascending id order under the viewport
/// transform. The element named by `writing` is skipped; a text overlay
/// covers it until its content commits. Recomputes everything from current
/// state, so calling it twice yields the same frame.
pub fn render_frame(
    document: &Document,
    viewport: &mut Viewport,
    writing: Option<ElementId>,
    canvas: Size,
) -> DisplayList {
    viewport.refresh_scale_offset(canvas);
    let mut backend = DisplayListBackend::with_transform(viewport.transform());

    for element in document.iter() {
        if writing == Some(element.id()) {
            continue;
        }
        draw_element(element, &mut backend);
    }

    backend.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_list::PaintOp;
    use kurbo::{PathEl, Point};
    use scrawl_core::{ElementKind, SketchBackend, create_element};

    fn canvas() -> Size {
        Size::new(800.0, 600.0)
    }

    fn sample_document() -> Document {
        let mut backend = DisplayListBackend::new();
        let mut document = Document::new();
        document.push(create_element(
            0,
            Point::new(0.0, 0.0),
            Point::new(40.0, 40.0),
            ElementKind::Rectangle,
            &mut backend,
        ));
        let mut stroke = create_element(
            1,
            Point::new(5.0, 5.0),
            Point::new(5.0, 5.0),
            ElementKind::Pencil,
            &mut backend,
        );
        if let scrawl_core::Element::Pencil(pencil) = &mut stroke {
            pencil.push_point(Point::new(9.0, 9.0));
        }
        document.push(stroke);
        document
    }

    #[test]
    fn test_frame_records_one_op_per_element() {
        let document = sample_document();
        let mut viewport = Viewport::new();

        let frame = render_frame(&document, &mut viewport, None, canvas());

        assert_eq!(frame.len(), 2);
        assert!(matches!(frame.ops[0], PaintOp::Stroke(_)));
        assert!(matches!(frame.ops[1], PaintOp::Fill(_)));
    }

    #[test]
    fn test_frame_skips_element_under_edit() {
        let mut backend = DisplayListBackend::new();
        let mut document = Document::new();
        document.push(create_element(
            0,
            Point::new(10.0, 10.0),
            Point::new(10.0, 10.0),
            ElementKind::Text,
            &mut backend,
        ));
        let mut viewport = Viewport::new();

        let hidden = render_frame(&document, &mut viewport, Some(0), canvas());
        assert!(hidden.is_empty());

        let shown = render_frame(&document, &mut viewport, None, canvas());
        assert_eq!(shown.len(), 1);
        assert!(matches!(shown.ops[0], PaintOp::Text { .. }));
    }

    #[test]
    fn test_frame_is_idempotent() {
        let document = sample_document();
        let mut viewport = Viewport::new();
        viewport.pan(kurbo::Vec2::new(13.0, -7.0));
        viewport.zoom(0.5);

        let first = render_frame(&document, &mut viewport, None, canvas());
        let second = render_frame(&document, &mut viewport, None, canvas());

        assert_eq!(first.len(), second.len());
        let starts = |frame: &DisplayList| match &frame.ops[0] {
            PaintOp::Stroke(path) => match path.elements().first() {
                Some(PathEl::MoveTo(p)) => *p,
                other => panic!("unexpected first element: {other:?}"),
            },
            other => panic!("unexpected op: {other:?}"),
        };
        assert_eq!(starts(&first), starts(&second));
    }

    #[test]
    fn test_frame_applies_viewport_transform() {
        let mut backend = DisplayListBackend::new();
        let mut document = Document::new();
        let mut text = create_element(
            0,
            Point::new(10.0, 20.0),
            Point::new(10.0, 20.0),
            ElementKind::Text,
            &mut backend,
        );
        let metrics = backend.measure_text("hi");
        if let scrawl_core::Element::Text(t) = &mut text {
            t.content = "hi".to_string();
            t.corner = t.anchor + kurbo::Vec2::new(metrics.width, metrics.height);
        }
        document.push(text);

        let mut viewport = Viewport::new();
        viewport.pan(kurbo::Vec2::new(100.0, 0.0));

        let frame = render_frame(&document, &mut viewport, None, canvas());

        // At scale 1 the transform is a pure pan.
        let Some(PaintOp::Text { origin, .. }) = frame.ops.first() else {
            panic!("expected a text op");
        };
        assert_eq!(*origin, Point::new(110.0, 20.0));
    }
}
