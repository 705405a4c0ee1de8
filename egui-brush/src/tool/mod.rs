//! egui adapter around [`BrushSession`](crate::BrushSession).
//!
//! The adapter owns everything the core does not know about: mapping screen
//! positions into brush space, deciding whether a press hit the selection,
//! and keeping a gesture alive until the pointer is released anywhere.

mod brush_tool;
mod capture;

pub use brush_tool::*;
pub use capture::*;

use emath::{Pos2, RectTransform};

use crate::{dimensions_to_bounds, point_in_bounds, Action, Brush, Point};

#[non_exhaustive]
pub struct ToolContext<'a> {
    pub response: &'a egui::Response,
    /// Maps screen positions into the brush coordinate space
    pub to_brush: RectTransform,
}

impl<'a> ToolContext<'a> {
    pub fn new(response: &'a egui::Response, to_brush: RectTransform) -> Self {
        Self { response, to_brush }
    }
}

/// Pointer activity of a single frame, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(Pos2),
    Moved(Pos2),
    Released,
    /// The pointer left the window
    Left,
}

impl PointerEvent {
    /// Reads this frame's pointer events for `response`.
    ///
    /// Presses only count over the widget. Position and releases are read from
    /// the global input state while `capturing`, so a release outside the
    /// widget still ends the gesture. The latest position is reported every
    /// frame; [`PointerCapture::track`] drops the ones that did not change.
    pub fn collect(response: &egui::Response, capturing: bool) -> Vec<PointerEvent> {
        let hovered = response.hovered();
        response.ctx.input(|i| {
            let pointer = &i.pointer;
            let mut events = Vec::new();

            let pressed = hovered && pointer.primary_pressed();
            if pressed {
                if let Some(origin) = pointer.press_origin() {
                    events.push(PointerEvent::Pressed(origin));
                }
            }
            if !(capturing || pressed) {
                return events;
            }

            match pointer.latest_pos() {
                Some(pos) => events.push(PointerEvent::Moved(pos)),
                None => events.push(PointerEvent::Left),
            }
            if pointer.primary_released() {
                events.push(PointerEvent::Released);
            }
            events
        })
    }
}

/// Picks the action for a press at `point`.
/// A press strictly inside a closed selection moves it when drag mode is on.
pub fn classify_press(brush: &Brush, point: Point, drag_mode: bool) -> Action {
    match brush {
        Brush::Closed { selection }
            if drag_mode && point_in_bounds(&dimensions_to_bounds(selection), point) =>
        {
            Action::PointerDownInside(point)
        }
        _ => Action::PointerDown(point),
    }
}
