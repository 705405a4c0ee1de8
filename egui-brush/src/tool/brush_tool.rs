use egui::{Color32, Painter, Shape, Stroke, StrokeKind};
use emath::{Pos2, RectTransform};

use crate::{
    rect_of, tool::classify_press, Action, Brush, BrushConfig, BrushSession, Dimensions,
    PointerCapture, PointerEvent, ToolContext,
};

const SELECTION_FILL: Color32 = Color32::from_rgba_premultiplied(40, 40, 60, 40);

#[derive(Debug, Default)]
pub struct BrushTool {
    session: BrushSession,
    capture: Option<PointerCapture>,
    gestures: u64,
}

impl BrushTool {
    pub fn new(config: BrushConfig) -> Self {
        Self {
            session: BrushSession::new(config),
            capture: None,
            gestures: 0,
        }
    }

    pub fn session(&self) -> &BrushSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut BrushSession {
        &mut self.session
    }

    pub fn is_capturing(&self) -> bool {
        self.capture.is_some()
    }

    /// Feeds this frame's pointer events into the session.
    /// Returns the selection if a gesture was committed.
    pub fn handle_interaction(&mut self, ctx: ToolContext) -> Option<Dimensions> {
        PointerEvent::collect(ctx.response, self.is_capturing())
            .into_iter()
            .filter_map(|event| self.handle_event(event, &ctx.to_brush))
            .last()
    }

    pub fn handle_event(
        &mut self,
        event: PointerEvent,
        to_brush: &RectTransform,
    ) -> Option<Dimensions> {
        match event {
            PointerEvent::Pressed(pos) => {
                let point = to_brush.transform_pos(pos);
                let drag_mode = self.session.config().drag_mode;
                let action = classify_press(self.session.brush(), point, drag_mode);
                if self.session.dispatch(action).is_open() {
                    self.gestures += 1;
                    self.capture = Some(PointerCapture::acquire(self.gestures, pos));
                }
                None
            }
            PointerEvent::Moved(pos) => {
                let moved = self.capture.as_mut().and_then(|c| c.track(pos));
                if let Some(pos) = moved {
                    let point = to_brush.transform_pos(pos);
                    self.session.dispatch(Action::PointerMove(point));
                }
                None
            }
            PointerEvent::Released => self.finish(Action::PointerUp),
            PointerEvent::Left => self.finish(Action::PointerLeave),
        }
    }

    fn finish(&mut self, action: Action) -> Option<Dimensions> {
        let capture = self.capture.take()?;
        capture.release();
        match *self.session.dispatch(action) {
            Brush::Closed { selection } => Some(selection),
            _ => None,
        }
    }

    /// Draws bounds and selection. `to_screen` maps brush space to screen space.
    pub fn paint(&self, painter: &Painter, to_screen: &RectTransform) {
        if let Some(bounds) = self.session.config().bounds() {
            let r = to_screen.transform_rect(bounds.to_emath());
            draw_dotted_rect(painter, r.min, r.max, Color32::GRAY);
        }

        let brush = self.session.brush();
        let rect = to_screen.transform_rect(rect_of(&brush.dimensions()).to_emath());
        if !brush.is_open() && rect.area() <= 0.0 {
            return;
        }
        let color = if brush.is_open() {
            Color32::YELLOW
        } else {
            Color32::WHITE
        };
        painter.rect(
            rect,
            0.0,
            SELECTION_FILL,
            Stroke::new(1.0, color),
            StrokeKind::Inside,
        );
    }
}

fn draw_dotted_rect(painter: &Painter, min: Pos2, max: Pos2, color: Color32) {
    let path = [
        min,
        Pos2::new(max.x, min.y),
        max,
        Pos2::new(min.x, max.y),
        min,
    ];
    painter.extend(Shape::dashed_line(&path, Stroke::new(1.0, color), 4.0, 4.0));
}

#[cfg(test)]
mod tests {
    use egui::{Event, Modifiers, PointerButton, RawInput, Sense};
    use emath::{pos2, vec2, Rect};

    use crate::{Bounds, Phase};

    use super::*;

    /// Runs the tool inside a real egui context, one widget per frame.
    struct Frames {
        ctx: egui::Context,
        tool: BrushTool,
        time: f64,
    }

    impl Frames {
        fn new() -> Self {
            Self {
                ctx: egui::Context::default(),
                tool: BrushTool::default(),
                time: 0.0,
            }
        }

        fn run(&mut self, events: Vec<Event>) -> Option<Dimensions> {
            self.time += 1.0 / 60.0;
            let input = RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(400.0, 400.0))),
                time: Some(self.time),
                events,
                ..Default::default()
            };
            let tool = &mut self.tool;
            let mut committed = None;
            let _ = self.ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let (_, response) =
                        ui.allocate_exact_size(vec2(200.0, 200.0), Sense::click_and_drag());
                    let to_brush = RectTransform::identity(response.rect);
                    committed = tool.handle_interaction(ToolContext::new(&response, to_brush));
                });
            });
            committed
        }

        fn idle(&mut self, frames: usize) {
            for _ in 0..frames {
                self.time += 0.5;
                assert_eq!(None, self.run(vec![]));
            }
        }
    }

    fn moved(x: f32, y: f32) -> Event {
        Event::PointerMoved(pos2(x, y))
    }

    fn button(x: f32, y: f32, pressed: bool) -> Event {
        Event::PointerButton {
            pos: pos2(x, y),
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    fn identity() -> RectTransform {
        RectTransform::identity(Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0)))
    }

    fn half_scale() -> RectTransform {
        RectTransform::from_to(
            Rect::from_min_max(pos2(0.0, 0.0), pos2(200.0, 200.0)),
            Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0)),
        )
    }

    #[test]
    fn press_move_release_commits_in_brush_space() {
        let mut tool = BrushTool::default();
        let t = half_scale();
        assert_eq!(None, tool.handle_event(PointerEvent::Pressed(pos2(20.0, 40.0)), &t));
        assert!(tool.is_capturing());
        tool.handle_event(PointerEvent::Moved(pos2(60.0, 80.0)), &t);
        let committed = tool.handle_event(PointerEvent::Released, &t);
        assert_eq!(
            Some(Dimensions::new(pos2(10.0, 20.0), pos2(30.0, 40.0))),
            committed
        );
        assert!(!tool.is_capturing());
    }

    #[test]
    fn release_without_capture_is_ignored() {
        let mut tool = BrushTool::default();
        assert_eq!(None, tool.handle_event(PointerEvent::Released, &identity()));
        assert_eq!(None, tool.handle_event(PointerEvent::Left, &identity()));
        assert_eq!(0, tool.session().history().iter().count());
    }

    #[test]
    fn moves_without_capture_are_ignored() {
        let mut tool = BrushTool::default();
        tool.handle_event(PointerEvent::Moved(pos2(5.0, 5.0)), &identity());
        assert_eq!(Brush::initial(), *tool.session().brush());
    }

    #[test]
    fn leaving_the_window_commits() {
        let mut tool = BrushTool::default();
        let t = identity();
        tool.handle_event(PointerEvent::Pressed(pos2(1.0, 1.0)), &t);
        tool.handle_event(PointerEvent::Moved(pos2(4.0, 5.0)), &t);
        assert_eq!(
            Some(Dimensions::new(pos2(1.0, 1.0), pos2(4.0, 5.0))),
            tool.handle_event(PointerEvent::Left, &t)
        );
    }

    #[test]
    fn press_inside_selection_drags_it() {
        let config = BrushConfig::default()
            .with_drag_mode(true)
            .with_bounds(Bounds::new(0.0, 100.0, 0.0, 100.0));
        let mut tool = BrushTool::new(config);
        let t = identity();
        tool.handle_event(PointerEvent::Pressed(pos2(10.0, 10.0)), &t);
        tool.handle_event(PointerEvent::Moved(pos2(30.0, 30.0)), &t);
        tool.handle_event(PointerEvent::Released, &t);

        tool.handle_event(PointerEvent::Pressed(pos2(20.0, 20.0)), &t);
        assert!(matches!(
            tool.session().brush(),
            Brush::Dragging {
                phase: Phase::Start,
                ..
            }
        ));
        tool.handle_event(PointerEvent::Moved(pos2(25.0, 15.0)), &t);
        assert_eq!(
            Some(Dimensions::new(pos2(15.0, 5.0), pos2(35.0, 25.0))),
            tool.handle_event(PointerEvent::Released, &t)
        );
    }

    #[test]
    fn move_after_resting_pointer_reaches_the_brush() {
        let mut frames = Frames::new();
        frames.run(vec![moved(50.0, 50.0)]);
        frames.run(vec![button(50.0, 50.0, true)]);
        assert!(frames.tool.is_capturing());
        frames.idle(3);
        assert_eq!(None, frames.run(vec![moved(120.0, 90.0)]));
        assert_eq!(
            Some(Dimensions::new(pos2(50.0, 50.0), pos2(120.0, 90.0))),
            frames.run(vec![button(120.0, 90.0, false)])
        );
    }

    #[test]
    fn release_outside_widget_commits() {
        let mut frames = Frames::new();
        frames.run(vec![moved(50.0, 50.0)]);
        frames.run(vec![button(50.0, 50.0, true)]);
        frames.run(vec![moved(350.0, 350.0)]);
        assert_eq!(
            Some(Dimensions::new(pos2(50.0, 50.0), pos2(350.0, 350.0))),
            frames.run(vec![button(350.0, 350.0, false)])
        );
        assert!(!frames.tool.is_capturing());
        assert_eq!(1, frames.tool.session().history().iter().count());
    }

    #[test]
    fn pointer_gone_from_window_commits() {
        let mut frames = Frames::new();
        frames.run(vec![moved(50.0, 50.0)]);
        frames.run(vec![button(50.0, 50.0, true)]);
        frames.run(vec![moved(80.0, 70.0)]);
        assert_eq!(
            Some(Dimensions::new(pos2(50.0, 50.0), pos2(80.0, 70.0))),
            frames.run(vec![Event::PointerGone])
        );
        assert!(!frames.tool.is_capturing());
    }

    #[test]
    fn press_outside_widget_is_ignored() {
        let mut frames = Frames::new();
        frames.run(vec![moved(300.0, 300.0)]);
        frames.run(vec![button(300.0, 300.0, true)]);
        assert!(!frames.tool.is_capturing());
        assert_eq!(Brush::initial(), *frames.tool.session().brush());
    }
}
