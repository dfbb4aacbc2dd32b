//! Drawing session: brush and colour selection, the mouse state machine and
//! the canvas it paints into.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use toybox_engine::coords::Vec2;
use toybox_engine::input::{
    InputEvent, InputSource, Key, MouseButton, MouseButtonState, PointerButtonEvent,
};

use crate::brush::{self, BrushMode, BrushParams};
use crate::canvas::Canvas;
use crate::palette::Swatch;

/// Primary mouse button state.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum DrawState {
    #[default]
    Idle,
    /// Button held; `anchor` is where the previous frame painted.
    Drawing { anchor: Vec2 },
}

/// Requests raised by one frame's key presses.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameOutcome {
    pub save_requested: bool,
    pub exit_requested: bool,
}

pub struct Session<R = StdRng> {
    canvas: Canvas,
    brush: BrushMode,
    swatch: Swatch,
    state: DrawState,
    params: BrushParams,
    rng: R,
}

impl Session<StdRng> {
    pub fn new(params: BrushParams) -> Self {
        Self::with_rng(params, StdRng::from_entropy())
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(params: BrushParams, rng: R) -> Self {
        Self {
            canvas: Canvas::new(),
            brush: BrushMode::default(),
            swatch: Swatch::default(),
            state: DrawState::Idle,
            params,
            rng,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn brush(&self) -> BrushMode {
        self.brush
    }

    pub fn swatch(&self) -> Swatch {
        self.swatch
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    /// Applies this frame's events in arrival order, then paints if the
    /// primary button is held.
    ///
    /// A press and release inside the same frame leave the session idle, so
    /// nothing is painted for them.
    pub fn update(&mut self, input: &impl InputSource) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();

        for ev in input.events() {
            match ev {
                InputEvent::PointerButton(PointerButtonEvent {
                    button: MouseButton::Left,
                    state,
                    pos,
                }) => match (state, pos) {
                    (MouseButtonState::Pressed, Some(pos)) => {
                        log::debug!("stroke start at {pos:?} with {:?}", self.brush);
                        self.state = DrawState::Drawing { anchor: Vec2::from(*pos) };
                    }
                    (MouseButtonState::Pressed, None) => {
                        log::debug!("ignoring press with no pointer position");
                    }
                    (MouseButtonState::Released, _) => self.end_stroke(),
                },
                // The release of a drag that leaves the window goes elsewhere.
                InputEvent::Focused(false) => self.end_stroke(),
                _ => {
                    if let Some(key) = ev.key_pressed() {
                        self.handle_key(key, &mut outcome);
                    }
                }
            }
        }

        if let DrawState::Drawing { anchor } = self.state {
            // Keep the anchor while the pointer is outside the window.
            if let Some(cursor) = input.cursor_position() {
                let cursor = Vec2::from(cursor);
                self.paint(anchor, cursor);
                self.state = DrawState::Drawing { anchor: cursor };
            }
        }

        outcome
    }

    fn end_stroke(&mut self) {
        if self.state != DrawState::Idle {
            log::debug!("stroke end, {} points on canvas", self.canvas.len());
            self.state = DrawState::Idle;
        }
    }

    fn handle_key(&mut self, key: Key, outcome: &mut FrameOutcome) {
        if let Some(brush) = BrushMode::from_key(key) {
            log::debug!("brush: {brush:?}");
            self.brush = brush;
        } else if let Some(swatch) = Swatch::from_key(key) {
            log::debug!("color: {swatch:?}");
            self.swatch = swatch;
        } else {
            match key {
                Key::C => {
                    log::debug!("clearing {} points", self.canvas.len());
                    self.canvas.clear();
                }
                Key::S => outcome.save_requested = true,
                Key::Escape => outcome.exit_requested = true,
                _ => {}
            }
        }
    }

    fn paint(&mut self, anchor: Vec2, cursor: Vec2) {
        let color = self.swatch.color();
        let p = self.params;
        match self.brush {
            BrushMode::Pencil => brush::line(&mut self.canvas, anchor, cursor, color),
            BrushMode::Spray => brush::spray(
                &mut self.canvas,
                cursor,
                p.spray_radius,
                p.spray_density,
                color,
                &mut self.rng,
            ),
            BrushMode::Star => brush::star(&mut self.canvas, cursor, p.star_size, color),
            BrushMode::Circle => brush::circle(&mut self.canvas, cursor, p.circle_radius, color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toybox_engine::input::{InputFrame, InputSnapshot, InputState, KeyState, PointerMoveEvent};

    /// One frame of input built through the real `InputState` bookkeeping.
    struct Frame<'s> {
        state: &'s mut InputState,
        frame: InputFrame,
    }

    impl<'s> Frame<'s> {
        fn new(state: &'s mut InputState) -> Self {
            Self { state, frame: InputFrame::default() }
        }

        fn push(mut self, ev: InputEvent) -> Self {
            self.state.apply_event(&mut self.frame, ev);
            self
        }

        fn key(self, key: Key) -> Self {
            self.push(InputEvent::Key { key, state: KeyState::Pressed, repeat: false })
                .push(InputEvent::Key { key, state: KeyState::Released, repeat: false })
        }

        fn move_to(self, x: f32, y: f32) -> Self {
            self.push(InputEvent::PointerMoved(PointerMoveEvent { x, y }))
        }

        /// Left button event at the current pointer position, the way the
        /// runtime translates it.
        fn button(self, state: MouseButtonState) -> Self {
            let pos = self.state.pointer_pos;
            self.push(InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state,
                pos,
            }))
        }

        fn run(self, session: &mut Session<StdRng>) -> FrameOutcome {
            session.update(&InputSnapshot::new(self.state, &self.frame))
        }
    }

    fn session() -> Session<StdRng> {
        Session::with_rng(BrushParams::default(), StdRng::seed_from_u64(3))
    }

    #[test]
    fn starts_idle_with_pencil_and_black() {
        let s = session();
        assert_eq!(s.state(), DrawState::Idle);
        assert_eq!(s.brush(), BrushMode::Pencil);
        assert_eq!(s.swatch(), Swatch::Black);
        assert!(s.canvas().is_empty());
    }

    #[test]
    fn idle_frames_paint_nothing() {
        let mut input = InputState::default();
        let mut s = session();
        Frame::new(&mut input).move_to(10.0, 10.0).run(&mut s);
        Frame::new(&mut input).move_to(50.0, 10.0).run(&mut s);
        assert!(s.canvas().is_empty());
    }

    #[test]
    fn pencil_stroke_follows_the_pointer() {
        let mut input = InputState::default();
        let mut s = session();

        Frame::new(&mut input)
            .move_to(10.0, 10.0)
            .button(MouseButtonState::Pressed)
            .run(&mut s);
        assert_eq!(s.state(), DrawState::Drawing { anchor: Vec2::new(10.0, 10.0) });
        assert_eq!(s.canvas().len(), 1);

        Frame::new(&mut input).move_to(14.0, 10.0).run(&mut s);
        // Line from (10, 10) to (14, 10): five points, the first repeats the anchor.
        assert_eq!(s.canvas().len(), 6);
        assert_eq!(s.state(), DrawState::Drawing { anchor: Vec2::new(14.0, 10.0) });

        Frame::new(&mut input).button(MouseButtonState::Released).run(&mut s);
        assert_eq!(s.state(), DrawState::Idle);

        Frame::new(&mut input).move_to(40.0, 40.0).run(&mut s);
        assert_eq!(s.canvas().len(), 6);
    }

    #[test]
    fn stamp_brushes_use_the_cursor_not_the_anchor() {
        let mut input = InputState::default();
        let mut s = session();

        Frame::new(&mut input).key(Key::Digit3).move_to(5.0, 5.0).run(&mut s);
        Frame::new(&mut input)
            .button(MouseButtonState::Pressed)
            .move_to(100.0, 100.0)
            .run(&mut s);

        assert_eq!(s.brush(), BrushMode::Star);
        assert_eq!(s.canvas().len(), brush::STAR_POINTS);
        let center = Vec2::new(100.0, 100.0);
        assert!(s.canvas().points().iter().all(|p| (p.pos.distance(center) - 15.0).abs() < 1e-3));
    }

    #[test]
    fn spray_and_circle_emit_their_counts_each_frame() {
        let mut input = InputState::default();
        let mut s = session();

        Frame::new(&mut input)
            .key(Key::Digit2)
            .move_to(50.0, 50.0)
            .button(MouseButtonState::Pressed)
            .run(&mut s);
        assert_eq!(s.canvas().len(), 200);

        Frame::new(&mut input).key(Key::Digit4).run(&mut s);
        assert_eq!(s.canvas().len(), 200 + brush::CIRCLE_POINTS);
    }

    #[test]
    fn color_keys_apply_to_new_points() {
        let mut input = InputState::default();
        let mut s = session();

        Frame::new(&mut input)
            .key(Key::R)
            .move_to(1.0, 1.0)
            .button(MouseButtonState::Pressed)
            .run(&mut s);
        Frame::new(&mut input).key(Key::B).run(&mut s);

        let points = s.canvas().points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].color, Swatch::Red.color());
        assert_eq!(points[1].color, Swatch::Blue.color());
    }

    #[test]
    fn last_key_in_a_frame_wins() {
        let mut input = InputState::default();
        let mut s = session();
        Frame::new(&mut input)
            .key(Key::G)
            .key(Key::Y)
            .key(Key::Digit4)
            .key(Key::Digit2)
            .run(&mut s);
        assert_eq!(s.swatch(), Swatch::Yellow);
        assert_eq!(s.brush(), BrushMode::Spray);
    }

    #[test]
    fn key_repeat_is_ignored() {
        let mut input = InputState::default();
        let mut s = session();
        Frame::new(&mut input)
            .push(InputEvent::Key { key: Key::M, state: KeyState::Pressed, repeat: true })
            .run(&mut s);
        assert_eq!(s.swatch(), Swatch::Black);
    }

    #[test]
    fn clear_empties_the_canvas_mid_stroke() {
        let mut input = InputState::default();
        let mut s = session();

        Frame::new(&mut input)
            .move_to(0.0, 0.0)
            .button(MouseButtonState::Pressed)
            .run(&mut s);
        Frame::new(&mut input).move_to(10.0, 0.0).run(&mut s);
        assert!(!s.canvas().is_empty());

        // Clear is applied before this frame paints, so only the new segment remains.
        Frame::new(&mut input).key(Key::C).move_to(12.0, 0.0).run(&mut s);
        assert_eq!(s.canvas().len(), 3);
        assert_eq!(s.canvas().points()[0].pos, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn pointer_leaving_keeps_the_anchor() {
        let mut input = InputState::default();
        let mut s = session();

        Frame::new(&mut input)
            .move_to(20.0, 20.0)
            .button(MouseButtonState::Pressed)
            .run(&mut s);
        let before = s.canvas().len();

        Frame::new(&mut input).push(InputEvent::PointerLeft).run(&mut s);
        assert_eq!(s.canvas().len(), before);
        assert_eq!(s.state(), DrawState::Drawing { anchor: Vec2::new(20.0, 20.0) });
    }

    #[test]
    fn focus_loss_ends_the_stroke() {
        let mut input = InputState::default();
        let mut s = session();

        Frame::new(&mut input)
            .move_to(10.0, 10.0)
            .button(MouseButtonState::Pressed)
            .run(&mut s);
        assert_eq!(s.canvas().len(), 1);

        // The release happens in another window and never arrives here.
        Frame::new(&mut input).push(InputEvent::Focused(false)).run(&mut s);
        assert_eq!(s.state(), DrawState::Idle);

        Frame::new(&mut input)
            .push(InputEvent::Focused(true))
            .move_to(300.0, 10.0)
            .run(&mut s);
        assert!(!input.button_down(MouseButton::Left));
        assert_eq!(s.state(), DrawState::Idle);
        assert_eq!(s.canvas().len(), 1);
    }

    #[test]
    fn press_without_a_position_is_ignored() {
        let mut input = InputState::default();
        let mut s = session();

        Frame::new(&mut input).button(MouseButtonState::Pressed).run(&mut s);
        assert_eq!(s.state(), DrawState::Idle);

        Frame::new(&mut input).move_to(200.0, 150.0).run(&mut s);
        assert!(s.canvas().is_empty());
    }

    #[test]
    fn release_outside_the_window_ends_the_stroke() {
        let mut input = InputState::default();
        let mut s = session();

        Frame::new(&mut input)
            .move_to(20.0, 20.0)
            .button(MouseButtonState::Pressed)
            .run(&mut s);
        Frame::new(&mut input)
            .push(InputEvent::PointerLeft)
            .button(MouseButtonState::Released)
            .run(&mut s);

        assert_eq!(input.pointer_pos, None);
        assert_eq!(s.state(), DrawState::Idle);
        assert_eq!(s.canvas().len(), 1);
    }

    #[test]
    fn other_buttons_do_not_draw() {
        let mut input = InputState::default();
        let mut s = session();
        Frame::new(&mut input)
            .move_to(5.0, 5.0)
            .push(InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Right,
                state: MouseButtonState::Pressed,
                pos: Some((5.0, 5.0)),
            }))
            .run(&mut s);
        assert_eq!(s.state(), DrawState::Idle);
        assert!(s.canvas().is_empty());
    }

    #[test]
    fn save_and_exit_are_reported_not_performed() {
        let mut input = InputState::default();
        let mut s = session();

        let outcome = Frame::new(&mut input).key(Key::S).run(&mut s);
        assert_eq!(outcome, FrameOutcome { save_requested: true, exit_requested: false });

        let outcome = Frame::new(&mut input).key(Key::Escape).run(&mut s);
        assert_eq!(outcome, FrameOutcome { save_requested: false, exit_requested: true });

        let outcome = Frame::new(&mut input).run(&mut s);
        assert_eq!(outcome, FrameOutcome::default());
    }
}
