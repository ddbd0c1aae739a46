//! Pan gesture recognition on top of terminal mouse events.
//!
//! Terminals report button presses, drags and releases. The
//! [`GestureRecognizer`] turns those into [`GestureState`] snapshots and
//! drives a [`PanResponder`] through the should-set, grant, move, release
//! and terminate points of a pan gesture. A press that is released without
//! being claimed becomes a tap.

use std::time::Instant;

use dragtags_protocol::GestureState;
use tracing::debug;

/// Receives the lifecycle callbacks of a pan gesture.
///
/// Implemented by [`TagListController`](crate::TagListController).
pub trait PanResponder {
    /// Asked on every move until it returns `true` and claims the gesture.
    fn should_set_responder(&mut self, gesture: &GestureState) -> bool;

    /// Called once, right after the gesture was claimed.
    fn responder_grant(&mut self, gesture: &GestureState);

    /// Called for every move of a claimed gesture.
    fn responder_move(&mut self, gesture: &GestureState, now: Instant);

    /// Called when the last pointer of a claimed gesture is released.
    fn responder_release(&mut self, gesture: &GestureState);

    /// Called when a claimed gesture is interrupted.
    fn responder_terminate(&mut self);
}

/// A screen cell, as `(column, row)`.
pub type Cell = (u16, u16);

/// What a pointer event amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Nothing the host needs to act on.
    Ignored,
    /// The gesture is (still) claimed by the responder.
    Claimed,
    /// A claimed gesture was released.
    Released,
    /// The pointer was pressed and released without the responder claiming
    /// the gesture.
    Tap {
        /// Where the pointer was pressed.
        down: Cell,
        /// Where the pointer was released.
        up: Cell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Idle,
    Pressed {
        start: Cell,
    },
    Claimed {
        start: Cell,
    },
}

/// Tracks one pan gesture at a time.
///
/// # Examples
///
/// ```
/// use std::time::Instant;
/// use dragtags_tui::TagListController;
/// use dragtags_tui::gesture::{GestureOutcome, GestureRecognizer};
///
/// let mut controller = TagListController::with_titles(["#a", "#b"]);
/// controller.on_render_tag("#a", 0, 0, 6, 3);
/// controller.on_render_tag("#b", 7, 0, 6, 3);
///
/// let mut recognizer = GestureRecognizer::new();
/// let now = Instant::now();
/// recognizer.pointer_down(2, 1);
/// assert_eq!(recognizer.pointer_drag(&mut controller, 3, 1, now), GestureOutcome::Claimed);
/// recognizer.pointer_drag(&mut controller, 9, 1, now);
/// assert_eq!(recognizer.pointer_up(&mut controller, 9, 1), GestureOutcome::Released);
///
/// assert_eq!(controller.tags().titles(), ["#b", "#a"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    phase: Phase,
    active_touches: u8,
}

impl GestureRecognizer {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a responder owns the gesture.
    #[must_use]
    pub fn is_claimed(&self) -> bool {
        matches!(self.phase, Phase::Claimed { .. })
    }

    /// Returns `true` while any pointer is pressed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Returns the number of pointers currently pressed.
    #[must_use]
    pub fn active_touches(&self) -> u8 {
        self.active_touches
    }

    /// Starts a gesture at the given cell.
    ///
    /// Ignored if a gesture is already in progress.
    pub fn pointer_down(&mut self, column: u16, row: u16) {
        if self.phase == Phase::Idle {
            self.phase = Phase::Pressed {
                start: (column, row),
            };
            self.active_touches = 1;
        }
    }

    /// Registers an additional pointer during a gesture.
    pub fn extra_touch_down(&mut self) {
        if self.is_active() {
            self.active_touches = self.active_touches.saturating_add(1);
        }
    }

    /// Unregisters an additional pointer during a gesture.
    ///
    /// The primary pointer is only released through [`Self::pointer_up`].
    pub fn extra_touch_up(&mut self) {
        if self.active_touches > 1 {
            self.active_touches -= 1;
        }
    }

    /// Handles pointer movement with the primary button held.
    pub fn pointer_drag<R: PanResponder>(
        &mut self,
        responder: &mut R,
        column: u16,
        row: u16,
        now: Instant,
    ) -> GestureOutcome {
        match self.phase {
            Phase::Idle => GestureOutcome::Ignored,
            Phase::Pressed { start } => {
                let gesture = self.gesture_state(start, (column, row));
                if responder.should_set_responder(&gesture) {
                    debug!(?start, column, row, "pan gesture claimed");
                    responder.responder_grant(&gesture);
                    self.phase = Phase::Claimed { start };
                    GestureOutcome::Claimed
                } else {
                    GestureOutcome::Ignored
                }
            }
            Phase::Claimed { start } => {
                let gesture = self.gesture_state(start, (column, row));
                responder.responder_move(&gesture, now);
                GestureOutcome::Claimed
            }
        }
    }

    /// Handles the release of the primary pointer.
    pub fn pointer_up<R: PanResponder>(
        &mut self,
        responder: &mut R,
        column: u16,
        row: u16,
    ) -> GestureOutcome {
        let phase = std::mem::take(&mut self.phase);
        let outcome = match phase {
            Phase::Idle => GestureOutcome::Ignored,
            Phase::Pressed { start } => GestureOutcome::Tap {
                down: start,
                up: (column, row),
            },
            Phase::Claimed { start } => {
                let gesture = self.gesture_state(start, (column, row));
                responder.responder_release(&gesture);
                GestureOutcome::Released
            }
        };
        self.active_touches = 0;
        outcome
    }

    /// Interrupts the current gesture.
    ///
    /// A claimed gesture is terminated on the responder; an unclaimed press
    /// is dropped without producing a tap. Returns `true` if a claimed
    /// gesture was terminated.
    pub fn terminate<R: PanResponder>(&mut self, responder: &mut R) -> bool {
        let was_claimed = self.is_claimed();
        if was_claimed {
            debug!("pan gesture terminated");
            responder.responder_terminate();
        }
        self.phase = Phase::Idle;
        self.active_touches = 0;
        was_claimed
    }

    fn gesture_state(&self, start: Cell, current: Cell) -> GestureState {
        GestureState {
            number_active_touches: self.active_touches,
            ..GestureState::single_touch(
                (i32::from(start.0), i32::from(start.1)),
                (i32::from(current.0), i32::from(current.1)),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every callback and claims gestures when told to.
    #[derive(Debug, Default)]
    struct RecordingResponder {
        claim: bool,
        calls: Vec<String>,
        last: Option<GestureState>,
    }

    impl PanResponder for RecordingResponder {
        fn should_set_responder(&mut self, gesture: &GestureState) -> bool {
            self.calls.push("should_set".to_string());
            self.last = Some(*gesture);
            self.claim
        }

        fn responder_grant(&mut self, _gesture: &GestureState) {
            self.calls.push("grant".to_string());
        }

        fn responder_move(&mut self, gesture: &GestureState, _now: Instant) {
            self.calls.push("move".to_string());
            self.last = Some(*gesture);
        }

        fn responder_release(&mut self, _gesture: &GestureState) {
            self.calls.push("release".to_string());
        }

        fn responder_terminate(&mut self) {
            self.calls.push("terminate".to_string());
        }
    }

    fn claiming() -> RecordingResponder {
        RecordingResponder {
            claim: true,
            ..Default::default()
        }
    }

    #[test]
    fn press_and_release_without_claim_is_tap() {
        let mut responder = RecordingResponder::default();
        let mut recognizer = GestureRecognizer::new();

        recognizer.pointer_down(4, 2);
        let outcome = recognizer.pointer_up(&mut responder, 4, 2);

        assert_eq!(
            outcome,
            GestureOutcome::Tap {
                down: (4, 2),
                up: (4, 2)
            }
        );
        assert!(responder.calls.is_empty());
        assert!(!recognizer.is_active());
    }

    #[test]
    fn unclaimed_moves_keep_asking() {
        let mut responder = RecordingResponder::default();
        let mut recognizer = GestureRecognizer::new();
        let now = Instant::now();

        recognizer.pointer_down(4, 2);
        recognizer.pointer_drag(&mut responder, 5, 2, now);
        recognizer.pointer_drag(&mut responder, 6, 3, now);

        assert_eq!(responder.calls, ["should_set", "should_set"]);
        let last = responder.last.unwrap();
        assert_eq!((last.dx, last.dy, last.move_x, last.move_y), (2, 1, 6, 3));
        assert!(!recognizer.is_claimed());
    }

    #[test]
    fn claimed_gesture_lifecycle() {
        let mut responder = claiming();
        let mut recognizer = GestureRecognizer::new();
        let now = Instant::now();

        recognizer.pointer_down(4, 2);
        assert_eq!(
            recognizer.pointer_drag(&mut responder, 5, 2, now),
            GestureOutcome::Claimed
        );
        assert!(recognizer.is_claimed());
        recognizer.pointer_drag(&mut responder, 8, 2, now);
        assert_eq!(
            recognizer.pointer_up(&mut responder, 8, 2),
            GestureOutcome::Released
        );

        assert_eq!(responder.calls, ["should_set", "grant", "move", "release"]);
        assert!(!recognizer.is_active());
    }

    #[test]
    fn drag_without_press_is_ignored() {
        let mut responder = claiming();
        let mut recognizer = GestureRecognizer::new();

        let outcome = recognizer.pointer_drag(&mut responder, 5, 2, Instant::now());
        assert_eq!(outcome, GestureOutcome::Ignored);
        assert!(responder.calls.is_empty());
    }

    #[test]
    fn extra_touches_are_reported() {
        let mut responder = RecordingResponder::default();
        let mut recognizer = GestureRecognizer::new();

        recognizer.pointer_down(0, 0);
        recognizer.extra_touch_down();
        recognizer.pointer_drag(&mut responder, 1, 0, Instant::now());
        assert_eq!(responder.last.unwrap().number_active_touches, 2);

        recognizer.extra_touch_up();
        recognizer.pointer_drag(&mut responder, 2, 0, Instant::now());
        assert_eq!(responder.last.unwrap().number_active_touches, 1);
    }

    #[test]
    fn extra_touch_outside_gesture_is_ignored() {
        let mut recognizer = GestureRecognizer::new();
        recognizer.extra_touch_down();
        assert_eq!(recognizer.active_touches(), 0);
    }

    #[test]
    fn terminate_claimed_gesture() {
        let mut responder = claiming();
        let mut recognizer = GestureRecognizer::new();

        recognizer.pointer_down(0, 0);
        recognizer.pointer_drag(&mut responder, 1, 0, Instant::now());
        assert!(recognizer.terminate(&mut responder));
        assert_eq!(responder.calls.last().map(String::as_str), Some("terminate"));

        // The release that follows is not a tap
        assert_eq!(
            recognizer.pointer_up(&mut responder, 1, 0),
            GestureOutcome::Ignored
        );
    }

    #[test]
    fn terminate_unclaimed_press_drops_tap() {
        let mut responder = RecordingResponder::default();
        let mut recognizer = GestureRecognizer::new();

        recognizer.pointer_down(0, 0);
        assert!(!recognizer.terminate(&mut responder));
        assert_eq!(
            recognizer.pointer_up(&mut responder, 0, 0),
            GestureOutcome::Ignored
        );
        assert!(responder.calls.is_empty());
    }
}
