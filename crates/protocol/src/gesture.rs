//! Gesture state reported by the gesture recognizer.

use serde::{Deserialize, Serialize};

/// A snapshot of an in-progress pan gesture.
///
/// Delivered to the pan responder at should-set, grant and move points.
///
/// # Examples
///
/// ```
/// use dragtags_protocol::GestureState;
///
/// let state = GestureState::single_touch((10, 4), (12, 4));
/// assert_eq!(state.dx, 2);
/// assert_eq!(state.dy, 0);
/// assert!(state.has_moved());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GestureState {
    /// Horizontal distance from the point where the gesture started.
    pub dx: i32,
    /// Vertical distance from the point where the gesture started.
    pub dy: i32,
    /// Current pointer column.
    pub move_x: i32,
    /// Current pointer row.
    pub move_y: i32,
    /// Number of pointers currently pressed.
    pub number_active_touches: u8,
}

impl GestureState {
    /// Builds a one-pointer gesture state from its start and current points.
    #[must_use]
    pub const fn single_touch(start: (i32, i32), current: (i32, i32)) -> Self {
        Self {
            dx: current.0 - start.0,
            dy: current.1 - start.1,
            move_x: current.0,
            move_y: current.1,
            number_active_touches: 1,
        }
    }

    /// Returns `true` if the pointer left its starting point on either axis.
    #[must_use]
    pub const fn has_moved(&self) -> bool {
        self.dx != 0 || self.dy != 0
    }

    /// Returns `true` if exactly one pointer is pressed.
    #[must_use]
    pub const fn is_single_touch(&self) -> bool {
        self.number_active_touches == 1
    }
}
