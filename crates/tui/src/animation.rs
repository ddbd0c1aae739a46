//! Linear layout transitions.
//!
//! When the tag order changes, chips slide from where they were last drawn
//! to their new slots over the animation duration. Chips that were not on
//! screen before appear directly at their target.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use ratatui::layout::Rect;

/// A running layout transition.
#[derive(Debug, Clone)]
pub struct LayoutAnimation {
    from: HashMap<String, Rect>,
    started: Instant,
    duration: Duration,
}

impl LayoutAnimation {
    /// Starts a transition away from the given chip positions.
    #[must_use]
    pub fn start(from: HashMap<String, Rect>, now: Instant, duration: Duration) -> Self {
        Self {
            from,
            started: now,
            duration,
        }
    }

    /// Returns how far along the transition is, from `0.0` to `1.0`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Freezes the transition at `now` for placing chips in one frame.
    #[must_use]
    pub fn frame(&self, now: Instant) -> AnimationFrame<'_> {
        AnimationFrame {
            from: &self.from,
            progress: self.progress(now),
        }
    }
}

/// A transition sampled at a single point in time.
#[derive(Debug, Clone, Copy)]
pub struct AnimationFrame<'a> {
    from: &'a HashMap<String, Rect>,
    progress: f64,
}

impl AnimationFrame<'_> {
    /// Returns where the chip titled `title` is drawn on its way to `target`.
    #[must_use]
    pub fn place(&self, title: &str, target: Rect) -> Rect {
        match self.from.get(title) {
            Some(&from) => lerp_rect(from, target, self.progress),
            None => target,
        }
    }
}

/// Linearly interpolates the position of a rectangle.
///
/// The size snaps to `to`; only the position slides.
///
/// # Examples
///
/// ```
/// use ratatui::layout::Rect;
/// use dragtags_tui::animation::lerp_rect;
///
/// let from = Rect::new(0, 0, 6, 3);
/// let to = Rect::new(10, 4, 6, 3);
/// assert_eq!(lerp_rect(from, to, 0.5), Rect::new(5, 2, 6, 3));
/// ```
#[must_use]
pub fn lerp_rect(from: Rect, to: Rect, t: f64) -> Rect {
    let t = t.clamp(0.0, 1.0);
    Rect::new(lerp(from.x, to.x, t), lerp(from.y, to.y, t), to.width, to.height)
}

fn lerp(from: u16, to: u16, t: f64) -> u16 {
    let (lo, hi) = (from.min(to), from.max(to));
    let value = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
    (value.round() as u16).clamp(lo, hi)
}
