//! The tag list controller.
//!
//! [`TagListController`] owns the ordered tag list and the gesture session.
//! It decides whether a pan gesture should become a drag, hit-tests the
//! pointer against the bounding boxes reported by the last layout pass, and
//! reorders, removes and inserts tags.
//!
//! # Drag lifecycle
//!
//! ```text
//! Idle --(movement over a laid-out tag)--> Dragging --(release/terminate)--> Idle
//!                                            |
//!                                            +-- move over another tag --> swap
//! ```
//!
//! A swap disables further swapping until the layout animation has had
//! `animation_duration` to settle. The re-enable is a one-shot deadline that
//! the event loop drives through [`TagListController::fire_due_timers`].

use std::time::{Duration, Instant};

use dragtags_protocol::{Bounds, GestureState, TagList};
use tracing::{debug, warn};

use crate::gesture::PanResponder;

/// Default swap animation duration.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(250);

/// The ephemeral drag state owned by the controller.
///
/// # Examples
///
/// ```
/// use dragtags_tui::controller::GestureSession;
///
/// let session = GestureSession::default();
/// assert!(session.is_dnd_enabled());
/// assert!(session.dragged().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureSession {
    /// Title of the tag latched for dragging.
    dragged: Option<String>,
    /// Whether move events may trigger swaps.
    dnd_enabled: bool,
    /// When the pending re-enable fires, if one is scheduled.
    reenable_at: Option<Instant>,
}

impl Default for GestureSession {
    fn default() -> Self {
        Self {
            dragged: None,
            dnd_enabled: true,
            reenable_at: None,
        }
    }
}

impl GestureSession {
    /// Returns the title of the tag being dragged, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<&str> {
        self.dragged.as_deref()
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    /// Returns `true` if move events may currently trigger swaps.
    #[must_use]
    pub fn is_dnd_enabled(&self) -> bool {
        self.dnd_enabled
    }

    /// Returns the deadline of the pending re-enable, if any.
    #[must_use]
    pub fn reenable_at(&self) -> Option<Instant> {
        self.reenable_at
    }
}

/// Owns the tag list and drives drag-and-drop reordering.
///
/// # Examples
///
/// ```
/// use dragtags_tui::TagListController;
///
/// let mut controller = TagListController::with_titles(["#a", "#b", "#a"]);
/// assert_eq!(controller.tags().titles(), ["#a", "#b"]);
///
/// controller.submit_new_tag("#a");
/// assert_eq!(controller.tags().titles(), ["#b", "#a"]);
///
/// controller.remove_tag("#b");
/// assert_eq!(controller.tags().titles(), ["#a"]);
/// ```
#[derive(Debug, Clone)]
pub struct TagListController {
    tags: TagList,
    session: GestureSession,
    animation_duration: Duration,
}

impl TagListController {
    /// Creates a controller from tag titles.
    ///
    /// Duplicate titles are dropped, keeping the first occurrence.
    #[must_use]
    pub fn new<I, S>(titles: I, animation_duration: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: TagList::from_titles(titles),
            session: GestureSession::default(),
            animation_duration,
        }
    }

    /// Creates a controller using [`DEFAULT_ANIMATION_DURATION`].
    #[must_use]
    pub fn with_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(titles, DEFAULT_ANIMATION_DURATION)
    }

    /// Returns the current tag list.
    #[must_use]
    pub fn tags(&self) -> &TagList {
        &self.tags
    }

    /// Returns the gesture session.
    #[must_use]
    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    /// Returns the configured swap animation duration.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        self.animation_duration
    }

    /// Returns `true` if move events may currently trigger swaps.
    #[must_use]
    pub fn is_dnd_enabled(&self) -> bool {
        self.session.dnd_enabled
    }

    /// Decides whether a pan gesture should become a tag drag.
    ///
    /// Returns `true` and latches the tag under the pointer only when exactly
    /// one touch is active, the pointer has moved, and a laid-out tag
    /// contains the current point.
    pub fn on_move_should_set(&mut self, gesture: &GestureState) -> bool {
        if !gesture.is_single_touch() || !gesture.has_moved() {
            return false;
        }

        let Some(tag) = self.tags.find_at(gesture.move_x, gesture.move_y, None) else {
            return false;
        };

        debug!(title = %tag.title, "latched tag for dragging");
        self.session.dragged = Some(tag.title.clone());
        true
    }

    /// Marks the latched tag as being dragged.
    pub fn on_grant(&mut self) {
        match self.session.dragged.clone() {
            Some(title) => self.set_dragged_flag(&title, true),
            None => warn!("gesture granted without a latched tag"),
        }
    }

    /// Handles pointer movement during a drag.
    ///
    /// Hit-tests every tag except the dragged one and swaps on a hit. Does
    /// nothing while swapping is suppressed. Returns `true` if a swap
    /// happened.
    pub fn on_move(&mut self, gesture: &GestureState, now: Instant) -> bool {
        if !self.session.dnd_enabled {
            return false;
        }
        let Some(dragged) = self.session.dragged.clone() else {
            return false;
        };

        let target = self
            .tags
            .find_at(gesture.move_x, gesture.move_y, Some(&dragged))
            .map(|tag| tag.title.clone());

        match target {
            Some(target) => self.swap(&dragged, &target, now),
            None => false,
        }
    }

    /// Ends the drag, whether it was released or terminated.
    pub fn on_end(&mut self) {
        if let Some(title) = self.session.dragged.take() {
            debug!(%title, "drag ended");
            self.set_dragged_flag(&title, false);
        }
    }

    /// Moves `dragged` to the position currently held by `target`.
    ///
    /// Swapping is suppressed until `animation_duration` after `now`. The
    /// re-enable fires once and is never pushed back by a later swap.
    /// Returns `false` if either title is unknown.
    pub fn swap(&mut self, dragged: &str, target: &str, now: Instant) -> bool {
        let (Some(from), Some(to)) = (self.tags.position(dragged), self.tags.position(target))
        else {
            warn!(dragged, target, "swap requested for unknown tag");
            return false;
        };

        match self.tags.reordered(from, to) {
            Ok(tags) => self.tags = tags,
            Err(e) => {
                warn!(error = %e, "failed to reorder tags");
                return false;
            }
        }

        debug!(dragged, target, from, to, "swapped tags");
        self.session.dnd_enabled = false;
        if self.session.reenable_at.is_none() {
            self.session.reenable_at = Some(now + self.animation_duration);
        }
        true
    }

    /// Fires the pending re-enable if its deadline has passed.
    ///
    /// Returns `true` if swapping was re-enabled by this call.
    pub fn fire_due_timers(&mut self, now: Instant) -> bool {
        match self.session.reenable_at {
            Some(deadline) if now >= deadline => {
                self.session.reenable_at = None;
                self.session.dnd_enabled = true;
                debug!("drag and drop re-enabled");
                true
            }
            _ => false,
        }
    }

    /// Returns the deadline of the pending re-enable, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.session.reenable_at
    }

    /// Removes the tag with the given title.
    ///
    /// Removing an unknown title is a no-op. Returns `true` if a tag was
    /// removed.
    pub fn remove_tag(&mut self, title: &str) -> bool {
        if self.session.dragged() == Some(title) {
            self.session.dragged = None;
        }
        let removed = self.tags.remove(title).is_some();
        if removed {
            debug!(title, "removed tag");
        }
        removed
    }

    /// Records the on-screen geometry reported for a tag after layout.
    ///
    /// Later reports overwrite earlier ones. Unknown titles are ignored.
    pub fn on_render_tag(&mut self, title: &str, screen_x: u16, screen_y: u16, width: u16, height: u16) {
        if let Some(tag) = self.tags.get_mut(title) {
            tag.bounds = Some(Bounds::from_measurement(
                i32::from(screen_x),
                i32::from(screen_y),
                i32::from(width),
                i32::from(height),
            ));
        }
    }

    /// Forgets the geometry of a tag the last layout pass did not place.
    ///
    /// The tag cannot be hit-tested until it is laid out again.
    pub fn clear_tag_bounds(&mut self, title: &str) {
        if let Some(tag) = self.tags.get_mut(title) {
            tag.bounds = None;
        }
    }

    /// Appends a tag, moving it to the end if the title already exists.
    pub fn submit_new_tag(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.remove_tag(&title) {
            debug!(%title, "re-adding existing tag at the end");
        }
        self.tags.push_new(title);
    }

    fn set_dragged_flag(&mut self, title: &str, is_being_dragged: bool) {
        if let Some(tag) = self.tags.get_mut(title) {
            tag.is_being_dragged = is_being_dragged;
        }
    }
}

impl PanResponder for TagListController {
    fn should_set_responder(&mut self, gesture: &GestureState) -> bool {
        self.on_move_should_set(gesture)
    }

    fn responder_grant(&mut self, _gesture: &GestureState) {
        self.on_grant();
    }

    fn responder_move(&mut self, gesture: &GestureState, now: Instant) {
        self.on_move(gesture, now);
    }

    fn responder_release(&mut self, _gesture: &GestureState) {
        self.on_end();
    }

    fn responder_terminate(&mut self) {
        self.on_end();
    }
}
