//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application to update the tag list, the gesture session and the
/// new-tag modal.
///
/// # Examples
///
/// ```
/// use dragtags_protocol::Message;
///
/// let msg = Message::PointerDown { column: 3, row: 7 };
/// assert!(msg.is_pointer());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Quit the application.
    Quit,
    /// Escape: end a drag, close the modal or close help (contextual).
    Escape,
    /// Toggle help overlay.
    ToggleHelp,
    /// Open the new-tag modal.
    OpenNewTag,
    /// The terminal was resized; any drag in progress is terminated.
    Resized,

    // --- Pointer messages ---
    /// Primary button pressed at coordinates (column, row).
    PointerDown {
        /// Column (x coordinate) of the press.
        column: u16,
        /// Row (y coordinate) of the press.
        row: u16,
    },
    /// Pointer moved with the primary button held.
    PointerDrag {
        /// Column (x coordinate) of the pointer.
        column: u16,
        /// Row (y coordinate) of the pointer.
        row: u16,
    },
    /// Primary button released at coordinates (column, row).
    PointerUp {
        /// Column (x coordinate) of the release.
        column: u16,
        /// Row (y coordinate) of the release.
        row: u16,
    },
    /// A secondary button was pressed during a gesture.
    ExtraTouchDown,
    /// A secondary button was released during a gesture.
    ExtraTouchUp,

    // --- New-tag modal messages ---
    /// Input a character into the new-tag field.
    ModalInput {
        /// The character that was input.
        ch: char,
    },
    /// Delete the character before the cursor.
    ModalBackspace,
    /// Move the cursor one character left.
    ModalCursorLeft,
    /// Move the cursor one character right.
    ModalCursorRight,
    /// Clear the whole field.
    ModalClear,
    /// Submit the field contents.
    ModalSubmit,
    /// Close the modal without submitting.
    ModalClose,
}

impl Message {
    /// Returns `true` if this message is a pointer event.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragtags_protocol::Message;
    ///
    /// assert!(Message::PointerUp { column: 0, row: 0 }.is_pointer());
    /// assert!(!Message::Quit.is_pointer());
    /// ```
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        matches!(
            self,
            Self::PointerDown { .. }
                | Self::PointerDrag { .. }
                | Self::PointerUp { .. }
                | Self::ExtraTouchDown
                | Self::ExtraTouchUp
        )
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragtags_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` for input that dismisses an overlay such as help or
    /// the empty-input alert: any key, or a pointer press.
    ///
    /// Drags, releases and resizes leave overlays in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragtags_protocol::Message;
    ///
    /// assert!(Message::Escape.dismisses_overlay());
    /// assert!(Message::PointerDown { column: 0, row: 0 }.dismisses_overlay());
    /// assert!(!Message::PointerUp { column: 0, row: 0 }.dismisses_overlay());
    /// ```
    #[must_use]
    pub fn dismisses_overlay(&self) -> bool {
        match self {
            Self::Resized => false,
            Self::PointerDown { .. } => true,
            other => !other.is_pointer(),
        }
    }
}
