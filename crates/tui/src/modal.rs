//! New tag modal state.
//!
//! This module manages the text input of the modal that adds a tag, along
//! with the blocking alert shown when an empty value is submitted.

use tracing::debug;

/// Error returned when submitting the input field fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// The field is empty.
    #[error("Please enter new tag first")]
    Empty,
}

/// A single-line text field with a cursor.
///
/// The cursor is a byte offset that always sits on a character boundary.
///
/// # Examples
///
/// ```
/// use dragtags_tui::modal::InputField;
///
/// let mut field = InputField::new();
/// for ch in "#rust".chars() {
///     field.insert_char(ch);
/// }
/// assert_eq!(field.submit().as_deref(), Ok("#rust"));
/// assert!(field.value().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    value: String,
    cursor: usize,
}

impl InputField {
    /// Creates an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the cursor position as a byte offset into the value.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns `true` if nothing has been typed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Inserts a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Deletes the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            // Find the previous character boundary
            let prev_boundary = self.prev_boundary();
            self.value.remove(prev_boundary);
            self.cursor = prev_boundary;
        }
    }

    /// Moves the cursor one character to the left.
    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    /// Moves the cursor one character to the right.
    pub fn move_right(&mut self) {
        if let Some(ch) = self.value[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Takes the value out of the field as typed, leaving it empty.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Empty`] if nothing has been typed.
    pub fn submit(&mut self) -> Result<String, InputError> {
        if self.is_empty() {
            return Err(InputError::Empty);
        }
        self.cursor = 0;
        Ok(std::mem::take(&mut self.value))
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .last()
            .map_or(0, |(i, _)| i)
    }
}

/// State of the open new tag modal.
///
/// The modal is open while an instance exists; closing it drops the state,
/// so every opening starts with an empty field.
#[derive(Debug, Clone, Default)]
pub struct NewTagModal {
    input: InputField,
    alert: Option<InputError>,
}

impl NewTagModal {
    /// Creates a modal with an empty field and no alert.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn input(&self) -> &InputField {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputField {
        &mut self.input
    }

    /// Returns the alert blocking the modal, if any.
    #[must_use]
    pub fn alert(&self) -> Option<InputError> {
        self.alert
    }

    /// Dismisses the alert. Returns `true` if one was showing.
    pub fn dismiss_alert(&mut self) -> bool {
        self.alert.take().is_some()
    }

    /// Submits the field.
    ///
    /// Returns the new tag title on success. A blank field raises the alert
    /// instead and returns `None`.
    pub fn submit(&mut self) -> Option<String> {
        match self.input.submit() {
            Ok(title) => Some(title),
            Err(err) => {
                debug!(%err, "rejected new tag");
                self.alert = Some(err);
                None
            }
        }
    }
}
