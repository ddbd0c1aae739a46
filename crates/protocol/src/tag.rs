//! Tag types and the ordered tag list.
//!
//! A [`Tag`] is identified by its title. The [`TagList`] keeps tags in
//! render order and guarantees titles stay unique.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::{Bounds, move_array_element};

/// A single removable, reorderable tag.
///
/// # Examples
///
/// ```
/// use dragtags_protocol::Tag;
///
/// let tag = Tag::new("#rust");
/// assert_eq!(tag.title, "#rust");
/// assert!(!tag.is_being_dragged);
/// assert!(tag.bounds.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// The tag title, unique within a [`TagList`].
    pub title: String,
    /// Whether a drag gesture currently targets this tag.
    #[serde(default)]
    pub is_being_dragged: bool,
    /// Screen-space bounding box as of the most recent layout pass.
    ///
    /// `None` until the tag has been laid out at least once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
}

impl Tag {
    /// Creates a tag with no geometry and no drag state.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_being_dragged: false,
            bounds: None,
        }
    }

    /// Returns `true` if this tag has known geometry containing the point.
    ///
    /// A tag that has never been laid out never matches.
    #[must_use]
    pub fn is_hit(&self, x: i32, y: i32) -> bool {
        self.bounds.is_some_and(|bounds| bounds.contains(x, y))
    }
}

/// An ordered collection of tags with unique titles.
///
/// Order defines visual order. All lookups are by title.
///
/// # Examples
///
/// ```
/// use dragtags_protocol::TagList;
///
/// let tags = TagList::from_titles(["a", "b", "a", "c"]);
/// assert_eq!(tags.titles(), ["a", "b", "c"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagList {
    tags: Vec<Tag>,
}

impl TagList {
    /// Creates an empty tag list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tag list from titles, dropping duplicates.
    ///
    /// The first occurrence of a title wins and the relative order of the
    /// remaining titles is preserved.
    #[must_use]
    pub fn from_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for title in titles {
            let title = title.into();
            if list.position(&title).is_none() {
                list.tags.push(Tag::new(title));
            }
        }
        list
    }

    /// Returns the number of tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if the list holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterates over tags in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    /// Returns the titles in order.
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.tags.iter().map(|tag| tag.title.as_str()).collect()
    }

    /// Returns the index of the tag with the given title.
    #[must_use]
    pub fn position(&self, title: &str) -> Option<usize> {
        self.tags.iter().position(|tag| tag.title == title)
    }

    /// Returns a reference to the tag with the given title.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.title == title)
    }

    /// Returns a mutable reference to the tag with the given title.
    #[must_use]
    pub fn get_mut(&mut self, title: &str) -> Option<&mut Tag> {
        self.tags.iter_mut().find(|tag| tag.title == title)
    }

    /// Removes and returns the tag with the given title, if present.
    ///
    /// # Examples
    ///
    /// ```
    /// use dragtags_protocol::TagList;
    ///
    /// let mut tags = TagList::from_titles(["a", "b"]);
    /// assert!(tags.remove("a").is_some());
    /// assert!(tags.remove("zzz").is_none());
    /// assert_eq!(tags.titles(), ["b"]);
    /// ```
    pub fn remove(&mut self, title: &str) -> Option<Tag> {
        let index = self.position(title)?;
        Some(self.tags.remove(index))
    }

    /// Appends a fresh tag to the end of the list.
    ///
    /// Callers are responsible for removing any existing tag with the same
    /// title first; see `TagListController::submit_new_tag`.
    pub fn push_new(&mut self, title: impl Into<String>) {
        self.tags.push(Tag::new(title));
    }

    /// Returns a copy of this list with the tag at `from` moved to `to`.
    ///
    /// # Errors
    ///
    /// Returns an error if either index is out of range.
    pub fn reordered(&self, from: usize, to: usize) -> Result<Self> {
        Ok(Self {
            tags: move_array_element(&self.tags, from, to)?,
        })
    }

    /// Finds the first tag whose bounds contain the point.
    ///
    /// The tag titled `except`, if any, is skipped. Tags without bounds never
    /// match.
    #[must_use]
    pub fn find_at(&self, x: i32, y: i32, except: Option<&str>) -> Option<&Tag> {
        self.tags
            .iter()
            .filter(|tag| except != Some(tag.title.as_str()))
            .find(|tag| tag.is_hit(x, y))
    }

    /// Returns the tag currently marked as dragged, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.is_being_dragged)
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
