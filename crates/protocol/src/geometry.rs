//! Pure geometry and reordering helpers.
//!
//! These are the primitives the tag list controller builds its hit-testing
//! and drag-to-reorder logic on.

use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};

/// Returns `true` if the point `(x, y)` lies within the given area.
///
/// All four edges are inclusive.
///
/// # Examples
///
/// ```
/// use dragtags_protocol::is_point_within_area;
///
/// assert!(is_point_within_area(5, 5, 0, 0, 10, 10));
/// assert!(is_point_within_area(10, 0, 0, 0, 10, 10));
/// assert!(!is_point_within_area(11, 5, 0, 0, 10, 10));
/// ```
#[must_use]
pub fn is_point_within_area<T: PartialOrd>(x: T, y: T, left: T, top: T, right: T, bottom: T) -> bool {
    left <= x && x <= right && top <= y && y <= bottom
}

/// Moves the element at `from` so it ends up at `to`.
///
/// The element is removed first and then reinserted at `to` in the
/// post-removal indexing. A new vector is returned and `items` is left
/// untouched.
///
/// # Errors
///
/// Returns [`ProtocolError::IndexOutOfRange`] if either index is not a valid
/// position in `items`.
///
/// # Examples
///
/// ```
/// use dragtags_protocol::move_array_element;
///
/// let items = ["a", "b", "c"];
/// assert_eq!(move_array_element(&items, 0, 2).unwrap(), ["b", "c", "a"]);
/// assert_eq!(move_array_element(&items, 2, 0).unwrap(), ["c", "a", "b"]);
/// assert!(move_array_element(&items, 0, 3).is_err());
/// ```
pub fn move_array_element<T: Clone>(items: &[T], from: usize, to: usize) -> Result<Vec<T>> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(ProtocolError::IndexOutOfRange { index, len });
        }
    }

    let mut moved = items.to_vec();
    let element = moved.remove(from);
    moved.insert(to, element);
    Ok(moved)
}

/// A screen-space bounding box, stored as its top-left and bottom-right
/// corners.
///
/// # Examples
///
/// ```
/// use dragtags_protocol::Bounds;
///
/// let bounds = Bounds::from_measurement(10, 4, 8, 3);
/// assert_eq!(bounds.bottom_right_x, 18);
/// assert_eq!(bounds.bottom_right_y, 7);
/// assert!(bounds.contains(18, 7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    /// Left edge.
    pub top_left_x: i32,
    /// Top edge.
    pub top_left_y: i32,
    /// Right edge.
    pub bottom_right_x: i32,
    /// Bottom edge.
    pub bottom_right_y: i32,
}

impl Bounds {
    /// Builds bounds from a measured origin and size.
    #[must_use]
    pub const fn from_measurement(screen_x: i32, screen_y: i32, width: i32, height: i32) -> Self {
        Self {
            top_left_x: screen_x,
            top_left_y: screen_y,
            bottom_right_x: screen_x + width,
            bottom_right_y: screen_y + height,
        }
    }

    /// Returns `true` if the point lies within these bounds, edges included.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        is_point_within_area(
            x,
            y,
            self.top_left_x,
            self.top_left_y,
            self.bottom_right_x,
            self.bottom_right_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn point_inside_area() {
        assert!(is_point_within_area(3, 4, 0, 0, 10, 10));
    }

    #[test]
    fn point_on_every_edge_is_inside() {
        assert!(is_point_within_area(0, 5, 0, 0, 10, 10));
        assert!(is_point_within_area(10, 5, 0, 0, 10, 10));
        assert!(is_point_within_area(5, 0, 0, 0, 10, 10));
        assert!(is_point_within_area(5, 10, 0, 0, 10, 10));
    }

    #[test]
    fn point_outside_area() {
        assert!(!is_point_within_area(-1, 5, 0, 0, 10, 10));
        assert!(!is_point_within_area(5, 11, 0, 0, 10, 10));
    }

    #[test]
    fn point_test_works_with_floats() {
        assert!(is_point_within_area(0.5, 0.5, 0.0, 0.0, 1.0, 1.0));
        assert!(!is_point_within_area(1.5, 0.5, 0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn move_forward_and_backward() {
        let items = vec!["a", "b", "c", "d"];
        assert_eq!(move_array_element(&items, 1, 3).unwrap(), ["a", "c", "d", "b"]);
        assert_eq!(move_array_element(&items, 3, 1).unwrap(), ["a", "d", "b", "c"]);
        // The input is left untouched
        assert_eq!(items, ["a", "b", "c", "d"]);
    }

    #[test]
    fn move_to_same_index_is_identity() {
        let items = [1, 2, 3];
        assert_eq!(move_array_element(&items, 1, 1).unwrap(), [1, 2, 3]);
    }

    #[test]
    fn move_rejects_out_of_range() {
        let items = [1, 2, 3];
        assert_eq!(
            move_array_element(&items, 3, 0),
            Err(ProtocolError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            move_array_element(&items, 0, 7),
            Err(ProtocolError::IndexOutOfRange { index: 7, len: 3 })
        );
        assert!(move_array_element::<u8>(&[], 0, 0).is_err());
    }

    #[test]
    fn bounds_from_measurement() {
        let bounds = Bounds::from_measurement(2, 3, 10, 3);
        assert_eq!(
            bounds,
            Bounds {
                top_left_x: 2,
                top_left_y: 3,
                bottom_right_x: 12,
                bottom_right_y: 6,
            }
        );
        assert!(bounds.contains(2, 3));
        assert!(bounds.contains(12, 6));
        assert!(!bounds.contains(13, 6));
    }

    proptest! {
        #[test]
        fn point_test_matches_definition(
            x in -50i32..50, y in -50i32..50,
            l in -50i32..50, t in -50i32..50,
            r in -50i32..50, b in -50i32..50,
        ) {
            let expected = l <= x && x <= r && t <= y && y <= b;
            prop_assert_eq!(is_point_within_area(x, y, l, t, r, b), expected);
        }

        #[test]
        fn move_then_inverse_move_restores_original(
            items in proptest::collection::vec(any::<u16>(), 1..20),
            from_seed in any::<usize>(),
            to_seed in any::<usize>(),
        ) {
            let from = from_seed % items.len();
            let to = to_seed % items.len();
            let moved = move_array_element(&items, from, to).unwrap();
            prop_assert_eq!(moved.len(), items.len());
            prop_assert_eq!(&moved[to], &items[from]);
            let restored = move_array_element(&moved, to, from).unwrap();
            prop_assert_eq!(restored, items);
        }
    }
}
