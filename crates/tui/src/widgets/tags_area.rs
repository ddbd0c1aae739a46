//! Tags area rendering widget.
//!
//! Lays the tag chips out in a wrapping flow inside a bordered area and
//! appends the "Add new" affordance after the last chip. The computed
//! [`TagsAreaLayout`] doubles as the hit-testing map for clicks.

use dragtags_protocol::TagList;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget},
};

use super::tag_chip::{chip_width, render_tag_chip};
use crate::animation::AnimationFrame;
use crate::layout::flow_layout;

/// Label of the affordance that opens the new tag modal.
pub const ADD_NEW_LABEL: &str = "Add new";

/// What a click inside the tags area landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaTarget {
    /// The chip with this title.
    Chip(String),
    /// The "Add new" affordance.
    AddNew,
}

/// Where every element of the tags area was placed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagsAreaLayout {
    /// One entry per tag, in list order. `None` if the chip did not fit.
    pub chips: Vec<(String, Option<Rect>)>,
    /// The slot of the "Add new" affordance, if it fit.
    pub add_new: Option<Rect>,
}

impl TagsAreaLayout {
    /// Returns the element at the given cell, if any.
    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Option<AreaTarget> {
        let position = Position::new(column, row);
        if let Some((title, _)) = self
            .chips
            .iter()
            .find(|(_, slot)| slot.is_some_and(|rect| rect.contains(position)))
        {
            return Some(AreaTarget::Chip(title.clone()));
        }
        self.add_new
            .filter(|rect| rect.contains(position))
            .map(|_| AreaTarget::AddNew)
    }

    /// Returns where each visible chip is drawn this frame.
    ///
    /// Without an animation every chip sits in its slot.
    #[must_use]
    pub fn placed(&self, animation: Option<&AnimationFrame<'_>>) -> Vec<(&str, Rect)> {
        self.chips
            .iter()
            .filter_map(|(title, slot)| {
                slot.map(|slot| {
                    let rect = animation.map_or(slot, |frame| frame.place(title, slot));
                    (title.as_str(), rect)
                })
            })
            .collect()
    }
}

fn tags_area_block(tag_count: usize) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" Tags ({tag_count}) "),
            Style::default().fg(Color::White),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(1))
}

/// Computes the layout of the tags area without rendering it.
///
/// `area` is the full tags area, borders included.
///
/// # Examples
///
/// ```
/// use ratatui::layout::Rect;
/// use dragtags_protocol::TagList;
/// use dragtags_tui::widgets::layout_tags_area;
///
/// let tags = TagList::from_titles(["#a", "#b"]);
/// let layout = layout_tags_area(&tags, Rect::new(0, 0, 40, 10));
///
/// assert_eq!(layout.chips[0], ("#a".to_string(), Some(Rect::new(2, 1, 8, 3))));
/// assert_eq!(layout.chips[1], ("#b".to_string(), Some(Rect::new(11, 1, 8, 3))));
/// assert_eq!(layout.add_new, Some(Rect::new(20, 1, 7, 3)));
/// ```
#[must_use]
pub fn layout_tags_area(tags: &TagList, area: Rect) -> TagsAreaLayout {
    let inner = tags_area_block(tags.len()).inner(area);
    let widths: Vec<u16> = tags.iter().map(|tag| chip_width(&tag.title)).collect();
    let add_new_width = u16::try_from(ADD_NEW_LABEL.len()).unwrap_or(u16::MAX);

    let flow = flow_layout(&widths, add_new_width, inner);
    let chips = tags
        .iter()
        .zip(flow.items)
        .map(|(tag, slot)| (tag.title.clone(), slot))
        .collect();

    TagsAreaLayout {
        chips,
        add_new: flow.trailing,
    }
}

/// Renders the tags area to the buffer.
///
/// `layout` must come from [`layout_tags_area`] for the same tags and area.
/// Chips are drawn where `animation` places them; the chip being dragged is
/// drawn last so it stays on top while chips slide past each other.
///
/// # Layout
///
/// ```text
/// ╭ Tags (3) ──────────────────────────╮
/// │ ╭────────╮ ╭──────────────╮        │
/// │ │ ✕ #foo │ │ ✕ #something │        │
/// │ ╰────────╯ ╰──────────────╯        │
/// │                                    │
/// │ ╭──────╮                           │
/// │ │ ✕ #a │ Add new                   │
/// │ ╰──────╯                           │
/// ╰────────────────────────────────────╯
/// ```
pub fn render_tags_area(
    tags: &TagList,
    layout: &TagsAreaLayout,
    animation: Option<&AnimationFrame<'_>>,
    area: Rect,
    buf: &mut Buffer,
) {
    let block = tags_area_block(tags.len());
    let inner = block.inner(area);
    block.render(area, buf);

    let mut placed = layout.placed(animation);
    placed.sort_by_key(|(title, _)| tags.get(title).is_some_and(|tag| tag.is_being_dragged));

    for (title, rect) in placed {
        if let Some(tag) = tags.get(title) {
            render_tag_chip(tag, rect.intersection(inner), buf);
        }
    }

    if let Some(slot) = layout.add_new {
        let label_area = Rect::new(slot.x, slot.y + slot.height / 2, slot.width, 1);
        Paragraph::new(Line::from(Span::styled(
            ADD_NEW_LABEL,
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::UNDERLINED),
        )))
        .render(label_area.intersection(inner), buf);
    }
}
