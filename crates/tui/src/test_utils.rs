//! Helpers shared by the rendering tests.

use ratatui::buffer::Buffer;

/// Flattens a buffer into text, one line per row, trailing blanks dropped.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol()))
                .collect();
            row.trim_end_matches(' ').to_owned()
        })
        .fold(String::new(), |mut out, row| {
            out.push_str(&row);
            out.push('\n');
            out
        })
}
