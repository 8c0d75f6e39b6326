//! Helpers shared by the rendering tests.

use ratatui::buffer::Buffer;

/// Renders a [`Buffer`] as text, one line per row, trailing spaces trimmed.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in buf.area.top()..buf.area.bottom() {
        let row: String = (buf.area.left()..buf.area.right())
            .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol()))
            .collect();
        result.push_str(row.trim_end_matches(' '));
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{layout::Rect, style::Style};

    #[test]
    fn rows_are_trimmed() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 8, 2));
        buf.set_string(1, 0, "ab", Style::default());
        assert_eq!(buffer_to_string(&buf), " ab\n\n");
    }
}
