/// Rows taken by the instruction line and the rule beneath it.
pub const HEADER_ROWS: u16 = 2;

/// Number of list rows available on a terminal `rows` tall. Never zero.
pub fn view_height(rows: u16) -> usize {
    usize::from(rows.saturating_sub(HEADER_ROWS)).max(1)
}

/// Returns the scroll offset that keeps `cursor` inside a window of
/// `view_height` rows over `total` items.
///
/// The offset moves only as far as needed and never past the point where the
/// last item sits on the bottom row; short lists pin to 0.
pub fn ensure_visible(cursor: usize, offset: usize, view_height: usize, total: usize) -> usize {
    if view_height == 0 {
        return 0;
    }
    let max_offset = total.saturating_sub(view_height);

    let mut offset = offset;
    if cursor < offset {
        offset = cursor;
    } else if cursor >= offset + view_height {
        offset = cursor + 1 - view_height;
    }
    offset.min(max_offset)
}

#[cfg(test)]
#[path = "../tests/tui/viewport_tests.rs"]
mod tests;
