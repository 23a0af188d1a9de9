//! Projection of selector state onto the terminal grid.
//!
//! Row 0 holds the key help, row 1 a rule, and the remaining rows the visible
//! slice of the catalog. Every row is exactly as wide as the terminal; long
//! text is cut, never wrapped.

use ratatui::Frame;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::viewport::view_height;
use crate::catalog::Item;

pub const INSTRUCTIONS: &str = "↑/↓ move • space toggle • enter save • q/Esc cancel";

/// Borrowed snapshot of everything the renderer needs.
#[derive(Clone, Copy, Debug)]
pub struct ListView<'a> {
    pub items: &'a [Item],
    pub cursor: usize,
    pub offset: usize,
    pub instructions: &'a str,
    pub empty_notice: &'a str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Instructions,
    Rule,
    Item,
    Cursor,
    Notice,
}

impl LineKind {
    fn style(self) -> Style {
        match self {
            LineKind::Instructions => Style::default().fg(Color::Yellow),
            LineKind::Rule | LineKind::Notice => Style::default().fg(Color::Gray),
            LineKind::Item => Style::default(),
            LineKind::Cursor => Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenLine {
    pub kind: LineKind,
    pub text: String,
}

pub fn screen_lines(view: &ListView<'_>, width: u16, height: u16) -> Vec<ScreenLine> {
    let cols = usize::from(width);
    let mut lines = vec![
        ScreenLine {
            kind: LineKind::Instructions,
            text: fit_to_width(view.instructions, cols),
        },
        ScreenLine {
            kind: LineKind::Rule,
            text: "-".repeat(cols),
        },
    ];

    if view.items.is_empty() {
        lines.push(ScreenLine {
            kind: LineKind::Notice,
            text: fit_to_width(view.empty_notice, cols),
        });
    } else {
        let rows = view_height(height);
        let total = view.items.len();
        let start = view.offset.min(total.saturating_sub(rows));
        let end = (start + rows).min(total);
        for (idx, item) in view.items[start..end].iter().enumerate() {
            let is_cursor = start + idx == view.cursor;
            lines.push(ScreenLine {
                kind: if is_cursor {
                    LineKind::Cursor
                } else {
                    LineKind::Item
                },
                text: fit_to_width(&item_line(item, is_cursor), cols),
            });
        }
    }

    lines.truncate(usize::from(height));
    lines
}

pub fn item_line(item: &Item, is_cursor: bool) -> String {
    let marker = if is_cursor { ">" } else { " " };
    let checkbox = if item.checked { "[x]" } else { "[ ]" };
    format!("{} {} {}", marker, checkbox, item.name)
}

/// Cuts or space-pads `text` to exactly `width` chars.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let used = out.chars().count();
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

pub fn draw(frame: &mut Frame, view: &ListView<'_>) {
    let area = frame.area();
    let lines = screen_lines(view, area.width, area.height)
        .into_iter()
        .map(|l| Line::styled(l.text, l.kind.style()))
        .collect::<Vec<_>>();
    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
#[path = "../tests/tui/render_tests.rs"]
mod tests;
