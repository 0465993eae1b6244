//! Query prompt widget.

use crate::view::constants::PROMPT_PREFIX;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Renders `: <query>` on a single row.
pub struct Prompt<'a> {
    query: &'a str,
}

impl<'a> Prompt<'a> {
    pub fn new(query: &'a str) -> Self {
        Self { query }
    }

    /// Terminal cursor position just after the query, clamped to `area`.
    pub fn cursor_position(&self, area: Rect) -> Position {
        let offset = PROMPT_PREFIX.width() + self.query.width();
        let max_offset = area.width.saturating_sub(1) as usize;
        let x = area.x + offset.min(max_offset) as u16;
        Position::new(x, area.y)
    }
}

impl Widget for Prompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![Span::raw(PROMPT_PREFIX), Span::raw(self.query)]);
        Paragraph::new(line).render(area, buf);
    }
}
