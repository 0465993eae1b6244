//! Long-mode listing of matching names.

use crate::index::CandidateIndex;
use crate::model::CandidateId;
use crate::state::matches;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};
use std::ops::Range;

/// First visible match for a listing of `rows` rows.
///
/// Starts at the top and scrolls only as far as needed to keep the selected
/// match (by position among matches) on screen.
pub fn scroll_offset(selected_position: Option<usize>, rows: usize) -> usize {
    match selected_position {
        Some(position) if rows > 0 && position >= rows => position + 1 - rows,
        _ => 0,
    }
}

fn window(offset: usize, rows: usize) -> Range<usize> {
    offset..offset.saturating_add(rows)
}

/// Matching candidate names in index order, one per row, with the selection
/// highlighted.
pub struct CandidateList<'a> {
    index: &'a CandidateIndex,
    query: &'a str,
    selected: Option<CandidateId>,
}

impl<'a> CandidateList<'a> {
    pub fn new(index: &'a CandidateIndex, query: &'a str, selected: Option<CandidateId>) -> Self {
        Self {
            index,
            query,
            selected,
        }
    }
}

impl Widget for CandidateList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = area.height as usize;
        if rows == 0 {
            return;
        }

        let selected_position = self.selected.and_then(|selected| {
            matches(self.index, self.query).position(|(id, _)| id == selected)
        });
        let visible = window(scroll_offset(selected_position, rows), rows);

        let lines: Vec<Line> = matches(self.index, self.query)
            .skip(visible.start)
            .take(visible.len())
            .map(|(id, candidate)| {
                if Some(id) == self.selected {
                    Line::styled(
                        candidate.name(),
                        Style::default().add_modifier(Modifier::REVERSED),
                    )
                } else {
                    Line::raw(candidate.name())
                }
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}
