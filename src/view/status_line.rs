//! Banner and status line widgets.

use crate::index::CandidateIndex;
use crate::model::{format_bytes, Candidate};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One-off summary of the scan: `loaded N files from M paths (size)`.
pub struct Banner<'a> {
    index: &'a CandidateIndex,
}

impl<'a> Banner<'a> {
    pub fn new(index: &'a CandidateIndex) -> Self {
        Self { index }
    }

    pub fn text(&self) -> String {
        format!(
            "loaded {} files from {} paths ({})",
            self.index.len(),
            self.index.directory_count(),
            format_bytes(self.index.total_size())
        )
    }
}

impl Widget for Banner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.text()).render(area, buf);
    }
}

/// What Enter would launch and how many names match.
///
/// Renders `exec <path> (<size>) <count>`, or `no match` when the query
/// selects nothing.
pub struct StatusLine<'a> {
    selected: Option<&'a Candidate>,
    match_count: usize,
}

impl<'a> StatusLine<'a> {
    pub fn new(selected: Option<&'a Candidate>, match_count: usize) -> Self {
        Self {
            selected,
            match_count,
        }
    }

    fn line(&self) -> Line<'static> {
        match self.selected {
            Some(candidate) => Line::from(vec![
                Span::raw("exec "),
                Span::styled(
                    candidate.path().display().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    " ({}) {}",
                    format_bytes(candidate.size()),
                    self.match_count
                )),
            ]),
            None => Line::from(Span::styled(
                "no match",
                Style::default().add_modifier(Modifier::DIM),
            )),
        }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}
