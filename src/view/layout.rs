//! Screen layout rendering.
//!
//! Rows are stacked top to bottom: banner, status line, prompt, then in long
//! mode a rule and the listing. Rows that do not fit are dropped.

use crate::state::AppState;
use crate::view::candidate_list::CandidateList;
use crate::view::constants::{ROW_HEIGHT, RULE_WIDTH};
use crate::view::prompt::Prompt;
use crate::view::status_line::{Banner, StatusLine};
use ratatui::{
    layout::Rect,
    symbols::line,
    widgets::Paragraph,
    Frame,
};

/// Where each part of the screen goes for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenAreas {
    pub banner: Option<Rect>,
    pub status: Option<Rect>,
    pub prompt: Option<Rect>,
    pub rule: Option<Rect>,
    pub listing: Option<Rect>,
}

struct RowCursor {
    area: Rect,
    next_y: u16,
}

impl RowCursor {
    fn new(area: Rect) -> Self {
        Self {
            area,
            next_y: area.y,
        }
    }

    fn remaining(&self) -> u16 {
        self.area.bottom().saturating_sub(self.next_y)
    }

    fn take(&mut self, height: u16) -> Option<Rect> {
        let height = height.min(self.remaining());
        if height == 0 {
            return None;
        }
        let rect = Rect::new(self.area.x, self.next_y, self.area.width, height);
        self.next_y += height;
        Some(rect)
    }
}

/// Compute the row layout for `state` inside `area`.
pub fn calculate_areas(area: Rect, state: &AppState) -> ScreenAreas {
    let mut rows = RowCursor::new(area);
    let mut areas = ScreenAreas::default();

    if state.shows_banner() {
        areas.banner = rows.take(ROW_HEIGHT);
    }
    areas.status = rows.take(ROW_HEIGHT);
    areas.prompt = rows.take(ROW_HEIGHT);

    if state.shows_listing() {
        areas.rule = rows.take(ROW_HEIGHT);
        let listing_rows = u16::try_from(state.display.prompt_count).unwrap_or(u16::MAX);
        areas.listing = rows.take(listing_rows);
    }

    areas
}

/// Render the whole screen for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState) {
    let areas = calculate_areas(frame.area(), state);

    if let Some(area) = areas.banner {
        frame.render_widget(Banner::new(&state.index), area);
    }

    if let Some(area) = areas.status {
        frame.render_widget(
            StatusLine::new(state.selected_candidate(), state.selection.match_count()),
            area,
        );
    }

    if let Some(area) = areas.rule {
        render_rule(frame, area);
    }

    if let Some(area) = areas.listing {
        frame.render_widget(
            CandidateList::new(
                &state.index,
                state.selection.query(),
                state.selection.selected(),
            ),
            area,
        );
    }

    if let Some(area) = areas.prompt {
        let prompt = Prompt::new(state.selection.query());
        let cursor = prompt.cursor_position(area);
        frame.render_widget(prompt, area);
        frame.set_cursor_position(cursor);
    }
}

fn render_rule(frame: &mut Frame, area: Rect) {
    let width = area.width.min(RULE_WIDTH);
    let rule = line::HORIZONTAL.repeat(width as usize);
    frame.render_widget(Paragraph::new(rule), Rect { width, ..area });
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
