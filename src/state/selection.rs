//! Query and selection tracking across keystrokes.
//!
//! Every mutation rematches immediately against the index, so `selected` and
//! `match_count` always describe the current `query`.

use crate::index::CandidateIndex;
use crate::model::{Candidate, CandidateId};
use crate::state::matcher::match_query;

/// Longest accepted query in bytes. Input past this is rejected, not truncated.
pub const MAX_QUERY_LEN: usize = 2047;

/// The typed query and the candidate it currently selects.
///
/// `selected` is a position in the index, never an owned candidate; it is
/// `None` exactly when nothing matches `query`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    query: String,
    selected: Option<CandidateId>,
    match_count: usize,
}

impl SelectionState {
    /// Start with an empty query, which matches every candidate.
    pub fn new(index: &CandidateIndex) -> Self {
        let mut state = Self {
            query: String::new(),
            selected: None,
            match_count: 0,
        };
        state.rematch(index);
        state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected(&self) -> Option<CandidateId> {
        self.selected
    }

    /// Resolve the selection against the index it was computed from.
    pub fn selected_candidate<'a>(&self, index: &'a CandidateIndex) -> Option<&'a Candidate> {
        self.selected.and_then(|id| index.get(id))
    }

    pub fn match_count(&self) -> usize {
        self.match_count
    }

    /// Append `ch` and rematch.
    ///
    /// Returns `false` and leaves the state untouched when the query would
    /// exceed [`MAX_QUERY_LEN`].
    pub fn on_character(&mut self, index: &CandidateIndex, ch: char) -> bool {
        if self.query.len() + ch.len_utf8() > MAX_QUERY_LEN {
            return false;
        }
        self.query.push(ch);
        self.rematch(index);
        true
    }

    /// Drop the last character and rematch. No-op on an empty query.
    pub fn on_erase(&mut self, index: &CandidateIndex) {
        if self.query.pop().is_some() {
            self.rematch(index);
        }
    }

    /// Clear the query and the selection, then rematch the empty query.
    pub fn reset(&mut self, index: &CandidateIndex) {
        self.query.clear();
        self.selected = None;
        self.rematch(index);
    }

    fn rematch(&mut self, index: &CandidateIndex) {
        let outcome = match_query(index, &self.query, self.selected);
        self.selected = outcome.selected;
        self.match_count = outcome.count;
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
