//! Application state for the interactive loop.
//!
//! Owned by the TUI driver and passed by reference; there is no global state.

use crate::config::{DisplayMode, ResolvedConfig};
use crate::index::CandidateIndex;
use crate::model::Candidate;
use crate::state::selection::SelectionState;

/// Rendering options. They never change what matches or what is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplaySettings {
    pub mode: DisplayMode,
    /// Rows available to the long-mode listing.
    pub prompt_count: usize,
    /// Hide the "loaded N files" banner.
    pub skip_banner: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self::from(&ResolvedConfig::default())
    }
}

impl From<&ResolvedConfig> for DisplaySettings {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            mode: config.mode,
            prompt_count: config.prompt_count,
            skip_banner: config.skip_banner,
        }
    }
}

/// Everything the loop reads and mutates.
#[derive(Debug, Clone)]
pub struct AppState {
    pub index: CandidateIndex,
    pub selection: SelectionState,
    pub display: DisplaySettings,
}

impl AppState {
    pub fn new(index: CandidateIndex, display: DisplaySettings) -> Self {
        let selection = SelectionState::new(&index);
        Self {
            index,
            selection,
            display,
        }
    }

    /// The candidate Enter would launch right now.
    pub fn selected_candidate(&self) -> Option<&Candidate> {
        self.selection.selected_candidate(&self.index)
    }

    /// Whether the load banner takes a row in the current mode.
    pub fn shows_banner(&self) -> bool {
        self.display.mode != DisplayMode::Line && !self.display.skip_banner
    }

    /// Whether the match listing is rendered.
    pub fn shows_listing(&self) -> bool {
        self.display.mode == DisplayMode::Long
    }
}
