//! Interactive state (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod input_handler;
pub mod matcher;
pub mod selection;

// Re-export for convenience
pub use app_state::{AppState, DisplaySettings};
pub use input_handler::{handle_key_action, LoopControl};
pub use matcher::{match_query, matches, MatchOutcome};
pub use selection::{SelectionState, MAX_QUERY_LEN};
