//! Layout dimension constants for TUI rendering.

use std::time::Duration;

/// Height of every fixed row (banner, status line, prompt, rule).
pub const ROW_HEIGHT: u16 = 1;

/// Width of the rule separating the prompt from the long-mode listing.
pub const RULE_WIDTH: u16 = 45;

/// Text drawn before the query on the prompt row.
pub const PROMPT_PREFIX: &str = ": ";

/// How long the event loop blocks on input before re-checking the interrupt
/// flag.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);
