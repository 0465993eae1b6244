//! TUI rendering and terminal management (impure shell)

pub mod candidate_list;
pub mod constants;
pub mod layout;
pub mod prompt;
pub mod status_line;
pub mod terminal;

pub use candidate_list::CandidateList;
pub use layout::render_layout;
pub use prompt::Prompt;
pub use status_line::{Banner, StatusLine};
pub use terminal::TerminalGuard;

use crate::config::KeyBindings;
use crate::model::Candidate;
use crate::state::{handle_key_action, AppState, LoopControl};
use constants::POLL_INTERVAL;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// How the interactive loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopOutcome {
    /// Confirm was pressed; carries the selection at that moment.
    Launch(Option<Candidate>),
    /// Cancel key or interrupt signal.
    Cancelled,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    pub fn new(terminal: Terminal<B>, app_state: AppState, key_bindings: KeyBindings) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
        }
    }

    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Run the main event loop
    ///
    /// Draws once, then blocks on input. Every key is fully applied and
    /// redrawn before the next one is read. `interrupted` is checked between
    /// polls so a signal ends the loop within one poll interval.
    pub fn run(&mut self, interrupted: &AtomicBool) -> Result<LoopOutcome, TuiError> {
        self.draw()?;

        loop {
            if interrupted.load(Ordering::SeqCst) {
                info!("Interrupted, leaving interactive loop");
                return Ok(LoopOutcome::Cancelled);
            }

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) => {
                    if let Some(outcome) = self.handle_key(key) {
                        return Ok(outcome);
                    }
                    self.draw()?;
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                    self.draw()?;
                }
                _ => {}
            }
        }
    }

    /// Apply one key event. Returns the outcome once the loop should end.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<LoopOutcome> {
        // Kitty-protocol terminals also report releases
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let action = self.key_bindings.get(key)?;

        match handle_key_action(&mut self.app_state, action) {
            LoopControl::Continue => None,
            LoopControl::Launch => Some(LoopOutcome::Launch(
                self.app_state.selected_candidate().cloned(),
            )),
            LoopControl::Cancel => Some(LoopOutcome::Cancelled),
        }
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        self.terminal.draw(|frame| {
            layout::render_layout(frame, &self.app_state);
        })?;
        Ok(())
    }
}

/// Take over the terminal and run the interactive loop on stdout.
///
/// The terminal is restored before this returns, whatever the outcome, so
/// the caller can launch or print errors right away.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(app_state: AppState, interrupted: &AtomicBool) -> Result<LoopOutcome, TuiError> {
    let _guard = TerminalGuard::acquire()?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut app = TuiApp::new(terminal, app_state, KeyBindings::default());
    app.run(interrupted)
}
