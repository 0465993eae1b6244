//! Scoped ownership of the terminal session.

use crate::view::TuiError;
use crossterm::{
    cursor::Show,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use std::io;
use std::panic;
use std::sync::Once;
use tracing::warn;

static PANIC_HOOK: Once = Once::new();

/// Raw mode plus alternate screen for as long as the guard lives.
///
/// Dropping the guard restores the terminal. That covers normal exit, cancel,
/// interrupt, early `?` returns and unwinding panics alike. Acquiring also
/// installs a panic hook that restores the terminal first, so the panic
/// message is printed on the normal screen rather than the alternate one.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enter raw mode and switch to the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns [`TuiError::Io`] if either step fails. Raw mode is undone if
    /// the screen switch fails.
    pub fn acquire() -> Result<Self, TuiError> {
        PANIC_HOOK.call_once(|| {
            chain_panic_hook(|| {
                let _ = restore_terminal();
            })
        });

        enable_raw_mode()?;
        // Constructed before the screen switch so a failure below still
        // leaves raw mode
        let guard = Self { _private: () };
        io::stdout().execute(EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal() {
            warn!("Failed to restore terminal: {}", err);
        }
    }
}

/// Run `restore` ahead of whatever panic hook is currently installed.
fn chain_panic_hook<F>(restore: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));
}

/// Disable raw mode, leave the alternate screen and show the cursor.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(LeaveAlternateScreen)?;
    stdout.execute(Show)?;
    Ok(())
}
