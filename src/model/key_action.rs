//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions the interactive loop understands.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// [`KeyBindings`](crate::config::KeyBindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Append a character to the query. Default: any printable key
    Insert(char),
    /// Remove the last character of the query. Default: Backspace/Ctrl+h
    Erase,
    /// Clear the whole query. Default: Ctrl+u
    Clear,
    /// Launch the selected candidate. Default: Enter
    Confirm,
    /// Leave without launching. Default: Esc/Ctrl+c
    Cancel,
}
