//! Key action handling (pure state transitions).
//!
//! Each action is applied to the state synchronously; the caller renders
//! after every `Continue`.

use crate::model::KeyAction;
use crate::state::AppState;
use tracing::trace;

/// What the interactive loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Keep reading input.
    Continue,
    /// Leave the loop and launch the current selection.
    Launch,
    /// Leave the loop without launching.
    Cancel,
}

/// Apply `action` to `state`.
pub fn handle_key_action(state: &mut AppState, action: KeyAction) -> LoopControl {
    match action {
        KeyAction::Insert(ch) => {
            if !state.selection.on_character(&state.index, ch) {
                trace!("Query at maximum length, ignoring {:?}", ch);
            }
            LoopControl::Continue
        }
        KeyAction::Erase => {
            state.selection.on_erase(&state.index);
            LoopControl::Continue
        }
        KeyAction::Clear => {
            state.selection.reset(&state.index);
            LoopControl::Continue
        }
        KeyAction::Confirm => LoopControl::Launch,
        KeyAction::Cancel => LoopControl::Cancel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::CandidateIndex;
    use crate::model::Candidate;
    use crate::state::DisplaySettings;

    fn state_with(names: &[&str]) -> AppState {
        let candidates = names
            .iter()
            .map(|name| Candidate::new(*name, format!("/bin/{name}"), 0))
            .collect();
        AppState::new(
            CandidateIndex::from_candidates(candidates, 1),
            DisplaySettings::default(),
        )
    }

    fn selected_name(state: &AppState) -> Option<&str> {
        state.selected_candidate().map(Candidate::name)
    }

    #[test]
    fn insert_extends_query() {
        let mut state = state_with(&["vi", "vim"]);

        let control = handle_key_action(&mut state, KeyAction::Insert('v'));

        assert_eq!(control, LoopControl::Continue);
        assert_eq!(state.selection.query(), "v");
        assert_eq!(selected_name(&state), Some("vi"));
    }

    #[test]
    fn erase_shortens_query() {
        let mut state = state_with(&["vi", "vim"]);
        handle_key_action(&mut state, KeyAction::Insert('v'));
        handle_key_action(&mut state, KeyAction::Insert('i'));

        let control = handle_key_action(&mut state, KeyAction::Erase);

        assert_eq!(control, LoopControl::Continue);
        assert_eq!(state.selection.query(), "v");
    }

    #[test]
    fn erase_on_empty_query_continues() {
        let mut state = state_with(&["ls"]);

        let control = handle_key_action(&mut state, KeyAction::Erase);

        assert_eq!(control, LoopControl::Continue);
        assert_eq!(state.selection.query(), "");
    }

    #[test]
    fn clear_resets_query() {
        let mut state = state_with(&["ls", "cat"]);
        handle_key_action(&mut state, KeyAction::Insert('c'));

        handle_key_action(&mut state, KeyAction::Clear);

        assert_eq!(state.selection.query(), "");
        assert_eq!(state.selection.match_count(), 2);
    }

    #[test]
    fn confirm_requests_launch_without_touching_selection() {
        let mut state = state_with(&["ls", "cat"]);
        handle_key_action(&mut state, KeyAction::Insert('c'));

        let control = handle_key_action(&mut state, KeyAction::Confirm);

        assert_eq!(control, LoopControl::Launch);
        assert_eq!(selected_name(&state), Some("cat"));
    }

    #[test]
    fn cancel_requests_exit() {
        let mut state = state_with(&["ls"]);
        assert_eq!(
            handle_key_action(&mut state, KeyAction::Cancel),
            LoopControl::Cancel
        );
    }
}
