//! Key event handlers per focused pane

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus, ResultTab};

/// Translate a key into a follow-up message, mutating editor state directly
/// for plain editing keys.
pub fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    // Global bindings, any focus
    match key {
        InputKey::CharCtrl('c') | InputKey::CharCtrl('q') => return Some(Message::Quit),
        InputKey::CharCtrl('g') => return Some(Message::Generate),
        InputKey::CharCtrl('l') => return Some(Message::LoadSample),
        InputKey::Tab | InputKey::BackTab => return Some(Message::ToggleFocus),
        _ => {}
    }

    match state.focus {
        Focus::Editor => handle_editor_key(state, key),
        Focus::Results => handle_results_key(key),
    }
}

/// Editing keys mutate the buffer in place; nothing to follow up with
fn handle_editor_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    let editor = &mut state.editor;
    match key {
        InputKey::Char(c) => editor.insert_char(c),
        InputKey::Enter => editor.insert_newline(),
        InputKey::Backspace => editor.backspace(),
        InputKey::Delete => editor.delete(),
        InputKey::Left => editor.move_left(),
        InputKey::Right => editor.move_right(),
        InputKey::Up => editor.move_up(),
        InputKey::Down => editor.move_down(),
        InputKey::Home => editor.move_home(),
        InputKey::End => editor.move_end(),
        _ => {}
    }
    None
}

fn handle_results_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('g') => Some(Message::Generate),

        InputKey::Char('1') | InputKey::Char('t') => {
            Some(Message::SelectTab(ResultTab::Testbench))
        }
        InputKey::Char('2') | InputKey::Char('s') => {
            Some(Message::SelectTab(ResultTab::Simulation))
        }
        InputKey::Char('3') | InputKey::Char('c') => Some(Message::SelectTab(ResultTab::Coverage)),
        InputKey::Right => Some(Message::NextTab),
        InputKey::Left => Some(Message::PrevTab),

        InputKey::Up => Some(Message::ScrollUp),
        InputKey::Down => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home => Some(Message::ScrollToTop),

        InputKey::Char('w') => Some(Message::SaveArtifacts),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn state_with_focus(focus: Focus) -> AppState {
        let mut state = AppState::new(Settings::default());
        state.focus = focus;
        state
    }

    #[test]
    fn test_ctrl_g_generates_from_any_focus() {
        for focus in [Focus::Editor, Focus::Results] {
            let mut state = state_with_focus(focus);
            assert_eq!(
                handle_key(&mut state, InputKey::CharCtrl('g')),
                Some(Message::Generate)
            );
        }
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut state = state_with_focus(Focus::Editor);
        assert_eq!(
            handle_key(&mut state, InputKey::CharCtrl('c')),
            Some(Message::Quit)
        );
    }

    #[test]
    fn test_tab_toggles_focus() {
        let mut state = state_with_focus(Focus::Editor);
        assert_eq!(
            handle_key(&mut state, InputKey::Tab),
            Some(Message::ToggleFocus)
        );
    }

    #[test]
    fn test_editor_chars_go_into_buffer() {
        let mut state = state_with_focus(Focus::Editor);
        assert_eq!(handle_key(&mut state, InputKey::Char('m')), None);
        assert_eq!(handle_key(&mut state, InputKey::Char('o')), None);
        assert_eq!(state.editor.text(), "mo");
    }

    #[test]
    fn test_plain_q_types_into_editor() {
        // 'q' only quits from the results pane; in the editor it is text
        let mut state = state_with_focus(Focus::Editor);
        assert_eq!(handle_key(&mut state, InputKey::Char('q')), None);
        assert_eq!(state.editor.text(), "q");
    }

    #[test]
    fn test_results_tab_selection() {
        let mut state = state_with_focus(Focus::Results);
        assert_eq!(
            handle_key(&mut state, InputKey::Char('2')),
            Some(Message::SelectTab(ResultTab::Simulation))
        );
        assert_eq!(
            handle_key(&mut state, InputKey::Char('c')),
            Some(Message::SelectTab(ResultTab::Coverage))
        );
        assert_eq!(handle_key(&mut state, InputKey::Right), Some(Message::NextTab));
    }

    #[test]
    fn test_results_scroll_keys() {
        let mut state = state_with_focus(Focus::Results);
        assert_eq!(handle_key(&mut state, InputKey::Down), Some(Message::ScrollDown));
        assert_eq!(handle_key(&mut state, InputKey::PageUp), Some(Message::PageUp));
        assert_eq!(handle_key(&mut state, InputKey::Home), Some(Message::ScrollToTop));
    }

    #[test]
    fn test_results_w_saves() {
        let mut state = state_with_focus(Focus::Results);
        assert_eq!(
            handle_key(&mut state, InputKey::Char('w')),
            Some(Message::SaveArtifacts)
        );
    }
}
