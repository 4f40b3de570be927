//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{generation, keys, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = keys::handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Pipeline Messages
        // ─────────────────────────────────────────────────────────
        Message::Generate => generation::handle_generate(state),
        Message::GenerationCompleted { result } => generation::handle_completed(state, result),
        Message::GenerationFailed { message } => generation::handle_failed(state, message),
        Message::HealthChecked { health } => generation::handle_health(state, health),

        // ─────────────────────────────────────────────────────────
        // Editor Messages
        // ─────────────────────────────────────────────────────────
        Message::LoadSample => generation::handle_load_sample(state),

        // ─────────────────────────────────────────────────────────
        // Results View Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleFocus => {
            state.focus = state.focus.toggled();
            UpdateResult::none()
        }
        Message::SelectTab(tab) => {
            if state.result_tab != tab {
                state.result_tab = tab;
                state.result_scroll = 0;
            }
            UpdateResult::none()
        }
        Message::NextTab => {
            state.result_tab = state.result_tab.next();
            state.result_scroll = 0;
            UpdateResult::none()
        }
        Message::PrevTab => {
            state.result_tab = state.result_tab.prev();
            state.result_scroll = 0;
            UpdateResult::none()
        }
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),

        // ─────────────────────────────────────────────────────────
        // Artifact Saving
        // ─────────────────────────────────────────────────────────
        Message::SaveArtifacts => generation::handle_save_artifacts(state),
        Message::ArtifactsSaved { summary } => {
            state.notice = Some(summary);
            UpdateResult::none()
        }
        Message::ArtifactSaveFailed { message } => {
            state.notice = Some(format!("Save failed: {message}"));
            UpdateResult::none()
        }
    }
}
