//! Results pane scroll handlers

use crate::state::AppState;

use super::UpdateResult;

/// Lines moved per page scroll
const PAGE_LINES: usize = 20;

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.result_scroll = state.result_scroll.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    // The widget clamps against content height at render time
    state.result_scroll = state.result_scroll.saturating_add(1);
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.result_scroll = state.result_scroll.saturating_sub(PAGE_LINES);
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.result_scroll = state.result_scroll.saturating_add(PAGE_LINES);
    UpdateResult::none()
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.result_scroll = 0;
    UpdateResult::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_scroll_up_saturates_at_zero() {
        let mut state = AppState::new(Settings::default());
        handle_scroll_up(&mut state);
        assert_eq!(state.result_scroll, 0);
    }

    #[test]
    fn test_scroll_and_page_movement() {
        let mut state = AppState::new(Settings::default());
        handle_scroll_down(&mut state);
        handle_scroll_down(&mut state);
        assert_eq!(state.result_scroll, 2);

        handle_page_down(&mut state);
        assert_eq!(state.result_scroll, 2 + PAGE_LINES);

        handle_page_up(&mut state);
        assert_eq!(state.result_scroll, 2);

        handle_scroll_to_top(&mut state);
        assert_eq!(state.result_scroll, 0);
    }
}
