//! Pipeline lifecycle handlers

use tracing::warn;

use tbgen_core::types::{GenerateResult, HealthStatus};

use crate::editor::SAMPLE_RTL;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// The `generate` command.
///
/// Guards, in order: a request already pending means the command is dropped
/// (never queued), and a blank buffer never starts a request. Both are silent
/// no-ops -- the control renders as disabled in those states.
pub fn handle_generate(state: &mut AppState) -> UpdateResult {
    if state.is_generating() {
        return UpdateResult::none();
    }
    if state.editor.is_blank() {
        return UpdateResult::none();
    }

    state.begin_run();
    UpdateResult::action(UpdateAction::StartGeneration {
        rtl: state.editor.text(),
        max_retries: state.settings.generation.max_retries,
    })
}

pub fn handle_completed(state: &mut AppState, result: Box<GenerateResult>) -> UpdateResult {
    if !state.is_generating() {
        // Cannot happen with a single in-flight request; log and drop rather
        // than clobber a newer outcome.
        warn!("generation completion arrived with no request pending");
        return UpdateResult::none();
    }
    state.finish_run(*result);
    UpdateResult::none()
}

pub fn handle_failed(state: &mut AppState, message: String) -> UpdateResult {
    if !state.is_generating() {
        warn!("generation failure arrived with no request pending: {message}");
        return UpdateResult::none();
    }
    state.fail_run(message);
    UpdateResult::none()
}

/// Health data from the startup check. Failures never produce this message,
/// so `state.health` stays `None` and renders as "status unknown".
pub fn handle_health(state: &mut AppState, health: HealthStatus) -> UpdateResult {
    state.health = Some(health);
    UpdateResult::none()
}

/// Replace the buffer with the bundled sample design. Editing while a
/// request is pending is fine -- the outstanding run already captured its
/// input.
pub fn handle_load_sample(state: &mut AppState) -> UpdateResult {
    state.editor.load(SAMPLE_RTL);
    state.source_name = Some("sample".to_string());
    UpdateResult::none()
}

/// Write the current result's artifacts to the working directory
pub fn handle_save_artifacts(state: &mut AppState) -> UpdateResult {
    match &state.result {
        Some(result) => UpdateResult::action(UpdateAction::SaveArtifacts {
            result: Box::new(result.clone()),
            dir: std::env::current_dir().unwrap_or_else(|_| ".".into()),
        }),
        None => UpdateResult::none(),
    }
}
