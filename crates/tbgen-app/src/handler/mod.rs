//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `generation`: Pipeline lifecycle handlers (generate/complete/fail/health)
//! - `keys`: Key event handlers per focused pane
//! - `scroll`: Results pane scroll handlers

pub(crate) mod generation;
pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod update;


use std::path::PathBuf;

use tbgen_core::types::GenerateResult;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update.
///
/// Handlers never touch the network or the filesystem themselves; they
/// return one of these and the event loop spawns the task.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Issue the single outbound generation call
    StartGeneration { rtl: String, max_retries: u32 },

    /// Fire-and-forget startup health check
    CheckHealth,

    /// Write the result's testbench and sim log into `dir`
    SaveArtifacts {
        result: Box<GenerateResult>,
        dir: PathBuf,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
