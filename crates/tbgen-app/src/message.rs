//! Message types for the application (TEA pattern)

use tbgen_core::types::{GenerateResult, HealthStatus};

use crate::input_key::InputKey;
use crate::state::ResultTab;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Pipeline Messages
    // ─────────────────────────────────────────────────────────
    /// Submit the editor buffer to the generation service
    Generate,
    /// The outstanding request finished successfully
    GenerationCompleted { result: Box<GenerateResult> },
    /// The outstanding request failed; `message` is the user-facing text
    GenerationFailed { message: String },

    /// Startup health check came back
    HealthChecked { health: HealthStatus },

    // ─────────────────────────────────────────────────────────
    // Editor Messages
    // ─────────────────────────────────────────────────────────
    /// Replace the buffer with the bundled sample design
    LoadSample,

    // ─────────────────────────────────────────────────────────
    // Results View Messages
    // ─────────────────────────────────────────────────────────
    ToggleFocus,
    SelectTab(ResultTab),
    NextTab,
    PrevTab,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,

    // ─────────────────────────────────────────────────────────
    // Artifact Saving
    // ─────────────────────────────────────────────────────────
    /// Write the current result's testbench (and sim log) to disk
    SaveArtifacts,
    /// Artifacts were written; `summary` names the files for the footer
    ArtifactsSaved { summary: String },
    /// Saving failed; shown in the footer, not a pipeline error
    ArtifactSaveFailed { message: String },
}
