//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    #[error("Failed to restore terminal: {0}")]
    TerminalRestore(String),

    // ─────────────────────────────────────────────────────────────
    // Generation Service Errors
    // ─────────────────────────────────────────────────────────────
    /// The network call itself could not complete (offline, DNS failure,
    /// connection refused). No HTTP response was received.
    #[error("Cannot reach generation service: {message}")]
    Transport { message: String },

    /// The service responded with a non-success status. `message` carries the
    /// structured error payload's `detail` field when present, otherwise the
    /// HTTP status text.
    #[error("Generation request failed: {message}")]
    Request { message: String },

    /// The service responded 2xx but the body did not match the response
    /// contract (missing fields, wrong types, out-of-range values).
    #[error("Malformed service response: {message}")]
    Schema { message: String },

    // ─────────────────────────────────────────────────────────────
    // File Input Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Not an RTL source file (expected .v, .sv, .vhd or .vhdl): {path}")]
    UnsupportedFile { path: PathBuf },

    #[error("RTL file not found: {path}")]
    FileNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid server URL: {url}")]
    InvalidServerUrl { url: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn request(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
        }
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    pub fn unsupported_file(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFile { path: path.into() }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// The text shown to the user beneath the stage indicator.
    ///
    /// For `Request` errors this is the server's `detail` string verbatim,
    /// without any prefix; everything else uses the display form.
    pub fn user_message(&self) -> String {
        match self {
            Error::Request { message } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Check if this is a recoverable error (the user can edit input and
    /// retry without restarting the application)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. } | Error::Request { .. } | Error::Schema { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::TerminalInit(_)
                | Error::UnsupportedFile { .. }
                | Error::FileNotFound { .. }
                | Error::InvalidServerUrl { .. }
        )
    }
}
