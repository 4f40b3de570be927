//! tbgen-app - Application state and orchestration for TestGen TUI
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: `AppState` is the model, `Message` the event vocabulary,
//! `handler::update` the reducer, and `actions`/`process` the glue that
//! spawns background tasks and feeds their results back as messages.

pub mod actions;
pub mod config;
pub mod coverage_view;
pub mod editor;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod state;

// Re-export primary types
pub use config::Settings;
pub use editor::{RtlEditor, SAMPLE_RTL};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::process_message;
pub use state::{AppState, Focus, ResultTab};

// Re-export client types the TUI needs
pub use tbgen_client::GenerationClient;
