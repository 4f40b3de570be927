//! tbgen-tui - Terminal UI for TestGen TUI
//!
//! This crate provides the ratatui-based terminal interface: terminal
//! lifecycle, event polling, layout, theme, widgets and the async runner
//! that drives the TEA loop in tbgen-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::{run, PreloadedSource, RunOptions};
