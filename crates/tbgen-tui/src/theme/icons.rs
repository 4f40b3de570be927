//! Icon glyphs used across widgets

#![allow(dead_code)]

/// Filled status dot (tool available)
pub const ICON_DOT: &str = "●";
/// Hollow status dot (tool missing)
pub const ICON_DOT_EMPTY: &str = "○";
/// Completed stage / pass marker
pub const ICON_CHECK: &str = "✓";
/// Failed stage marker
pub const ICON_CROSS: &str = "✗";
/// Stage connector segment
pub const ICON_CONNECTOR: &str = "──";
/// Braille spinner frames for the pending period
pub const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
