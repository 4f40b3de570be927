//! Color palette for the terminal theme.

#![allow(dead_code)]

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // pass/completed/good coverage
pub const STATUS_RED: Color = Color::Red; // fail/error/critical coverage
pub const STATUS_YELLOW: Color = Color::Yellow; // warning coverage, key hints
pub const STATUS_BLUE: Color = Color::Blue; // current stage

// --- Stage bar ---
pub const STAGE_COMPLETED_BG: Color = Color::Green;
pub const STAGE_CURRENT_BG: Color = Color::Blue;
pub const STAGE_FAILED_BG: Color = Color::Red;
pub const STAGE_PENDING_BG: Color = Color::DarkGray;

// --- Editor ---
pub const LINE_NUMBER: Color = Color::DarkGray;
pub const CURSOR_FG: Color = Color::Black;
pub const CURSOR_BG: Color = Color::Cyan;
