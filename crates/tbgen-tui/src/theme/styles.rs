//! Semantic style builders for the terminal theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use tbgen_app::coverage_view::CoverageLevel;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Badges ---
pub fn badge_pass() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::STATUS_GREEN)
        .add_modifier(Modifier::BOLD)
}

pub fn badge_fail() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .bg(palette::STATUS_RED)
        .add_modifier(Modifier::BOLD)
}

// --- Coverage ---
/// Shared color mapping for coverage bars and headline scores
pub fn coverage_style(level: CoverageLevel) -> Style {
    let color = match level {
        CoverageLevel::Good => palette::STATUS_GREEN,
        CoverageLevel::Warning => palette::STATUS_YELLOW,
        CoverageLevel::Critical => palette::STATUS_RED,
    };
    Style::default().fg(color)
}

// --- Block builders ---
pub fn panel_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}
