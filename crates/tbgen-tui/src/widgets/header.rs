//! Header bar widget
//!
//! App title, loaded source name, remote tool health dots and keybinding
//! hints in one bordered row.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use tbgen_core::types::HealthStatus;

use crate::theme::{icons, palette, styles};

/// Main header showing app title, source name, health dots and keybindings
pub struct MainHeader<'a> {
    source_name: Option<&'a str>,
    health: Option<&'a HealthStatus>,
    generating: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(source_name: Option<&'a str>) -> Self {
        Self {
            source_name,
            health: None,
            generating: false,
        }
    }

    /// Add health data for the status dots; `None` renders "status unknown"
    pub fn with_health(mut self, health: Option<&'a HealthStatus>) -> Self {
        self.health = health;
        self
    }

    pub fn generating(mut self, generating: bool) -> Self {
        self.generating = generating;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block("", false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Left section: title + source name
        let mut left_spans = vec![
            Span::raw(" "),
            Span::styled(
                "TestGen",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(
                self.source_name.unwrap_or("unsaved buffer"),
                styles::text_secondary(),
            ),
        ];
        if self.generating {
            left_spans.push(Span::raw("  "));
            left_spans.push(Span::styled(
                "Generating...",
                Style::default().fg(palette::STATUS_YELLOW),
            ));
        }
        let left_line = Line::from(left_spans);
        let left_width = left_line.width() as u16;

        // Middle section: keybinding hints
        let hints = vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("^G", styles::keybinding()),
            Span::styled("] Generate  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("Tab", styles::keybinding()),
            Span::styled("] Focus  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("^L", styles::keybinding()),
            Span::styled("] Sample  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("^Q", styles::keybinding()),
            Span::styled("] Quit", styles::text_muted()),
        ];
        let hints_line = Line::from(hints);
        let hints_width = hints_line.width() as u16;

        // Right section: health dots or "status unknown"
        let health_line = match self.health {
            Some(health) => {
                let mut spans = Vec::new();
                for (ok, label) in [
                    (health.llm_configured, "LLM"),
                    (health.iverilog_available, "iverilog"),
                    (health.verilator_available, "verilator"),
                ] {
                    let (icon, style) = if ok {
                        (icons::ICON_DOT, Style::default().fg(palette::STATUS_GREEN))
                    } else {
                        (icons::ICON_DOT_EMPTY, styles::text_muted())
                    };
                    spans.push(Span::styled(icon, style));
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(
                        label,
                        if ok {
                            styles::text_secondary()
                        } else {
                            styles::text_muted()
                        },
                    ));
                    spans.push(Span::raw("  "));
                }
                Line::from(spans)
            }
            None => Line::from(Span::styled("status unknown  ", styles::text_muted())),
        };
        let health_width = health_line.width() as u16;

        // Left always renders; hints and health only when they fit
        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        if left_width + hints_width + health_width + 4 <= inner.width {
            let hints_x = inner.x + left_width + 2;
            buf.set_line(hints_x, inner.y, &hints_line, hints_width);
        }

        if left_width + health_width + 2 <= inner.width {
            let health_x = inner.x + inner.width - health_width;
            buf.set_line(health_x, inner.y, &health_line, health_width);
        }
    }
}
