//! Pipeline stage indicator
//!
//! Renders the four active stages as chips with connectors, classified as
//! completed/current/failed/pending purely from the current stage. The chips
//! are a display-only approximation: the remote call is opaque, so a run sits
//! on "Generate TB" for its whole pending period. Any error text is rendered
//! on the line beneath the chips.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use tbgen_core::types::PipelineStage;

use crate::theme::{icons, palette};

/// Visual class of one stage chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageClass {
    Completed,
    Current,
    Failed,
    Pending,
}

/// Classify the chip at `index` (within [`PipelineStage::ACTIVE`]) for the
/// given controller state.
pub fn classify(
    stage: PipelineStage,
    failed_stage: Option<PipelineStage>,
    index: usize,
) -> StageClass {
    match stage {
        PipelineStage::Done => StageClass::Completed,
        PipelineStage::Error => {
            // The failing index comes from the stage the controller was in
            // when the failure arrived. Render defensively when absent.
            match failed_stage.and_then(|s| s.active_index()) {
                Some(failed) if index < failed => StageClass::Completed,
                Some(failed) if index == failed => StageClass::Failed,
                _ => StageClass::Pending,
            }
        }
        other => match other.active_index() {
            Some(current) if index < current => StageClass::Completed,
            Some(current) if index == current => StageClass::Current,
            _ => StageClass::Pending,
        },
    }
}

fn chip_style(class: StageClass) -> Style {
    let (fg, bg) = match class {
        StageClass::Completed => (palette::CONTRAST_FG, palette::STAGE_COMPLETED_BG),
        StageClass::Current => (palette::TEXT_BRIGHT, palette::STAGE_CURRENT_BG),
        StageClass::Failed => (palette::TEXT_BRIGHT, palette::STAGE_FAILED_BG),
        StageClass::Pending => (palette::TEXT_MUTED, palette::STAGE_PENDING_BG),
    };
    Style::default().fg(fg).bg(bg)
}

/// Stage indicator widget; holds no state of its own
pub struct StageBar<'a> {
    stage: PipelineStage,
    failed_stage: Option<PipelineStage>,
    error: Option<&'a str>,
}

impl<'a> StageBar<'a> {
    pub fn new(
        stage: PipelineStage,
        failed_stage: Option<PipelineStage>,
        error: Option<&'a str>,
    ) -> Self {
        Self {
            stage,
            failed_stage,
            error,
        }
    }
}

impl Widget for StageBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (i, stage) in PipelineStage::ACTIVE.iter().enumerate() {
            let class = classify(self.stage, self.failed_stage, i);
            spans.push(Span::styled(format!(" {} ", stage.label()), chip_style(class)));
            if i + 1 < PipelineStage::ACTIVE.len() {
                let connector_style = if class == StageClass::Completed {
                    Style::default().fg(palette::STAGE_COMPLETED_BG)
                } else {
                    Style::default().fg(palette::TEXT_MUTED)
                };
                spans.push(Span::styled(icons::ICON_CONNECTOR, connector_style));
            }
        }
        match self.stage {
            PipelineStage::Done => {
                spans.push(Span::styled(
                    format!("  {} Complete", icons::ICON_CHECK),
                    Style::default()
                        .fg(palette::STATUS_GREEN)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            PipelineStage::Error => {
                spans.push(Span::styled(
                    format!("  {} Failed", icons::ICON_CROSS),
                    Style::default()
                        .fg(palette::STATUS_RED)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            _ => {}
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        // Error text beneath the chips
        if let Some(error) = self.error {
            if area.height >= 2 {
                let line = Line::from(Span::styled(
                    format!(" {error}"),
                    Style::default().fg(palette::STATUS_RED),
                ));
                buf.set_line(area.x, area.y + 1, &line, area.width);
            }
        }
    }
}
