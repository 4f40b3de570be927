//! Main render/view function (View in TEA pattern)

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use ratatui::Frame;

use tbgen_app::{AppState, Focus};
use tbgen_core::types::PipelineStage;

use crate::layout;
use crate::theme::{palette, styles};
use crate::widgets;

/// Render the complete UI. A pure function of state -- rendering twice with
/// the same state produces the same buffer and never mutates the model.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let stage_lines = stage_bar_lines(state);
    let areas = layout::create(area, stage_lines);

    let header = widgets::MainHeader::new(state.source_name.as_deref())
        .with_health(state.health.as_ref())
        .generating(state.is_generating());
    frame.render_widget(header, areas.header);

    if stage_lines > 0 {
        let stage_bar =
            widgets::StageBar::new(state.stage, state.failed_stage, state.error.as_deref());
        frame.render_widget(stage_bar, areas.stage_bar);
    }

    let editor = widgets::EditorPanel::new(&state.editor, state.focus == Focus::Editor);
    frame.render_widget(editor, areas.editor);

    let results = widgets::ResultsPanel::new(
        state.result.as_ref(),
        state.result_tab,
        state.result_scroll,
    )
    .focused(state.focus == Focus::Results);
    frame.render_widget(results, areas.results);

    render_footer(frame, state, areas.footer);
}

/// Rows reserved for the stage indicator: none while idle, one for the
/// chips, one more for the error text
fn stage_bar_lines(state: &AppState) -> u16 {
    if state.stage == PipelineStage::Idle {
        0
    } else if state.error.is_some() {
        2
    } else {
        1
    }
}

fn render_footer(frame: &mut Frame, state: &AppState, area: Rect) {
    let line = if let Some(notice) = &state.notice {
        Line::from(Span::styled(format!(" {notice}"), styles::accent_bold()))
    } else {
        match state.focus {
            Focus::Editor if state.can_generate() => Line::from(Span::styled(
                " editing RTL -- ^G runs the pipeline, Tab switches to results",
                styles::text_muted(),
            )),
            Focus::Editor => Line::from(Span::styled(
                " editing RTL -- Tab switches to results",
                styles::text_muted(),
            )),
            Focus::Results => Line::from(Span::styled(
                " [1/2/3] tabs  [up/down] scroll  [w] save artifacts  [q] quit",
                styles::text_muted(),
            )),
        }
    };
    Paragraph::new(line).render(area, frame.buffer_mut());
}
