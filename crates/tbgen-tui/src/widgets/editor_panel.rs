//! RTL source editor pane
//!
//! Renders the input buffer with line numbers and a block cursor, following
//! the cursor vertically so it stays visible. The buffer itself lives in
//! `tbgen-app`; this widget only draws it.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use tbgen_app::RtlEditor;

use crate::theme::{palette, styles};

pub struct EditorPanel<'a> {
    editor: &'a RtlEditor,
    focused: bool,
}

impl<'a> EditorPanel<'a> {
    pub fn new(editor: &'a RtlEditor, focused: bool) -> Self {
        Self { editor, focused }
    }
}

impl Widget for EditorPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(" RTL Source ", self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (cursor_row, cursor_col) = self.editor.cursor();
        let visible = inner.height as usize;

        // Follow the cursor: keep it on the last visible row when it moves
        // past the bottom
        let top = cursor_row.saturating_sub(visible.saturating_sub(1));

        let number_width = self.editor.line_count().to_string().len().max(3);

        for (screen_row, line_idx) in (top..self.editor.line_count()).take(visible).enumerate() {
            let line = &self.editor.lines()[line_idx];
            let y = inner.y + screen_row as u16;

            let mut spans = vec![Span::styled(
                format!("{:>number_width$} ", line_idx + 1),
                Style::default().fg(palette::LINE_NUMBER),
            )];

            if self.focused && line_idx == cursor_row {
                // Split the line around the cursor cell
                let chars: Vec<char> = line.chars().collect();
                let before: String = chars.iter().take(cursor_col).collect();
                let at: String = chars
                    .get(cursor_col)
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| " ".to_string());
                let after: String = chars.iter().skip(cursor_col + 1).collect();

                spans.push(Span::styled(before, styles::text_primary()));
                spans.push(Span::styled(
                    at,
                    Style::default()
                        .fg(palette::CURSOR_FG)
                        .bg(palette::CURSOR_BG),
                ));
                spans.push(Span::styled(after, styles::text_primary()));
            } else {
                spans.push(Span::styled(line.as_str(), styles::text_primary()));
            }

            buf.set_line(inner.x, y, &Line::from(spans), inner.width);
        }
    }
}
