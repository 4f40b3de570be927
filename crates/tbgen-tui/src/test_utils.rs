//! Test helpers for widget rendering assertions

use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Terminal;

/// In-memory terminal for widget tests
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Standard 80x24 terminal
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        Self {
            terminal: Terminal::new(backend).expect("test terminal"),
        }
    }

    /// Narrow terminal for truncation behavior
    pub fn compact() -> Self {
        Self::with_size(40, 12)
    }

    pub fn area(&self) -> Rect {
        self.terminal.backend().buffer().area
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("render");
    }

    /// Full buffer content as one string, rows joined by newlines
    pub fn content(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    out.push_str(cell.symbol());
                }
            }
            out.push('\n');
        }
        out
    }

    /// Whether the rendered buffer contains `needle` within one row
    pub fn buffer_contains(&self, needle: &str) -> bool {
        self.content().lines().any(|line| line.contains(needle))
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
