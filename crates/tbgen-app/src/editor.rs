//! RTL input buffer
//!
//! A deliberately small line-based text buffer for the RTL pane. The editing
//! surface is presentation plumbing as far as the pipeline is concerned --
//! the controller only ever asks it for `text()` and `is_blank()`.

/// Sample design offered via the load-sample keybinding, a parameterized
/// counter with an overflow flag.
pub const SAMPLE_RTL: &str = r#"module counter #(
    parameter WIDTH = 8
)(
    input wire clk,
    input wire rst_n,
    input wire enable,
    output reg [WIDTH-1:0] count,
    output wire overflow
);

assign overflow = (count == {WIDTH{1'b1}});

always @(posedge clk or negedge rst_n) begin
    if (!rst_n)
        count <= {WIDTH{1'b0}};
    else if (enable)
        count <= count + 1'b1;
end

endmodule"#;

/// Line-based text buffer with a character cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtlEditor {
    lines: Vec<String>,
    /// Cursor line index
    row: usize,
    /// Cursor position within the line, counted in chars
    col: usize,
}

impl Default for RtlEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl RtlEditor {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }

    pub fn from_text(text: &str) -> Self {
        let mut editor = Self::new();
        editor.load(text);
        editor
    }

    /// Replace the buffer content and reset the cursor to the start
    pub fn load(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.row = 0;
        self.col = 0;
    }

    /// The full buffer content
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Cursor position as (line, char column)
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// True when the buffer is empty or all whitespace -- the guard that
    /// keeps the generate command a no-op.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }

    fn byte_index(line: &str, col: usize) -> usize {
        line.char_indices()
            .nth(col)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }

    fn current_line_len(&self) -> usize {
        self.lines[self.row].chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let idx = Self::byte_index(&self.lines[self.row], self.col);
        self.lines[self.row].insert(idx, c);
        self.col += 1;
    }

    pub fn insert_newline(&mut self) {
        let idx = Self::byte_index(&self.lines[self.row], self.col);
        let rest = self.lines[self.row].split_off(idx);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    /// Delete the char before the cursor, joining lines at column 0
    pub fn backspace(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            let idx = Self::byte_index(&self.lines[self.row], self.col);
            self.lines[self.row].remove(idx);
        } else if self.row > 0 {
            let removed = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.current_line_len();
            self.lines[self.row].push_str(&removed);
        }
    }

    /// Delete the char under the cursor, joining lines at end of line
    pub fn delete(&mut self) {
        if self.col < self.current_line_len() {
            let idx = Self::byte_index(&self.lines[self.row], self.col);
            self.lines[self.row].remove(idx);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.current_line_len();
        }
    }

    pub fn move_right(&mut self) {
        if self.col < self.current_line_len() {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.current_line_len());
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.current_line_len());
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = self.current_line_len();
    }
}
