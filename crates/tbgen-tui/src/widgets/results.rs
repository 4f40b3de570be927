//! Tabbed results pane
//!
//! Three perspectives on the last generation outcome: testbench source,
//! simulation log, coverage report. A pure function of the model -- the
//! widget borrows the result immutably and derives everything at render time.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use tbgen_app::coverage_view::{self, CoverageLevel};
use tbgen_app::ResultTab;
use tbgen_core::types::{CoverageReport, GenerateResult};

use crate::theme::{palette, styles};

/// Width of the per-signal coverage bar, in cells
const BAR_WIDTH: usize = 20;

pub struct ResultsPanel<'a> {
    result: Option<&'a GenerateResult>,
    tab: ResultTab,
    scroll: usize,
    focused: bool,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(result: Option<&'a GenerateResult>, tab: ResultTab, scroll: usize) -> Self {
        Self {
            result,
            tab,
            scroll,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn tab_bar(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, tab) in ResultTab::ALL.iter().enumerate() {
            let style = if *tab == self.tab {
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                styles::text_muted()
            };
            spans.push(Span::styled(format!("{} {}", i + 1, tab.label()), style));
            spans.push(Span::raw("  "));
        }
        if let Some(result) = self.result {
            let plural = if result.attempts > 1 { "s" } else { "" };
            spans.push(Span::styled(
                format!(
                    "{} attempt{} | {}",
                    result.attempts, plural, result.module.name
                ),
                styles::text_muted(),
            ));
        }
        Line::from(spans)
    }

    fn content_lines(&self) -> Vec<Line<'static>> {
        match self.result {
            None => placeholder_lines(),
            Some(result) => match self.tab {
                ResultTab::Testbench => testbench_lines(result),
                ResultTab::Simulation => simulation_lines(result),
                ResultTab::Coverage => coverage_lines(result),
            },
        }
    }
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(" Results ", self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        buf.set_line(inner.x, inner.y, &self.tab_bar(), inner.width);

        let content_area = Rect {
            x: inner.x,
            y: inner.y + 1,
            width: inner.width,
            height: inner.height - 1,
        };

        let lines = self.content_lines();
        let max_scroll = lines.len().saturating_sub(content_area.height as usize);
        let offset = self.scroll.min(max_scroll) as u16;

        Paragraph::new(lines)
            .scroll((offset, 0))
            .render(content_area, buf);
    }
}

fn placeholder_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "  Generate a testbench to see results",
            styles::text_muted(),
        )),
    ]
}

fn testbench_lines(result: &GenerateResult) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {}", result.description),
            styles::text_secondary(),
        )),
        Line::from(""),
    ];
    for line in result.testbench.lines() {
        lines.push(Line::from(Span::styled(
            format!(" {line}"),
            styles::text_primary(),
        )));
    }
    lines
}

fn simulation_lines(result: &GenerateResult) -> Vec<Line<'static>> {
    let badge = if result.sim_success {
        Span::styled(" PASSED ", styles::badge_pass())
    } else {
        Span::styled(" FAILED ", styles::badge_fail())
    };
    let mut lines = vec![Line::from(vec![Span::raw(" "), badge]), Line::from("")];

    if !result.sim_errors.is_empty() {
        lines.push(Line::from(Span::styled(
            " Errors:",
            Style::default()
                .fg(palette::STATUS_RED)
                .add_modifier(Modifier::BOLD),
        )));
        for error in &result.sim_errors {
            lines.push(Line::from(Span::styled(
                format!("   {error}"),
                Style::default().fg(palette::STATUS_RED),
            )));
        }
        lines.push(Line::from(""));
    }

    if result.sim_output.is_empty() {
        lines.push(Line::from(Span::styled(" (no output)", styles::text_muted())));
    } else {
        for line in result.sim_output.lines() {
            lines.push(Line::from(Span::styled(
                format!(" {line}"),
                styles::text_secondary(),
            )));
        }
    }
    lines
}

fn coverage_lines(result: &GenerateResult) -> Vec<Line<'static>> {
    let Some(coverage) = &result.coverage else {
        return vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No coverage data available",
                styles::text_muted(),
            )),
        ];
    };

    let mut lines = vec![
        headline_line("Total Score", coverage.total_score),
        headline_line("Toggle Coverage", coverage.overall_toggle),
        Line::from(""),
        Line::from(Span::styled(
            " Signal Toggle Coverage",
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    lines.extend(signal_table_lines(coverage));

    if let Some(fsm) = &coverage.fsm_coverage {
        let view = coverage_view::fsm_view(fsm);
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " FSM State Coverage",
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::styled(" Coverage: ", styles::text_secondary()),
            Span::styled(
                format!("{}%", view.coverage_pct),
                styles::coverage_style(view.level),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                " Declared states: {}",
                coverage_view::format_states(&view.declared)
            ),
            styles::text_secondary(),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                " Visited states: {}",
                coverage_view::format_states(&view.visited)
            ),
            styles::text_secondary(),
        )));
        if !view.anomalies.is_empty() {
            lines.push(Line::from(Span::styled(
                format!(
                    " Unknown visited states: {}",
                    coverage_view::format_states(&view.anomalies)
                ),
                Style::default().fg(palette::STATUS_RED),
            )));
        }
    }

    lines
}

fn headline_line(label: &str, pct: f64) -> Line<'static> {
    let level = CoverageLevel::classify(pct);
    Line::from(vec![
        Span::styled(format!(" {label:<16}"), styles::text_secondary()),
        Span::styled(
            format!("{pct:.1}%"),
            styles::coverage_style(level).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn signal_table_lines(coverage: &CoverageReport) -> Vec<Line<'static>> {
    let rows = coverage_view::signal_rows(coverage);
    let name_width = rows
        .iter()
        .map(|row| row.signal.len())
        .max()
        .unwrap_or(0)
        .max(8);

    rows.into_iter()
        .map(|row| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<name_width$} ", row.signal),
                    styles::text_primary(),
                ),
                Span::styled(format!("{:>5.1}% ", row.pct), styles::text_secondary()),
                Span::styled(bar(row.pct), styles::coverage_style(row.level)),
            ])
        })
        .collect()
}

/// Proportional bar, filled cells rounded from the percentage
fn bar(pct: f64) -> String {
    let filled = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use std::collections::BTreeMap;
    use tbgen_core::types::{FsmCoverage, ModuleDescriptor};

    fn result_with_coverage() -> GenerateResult {
        let mut toggle = BTreeMap::new();
        toggle.insert("clk".to_string(), 100.0);
        toggle.insert("rst_n".to_string(), 42.5);
        GenerateResult {
            testbench: "module counter_tb;\n  initial begin\n  end\nendmodule".to_string(),
            description: "Exercises reset and count-up behavior".to_string(),
            module: ModuleDescriptor {
                name: "counter".to_string(),
                ports: vec![],
                parameters: vec![],
            },
            sim_success: true,
            sim_output: "All checks passed".to_string(),
            sim_errors: vec![],
            coverage: Some(CoverageReport {
                toggle_coverage: toggle,
                overall_toggle: 71.2,
                fsm_coverage: Some(FsmCoverage {
                    declared_states: vec![0, 1, 2, 3],
                    visited_states: vec![0, 1, 3],
                    coverage_pct: 75.0,
                }),
                total_score: 81.3,
            }),
            attempts: 2,
        }
    }

    #[test]
    fn test_placeholder_without_result() {
        let mut term = TestTerminal::new();
        let panel = ResultsPanel::new(None, ResultTab::Testbench, 0);

        term.render_widget(panel, term.area());

        assert!(term.buffer_contains("Generate a testbench to see results"));
    }

    #[test]
    fn test_testbench_tab_shows_description_and_source() {
        let mut term = TestTerminal::new();
        let result = result_with_coverage();
        let panel = ResultsPanel::new(Some(&result), ResultTab::Testbench, 0);

        term.render_widget(panel, term.area());

        assert!(term.buffer_contains("Exercises reset and count-up behavior"));
        assert!(term.buffer_contains("module counter_tb;"));
        assert!(term.buffer_contains("2 attempts | counter"));
    }

    #[test]
    fn test_simulation_tab_pass_badge_and_log() {
        let mut term = TestTerminal::new();
        let result = result_with_coverage();
        let panel = ResultsPanel::new(Some(&result), ResultTab::Simulation, 0);

        term.render_widget(panel, term.area());

        assert!(term.buffer_contains("PASSED"));
        assert!(term.buffer_contains("All checks passed"));
    }

    #[test]
    fn test_simulation_tab_failure_lists_errors() {
        let mut term = TestTerminal::new();
        let mut result = result_with_coverage();
        result.sim_success = false;
        result.sim_errors = vec!["assertion failed at t=40ns".to_string()];
        result.sim_output = String::new();
        let panel = ResultsPanel::new(Some(&result), ResultTab::Simulation, 0);

        term.render_widget(panel, term.area());

        assert!(term.buffer_contains("FAILED"));
        assert!(term.buffer_contains("assertion failed at t=40ns"));
        assert!(term.buffer_contains("(no output)"));
    }

    #[test]
    fn test_coverage_tab_table_and_headlines() {
        let mut term = TestTerminal::new();
        let result = result_with_coverage();
        let panel = ResultsPanel::new(Some(&result), ResultTab::Coverage, 0);

        term.render_widget(panel, term.area());

        assert!(term.buffer_contains("Total Score"));
        assert!(term.buffer_contains("81.3%"));
        assert!(term.buffer_contains("71.2%"));
        assert!(term.buffer_contains("clk"));
        assert!(term.buffer_contains("100.0%"));
        assert!(term.buffer_contains("rst_n"));
    }

    #[test]
    fn test_coverage_tab_fsm_lists_verbatim() {
        let mut term = TestTerminal::new();
        let result = result_with_coverage();
        let panel = ResultsPanel::new(Some(&result), ResultTab::Coverage, 0);

        term.render_widget(panel, term.area());

        assert!(term.buffer_contains("Declared states: [0, 1, 2, 3]"));
        assert!(term.buffer_contains("Visited states: [0, 1, 3]"));
        assert!(!term.buffer_contains("Unknown visited states"));
    }

    #[test]
    fn test_coverage_tab_flags_anomalies() {
        let mut term = TestTerminal::new();
        let mut result = result_with_coverage();
        result.coverage.as_mut().unwrap().fsm_coverage = Some(FsmCoverage {
            declared_states: vec![0, 1],
            visited_states: vec![0, 1, 7],
            coverage_pct: 100.0,
        });
        let panel = ResultsPanel::new(Some(&result), ResultTab::Coverage, 0);

        term.render_widget(panel, term.area());

        assert!(term.buffer_contains("Unknown visited states: [7]"));
    }

    #[test]
    fn test_coverage_tab_without_data() {
        let mut term = TestTerminal::new();
        let mut result = result_with_coverage();
        result.coverage = None;
        let panel = ResultsPanel::new(Some(&result), ResultTab::Coverage, 0);

        term.render_widget(panel, term.area());

        assert!(term.buffer_contains("No coverage data available"));
    }

    #[test]
    fn test_bar_proportions() {
        assert_eq!(bar(100.0), "█".repeat(20));
        assert_eq!(bar(0.0), "░".repeat(20));
        assert_eq!(bar(50.0), format!("{}{}", "█".repeat(10), "░".repeat(10)));
    }

    #[test]
    fn test_rendering_is_pure_and_idempotent() {
        let result = result_with_coverage();
        let before = result.clone();

        let mut first = TestTerminal::new();
        first.render_widget(
            ResultsPanel::new(Some(&result), ResultTab::Coverage, 0),
            first.area(),
        );
        let mut second = TestTerminal::new();
        second.render_widget(
            ResultsPanel::new(Some(&result), ResultTab::Coverage, 0),
            second.area(),
        );

        assert_eq!(first.content(), second.content());
        assert_eq!(result, before);
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut term = TestTerminal::new();
        let result = result_with_coverage();
        // Far beyond content height; must not panic and still render the pane
        let panel = ResultsPanel::new(Some(&result), ResultTab::Testbench, 10_000);

        term.render_widget(panel, term.area());

        assert!(term.buffer_contains("Results"));
    }
}
