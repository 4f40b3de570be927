//! Derived view-model for the coverage tab
//!
//! Pure helpers that turn a [`CoverageReport`] into display rows: per-signal
//! percentages sorted by name, threshold classification shared by the bars
//! and the headline scores, and FSM state lists rendered verbatim. Unknown
//! visited states (a server contract violation) are surfaced as anomalies
//! instead of being trusted or dropped.

use tbgen_core::types::{CoverageReport, FsmCoverage};

/// Threshold classification for percentage displays.
/// Inclusive lower bounds: >= 80 good, >= 50 warning, else critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageLevel {
    Good,
    Warning,
    Critical,
}

impl CoverageLevel {
    pub fn classify(pct: f64) -> CoverageLevel {
        if pct >= 80.0 {
            CoverageLevel::Good
        } else if pct >= 50.0 {
            CoverageLevel::Warning
        } else {
            CoverageLevel::Critical
        }
    }
}

/// One row of the signal toggle-coverage table
#[derive(Debug, Clone, PartialEq)]
pub struct SignalRow {
    pub signal: String,
    pub pct: f64,
    pub level: CoverageLevel,
}

/// Toggle-coverage rows sorted by signal name
pub fn signal_rows(report: &CoverageReport) -> Vec<SignalRow> {
    // BTreeMap iteration order is already the display order
    report
        .toggle_coverage
        .iter()
        .map(|(signal, &pct)| SignalRow {
            signal: signal.clone(),
            pct,
            level: CoverageLevel::classify(pct),
        })
        .collect()
}

/// FSM coverage prepared for display
#[derive(Debug, Clone, PartialEq)]
pub struct FsmView {
    pub coverage_pct: f64,
    pub level: CoverageLevel,
    /// Declared state codes, reported order
    pub declared: Vec<i64>,
    /// Visited state codes, reported order, verbatim
    pub visited: Vec<i64>,
    /// Visited codes absent from `declared` -- contract violations, flagged
    /// rather than fatal
    pub anomalies: Vec<i64>,
}

pub fn fsm_view(fsm: &FsmCoverage) -> FsmView {
    let anomalies = fsm
        .visited_states
        .iter()
        .filter(|code| !fsm.declared_states.contains(code))
        .copied()
        .collect();
    FsmView {
        coverage_pct: fsm.coverage_pct,
        level: CoverageLevel::classify(fsm.coverage_pct),
        declared: fsm.declared_states.clone(),
        visited: fsm.visited_states.clone(),
        anomalies,
    }
}

/// Format a state-code list the way the coverage tab shows it: `[0, 1, 3]`
pub fn format_states(states: &[i64]) -> String {
    let inner = states
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{inner}]")
}
