//! Domain types for the generation pipeline
//!
//! Everything here is produced by the remote generation service and treated
//! as immutable once received. Wire-format parsing and validation live in
//! `tbgen-client`; these types are the already-validated shapes the rest of
//! the application works with.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Direction of a module port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    Input,
    Output,
    Inout,
}

impl PortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortDirection::Input => "input",
            PortDirection::Output => "output",
            PortDirection::Inout => "inout",
        }
    }
}

/// One port of the module under test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortDescriptor {
    pub direction: PortDirection,
    /// Identifier, non-empty
    pub name: String,
    /// Bit width, >= 1 (1 for scalar signals)
    pub width: u32,
}

impl PortDescriptor {
    /// Verilog-style declaration fragment, e.g. `input [7:0] data`
    pub fn declaration(&self) -> String {
        if self.width > 1 {
            format!("{} [{}:0] {}", self.direction.as_str(), self.width - 1, self.name)
        } else {
            format!("{} {}", self.direction.as_str(), self.name)
        }
    }
}

/// The hardware module a testbench was generated for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub name: String,
    /// Declaration order is preserved
    pub ports: Vec<PortDescriptor>,
    /// Parameter names, declaration order, may be empty
    pub parameters: Vec<String>,
}

/// FSM state coverage, present when the service detected a state machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FsmCoverage {
    /// State codes declared in the design, in the order the service reported
    pub declared_states: Vec<i64>,
    /// State codes observed during simulation, order preserved verbatim.
    /// The contract says this is a subset of `declared_states`, but the
    /// client never assumes it (see `tbgen-app`'s coverage view-model).
    pub visited_states: Vec<i64>,
    /// |visited| / |declared| x 100, in [0,100]
    pub coverage_pct: f64,
}

/// Coverage report, present only when simulation ran far enough to collect it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Per-signal toggle percentage in [0,100]. A BTreeMap so iteration is
    /// already sorted by signal name, which is the display order.
    pub toggle_coverage: BTreeMap<String, f64>,
    /// Aggregate toggle percentage in [0,100]
    pub overall_toggle: f64,
    pub fsm_coverage: Option<FsmCoverage>,
    /// Combined quality score in [0,100]
    pub total_score: f64,
}

/// One generation outcome, replaced wholesale by the next request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResult {
    /// Generated testbench source text
    pub testbench: String,
    /// Human-readable summary of what the testbench exercises
    pub description: String,
    pub module: ModuleDescriptor,
    pub sim_success: bool,
    /// Raw simulation log, may be empty
    pub sim_output: String,
    /// Error messages in reported order, may be empty
    pub sim_errors: Vec<String>,
    pub coverage: Option<CoverageReport>,
    /// Generate/simulate/repair cycles the service performed, >= 1
    pub attempts: u32,
}

/// Remote tool availability, fetched once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub iverilog_available: bool,
    pub verilator_available: bool,
    pub llm_configured: bool,
}

/// Pipeline stage for display purposes.
///
/// The remote call is opaque, so the four active stages are a cosmetic
/// approximation: the controller jumps from `Idle` to `Generating` and stays
/// there for the whole pending period, then lands on `Done` or `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStage {
    #[default]
    Idle,
    Parsing,
    Generating,
    Simulating,
    Analyzing,
    Done,
    Error,
}

impl PipelineStage {
    /// The stages rendered as discrete boxes, in display order.
    /// `Idle`, `Done` and `Error` are initial/terminal markers, not boxes.
    pub const ACTIVE: [PipelineStage; 4] = [
        PipelineStage::Parsing,
        PipelineStage::Generating,
        PipelineStage::Simulating,
        PipelineStage::Analyzing,
    ];

    /// Display label for a stage box
    pub fn label(&self) -> &'static str {
        match self {
            PipelineStage::Idle => "Idle",
            PipelineStage::Parsing => "Parse RTL",
            PipelineStage::Generating => "Generate TB",
            PipelineStage::Simulating => "Simulate",
            PipelineStage::Analyzing => "Coverage",
            PipelineStage::Done => "Done",
            PipelineStage::Error => "Error",
        }
    }

    /// Index of this stage within [`PipelineStage::ACTIVE`], if it is one
    pub fn active_index(&self) -> Option<usize> {
        PipelineStage::ACTIVE.iter().position(|s| s == self)
    }

    /// Whether a request is currently outstanding in this stage
    pub fn is_busy(&self) -> bool {
        self.active_index().is_some()
    }

    /// Whether this stage ends a run (`Done` or `Error`)
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineStage::Done | PipelineStage::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_declaration_scalar_and_vector() {
        let clk = PortDescriptor {
            direction: PortDirection::Input,
            name: "clk".to_string(),
            width: 1,
        };
        assert_eq!(clk.declaration(), "input clk");

        let count = PortDescriptor {
            direction: PortDirection::Output,
            name: "count".to_string(),
            width: 8,
        };
        assert_eq!(count.declaration(), "output [7:0] count");
    }

    #[test]
    fn test_port_direction_serde_lowercase() {
        let dir: PortDirection = serde_json::from_str("\"inout\"").unwrap();
        assert_eq!(dir, PortDirection::Inout);
        assert_eq!(serde_json::to_string(&PortDirection::Input).unwrap(), "\"input\"");
    }

    #[test]
    fn test_active_stage_order() {
        assert_eq!(PipelineStage::Parsing.active_index(), Some(0));
        assert_eq!(PipelineStage::Generating.active_index(), Some(1));
        assert_eq!(PipelineStage::Simulating.active_index(), Some(2));
        assert_eq!(PipelineStage::Analyzing.active_index(), Some(3));
    }

    #[test]
    fn test_markers_have_no_active_index() {
        assert_eq!(PipelineStage::Idle.active_index(), None);
        assert_eq!(PipelineStage::Done.active_index(), None);
        assert_eq!(PipelineStage::Error.active_index(), None);
    }

    #[test]
    fn test_stage_is_busy() {
        assert!(PipelineStage::Generating.is_busy());
        assert!(PipelineStage::Analyzing.is_busy());
        assert!(!PipelineStage::Idle.is_busy());
        assert!(!PipelineStage::Done.is_busy());
        assert!(!PipelineStage::Error.is_busy());
    }

    #[test]
    fn test_stage_is_terminal() {
        assert!(PipelineStage::Done.is_terminal());
        assert!(PipelineStage::Error.is_terminal());
        assert!(!PipelineStage::Idle.is_terminal());
        assert!(!PipelineStage::Generating.is_terminal());
    }

    #[test]
    fn test_default_stage_is_idle() {
        assert_eq!(PipelineStage::default(), PipelineStage::Idle);
    }

    #[test]
    fn test_toggle_coverage_iterates_sorted() {
        let mut toggle = BTreeMap::new();
        toggle.insert("rst_n".to_string(), 50.0);
        toggle.insert("clk".to_string(), 100.0);
        toggle.insert("enable".to_string(), 75.0);

        let names: Vec<&str> = toggle.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["clk", "enable", "rst_n"]);
    }
}
