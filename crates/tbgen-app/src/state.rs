//! Application state (Model in TEA pattern)
//!
//! `AppState` is the single owner of the pipeline controller's state: the
//! current stage, the last result and the last error. The three are mutually
//! exclusive -- a result is only retained in `Done`, an error message only in
//! `Error`, and starting a new run clears both before the request goes out.
//! All mutation happens through the reducer (`handler::update`); spawned
//! tasks communicate exclusively via messages.

use tbgen_core::types::{GenerateResult, HealthStatus, PipelineStage};

use crate::config::Settings;
use crate::editor::RtlEditor;

/// Which pane owns keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// RTL editor pane (left)
    #[default]
    Editor,
    /// Results pane (right)
    Results,
}

impl Focus {
    pub fn toggled(self) -> Focus {
        match self {
            Focus::Editor => Focus::Results,
            Focus::Results => Focus::Editor,
        }
    }
}

/// Result pane perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultTab {
    #[default]
    Testbench,
    Simulation,
    Coverage,
}

impl ResultTab {
    pub const ALL: [ResultTab; 3] = [
        ResultTab::Testbench,
        ResultTab::Simulation,
        ResultTab::Coverage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResultTab::Testbench => "Testbench",
            ResultTab::Simulation => "Simulation",
            ResultTab::Coverage => "Coverage",
        }
    }

    pub fn next(self) -> ResultTab {
        match self {
            ResultTab::Testbench => ResultTab::Simulation,
            ResultTab::Simulation => ResultTab::Coverage,
            ResultTab::Coverage => ResultTab::Testbench,
        }
    }

    pub fn prev(self) -> ResultTab {
        match self {
            ResultTab::Testbench => ResultTab::Coverage,
            ResultTab::Simulation => ResultTab::Testbench,
            ResultTab::Coverage => ResultTab::Simulation,
        }
    }
}

/// The complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: Settings,

    /// RTL input buffer
    pub editor: RtlEditor,
    /// Name of the loaded source file, for the header
    pub source_name: Option<String>,

    // ─────────────────────────────────────────────────────────
    // Pipeline controller state (exclusively owned here)
    // ─────────────────────────────────────────────────────────
    pub stage: PipelineStage,
    /// Retained only after reaching `Done`
    pub result: Option<GenerateResult>,
    /// Retained only after reaching `Error`
    pub error: Option<String>,
    /// The stage that was current when the failure arrived (for the stage
    /// bar's failing-index marking)
    pub failed_stage: Option<PipelineStage>,

    /// Remote tool availability; `None` renders as "status unknown"
    pub health: Option<HealthStatus>,

    // ─────────────────────────────────────────────────────────
    // View state
    // ─────────────────────────────────────────────────────────
    pub focus: Focus,
    pub result_tab: ResultTab,
    /// Vertical scroll offset of the active results tab, in lines
    pub result_scroll: usize,
    /// Transient footer notice (e.g. where artifacts were written)
    pub notice: Option<String>,

    pub should_quit: bool,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            editor: RtlEditor::new(),
            source_name: None,
            stage: PipelineStage::Idle,
            result: None,
            error: None,
            failed_stage: None,
            health: None,
            focus: Focus::default(),
            result_tab: ResultTab::default(),
            result_scroll: 0,
            notice: None,
            should_quit: false,
        }
    }

    /// A request is currently outstanding
    pub fn is_generating(&self) -> bool {
        self.stage.is_busy()
    }

    /// Whether the generate command would start a run right now (used to
    /// render the control as enabled/disabled)
    pub fn can_generate(&self) -> bool {
        !self.is_generating() && !self.editor.is_blank()
    }

    /// Discard the previous outcome and enter the pending period.
    ///
    /// Jumps straight to `Generating`: the remote call is opaque, so there
    /// is no observable instant in which `Parsing` could be distinguished.
    pub fn begin_run(&mut self) {
        self.result = None;
        self.error = None;
        self.failed_stage = None;
        self.notice = None;
        self.result_scroll = 0;
        self.stage = PipelineStage::Generating;
    }

    /// Store a successful outcome
    pub fn finish_run(&mut self, result: GenerateResult) {
        self.result = Some(result);
        self.error = None;
        self.failed_stage = None;
        self.stage = PipelineStage::Done;
    }

    /// Store a failed outcome
    pub fn fail_run(&mut self, message: String) {
        self.failed_stage = Some(self.stage);
        self.result = None;
        self.error = Some(message);
        self.stage = PipelineStage::Error;
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> GenerateResult {
        GenerateResult {
            testbench: "module m_tb; endmodule".to_string(),
            description: "d".to_string(),
            module: tbgen_core::types::ModuleDescriptor {
                name: "m".to_string(),
                ports: vec![],
                parameters: vec![],
            },
            sim_success: true,
            sim_output: String::new(),
            sim_errors: vec![],
            coverage: None,
            attempts: 1,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new(Settings::default());
        assert_eq!(state.stage, PipelineStage::Idle);
        assert!(state.result.is_none());
        assert!(state.error.is_none());
        assert!(state.health.is_none());
        assert_eq!(state.focus, Focus::Editor);
        assert_eq!(state.result_tab, ResultTab::Testbench);
    }

    #[test]
    fn test_begin_run_clears_previous_outcome() {
        let mut state = AppState::new(Settings::default());
        state.finish_run(sample_result());
        assert!(state.result.is_some());

        state.begin_run();
        assert_eq!(state.stage, PipelineStage::Generating);
        assert!(state.result.is_none());
        assert!(state.error.is_none());
        assert!(state.failed_stage.is_none());
    }

    #[test]
    fn test_result_and_error_are_mutually_exclusive() {
        let mut state = AppState::new(Settings::default());

        state.begin_run();
        state.finish_run(sample_result());
        assert!(state.result.is_some() && state.error.is_none());

        state.begin_run();
        state.fail_run("boom".to_string());
        assert!(state.result.is_none() && state.error.is_some());
        assert_eq!(state.failed_stage, Some(PipelineStage::Generating));
    }

    #[test]
    fn test_can_generate_requires_input_and_idle_pipeline() {
        let mut state = AppState::new(Settings::default());
        assert!(!state.can_generate()); // blank buffer

        state.editor.load("module m; endmodule");
        assert!(state.can_generate());

        state.begin_run();
        assert!(!state.can_generate()); // request pending
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(ResultTab::Testbench.next(), ResultTab::Simulation);
        assert_eq!(ResultTab::Coverage.next(), ResultTab::Testbench);
        assert_eq!(ResultTab::Testbench.prev(), ResultTab::Coverage);
    }

    #[test]
    fn test_focus_toggle() {
        assert_eq!(Focus::Editor.toggled(), Focus::Results);
        assert_eq!(Focus::Results.toggled(), Focus::Editor);
    }
}
