//! Widget library for the TestGen terminal interface

mod editor_panel;
mod header;
mod results;
mod stage_bar;

pub use editor_panel::EditorPanel;
pub use header::MainHeader;
pub use results::ResultsPanel;
pub use stage_bar::{classify, StageBar, StageClass};
