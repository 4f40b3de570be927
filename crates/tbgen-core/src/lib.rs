//! # tbgen-core - Core Domain Types
//!
//! Foundation crate for TestGen TUI. Provides the domain model for generation
//! results, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`GenerateResult`] - One completed (or failed) generation outcome
//! - [`ModuleDescriptor`], [`PortDescriptor`], [`PortDirection`] - The module under test
//! - [`CoverageReport`], [`FsmCoverage`] - Simulation coverage data
//! - [`HealthStatus`] - Remote tool availability
//! - [`PipelineStage`] - Display stage of the generation pipeline
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all TestGen TUI crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use types::{
    CoverageReport, FsmCoverage, GenerateResult, HealthStatus, ModuleDescriptor, PipelineStage,
    PortDescriptor, PortDirection,
};
