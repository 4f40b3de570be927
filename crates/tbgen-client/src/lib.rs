//! tbgen-client - Generation service client for TestGen TUI
//!
//! Owns the HTTP/JSON connection to the remote generation service: the wire
//! contract types with boundary validation, the [`GenerationClient`] issuing
//! the health check and generation requests, and RTL file loading.

pub mod client;
pub mod protocol;
pub mod rtl_file;

pub use client::GenerationClient;
pub use rtl_file::{is_rtl_file, read_rtl_file, RTL_EXTENSIONS};
