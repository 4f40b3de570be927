//! TestGen TUI - terminal client for LLM-based testbench generation
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;

use tbgen_app::Settings;
use tbgen_client::read_rtl_file;
use tbgen_core::prelude::*;
use tbgen_tui::{PreloadedSource, RunOptions};

/// Terminal client for LLM-based FPGA testbench generation
#[derive(Parser, Debug)]
#[command(name = "tbgen")]
#[command(about = "Generate and inspect testbenches for RTL designs", long_about = None)]
struct Args {
    /// RTL source file to preload (.v, .sv, .vhd, .vhdl)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Generation service root, overrides the config file
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Repair-retry budget forwarded to the service
    #[arg(long, value_name = "N")]
    retries: Option<u32>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    tbgen_core::logging::init()?;

    let mut settings = Settings::load();
    if let Some(server) = args.server {
        settings.server.base_url = server;
    }
    if let Some(retries) = args.retries {
        settings.generation.max_retries = retries;
    }

    // Load the RTL file before entering the alternate screen so extension
    // and existence errors print as plain CLI errors.
    let preloaded = match args.file {
        Some(path) => Some(load_source(&path)?),
        None => None,
    };

    tbgen_tui::run(RunOptions {
        settings,
        preloaded,
    })
    .await?;
    Ok(())
}

fn load_source(path: &PathBuf) -> Result<PreloadedSource> {
    let text = read_rtl_file(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    info!("loaded RTL source {} ({} bytes)", path.display(), text.len());
    Ok(PreloadedSource { name, text })
}
