//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! The only place where work leaves the event loop. Each action spawns a
//! tokio task that reports back through the message channel; tasks never
//! touch `AppState`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use tbgen_client::GenerationClient;
use tbgen_core::types::GenerateResult;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    client: Arc<GenerationClient>,
) {
    match action {
        UpdateAction::StartGeneration { rtl, max_retries } => {
            tokio::spawn(async move {
                let msg = match client.generate_testbench(&rtl, max_retries).await {
                    Ok(result) => Message::GenerationCompleted {
                        result: Box::new(result),
                    },
                    Err(e) => {
                        warn!("generation failed: {e}");
                        Message::GenerationFailed {
                            message: e.user_message(),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::CheckHealth => {
            tokio::spawn(async move {
                match client.check_health().await {
                    Ok(health) => {
                        let _ = msg_tx.send(Message::HealthChecked { health }).await;
                    }
                    // Swallowed: absence of health data renders as
                    // "status unknown", never as an error.
                    Err(e) => debug!("health check failed, status unknown: {e}"),
                }
            });
        }

        UpdateAction::SaveArtifacts { result, dir } => {
            tokio::spawn(async move {
                let msg = match write_artifacts(&result, &dir) {
                    Ok(summary) => Message::ArtifactsSaved { summary },
                    Err(e) => Message::ArtifactSaveFailed {
                        message: e.to_string(),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }
    }
}

/// Write `<module>_tb.v` and, when the log is non-empty, `<module>_sim.log`.
/// Returns a one-line summary for the footer.
fn write_artifacts(result: &GenerateResult, dir: &Path) -> std::io::Result<String> {
    let tb_path: PathBuf = dir.join(format!("{}_tb.v", result.module.name));
    std::fs::write(&tb_path, &result.testbench)?;

    if !result.sim_output.is_empty() {
        let log_path = dir.join(format!("{}_sim.log", result.module.name));
        std::fs::write(&log_path, &result.sim_output)?;
        Ok(format!(
            "Saved {} and {}",
            tb_path.display(),
            log_path.display()
        ))
    } else {
        Ok(format!("Saved {}", tb_path.display()))
    }
}
