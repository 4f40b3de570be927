//! Application runner: terminal lifecycle and the main event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use tbgen_app::actions::handle_action;
use tbgen_app::{
    process_message, AppState, GenerationClient, Message, Settings, UpdateAction,
};
use tbgen_core::prelude::*;

use crate::event;
use crate::render;
use crate::terminal::{self, Tui};

/// RTL source loaded before the UI starts (from the CLI path argument)
#[derive(Debug, Clone)]
pub struct PreloadedSource {
    /// Display name, typically the file name
    pub name: String,
    /// Raw file content, loaded without any parsing or validation
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub settings: Settings,
    pub preloaded: Option<PreloadedSource>,
}

/// Run the TUI until the user quits
pub async fn run(options: RunOptions) -> Result<()> {
    let client = Arc::new(GenerationClient::new(&options.settings.server.base_url)?);
    info!("using generation service at {}", client.base_url());

    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);

    let mut state = AppState::new(options.settings);
    if let Some(source) = options.preloaded {
        state.editor.load(&source.text);
        state.source_name = Some(source.name);
    }

    // Fire-and-forget startup health check; a failure leaves health unknown
    handle_action(UpdateAction::CheckHealth, msg_tx.clone(), client.clone());

    let mut terminal = terminal::init()?;
    let result = event_loop(&mut terminal, &mut state, &msg_tx, &mut msg_rx, &client).await;
    terminal::restore()?;
    result
}

async fn event_loop(
    terminal: &mut Tui,
    state: &mut AppState,
    msg_tx: &mpsc::Sender<Message>,
    msg_rx: &mut mpsc::Receiver<Message>,
    client: &Arc<GenerationClient>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render::view(frame, state))?;

        // Terminal events (blocks up to 50ms, then ticks)
        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx, client);
        }

        // Drain completions from background tasks
        while let Ok(message) = msg_rx.try_recv() {
            process_message(state, message, msg_tx, client);
        }

        if state.should_quit {
            info!("quit requested, shutting down");
            return Ok(());
        }
    }
}
