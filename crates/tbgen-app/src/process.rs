//! Message processing: the TEA loop step
//!
//! Feeds a message (and any follow-ups it produces) through the update
//! function, dispatching returned actions to the background-task spawner.

use std::sync::Arc;

use tokio::sync::mpsc;

use tbgen_client::GenerationClient;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &Arc<GenerationClient>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
