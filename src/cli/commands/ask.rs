//! One-shot message: send, print the reply, exit.

use anyhow::{Result, bail};

use crate::api::{ChatClient, NO_REPLY_PLACEHOLDER};
use crate::config::ConfigManager;
use crate::input::InputReader;
use crate::ui::Spinner;

pub struct AskOptions {
    pub message: Option<String>,
    pub endpoint: Option<String>,
}

/// Sends one message and prints the reply to stdout.
///
/// Unlike chat mode, failures exit non-zero so the command composes in
/// scripts; the reply alone goes to stdout.
pub async fn run_ask(options: AskOptions) -> Result<()> {
    let config = ConfigManager::new().load_or_default();
    let endpoint = config.resolve_endpoint(options.endpoint.as_deref());

    let message = InputReader::read(options.message.as_deref())?;
    let message = message.trim();
    if message.is_empty() {
        bail!("Error: Message is empty");
    }

    let client = ChatClient::new(endpoint);

    let spinner = Spinner::new("Thinking...");
    let outcome = client.send(message).await;
    spinner.stop();

    let reply = outcome?;
    println!(
        "{}",
        reply.reply.as_deref().unwrap_or(NO_REPLY_PLACEHOLDER)
    );

    Ok(())
}
