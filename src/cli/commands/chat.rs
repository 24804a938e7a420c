use anyhow::Result;

use crate::chat::{ChatSession, SessionConfig};
use crate::config::ConfigManager;

pub struct ChatOptions {
    pub endpoint: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let file_config = ConfigManager::new().load_or_default();
    let endpoint = file_config.resolve_endpoint(options.endpoint.as_deref());

    let mut session = ChatSession::new(SessionConfig::new(endpoint));
    session.run().await
}
