//! Server command handler.

use anyhow::Result;

use crate::config::ConfigManager;
use crate::{paths, server};

pub struct ServeOptions {
    pub port: Option<u16>,
}

/// Runs the assistant backend until interrupted.
pub async fn run_serve(options: ServeOptions) -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = ConfigManager::new().load_or_default();
    let port = config.resolve_port(options.port);
    let tasks_path = paths::data_dir().join("tasks.json");

    server::run(port, tasks_path).await
}
