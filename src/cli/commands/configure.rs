//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::Text;

use crate::config::{AvaConfig, ConfigFile, ConfigManager, DEFAULT_ENDPOINT, DEFAULT_PORT, ServerConfig};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command to edit default settings.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        print_current_settings();
        return Ok(());
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();

    let endpoint = prompt_endpoint(config.ava.endpoint.as_deref())?;
    let port = prompt_port(config.server.port)?;

    let config = ConfigFile {
        ava: AvaConfig {
            endpoint: Some(endpoint),
        },
        server: ServerConfig { port: Some(port) },
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_settings() {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();

    println!("{}", Style::header("Current settings"));
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        config
            .ava
            .endpoint
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}      {}",
        Style::label("port"),
        config
            .server
            .port
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}      {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display().to_string())
    );
}

fn prompt_endpoint(current: Option<&str>) -> Result<String> {
    let endpoint = Text::new("Backend endpoint:")
        .with_default(current.unwrap_or(DEFAULT_ENDPOINT))
        .with_help_message("URL the chat client posts to")
        .prompt()?;

    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        bail!("Endpoint cannot be empty");
    }
    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        bail!("Endpoint must start with http:// or https://");
    }

    Ok(endpoint.trim_end_matches('/').to_string())
}

fn prompt_port(current: Option<u16>) -> Result<u16> {
    let default = current.unwrap_or(DEFAULT_PORT).to_string();
    let port = Text::new("Server port:")
        .with_default(&default)
        .with_help_message("Port used by 'ava serve'")
        .prompt()?;

    match port.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => bail!("Port must be a number between 1 and 65535"),
    }
}
