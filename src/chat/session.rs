use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::api::{ChatClient, bot_text};
use crate::transcript::{Sender, Transcript};
use crate::ui::Spinner;

/// Guidance appended as a bot message when the user submits nothing.
pub const EMPTY_INPUT_PROMPT: &str = "Please type something so I can help.";

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The backend endpoint URL.
    pub endpoint: String,
}

impl SessionConfig {
    /// Creates a new session configuration.
    pub const fn new(endpoint: String) -> Self {
        Self { endpoint }
    }
}

/// An interactive chat session.
///
/// Owns its collaborators (HTTP client, transcript) for its whole lifetime.
/// One prompt line maps to at most one request; the session awaits each
/// request before re-prompting, so a second submission cannot start while
/// one is in flight.
pub struct ChatSession {
    config: SessionConfig,
    client: ChatClient,
    transcript: Transcript,
}

impl ChatSession {
    /// Creates a new chat session with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        let client = ChatClient::new(config.endpoint.clone());
        Self {
            config,
            client,
            transcript: Transcript::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type a message, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => {
                    if !self.handle_line(&line).await {
                        break;
                    }
                }
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Applies one submitted line to the transcript.
    ///
    /// Empty lines append guidance locally without touching the network;
    /// text triggers one request/response cycle. Returns `false` when the
    /// session should end.
    async fn handle_line(&mut self, line: &str) -> bool {
        match parse_input(line) {
            Input::Empty => {
                // Local validation, not an error: nudge instead of send.
                self.transcript.append(Sender::Bot, EMPTY_INPUT_PROMPT);
                true
            }
            Input::Command(cmd) => self.handle_command(&cmd),
            Input::Text(text) => {
                self.send_message(&text).await;
                true
            }
        }
    }

    /// One request/response cycle.
    ///
    /// The user message renders before the request goes out (optimistic),
    /// and every outcome lands in the transcript as a bot message, so the
    /// session always comes back to the prompt.
    async fn send_message(&mut self, text: &str) {
        self.transcript.append(Sender::You, text);

        let spinner = Spinner::new("Thinking...");
        let outcome = self.client.send(text).await;
        spinner.stop();

        self.transcript.append(Sender::Bot, bot_text(outcome));
        println!();
    }

    fn handle_command(&mut self, cmd: &SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.config);
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }
}
