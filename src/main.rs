use anyhow::Result;
use clap::Parser;

use ava_cli::cli::commands::{ask, chat, configure, serve};
use ava_cli::cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Chat { endpoint }) => {
            let options = chat::ChatOptions { endpoint };
            chat::run_chat(options).await?;
        }
        Some(Command::Serve { port }) => {
            let options = serve::ServeOptions { port };
            serve::run_serve(options).await?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            let options = ask::AskOptions {
                message: args.message,
                endpoint: args.endpoint,
            };
            ask::run_ask(options).await?;
        }
    }

    Ok(())
}
