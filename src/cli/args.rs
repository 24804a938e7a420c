use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ava")]
#[command(about = "Terminal chat client for the Ava assistant")]
#[command(version)]
pub struct Args {
    /// Message to send (reads from stdin if not provided)
    pub message: Option<String>,

    /// Backend endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat session
    Chat {
        /// Backend endpoint URL
        #[arg(short = 'e', long)]
        endpoint: Option<String>,
    },
    /// Run the assistant backend
    Serve {
        /// Port to listen on
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },
    /// Configure ava settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
