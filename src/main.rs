use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use chatbox::{render_plain, Container, ContainerConfig, InMemoryChatSurface, TerminalChatSurface};

mod cli;

use cli::Commands;

#[derive(Parser)]
#[command(name = "chatbox")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the chat server (defaults to CHATBOX_BASE_URL, then http://127.0.0.1:5000)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Answer locally with an echo instead of calling the server
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let container = Container::new(ContainerConfig {
        base_url: cli.base_url,
        mock_transport: cli.mock,
    });

    match cli.command {
        Commands::Repl => {
            info!("Chatting with {}", container.endpoint_description());

            let surface = Arc::new(TerminalChatSurface::stdout());
            let widget = container.mount_widget(surface.clone())?;
            let running = tokio::spawn(widget.run());

            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                surface.submit_line(&line);
            }
            debug!("End of input");
            surface.close();

            running.await??;
        }

        Commands::Send { message, html } => {
            let surface = Arc::new(InMemoryChatSurface::new());
            let use_case = container.submit_use_case(surface.clone());

            match use_case.submit(&message) {
                Some(pending) => pending.await,
                None => {
                    println!("Nothing to send.");
                    return Ok(());
                }
            }

            if html {
                println!("{}", surface.html());
            } else {
                for message in surface.log().iter() {
                    println!("{}", render_plain(message));
                }
            }
        }
    }

    Ok(())
}
