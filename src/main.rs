use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use chatbot_client::{ChatbotClient, HttpTransport, DEFAULT_BASE_URL};

#[derive(Parser)]
#[command(name = "chatbot-client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the chatbot API server.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    url: String,

    #[arg(short, long)]
    verbose: bool,

    /// Probe the server's health endpoint and exit.
    #[arg(long)]
    health: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client = ChatbotClient::new(Arc::new(HttpTransport::with_base_url(&cli.url)));

    if cli.health {
        match client.health().await {
            Ok(status) => println!("{status}"),
            Err(e) => {
                eprintln!("health check failed: {e}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if message.is_empty() {
            continue;
        }

        match client.get_response(message).await {
            Some(reply) => println!("{reply}"),
            None => println!("(no answer available)"),
        }
    }

    Ok(())
}
