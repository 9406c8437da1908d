//! Abacus command-line entry point.

use abacus::cli::{Cli, Commands, handle_ask_command, handle_serve_command};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve => handle_serve_command().await.map(|_| None),
        Commands::Ask {
            server,
            question,
            temperature,
            max_output_tokens,
            direct,
        } => handle_ask_command(server, question, temperature, max_output_tokens, direct)
            .await
            .map(Some),
    };

    match result {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
