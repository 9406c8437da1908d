//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Gemini math-tutor proxy.
#[derive(Parser, Debug)]
#[command(name = "abacus")]
#[command(about = "Ask a Gemini-backed math tutor, directly or through the proxy server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP proxy server
    Serve,

    /// Send one question and print the answer
    Ask {
        /// Base URL of a running proxy server
        #[arg(long, default_value = "http://localhost:8000")]
        server: String,

        /// The student question to ask
        #[arg(long)]
        question: String,

        /// Sampling temperature
        #[arg(long)]
        temperature: Option<f32>,

        /// Output length cap
        #[arg(long)]
        max_output_tokens: Option<u32>,

        /// Call the Gemini API directly instead of going through a server
        #[arg(long)]
        direct: bool,
    },
}
