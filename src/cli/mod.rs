//! Command-line interface for the restaurant finder.

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Restaurant finder CLI
#[derive(Parser, Debug)]
#[command(
    name = "restaurant-finder",
    version,
    about = "Ask the restaurant agent questions and check its UI output"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask the agent one question
    Ask(AskArgs),
    /// Validate the A2UI messages in an agent response
    Validate(ValidateArgs),
}

/// Arguments for the `ask` subcommand.
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// Session to continue (a new one is created when omitted)
    #[arg(short, long)]
    pub session: Option<String>,

    /// Answer with A2UI JSON after the text
    #[arg(long)]
    pub ui: bool,

    /// Model selector (e.g. gemini/gemini-2.5-flash or openai:gpt-4.1); overrides LITELLM_MODEL
    #[arg(short, long)]
    pub model: Option<String>,

    /// Public base URL for restaurant images; overrides RESTAURANT_AGENT_BASE_URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Print every response as a JSON line
    #[arg(long)]
    pub json: bool,

    /// The question (positional)
    pub query: String,
}

/// Arguments for the `validate` subcommand.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// File holding an agent response or a JSON array of A2UI messages
    pub file: PathBuf,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
