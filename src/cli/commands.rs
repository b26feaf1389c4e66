//! Handlers for the CLI subcommands.

use std::path::Path;

use futures::StreamExt;
use serde_json::Value;
use tracing::debug;

use super::{AskArgs, ValidateArgs};
use crate::a2ui::{split_response, validate_messages};
use crate::agent::{AgentResponse, RestaurantAgent};
use crate::config::FinderConfig;
use crate::error::{FinderError, Result};

/// Apply `ask` flags on top of the environment configuration.
pub fn ask_config(args: &AskArgs, base: FinderConfig) -> FinderConfig {
    let mut config = base;
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    if let Some(url) = &args.base_url {
        config.public_base_url = url.trim_end_matches('/').to_string();
    }
    if args.ui {
        config.use_ui = true;
    }
    config
}

/// Handle `restaurant-finder ask`.
///
/// Progress goes to stderr and the final answer to stdout. With `--json`
/// every response is printed to stdout as one JSON line.
pub async fn handle_ask(args: AskArgs) -> Result<()> {
    let config = ask_config(&args, FinderConfig::from_env());
    let agent = RestaurantAgent::new(&config)?;
    let session_id = args
        .session
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    debug!(session_id = %session_id, "ask");

    let mut responses = agent.stream(&args.query, &session_id);
    while let Some(response) = responses.next().await {
        let response = response?;
        if args.json {
            println!("{}", serde_json::to_string(&response)?);
            continue;
        }
        match response {
            AgentResponse::Progress { updates } => eprintln!("… {updates}"),
            AgentResponse::Final { content } => println!("{content}"),
        }
    }

    if !args.json && args.session.is_none() {
        eprintln!("session: {session_id}");
    }
    Ok(())
}

/// Handle `restaurant-finder validate`, returning every validation error.
pub fn handle_validate(args: &ValidateArgs) -> Result<Vec<String>> {
    let messages = read_ui_messages(&args.file)?;
    if messages.is_empty() {
        return Ok(vec!["no A2UI messages found".to_string()]);
    }
    Ok(validate_messages(&messages))
}

/// Read A2UI messages from a raw JSON file or a delimited agent response.
pub fn read_ui_messages(path: &Path) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(obj @ Value::Object(_)) => Ok(vec![obj]),
        Ok(other) => Err(FinderError::InvalidUiResponse(format!(
            "expected A2UI messages, got {other}"
        ))),
        Err(_) => Ok(split_response(&content)?.messages),
    }
}
