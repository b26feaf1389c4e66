//! Events emitted by the runner and stored in session history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::SessionState;
use crate::types::{AgentToolCall, AgentToolResult, FinishReason, ModelMessage, Usage};

/// Author used for events carrying the caller's input.
pub const USER_AUTHOR: &str = "user";

/// One step of an invocation: user input, a model turn, or tool output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: String,
    /// Shared by every event produced while handling one user message.
    pub invocation_id: String,
    /// `"user"` or the name of the agent that produced the event.
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ModelMessage>,
    pub timestamp: DateTime<Utc>,
    /// Partial events are streaming fragments of a later complete event.
    #[serde(default)]
    pub partial: bool,
    /// Keys merged into the session state when the event is appended.
    #[serde(default, skip_serializing_if = "SessionState::is_empty")]
    pub state_delta: SessionState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
}

impl Event {
    pub fn new(invocation_id: impl Into<String>, author: impl Into<String>, content: ModelMessage) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            invocation_id: invocation_id.into(),
            author: author.into(),
            content: Some(content),
            timestamp: Utc::now(),
            partial: false,
            state_delta: SessionState::new(),
            usage: None,
            finish_reason: None,
        }
    }

    /// Tool calls requested in this event.
    pub fn function_calls(&self) -> Vec<&AgentToolCall> {
        self.content
            .as_ref()
            .map(|c| c.tool_calls())
            .unwrap_or_default()
    }

    /// Tool results carried by this event.
    pub fn function_responses(&self) -> Vec<&AgentToolResult> {
        self.content
            .as_ref()
            .map(|c| c.tool_results_ref())
            .unwrap_or_default()
    }

    /// Whether this event ends the agent's turn.
    ///
    /// True for complete events that neither request tools nor carry tool
    /// output.
    pub fn is_final_response(&self) -> bool {
        !self.partial && self.function_calls().is_empty() && self.function_responses().is_empty()
    }

    /// Non-empty text parts of the content, in order.
    pub fn text_parts(&self) -> Vec<&str> {
        self.content
            .as_ref()
            .map(|c| c.text_parts())
            .unwrap_or_default()
    }
}
