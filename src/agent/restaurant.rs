//! The restaurant-finding agent and its caller-facing response stream.

use std::sync::Arc;

use async_stream::try_stream;
use futures::stream::{BoxStream, Stream};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::LlmAgent;
use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::models::LanguageModel;
use crate::prompt::build_instruction;
use crate::runner::{Event, Runner};
use crate::session::{InMemorySessionService, SessionService, SessionState, BASE_URL_KEY};
use crate::tools::get_restaurants_tool;
use crate::types::ModelMessage;

/// Agent name; also the session app name.
pub const AGENT_NAME: &str = "restaurant_agent";

/// User id every session is created under.
pub const USER_ID: &str = "remote_agent";

pub const AGENT_DESCRIPTION: &str = "An agent that finds restaurants and helps book tables.";

/// Text sent with every progress update.
pub const PROCESSING_MESSAGE: &str = "Finding restaurants that match your criteria...";

/// One item of the caller-facing stream.
///
/// Serializes as `{"is_task_complete": true, "content": ..}` for a final
/// answer and `{"is_task_complete": false, "updates": ..}` for progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireResponse", try_from = "WireResponse")]
pub enum AgentResponse {
    /// The agent's answer; ends the turn.
    Final { content: String },
    /// The agent is still working.
    Progress { updates: String },
}

impl AgentResponse {
    /// Map a runner event to a response.
    pub fn from_event(event: &Event) -> Self {
        if event.is_final_response() {
            Self::Final {
                content: event.text_parts().join("\n"),
            }
        } else {
            Self::Progress {
                updates: PROCESSING_MESSAGE.to_string(),
            }
        }
    }

    pub fn is_task_complete(&self) -> bool {
        matches!(self, Self::Final { .. })
    }

    /// The content of a final response or the text of a progress update.
    pub fn text(&self) -> &str {
        match self {
            Self::Final { content } => content,
            Self::Progress { updates } => updates,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct WireResponse {
    is_task_complete: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updates: Option<String>,
}

impl From<AgentResponse> for WireResponse {
    fn from(response: AgentResponse) -> Self {
        match response {
            AgentResponse::Final { content } => Self {
                is_task_complete: true,
                content: Some(content),
                updates: None,
            },
            AgentResponse::Progress { updates } => Self {
                is_task_complete: false,
                content: None,
                updates: Some(updates),
            },
        }
    }
}

impl TryFrom<WireResponse> for AgentResponse {
    type Error = String;

    fn try_from(wire: WireResponse) -> Result<Self, Self::Error> {
        match (wire.is_task_complete, wire.content, wire.updates) {
            (true, Some(content), _) => Ok(Self::Final { content }),
            (false, _, Some(updates)) => Ok(Self::Progress { updates }),
            (true, None, _) => Err("final response without content".into()),
            (false, _, None) => Err("progress response without updates".into()),
        }
    }
}

/// Finds restaurants and helps book tables.
///
/// Owns a [`Runner`] over an in-memory session service. Each call to
/// [`stream`](Self::stream) makes sure the session exists and carries the
/// public base URL, then relays the runner's events as [`AgentResponse`]s.
pub struct RestaurantAgent {
    base_url: String,
    use_ui: bool,
    runner: Arc<Runner>,
}

impl RestaurantAgent {
    /// Content types the agent accepts and produces.
    pub const SUPPORTED_CONTENT_TYPES: &'static [&'static str] = &["text", "text/plain"];

    /// Build the agent from configuration.
    ///
    /// Fails when the model selector is invalid or the provider has no
    /// credentials.
    pub fn new(config: &FinderConfig) -> Result<Self, FinderError> {
        let model: LanguageModel = config.model.parse()?;
        let agent = Self::build_agent(model, &config.public_base_url, config.use_ui);
        let runner = Runner::new(
            agent.name().to_string(),
            agent,
            Arc::new(InMemorySessionService::new()),
            config,
        )?;
        info!(
            model = %config.model,
            use_ui = config.use_ui,
            base_url = %config.public_base_url,
            "restaurant agent ready"
        );
        Ok(Self::with_runner(&config.public_base_url, config.use_ui, runner))
    }

    /// Wrap an existing runner.
    pub fn with_runner(base_url: impl Into<String>, use_ui: bool, runner: Runner) -> Self {
        Self {
            base_url: base_url.into(),
            use_ui,
            runner: Arc::new(runner),
        }
    }

    /// The agent definition: name, description, instruction and the lookup tool.
    pub fn build_agent(model: LanguageModel, base_url: &str, use_ui: bool) -> LlmAgent {
        LlmAgent::new(AGENT_NAME, model)
            .with_description(AGENT_DESCRIPTION)
            .with_instruction(build_instruction(use_ui, base_url))
            .with_tool(get_restaurants_tool())
    }

    pub fn processing_message(&self) -> &'static str {
        PROCESSING_MESSAGE
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn use_ui(&self) -> bool {
        self.use_ui
    }

    pub fn runner(&self) -> &Runner {
        &self.runner
    }

    /// Answer `query` within session `session_id`.
    ///
    /// Yields zero or more progress updates followed by at most one final
    /// response. A failure is yielded as an `Err` item and ends the stream.
    pub fn stream(
        &self,
        query: &str,
        session_id: &str,
    ) -> BoxStream<'static, Result<AgentResponse, FinderError>> {
        Box::pin(relay(
            Arc::clone(&self.runner),
            self.base_url.clone(),
            query.to_string(),
            session_id.to_string(),
        ))
    }
}

impl std::fmt::Debug for RestaurantAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestaurantAgent")
            .field("base_url", &self.base_url)
            .field("use_ui", &self.use_ui)
            .field("runner", &self.runner)
            .finish()
    }
}

fn relay(
    runner: Arc<Runner>,
    base_url: String,
    query: String,
    session_id: String,
) -> impl Stream<Item = Result<AgentResponse, FinderError>> + Send + 'static {
    try_stream! {
        ensure_session(
            runner.session_service().as_ref(),
            runner.app_name(),
            &session_id,
            &base_url,
        )
        .await?;

        let mut events = runner.run(USER_ID, &session_id, ModelMessage::user(query));
        while let Some(event) = events.next().await {
            let event = event?;
            debug!(event_id = %event.id, author = %event.author, "event from runner");
            let response = AgentResponse::from_event(&event);
            if let AgentResponse::Final { content } = &response {
                info!(session_id = %session_id, chars = content.len(), "final response");
            }
            yield response;
        }
    }
}

/// Create the session with `base_url` in its state, or add `base_url` to an
/// existing session that lacks it. Other state keys are left alone.
async fn ensure_session(
    service: &dyn SessionService,
    app_name: &str,
    session_id: &str,
    base_url: &str,
) -> Result<(), FinderError> {
    let mut delta = SessionState::new();
    delta.insert(BASE_URL_KEY.into(), base_url.into());

    match service.get_session(app_name, USER_ID, session_id).await? {
        None => match service
            .create_session(app_name, USER_ID, delta, Some(session_id))
            .await
        {
            Ok(_) => {}
            // A concurrent first turn on the same id created it with the same base_url.
            Err(FinderError::SessionExists(_)) => {
                debug!(session_id, "session created concurrently");
            }
            Err(err) => return Err(err),
        },
        Some(session) if !session.state.contains_key(BASE_URL_KEY) => {
            debug!(session_id, "adding base_url to existing session");
            service.update_state(&session.key(), delta).await?;
        }
        Some(_) => {}
    }
    Ok(())
}
