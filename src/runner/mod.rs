//! Runner: drives an [`LlmAgent`] against a session.
//!
//! One call to [`Runner::run`] is one invocation. The runner appends the user
//! message to the session, then alternates between the model and the agent's
//! tools until the model answers without requesting a tool. Every event is
//! stored in the session before it is yielded.

mod events;

pub use events::{Event, USER_AUTHOR};

use std::sync::Arc;

use async_stream::try_stream;
use futures::stream::{BoxStream, Stream};
use tracing::{debug, info, warn};

use crate::agent::LlmAgent;
use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::provider::{self, ModelProvider, ProviderRequest};
use crate::session::{Session, SessionService};
use crate::tools::arguments::ToolArguments;
use crate::tools::tool::{Tool, ToolExecutionContext};
use crate::tools::validation::validate_arguments;
use crate::types::{AgentToolCall, AgentToolResult, ModelMessage};

/// Maximum model calls per invocation.
pub const MAX_MODEL_CALLS: usize = 20;

/// Executes agent invocations and records them in a session service.
pub struct Runner {
    app_name: String,
    agent: Arc<LlmAgent>,
    session_service: Arc<dyn SessionService>,
    provider: Arc<dyn ModelProvider>,
}

impl Runner {
    /// Create a runner, resolving the provider from the agent's model.
    pub fn new(
        app_name: impl Into<String>,
        agent: LlmAgent,
        session_service: Arc<dyn SessionService>,
        config: &FinderConfig,
    ) -> Result<Self, FinderError> {
        let provider = provider::create_provider(agent.model(), config)?;
        Ok(Self::with_provider(
            app_name,
            agent,
            session_service,
            Arc::from(provider),
        ))
    }

    /// Create a runner with an explicit provider.
    pub fn with_provider(
        app_name: impl Into<String>,
        agent: LlmAgent,
        session_service: Arc<dyn SessionService>,
        provider: Arc<dyn ModelProvider>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            agent: Arc::new(agent),
            session_service,
            provider,
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn agent(&self) -> &LlmAgent {
        &self.agent
    }

    pub fn session_service(&self) -> &Arc<dyn SessionService> {
        &self.session_service
    }

    /// Run one invocation for `new_message`.
    ///
    /// The session must already exist. The stream ends after the final event,
    /// after the first error, or when [`MAX_MODEL_CALLS`] is exhausted.
    pub fn run(
        &self,
        user_id: &str,
        session_id: &str,
        new_message: ModelMessage,
    ) -> BoxStream<'static, Result<Event, FinderError>> {
        Box::pin(invocation(
            self.app_name.clone(),
            user_id.to_string(),
            session_id.to_string(),
            Arc::clone(&self.agent),
            Arc::clone(&self.session_service),
            Arc::clone(&self.provider),
            new_message,
        ))
    }
}

impl std::fmt::Debug for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner")
            .field("app_name", &self.app_name)
            .field("agent", &self.agent.name())
            .field("provider", &self.provider.provider_name())
            .field("model", &self.provider.model_id())
            .finish()
    }
}

fn invocation(
    app_name: String,
    user_id: String,
    session_id: String,
    agent: Arc<LlmAgent>,
    service: Arc<dyn SessionService>,
    provider: Arc<dyn ModelProvider>,
    new_message: ModelMessage,
) -> impl Stream<Item = Result<Event, FinderError>> + Send + 'static {
    try_stream! {
        let session = load_session(service.as_ref(), &app_name, &user_id, &session_id).await?;
        let key = session.key();
        let invocation_id = format!("e-{}", uuid::Uuid::new_v4());
        info!(
            agent = agent.name(),
            session_id = %session_id,
            invocation_id = %invocation_id,
            model = provider.model_id(),
            "runner: invocation started"
        );

        service
            .append_event(&key, Event::new(&invocation_id, USER_AUTHOR, new_message))
            .await?;

        let tool_defs = agent.tool_definitions();

        for iteration in 0..MAX_MODEL_CALLS {
            let session = load_session(service.as_ref(), &app_name, &user_id, &session_id).await?;
            let request = ProviderRequest {
                messages: build_messages(&agent, &session),
                settings: agent.settings().clone(),
                tools: tool_defs.clone(),
            };

            debug!(iteration, messages = request.messages.len(), "runner: calling provider");
            let response = provider.generate_text(&request).await?;

            if response.tool_calls.is_empty() {
                let mut event = Event::new(
                    &invocation_id,
                    agent.name(),
                    ModelMessage::assistant(response.text),
                );
                event.usage = Some(response.usage);
                event.finish_reason = response.finish_reason;
                service.append_event(&key, event.clone()).await?;
                debug!(iteration, "runner: final response");
                yield event;
                return;
            }

            let mut call_event = Event::new(
                &invocation_id,
                agent.name(),
                ModelMessage::assistant_tool_calls(&response.text, &response.tool_calls),
            );
            call_event.usage = Some(response.usage);
            call_event.finish_reason = response.finish_reason;
            service.append_event(&key, call_event.clone()).await?;
            yield call_event;

            let ctx = ToolExecutionContext::new(&session_id, session.state.clone());
            let mut results = Vec::with_capacity(response.tool_calls.len());
            for call in &response.tool_calls {
                results.push(execute_tool_call(agent.tools(), call, &ctx).await);
            }

            let result_event = Event::new(
                &invocation_id,
                agent.name(),
                ModelMessage::tool_results(results),
            );
            service.append_event(&key, result_event.clone()).await?;
            yield result_event;
        }

        warn!(
            max = MAX_MODEL_CALLS,
            invocation_id = %invocation_id,
            "runner: model call limit reached without a final response"
        );
    }
}

async fn load_session(
    service: &dyn SessionService,
    app_name: &str,
    user_id: &str,
    session_id: &str,
) -> Result<Session, FinderError> {
    service
        .get_session(app_name, user_id, session_id)
        .await?
        .ok_or_else(|| FinderError::SessionNotFound(session_id.to_string()))
}

/// System instruction followed by the session history.
fn build_messages(agent: &LlmAgent, session: &Session) -> Vec<ModelMessage> {
    let mut messages = Vec::with_capacity(session.events.len() + 1);
    if !agent.instruction().is_empty() {
        messages.push(ModelMessage::system(agent.instruction()));
    }
    messages.extend(session.events.iter().filter_map(|e| e.content.clone()));
    messages
}

/// Run one tool call. Failures become error results for the model to read.
async fn execute_tool_call(
    tools: &[Arc<dyn Tool>],
    call: &AgentToolCall,
    ctx: &ToolExecutionContext,
) -> AgentToolResult {
    let (result, is_error) = match run_tool(tools, call, ctx).await {
        Ok(result) => {
            debug!(tool = %call.name, "tool executed");
            (result, false)
        }
        Err(err) => {
            warn!(tool = %call.name, error = %err, "tool call failed");
            let message = match err {
                FinderError::ToolExecution { message, .. } => message,
                other => other.to_string(),
            };
            (serde_json::json!({ "error": message }), true)
        }
    };

    AgentToolResult {
        tool_call_id: call.id.clone(),
        tool_name: call.name.clone(),
        result,
        is_error,
    }
}

async fn run_tool(
    tools: &[Arc<dyn Tool>],
    call: &AgentToolCall,
    ctx: &ToolExecutionContext,
) -> Result<serde_json::Value, FinderError> {
    let failed = |message: String| FinderError::ToolExecution {
        tool_name: call.name.clone(),
        message,
    };

    let tool = tools
        .iter()
        .find(|t| t.name() == call.name)
        .ok_or_else(|| failed(format!("Tool '{}' not found", call.name)))?;
    validate_arguments(&call.arguments, &tool.parameters().schema)
        .map_err(|reason| failed(format!("Invalid arguments for '{}': {reason}", call.name)))?;
    tool.execute(&ToolArguments::new(call.arguments.clone()), ctx)
        .await
        .map_err(|e| failed(e.to_string()))
}
