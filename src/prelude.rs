//! Convenience re-exports for common use.

pub use crate::a2ui::{split_response, validate_message, UiResponse};
pub use crate::agent::{AgentResponse, LlmAgent, RestaurantAgent};
pub use crate::config::FinderConfig;
pub use crate::error::{FinderError, Result};
pub use crate::models::LanguageModel;
pub use crate::provider::ModelProvider;
pub use crate::runner::{Event, Runner};
pub use crate::session::{InMemorySessionService, Session, SessionService, SessionState};
pub use crate::tools::{AgentTool, AgentToolParameters, Tool, ToolArguments};
pub use crate::types::{ContentPart, GenerationSettings, ModelMessage, Role, Usage};
