//! Agents: the generic model-backed agent and the restaurant finder built on it.

mod llm;
pub mod restaurant;

pub use llm::LlmAgent;
pub use restaurant::{AgentResponse, RestaurantAgent};
