//! Tool system for function calling.

pub mod arguments;
pub mod restaurants;
pub mod tool;
pub mod types;
pub mod validation;

pub use arguments::ToolArguments;
pub use restaurants::{get_restaurants_tool, Restaurant};
pub use tool::{AgentTool, Tool, ToolExecutionContext};
pub use types::AgentToolParameters;
