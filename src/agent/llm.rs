//! Model-backed agent definition.

use std::sync::Arc;

use crate::models::LanguageModel;
use crate::provider::ToolDefinition;
use crate::tools::tool::Tool;
use crate::types::GenerationSettings;

/// An agent the [`Runner`](crate::runner::Runner) can drive: a model, an
/// instruction, and the tools the model may call.
#[derive(Clone)]
pub struct LlmAgent {
    name: String,
    description: String,
    model: LanguageModel,
    instruction: String,
    tools: Vec<Arc<dyn Tool>>,
    settings: GenerationSettings,
}

impl LlmAgent {
    /// Create an agent with no instruction and no tools.
    pub fn new(name: impl Into<String>, model: LanguageModel) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            model,
            instruction: String::new(),
            tools: Vec::new(),
            settings: GenerationSettings::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the system instruction.
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    /// Add a tool.
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    /// Set generation settings.
    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn model(&self) -> &LanguageModel {
        &self.model
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Tool declarations for a provider request, `None` when the agent has no tools.
    pub fn tool_definitions(&self) -> Option<Vec<ToolDefinition>> {
        if self.tools.is_empty() {
            return None;
        }
        Some(
            self.tools
                .iter()
                .map(|t| ToolDefinition {
                    name: t.name().to_string(),
                    description: t.description().to_string(),
                    parameters: t.parameters().schema.clone(),
                })
                .collect(),
        )
    }
}

impl std::fmt::Debug for LlmAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmAgent")
            .field("name", &self.name)
            .field("model", &self.model.to_string())
            .field(
                "tools",
                &self.tools.iter().map(|t| t.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::get_restaurants_tool;

    fn model() -> LanguageModel {
        LanguageModel::Custom {
            provider: "test".into(),
            model_id: "m".into(),
        }
    }

    #[test]
    fn agent_without_tools_sends_no_declarations() {
        let agent = LlmAgent::new("a", model())
            .with_instruction("be brief")
            .with_settings(GenerationSettings::builder().temperature(0.2).build());
        assert!(agent.tool_definitions().is_none());
        assert_eq!(agent.instruction(), "be brief");
        assert_eq!(agent.settings().temperature, Some(0.2));
    }

    #[test]
    fn tool_definitions_carry_schema() {
        let agent = LlmAgent::new("a", model())
            .with_description("finds food")
            .with_tool(get_restaurants_tool());
        let defs = agent.tool_definitions().unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].name, "get_restaurants");
        assert_eq!(defs[0].parameters["required"], serde_json::json!(["cuisine", "location"]));
        assert_eq!(agent.description(), "finds food");
    }
}
