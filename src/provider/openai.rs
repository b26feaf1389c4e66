//! OpenAI Chat Completions API provider.
//!
//! Also serves LiteLLM proxies and other OpenAI-compatible gateways through
//! `OPENAI_BASE_URL`.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::FinderError;
use crate::models::openai::OpenAiModel;
use crate::types::*;

use super::format::tool_result_to_string;
use super::http::{bearer_headers, shared_client};
use super::{ModelProvider, ProviderRequest, ProviderResponse};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAiProvider {
    model: OpenAiModel,
    api_key: String,
    base_url: String,
}

impl OpenAiProvider {
    pub fn new(model: OpenAiModel, api_key: String, base_url: Option<String>) -> Self {
        Self {
            base_url: base_url
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model,
            api_key,
        }
    }

    fn build_request_body(&self, request: &ProviderRequest) -> serde_json::Value {
        let messages = request
            .messages
            .iter()
            .flat_map(message_to_openai)
            .collect::<Vec<_>>();

        let mut obj = serde_json::Map::new();
        obj.insert("model".into(), self.model.as_str().into());
        obj.insert("messages".into(), messages.into());

        if let Some(max) = request.settings.max_tokens {
            let key = if self.model.is_reasoning() {
                "max_completion_tokens"
            } else {
                "max_tokens"
            };
            obj.insert(key.into(), max.into());
        }
        if !self.model.is_reasoning() {
            if let Some(temp) = request.settings.temperature {
                obj.insert("temperature".into(), temp.into());
            }
            if let Some(top_p) = request.settings.top_p {
                obj.insert("top_p".into(), top_p.into());
            }
        }
        if let Some(ref stops) = request.settings.stop_sequences {
            obj.insert("stop".into(), serde_json::json!(stops));
        }
        if let Some(seed) = request.settings.seed {
            obj.insert("seed".into(), seed.into());
        }

        if let Some(ref tools) = request.tools {
            if !tools.is_empty() {
                let tool_defs: Vec<serde_json::Value> = tools
                    .iter()
                    .map(|t| {
                        serde_json::json!({
                            "type": "function",
                            "function": {
                                "name": t.name,
                                "description": t.description,
                                "parameters": t.parameters,
                            }
                        })
                    })
                    .collect();
                obj.insert("tools".into(), tool_defs.into());
            }
        }

        serde_json::Value::Object(obj)
    }
}

#[async_trait]
impl ModelProvider for OpenAiProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model_id(&self) -> &str {
        self.model.as_str()
    }

    async fn generate_text(&self, request: &ProviderRequest) -> Result<ProviderResponse, FinderError> {
        let body = self.build_request_body(request);
        let url = format!("{}/chat/completions", self.base_url);

        debug!(model = self.model.as_str(), "OpenAI generate_text");

        let resp = shared_client()
            .post(&url)
            .headers(bearer_headers(&self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(super::http::status_to_error(status, &body_text));
        }

        let data: OpenAiChatResponse = resp.json().await?;
        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| FinderError::api(200, "No choices in OpenAI response"))?;

        let tool_calls = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|tc| message::AgentToolCall {
                id: tc.id,
                name: tc.function.name,
                arguments: serde_json::from_str(&tc.function.arguments)
                    .unwrap_or(serde_json::Value::String(tc.function.arguments)),
            })
            .collect();

        let finish_reason = choice.finish_reason.as_deref().and_then(parse_finish_reason);

        Ok(ProviderResponse {
            text: choice.message.content.unwrap_or_default(),
            usage: data
                .usage
                .map(|u| Usage {
                    input_tokens: u.prompt_tokens,
                    output_tokens: u.completion_tokens,
                    total_tokens: u.total_tokens,
                })
                .unwrap_or_default(),
            tool_calls,
            finish_reason,
        })
    }
}

fn parse_finish_reason(s: &str) -> Option<FinishReason> {
    match s {
        "stop" => Some(FinishReason::Stop),
        "length" => Some(FinishReason::Length),
        "tool_calls" => Some(FinishReason::ToolCalls),
        "content_filter" => Some(FinishReason::ContentFilter),
        _ => None,
    }
}

/// One internal message may expand to several wire messages (one per tool result).
fn message_to_openai(msg: &ModelMessage) -> Vec<serde_json::Value> {
    match msg.role {
        Role::System => vec![serde_json::json!({ "role": "system", "content": msg.text() })],
        Role::User => vec![serde_json::json!({ "role": "user", "content": msg.text() })],
        Role::Assistant => {
            let tool_calls = msg.tool_calls();
            let text = msg.text();
            if tool_calls.is_empty() {
                return vec![serde_json::json!({ "role": "assistant", "content": text })];
            }
            let tc_json: Vec<serde_json::Value> = tool_calls
                .iter()
                .map(|tc| {
                    serde_json::json!({
                        "id": tc.id,
                        "type": "function",
                        "function": {
                            "name": tc.name,
                            "arguments": tc.arguments.to_string(),
                        }
                    })
                })
                .collect();
            vec![serde_json::json!({
                "role": "assistant",
                "content": if text.is_empty() { serde_json::Value::Null } else { serde_json::Value::String(text) },
                "tool_calls": tc_json,
            })]
        }
        Role::Tool => msg
            .tool_results_ref()
            .into_iter()
            .map(|tr| {
                serde_json::json!({
                    "role": "tool",
                    "tool_call_id": tr.tool_call_id,
                    "content": tool_result_to_string(&tr.result),
                })
            })
            .collect(),
    }
}

// OpenAI API response types (internal)

#[derive(Deserialize)]
struct OpenAiChatResponse {
    choices: Vec<OpenAiChoice>,
    usage: Option<OpenAiUsage>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct OpenAiMessage {
    content: Option<String>,
    tool_calls: Option<Vec<OpenAiToolCall>>,
}

#[derive(Deserialize)]
struct OpenAiToolCall {
    id: String,
    function: OpenAiFunction,
}

#[derive(Deserialize)]
struct OpenAiFunction {
    name: String,
    arguments: String,
}

#[derive(Deserialize)]
struct OpenAiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ToolDefinition;

    fn request(messages: Vec<ModelMessage>) -> ProviderRequest {
        ProviderRequest {
            messages,
            settings: GenerationSettings {
                temperature: Some(0.2),
                max_tokens: Some(512),
                ..Default::default()
            },
            tools: Some(vec![ToolDefinition {
                name: "get_restaurants".into(),
                description: "Find restaurants".into(),
                parameters: serde_json::json!({"type": "object"}),
            }]),
        }
    }

    #[test]
    fn tool_results_expand_to_one_message_each() {
        let msg = ModelMessage::tool_results(vec![
            message::AgentToolResult {
                tool_call_id: "a".into(),
                tool_name: "get_restaurants".into(),
                result: serde_json::json!([]),
                is_error: false,
            },
            message::AgentToolResult {
                tool_call_id: "b".into(),
                tool_name: "get_restaurants".into(),
                result: serde_json::json!("none"),
                is_error: false,
            },
        ]);
        let wire = message_to_openai(&msg);
        assert_eq!(wire.len(), 2);
        assert_eq!(wire[0]["tool_call_id"], "a");
        assert_eq!(wire[1]["content"], "none");
    }

    #[test]
    fn reasoning_models_drop_sampling_params() {
        let provider = OpenAiProvider::new(OpenAiModel::Gpt5, "k".into(), None);
        let body = provider.build_request_body(&request(vec![ModelMessage::user("hi")]));
        assert!(body.get("temperature").is_none());
        assert_eq!(body["max_completion_tokens"], 512);
    }

    #[test]
    fn body_includes_tools_and_sampling() {
        let provider = OpenAiProvider::new(
            OpenAiModel::Gpt41,
            "k".into(),
            Some("http://proxy:4000/".into()),
        );
        assert_eq!(provider.base_url, "http://proxy:4000");
        let body = provider.build_request_body(&request(vec![
            ModelMessage::system("sys"),
            ModelMessage::user("hi"),
        ]));
        assert_eq!(body["model"], "gpt-4.1");
        assert_eq!(body["temperature"], 0.2);
        assert_eq!(body["tools"][0]["function"]["name"], "get_restaurants");
        assert_eq!(body["messages"][0]["role"], "system");
    }
}
