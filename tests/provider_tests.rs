//! Provider request/response mapping against a mock HTTP server.

use futures::StreamExt;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use restaurant_finder::agent::{AgentResponse, RestaurantAgent};
use restaurant_finder::config::FinderConfig;
use restaurant_finder::error::FinderError;
use restaurant_finder::models::LanguageModel;
use restaurant_finder::provider::{create_provider, ProviderRequest, ToolDefinition};
use restaurant_finder::types::{FinishReason, GenerationSettings, ModelMessage};

fn request() -> ProviderRequest {
    ProviderRequest {
        messages: vec![
            ModelMessage::system("You find restaurants."),
            ModelMessage::user("chinese food in ny"),
        ],
        settings: GenerationSettings::default(),
        tools: Some(vec![ToolDefinition {
            name: "get_restaurants".into(),
            description: "Find restaurants".into(),
            parameters: json!({"type": "object", "properties": {}}),
        }]),
    }
}

fn config_for(provider: &str, server: &MockServer) -> FinderConfig {
    let config = FinderConfig::new();
    config.set_api_key(provider, "test-key".into());
    config.set_base_url(provider, server.uri());
    config
}

#[cfg(feature = "openai")]
#[tokio::test]
async fn openai_parses_text_and_usage() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-4.1",
            "messages": [{"role": "system", "content": "You find restaurants."}],
            "tools": [{"type": "function", "function": {"name": "get_restaurants"}}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": {"role": "assistant", "content": "Try Han Dynasty."},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 12, "completion_tokens": 4, "total_tokens": 16}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let model: LanguageModel = "openai:gpt-4.1".parse().unwrap();
    let provider = create_provider(&model, &config_for("openai", &server)).unwrap();
    let response = provider.generate_text(&request()).await.unwrap();

    assert_eq!(response.text, "Try Han Dynasty.");
    assert_eq!(response.usage.total_tokens, 16);
    assert_eq!(response.finish_reason, Some(FinishReason::Stop));
    assert!(response.tool_calls.is_empty());
}

#[cfg(feature = "openai")]
#[tokio::test]
async fn openai_parses_tool_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": {
                            "name": "get_restaurants",
                            "arguments": "{\"cuisine\":\"Chinese\",\"location\":\"New York\"}"
                        }
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        })))
        .mount(&server)
        .await;

    let model: LanguageModel = "openai/gpt-4o-mini".parse().unwrap();
    let provider = create_provider(&model, &config_for("openai", &server)).unwrap();
    let response = provider.generate_text(&request()).await.unwrap();

    assert_eq!(response.text, "");
    assert_eq!(response.finish_reason, Some(FinishReason::ToolCalls));
    assert_eq!(response.tool_calls.len(), 1);
    assert_eq!(response.tool_calls[0].id, "call_1");
    assert_eq!(response.tool_calls[0].arguments["location"], "New York");
}

#[cfg(feature = "openai")]
#[tokio::test]
async fn openai_maps_error_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key"))
        .mount(&server)
        .await;

    let model: LanguageModel = "openai:gpt-4.1".parse().unwrap();
    let provider = create_provider(&model, &config_for("openai", &server)).unwrap();
    let err = provider.generate_text(&request()).await.unwrap_err();
    assert!(matches!(err, FinderError::Authentication(msg) if msg == "bad key"));
}

#[cfg(feature = "google")]
#[tokio::test]
async fn google_parses_function_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "systemInstruction": {"parts": [{"text": "You find restaurants."}]},
            "contents": [{"role": "user", "parts": [{"text": "chinese food in ny"}]}],
            "tools": [{"functionDeclarations": [{"name": "get_restaurants"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [
                    {"functionCall": {"name": "get_restaurants", "args": {"cuisine": "Chinese", "location": "NY"}}}
                ]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 20, "candidatesTokenCount": 3, "totalTokenCount": 23}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let model: LanguageModel = "gemini/gemini-2.5-flash".parse().unwrap();
    let provider = create_provider(&model, &config_for("google", &server)).unwrap();
    let response = provider.generate_text(&request()).await.unwrap();

    assert_eq!(response.finish_reason, Some(FinishReason::ToolCalls));
    assert_eq!(response.tool_calls.len(), 1);
    assert_eq!(response.tool_calls[0].name, "get_restaurants");
    assert!(!response.tool_calls[0].id.is_empty());
    assert_eq!(response.usage.input_tokens, 20);
}

#[cfg(feature = "google")]
#[tokio::test]
async fn google_rate_limit_is_retryable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"error": {"retry_after": 2}})))
        .mount(&server)
        .await;

    let model: LanguageModel = "google:gemini-2.5-flash".parse().unwrap();
    let provider = create_provider(&model, &config_for("google", &server)).unwrap();
    let err = provider.generate_text(&request()).await.unwrap_err();
    assert!(matches!(err, FinderError::RateLimited { retry_after_ms: Some(2000) }));
    assert!(err.is_retryable());
}

#[cfg(feature = "google")]
#[tokio::test]
async fn restaurant_agent_end_to_end_over_gemini() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"role": "model", "parts": [
                {"functionCall": {"id": "fc-1", "name": "get_restaurants", "args": {"cuisine": "Chinese", "location": "New York", "count": 2}}}
            ]}}]
        })))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Xi'an Famous Foods and Han Dynasty."}]},
                "finishReason": "STOP"
            }]
        })))
        .with_priority(2)
        .mount(&server)
        .await;

    let config = config_for("google", &server)
        .with_model("gemini/gemini-2.5-flash")
        .with_public_base_url("https://finder.example.com");
    let agent = RestaurantAgent::new(&config).unwrap();

    let responses: Vec<AgentResponse> = agent
        .stream("two chinese places in new york", "e2e")
        .map(|r| r.unwrap())
        .collect()
        .await;

    assert_eq!(responses.len(), 3);
    assert_eq!(
        responses.last(),
        Some(&AgentResponse::Final {
            content: "Xi'an Famous Foods and Han Dynasty.".into()
        })
    );

    // The follow-up request carries the tool result with rewritten image links.
    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 2);
    let body: serde_json::Value = serde_json::from_slice(&received[1].body).unwrap();
    let contents = body["contents"].as_array().unwrap();
    let function_response = &contents[2]["parts"][0]["functionResponse"];
    assert_eq!(function_response["name"], "get_restaurants");
    assert_eq!(
        function_response["response"]["result"][0]["imageUrl"],
        "https://finder.example.com/static/shrimpchowmein.jpeg"
    );
}
