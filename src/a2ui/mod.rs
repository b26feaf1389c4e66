//! A2UI responses: splitting agent output and checking the UI messages.
//!
//! In UI mode the agent answers with conversational text, the
//! [`A2UI_DELIMITER`], and a JSON array of A2UI messages, each holding exactly
//! one of `beginRendering`, `surfaceUpdate`, `dataModelUpdate` or
//! `deleteSurface`.

mod validate;

pub use validate::{validate_message, validate_messages, MESSAGE_KINDS};

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::error::FinderError;

/// Separates the text part of a UI-mode response from its JSON part.
pub const A2UI_DELIMITER: &str = "---a2ui_JSON---";

static CODE_FENCE_RE: OnceLock<Regex> = OnceLock::new();

fn code_fence_re() -> &'static Regex {
    CODE_FENCE_RE.get_or_init(|| {
        Regex::new(r"(?s)^```[A-Za-z0-9_-]*\s*\n?(.*?)\s*```$")
            .expect("code fence regex must compile")
    })
}

/// An agent response split into its parts.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UiResponse {
    /// Conversational text, trimmed.
    pub text: String,
    /// A2UI messages; empty when the response carried no JSON part.
    pub messages: Vec<Value>,
}

impl UiResponse {
    pub fn has_ui(&self) -> bool {
        !self.messages.is_empty()
    }
}

/// Split `content` at the delimiter and parse the JSON part.
///
/// Content without the delimiter is all text. The JSON part may be wrapped in
/// a markdown code fence and may be an array of messages or a single message.
pub fn split_response(content: &str) -> Result<UiResponse, FinderError> {
    let Some((text, json)) = content.split_once(A2UI_DELIMITER) else {
        return Ok(UiResponse {
            text: content.trim().to_string(),
            messages: Vec::new(),
        });
    };

    let json = strip_code_fence(json.trim());
    if json.is_empty() {
        return Err(FinderError::InvalidUiResponse(
            "no JSON after the A2UI delimiter".into(),
        ));
    }

    let parsed: Value = serde_json::from_str(json)
        .map_err(|e| FinderError::InvalidUiResponse(format!("invalid A2UI JSON: {e}")))?;
    let messages = match parsed {
        Value::Array(items) => items,
        obj @ Value::Object(_) => vec![obj],
        other => {
            return Err(FinderError::InvalidUiResponse(format!(
                "expected a JSON array of A2UI messages, got {other}"
            )))
        }
    };

    Ok(UiResponse {
        text: text.trim().to_string(),
        messages,
    })
}

fn strip_code_fence(s: &str) -> &str {
    code_fence_re()
        .captures(s)
        .and_then(|c| c.get(1))
        .map_or(s, |m| m.as_str().trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_has_no_messages() {
        let response = split_response("  Here are some places.\n").unwrap();
        assert_eq!(response.text, "Here are some places.");
        assert!(!response.has_ui());
    }

    #[test]
    fn splits_text_and_array() {
        let content = format!(
            "Found 2 places.\n{A2UI_DELIMITER}\n[{{\"deleteSurface\": {{\"surfaceId\": \"a\"}}}}, {{\"deleteSurface\": {{\"surfaceId\": \"b\"}}}}]"
        );
        let response = split_response(&content).unwrap();
        assert_eq!(response.text, "Found 2 places.");
        assert_eq!(response.messages.len(), 2);
        assert_eq!(response.messages[1]["deleteSurface"]["surfaceId"], "b");
    }

    #[test]
    fn strips_code_fences_and_accepts_single_object() {
        let content = format!(
            "ok{A2UI_DELIMITER}\n```json\n{{\"beginRendering\": {{\"surfaceId\": \"s\", \"root\": \"r\"}}}}\n```\n"
        );
        let response = split_response(&content).unwrap();
        assert_eq!(response.messages.len(), 1);
        assert_eq!(response.messages[0]["beginRendering"]["root"], "r");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = split_response(&format!("text{A2UI_DELIMITER}[{{oops")).unwrap_err();
        assert!(matches!(err, FinderError::InvalidUiResponse(_)));

        let err = split_response(&format!("text{A2UI_DELIMITER}   ")).unwrap_err();
        assert!(matches!(err, FinderError::InvalidUiResponse(_)));

        let err = split_response(&format!("text{A2UI_DELIMITER}42")).unwrap_err();
        assert!(matches!(err, FinderError::InvalidUiResponse(_)));
    }
}
