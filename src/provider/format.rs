//! Provider formatting helpers.

use serde_json::Value;

/// Convert a tool result JSON value into a string payload for providers.
pub(crate) fn tool_result_to_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(v) => v.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Gemini requires `functionResponse.response` to be an object.
pub(crate) fn tool_result_to_object(value: &Value) -> Value {
    match value {
        Value::Object(_) => value.clone(),
        other => serde_json::json!({ "result": other }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_are_passed_through_unquoted() {
        assert_eq!(tool_result_to_string(&json!("plain")), "plain");
        assert_eq!(tool_result_to_string(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn non_objects_are_wrapped_for_gemini() {
        assert_eq!(tool_result_to_object(&json!([1])), json!({"result": [1]}));
        assert_eq!(tool_result_to_object(&json!({"a": 1})), json!({"a": 1}));
    }
}
