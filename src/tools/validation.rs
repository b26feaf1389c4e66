//! Check tool call arguments against the tool's JSON Schema before execution.

use serde_json::Value;

/// Validate tool arguments against a JSON Schema.
///
/// Covers the subset of JSON Schema the tool builder emits: object type,
/// required fields, and per-property primitive types. A `null` value for an
/// optional property counts as absent. Returns a description of the first
/// violation.
pub fn validate_arguments(args: &Value, schema: &Value) -> Result<(), String> {
    if schema.get("type").and_then(Value::as_str) == Some("object") && !args.is_object() {
        return Err(format!(
            "expected object arguments, got {}",
            json_type_name(args)
        ));
    }

    let Some(obj) = args.as_object() else {
        return Ok(());
    };

    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|fields| fields.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    for name in &required {
        if obj.get(*name).map_or(true, Value::is_null) {
            return Err(format!("missing required field '{name}'"));
        }
    }

    if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
        for (key, value) in obj {
            if value.is_null() && !required.contains(&key.as_str()) {
                continue;
            }
            let expected = properties
                .get(key)
                .and_then(|p| p.get("type"))
                .and_then(Value::as_str);
            if let Some(expected) = expected {
                if !value_matches_type(value, expected) {
                    return Err(format!(
                        "field '{key}' expected type '{expected}', got {}",
                        json_type_name(value)
                    ));
                }
            }
        }
    }

    Ok(())
}

fn value_matches_type(value: &Value, expected: &str) -> bool {
    match expected {
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => {
            value.is_i64()
                || value.is_u64()
                || value.as_f64().is_some_and(|f| f.fract() == 0.0)
        }
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        "null" => value.is_null(),
        _ => true,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lookup_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "cuisine": { "type": "string" },
                "location": { "type": "string" },
                "count": { "type": "integer" },
            },
            "required": ["cuisine", "location"],
        })
    }

    #[test]
    fn rejects_non_object_args() {
        let err = validate_arguments(&json!("chinese"), &lookup_schema()).unwrap_err();
        assert!(err.contains("expected object"));
    }

    #[test]
    fn rejects_missing_or_null_required_field() {
        let err = validate_arguments(&json!({"cuisine": "thai"}), &lookup_schema()).unwrap_err();
        assert_eq!(err, "missing required field 'location'");

        let err = validate_arguments(
            &json!({"cuisine": "thai", "location": null}),
            &lookup_schema(),
        )
        .unwrap_err();
        assert_eq!(err, "missing required field 'location'");
    }

    #[test]
    fn accepts_whole_float_for_integer() {
        let args = json!({"cuisine": "thai", "location": "NY", "count": 5.0});
        assert!(validate_arguments(&args, &lookup_schema()).is_ok());

        let args = json!({"cuisine": "thai", "location": "NY", "count": 2.5});
        let err = validate_arguments(&args, &lookup_schema()).unwrap_err();
        assert!(err.contains("field 'count' expected type 'integer'"));
    }

    #[test]
    fn optional_null_counts_as_absent() {
        let args = json!({"cuisine": "thai", "location": "NY", "count": null});
        assert!(validate_arguments(&args, &lookup_schema()).is_ok());
    }

    #[test]
    fn extra_fields_and_empty_schema_are_accepted() {
        let args = json!({"cuisine": "thai", "location": "NY", "vegan": true});
        assert!(validate_arguments(&args, &lookup_schema()).is_ok());
        assert!(validate_arguments(&Value::Null, &json!({})).is_ok());
    }
}
