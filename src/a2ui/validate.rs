//! Structural checks for A2UI messages.

use std::collections::HashSet;

use serde_json::{Map, Value};

/// Top-level keys a message may carry; exactly one must be present.
pub const MESSAGE_KINDS: [&str; 4] = [
    "surfaceUpdate",
    "dataModelUpdate",
    "beginRendering",
    "deleteSurface",
];

/// Check one message, returning a description of every problem found.
///
/// An empty vector means the message is valid.
pub fn validate_message(message: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    let Some(obj) = message.as_object() else {
        errors.push("A2UI message must be a JSON object.".to_string());
        return errors;
    };

    let kinds: Vec<&str> = MESSAGE_KINDS
        .iter()
        .copied()
        .filter(|k| obj.contains_key(*k))
        .collect();

    match kinds.as_slice() {
        [] => errors.push(format!(
            "A2UI message must have one of: {}.",
            MESSAGE_KINDS.join(", ")
        )),
        [kind] => {
            let body = &obj[*kind];
            match *kind {
                "surfaceUpdate" => validate_surface_update(body, &mut errors),
                "dataModelUpdate" => validate_data_model_update(body, &mut errors),
                "beginRendering" => validate_begin_rendering(body, &mut errors),
                _ => validate_delete_surface(body, &mut errors),
            }
        }
        many => errors.push(format!(
            "A2UI message must have exactly one of {}, but found: {}.",
            MESSAGE_KINDS.join(", "),
            many.join(", ")
        )),
    }

    errors
}

/// Check a list of messages. Errors are prefixed with the message index.
pub fn validate_messages(messages: &[Value]) -> Vec<String> {
    messages
        .iter()
        .enumerate()
        .flat_map(|(i, m)| {
            validate_message(m)
                .into_iter()
                .map(move |e| format!("message {i}: {e}"))
        })
        .collect()
}

fn object_or_report<'a>(
    body: &'a Value,
    kind: &str,
    errors: &mut Vec<String>,
) -> Option<&'a Map<String, Value>> {
    let obj = body.as_object();
    if obj.is_none() {
        errors.push(format!("{kind} must be a JSON object."));
    }
    obj
}

fn check_allowed_keys(obj: &Map<String, Value>, allowed: &[&str], kind: &str, errors: &mut Vec<String>) {
    for key in obj.keys() {
        if !allowed.contains(&key.as_str()) {
            errors.push(format!("{kind} has unexpected property: {key}"));
        }
    }
}

fn validate_delete_surface(body: &Value, errors: &mut Vec<String>) {
    let Some(obj) = object_or_report(body, "DeleteSurface", errors) else {
        return;
    };
    if !obj.contains_key("surfaceId") {
        errors.push("DeleteSurface must have a 'surfaceId' property.".to_string());
    }
    check_allowed_keys(obj, &["surfaceId"], "DeleteSurface", errors);
}

fn validate_begin_rendering(body: &Value, errors: &mut Vec<String>) {
    let Some(obj) = object_or_report(body, "BeginRendering", errors) else {
        return;
    };
    if !obj.contains_key("surfaceId") {
        errors.push("BeginRendering must have a 'surfaceId' property.".to_string());
    }
    if !obj.get("root").is_some_and(is_truthy) {
        errors.push("BeginRendering must have a 'root' property.".to_string());
    }
}

fn validate_data_model_update(body: &Value, errors: &mut Vec<String>) {
    let Some(obj) = object_or_report(body, "DataModelUpdate", errors) else {
        return;
    };
    if !obj.contains_key("surfaceId") {
        errors.push("DataModelUpdate must have a 'surfaceId' property.".to_string());
    }
    if !obj.contains_key("contents") {
        errors.push("DataModelUpdate must have a 'contents' property.".to_string());
    }
    check_allowed_keys(obj, &["surfaceId", "path", "contents"], "DataModelUpdate", errors);
}

fn validate_surface_update(body: &Value, errors: &mut Vec<String>) {
    let Some(obj) = object_or_report(body, "SurfaceUpdate", errors) else {
        return;
    };
    if !obj.contains_key("surfaceId") {
        errors.push("SurfaceUpdate must have a 'surfaceId' property.".to_string());
    }
    let Some(components) = obj.get("components").and_then(Value::as_array) else {
        errors.push("SurfaceUpdate must have a 'components' array.".to_string());
        return;
    };

    let mut ids = HashSet::new();
    for id in components.iter().filter_map(component_id) {
        if !ids.insert(id) {
            errors.push(format!("Duplicate component ID found: {id}"));
        }
    }

    for component in components {
        validate_component(component, &ids, errors);
    }
}

fn component_id(component: &Value) -> Option<&str> {
    component
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Required properties per component type; `None` for unknown types.
fn required_properties(component_type: &str) -> Option<&'static [&'static str]> {
    let required: &'static [&'static str] = match component_type {
        "Heading" | "Text" => &["text"],
        "Image" | "Video" | "AudioPlayer" => &["url"],
        "TextField" => &["label"],
        "DateTimeInput" | "Slider" => &["value"],
        "MultipleChoice" => &["selections", "options"],
        "CheckBox" => &["value", "label"],
        "Row" | "Column" | "List" => &["children"],
        "Card" => &["child"],
        "Tabs" => &["tabItems"],
        "Modal" => &["entryPointChild", "contentChild"],
        "Button" => &["label", "action"],
        "Divider" => &[],
        _ => return None,
    };
    Some(required)
}

fn validate_component(component: &Value, ids: &HashSet<&str>, errors: &mut Vec<String>) {
    let Some(id) = component_id(component) else {
        errors.push("Component is missing an 'id'.".to_string());
        return;
    };
    let Some(wrapper) = component.get("component").filter(|c| is_truthy(c)) else {
        errors.push(format!("Component '{id}' is missing 'component'."));
        return;
    };
    let Some((component_type, properties)) = wrapper
        .as_object()
        .filter(|w| w.len() == 1)
        .and_then(|w| w.iter().next())
    else {
        let found = wrapper.as_object().map_or(0, Map::len);
        errors.push(format!(
            "Component '{id}' must have exactly one property in 'component', but found {found}."
        ));
        return;
    };

    let component_type = component_type.as_str();
    let Some(required) = required_properties(component_type) else {
        errors.push(format!(
            "Unknown component type '{component_type}' in component '{id}'."
        ));
        return;
    };

    let empty = Map::new();
    let props = properties.as_object().unwrap_or(&empty);
    for prop in required {
        if !props.contains_key(*prop) {
            errors.push(format!(
                "Component '{id}' of type '{component_type}' is missing required property '{prop}'."
            ));
        }
    }

    let check_ref = |target: Option<&Value>, errors: &mut Vec<String>| {
        if let Some(target) = target.and_then(Value::as_str).filter(|t| !t.is_empty()) {
            if !ids.contains(target) {
                errors.push(format!(
                    "Component '{id}' references non-existent component ID '{target}'."
                ));
            }
        }
    };

    match component_type {
        "Row" | "Column" | "List" => {
            if let Some(children) = props.get("children").and_then(Value::as_object) {
                let explicit = children.get("explicitList").filter(|v| is_truthy(v));
                let template = children.get("template").filter(|v| is_truthy(v));
                if explicit.is_some() == template.is_some() {
                    errors.push(format!(
                        "Component '{id}' must have either 'explicitList' or 'template' in children, but not both or neither."
                    ));
                }
                if let Some(list) = explicit.and_then(Value::as_array) {
                    for child in list {
                        check_ref(Some(child), errors);
                    }
                }
                if let Some(template) = template {
                    check_ref(template.get("componentId"), errors);
                }
            }
        }
        "Card" => check_ref(props.get("child"), errors),
        "Modal" => {
            check_ref(props.get("entryPointChild"), errors);
            check_ref(props.get("contentChild"), errors);
        }
        "Tabs" => {
            if let Some(items) = props.get("tabItems").and_then(Value::as_array) {
                for tab in items {
                    if !tab.get("title").is_some_and(is_truthy) {
                        errors.push(format!("Tab item in component '{id}' is missing a 'title'."));
                    }
                    if !tab.get("child").is_some_and(is_truthy) {
                        errors.push(format!("Tab item in component '{id}' is missing a 'child'."));
                    }
                    check_ref(tab.get("child"), errors);
                }
            }
        }
        _ => {}
    }
}
