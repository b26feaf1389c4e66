//! System instructions for the restaurant agent.
//!
//! UI mode asks the model for conversational text, the
//! [`A2UI_DELIMITER`](crate::a2ui::A2UI_DELIMITER), then a JSON array of A2UI
//! messages built from one of the [`RESTAURANT_UI_EXAMPLES`]. Text mode asks
//! for plain prose only.

mod templates;

pub use templates::{
    UiTemplate, BOOKING_FORM, CONFIRMATION, RESTAURANT_UI_EXAMPLES, SINGLE_COLUMN_LIST,
    TWO_COLUMN_LIST,
};

use crate::a2ui::A2UI_DELIMITER;
use crate::tools::restaurants::GET_RESTAURANTS;

/// Task logic for UI mode. [`ui_prompt`] supplies the output format.
pub const AGENT_INSTRUCTION: &str = r#"
You are a helpful restaurant finding assistant. Your goal is to help users find and book restaurants using a rich UI.

To achieve this, you MUST follow this logic:

1.  **For finding restaurants:**
    a. You MUST call the `get_restaurants` tool. Extract the cuisine, location, and a specific number (`count`) of restaurants from the user's query (e.g., for "top 5 chinese places", count is 5).
    b. After receiving the data, you MUST follow the instructions precisely to generate the final a2ui UI JSON, using the appropriate UI template below based on the number of restaurants.

2.  **For booking a table (when you receive a query like 'USER_WANTS_TO_BOOK...'):**
    a. You MUST use the booking form template to generate the UI, populating the `dataModelUpdate.contents` with the details from the user's query.

3.  **For confirming a booking (when you receive a query like 'User submitted a booking...'):**
    a. You MUST use the confirmation template to generate the confirmation UI, populating the `dataModelUpdate.contents` with the final booking details.
"#;

/// Condensed schema of a single A2UI message.
pub const A2UI_SCHEMA: &str = r#"{
  "title": "A2UI Message Schema",
  "description": "Exactly ONE of 'beginRendering', 'surfaceUpdate', 'dataModelUpdate', or 'deleteSurface' is allowed per message.",
  "type": "object",
  "properties": {
    "beginRendering": {
      "type": "object",
      "properties": {
        "surfaceId": {"type": "string"},
        "root": {"type": "string", "description": "Id of the root component."},
        "styles": {"type": "object", "properties": {"font": {"type": "string"}, "primaryColor": {"type": "string"}}}
      },
      "required": ["surfaceId", "root"]
    },
    "surfaceUpdate": {
      "type": "object",
      "properties": {
        "surfaceId": {"type": "string"},
        "components": {
          "type": "array",
          "items": {
            "type": "object",
            "properties": {
              "id": {"type": "string"},
              "weight": {"type": "number"},
              "component": {
                "type": "object",
                "description": "Exactly one of: Heading{text}, Text{text}, Image{url}, Video{url}, AudioPlayer{url}, TextField{label}, DateTimeInput{value}, MultipleChoice{selections, options}, Slider{value}, CheckBox{value, label}, Row{children}, Column{children}, List{children}, Card{child}, Tabs{tabItems[{title, child}]}, Modal{entryPointChild, contentChild}, Button{label, action}, Divider{}. 'children' is {explicitList: [ids]} or {template: {componentId, dataBinding}}. Text values are {literalString} or {path}."
              }
            },
            "required": ["id", "component"]
          }
        }
      },
      "required": ["surfaceId", "components"]
    },
    "dataModelUpdate": {
      "type": "object",
      "properties": {
        "surfaceId": {"type": "string"},
        "path": {"type": "string"},
        "contents": {
          "type": "array",
          "items": {
            "type": "object",
            "properties": {
              "key": {"type": "string"},
              "valueString": {"type": "string"},
              "valueNumber": {"type": "number"},
              "valueBoolean": {"type": "boolean"},
              "valueMap": {"type": "array", "description": "Nested entries with the same shape."}
            },
            "required": ["key"]
          }
        }
      },
      "required": ["surfaceId", "contents"]
    },
    "deleteSurface": {
      "type": "object",
      "properties": {"surfaceId": {"type": "string"}},
      "required": ["surfaceId"]
    }
  }
}"#;

/// Output rules, templates and schema for UI mode.
///
/// `base_url` is where the restaurant images are served from; the tool
/// already rewrites image links to it.
pub fn ui_prompt(base_url: &str, examples: &[UiTemplate]) -> String {
    let examples = examples
        .iter()
        .map(|t| format!("---BEGIN {name}---\n{json}\n---END {name}---", name = t.name, json = t.json))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        r#"
You are a helpful restaurant finding assistant. Your final output MUST be a a2ui UI JSON response.

To generate the response, you MUST follow these rules:
1.  Your response MUST be in two parts, separated by the delimiter: `{A2UI_DELIMITER}`.
2.  The first part is your conversational text response.
3.  The second part is a single, raw JSON array of A2UI messages.
4.  The JSON part MUST validate against the A2UI JSON SCHEMA provided below.
5.  Restaurant images are served from {base_url}. Use the `imageUrl` values from `{GET_RESTAURANTS}` unchanged.

--- UI TEMPLATE RULES ---
-   If the query is for a list of restaurants, use the restaurant data you have already received from the `{GET_RESTAURANTS}` tool to populate the `dataModelUpdate.contents` array (e.g., as a `valueMap` for the "items" key).
-   If the number of restaurants is 5 or fewer, you MUST use the `SINGLE_COLUMN_LIST_EXAMPLE` template.
-   If the number of restaurants is more than 5, you MUST use the `TWO_COLUMN_LIST_EXAMPLE` template.
-   If the query is to book a restaurant (e.g., "USER_WANTS_TO_BOOK..."), you MUST use the `BOOKING_FORM_EXAMPLE` template.
-   If the query is a booking submission (e.g., "User submitted a booking..."), you MUST use the `CONFIRMATION_EXAMPLE` template.

{examples}

---BEGIN A2UI JSON SCHEMA---
{A2UI_SCHEMA}
---END A2UI JSON SCHEMA---
"#
    )
}

/// Instruction for text-only responses.
pub fn text_prompt() -> String {
    format!(
        r#"
You are a helpful restaurant finding assistant. Your responses are plain text only; never output JSON or markup.

To answer, you MUST follow this logic:

1.  **For finding restaurants:** call the `{GET_RESTAURANTS}` tool with the cuisine, location and number (`count`) of restaurants from the user's query, then list each restaurant with its name, rating, a short detail, its address and its info link.
2.  **For booking a table:** ask for the party size, date and time, and any dietary requirements.
3.  **For confirming a booking:** repeat the booking details back to the user and thank them.
"#
    )
}

/// Full system instruction for the chosen mode.
pub fn build_instruction(use_ui: bool, base_url: &str) -> String {
    if use_ui {
        format!("{AGENT_INSTRUCTION}{}", ui_prompt(base_url, RESTAURANT_UI_EXAMPLES))
    } else {
        text_prompt()
    }
}
