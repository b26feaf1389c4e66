//! The `get_restaurants` lookup tool.
//!
//! Backed by a small embedded data set of New York restaurants. Image links in
//! the data point at [`DATA_BASE_URL`]; when the session carries a `base_url`
//! the links are rewritten to it so clients can fetch the images from wherever
//! the agent is actually served.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::FinderError;
use crate::session::BASE_URL_KEY;
use crate::tools::tool::{AgentTool, Tool, ToolExecutionContext};
use crate::tools::types::AgentToolParameters;

/// Tool name the instruction text refers to.
pub const GET_RESTAURANTS: &str = "get_restaurants";

/// Host baked into the embedded data set.
pub const DATA_BASE_URL: &str = "http://localhost:10002";

/// Number of results when the model omits `count`.
pub const DEFAULT_COUNT: i64 = 5;

const RESTAURANT_DATA: &str = include_str!("../../data/restaurant_data.json");

/// A restaurant record as handed to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub name: String,
    pub detail: String,
    pub image_url: String,
    pub rating: String,
    pub info_link: String,
    pub address: String,
}

/// Whether the embedded data set covers `location`.
pub fn covers_location(location: &str) -> bool {
    let location = location.to_lowercase();
    location.contains("new york") || location.contains("ny")
}

/// Look up restaurants for a location.
///
/// Returns at most `count` records; locations outside the data set yield an
/// empty list. Cuisine is accepted for the model's benefit but the sample
/// data is not partitioned by it.
pub fn find_restaurants(
    location: &str,
    count: usize,
    base_url: Option<&str>,
) -> Result<Vec<Restaurant>, FinderError> {
    if !covers_location(location) {
        return Ok(Vec::new());
    }

    let restaurants: Vec<Restaurant> = match base_url {
        Some(url) if url != DATA_BASE_URL => {
            info!(base_url = url, "rewriting restaurant image links");
            serde_json::from_str(&RESTAURANT_DATA.replace(DATA_BASE_URL, url))?
        }
        _ => serde_json::from_str(RESTAURANT_DATA)?,
    };

    Ok(restaurants.into_iter().take(count).collect())
}

/// Create the `get_restaurants` tool.
pub fn get_restaurants_tool() -> Arc<dyn Tool> {
    Arc::new(AgentTool::new(
        GET_RESTAURANTS,
        "Call this tool to get a list of restaurants based on a cuisine and location. \
         'count' is the number of restaurants to return.",
        AgentToolParameters::object()
            .string("cuisine", "Cuisine to search for, e.g. Chinese", true)
            .string("location", "City or neighborhood, e.g. New York", true)
            .integer("count", "Number of restaurants to return (default 5)", false)
            .build(),
        |args, ctx: ToolExecutionContext| async move {
            let cuisine = args.get_str("cuisine")?;
            let location = args.get_str("location")?;
            let count = args.get_i64_or("count", DEFAULT_COUNT)?;
            info!(cuisine, location, count, "get_restaurants");

            let base_url = ctx.state_str(BASE_URL_KEY);
            if base_url.is_none() {
                warn!(session_id = %ctx.session_id, "session has no base_url; keeping default image links");
            }

            let found = find_restaurants(location, usize::try_from(count).unwrap_or(0), base_url)?;
            Ok(serde_json::to_value(found)?)
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::arguments::ToolArguments;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_data_parses() {
        let all = find_restaurants("New York", usize::MAX, None).unwrap();
        assert_eq!(all.len(), 8);
        assert!(all.iter().all(|r| r.image_url.starts_with(DATA_BASE_URL)));
    }

    #[test]
    fn location_match_is_case_insensitive() {
        assert!(covers_location("new york city"));
        assert!(covers_location("Brooklyn, NY"));
        assert!(!covers_location("San Francisco"));
    }

    #[test]
    fn other_locations_are_empty() {
        assert!(find_restaurants("Paris", 5, None).unwrap().is_empty());
    }

    #[test]
    fn count_limits_results() {
        let found = find_restaurants("NY", 3, None).unwrap();
        let names: Vec<_> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Xi'an Famous Foods", "Han Dynasty", "RedFarm"]);
    }

    #[test]
    fn base_url_rewrites_image_links() {
        let found = find_restaurants("new york", 2, Some("https://cdn.example.com")).unwrap();
        assert_eq!(found[0].image_url, "https://cdn.example.com/static/shrimpchowmein.jpeg");
        assert_eq!(found[1].image_url, "https://cdn.example.com/static/mapotofu.jpeg");
    }

    #[tokio::test]
    async fn tool_uses_session_base_url_and_default_count() {
        let tool = get_restaurants_tool();
        let mut state = crate::session::SessionState::new();
        state.insert(BASE_URL_KEY.into(), "http://agent:9000".into());
        let ctx = ToolExecutionContext::new("s1", state);

        let args = ToolArguments::new(serde_json::json!({"cuisine": "Chinese", "location": "New York"}));
        let result = tool.execute(&args, &ctx).await.unwrap();

        let items = result.as_array().unwrap();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0]["imageUrl"], "http://agent:9000/static/shrimpchowmein.jpeg");
    }

    #[tokio::test]
    async fn negative_count_returns_nothing() {
        let tool = get_restaurants_tool();
        let args = ToolArguments::new(
            serde_json::json!({"cuisine": "Chinese", "location": "NY", "count": -2}),
        );
        let result = tool
            .execute(&args, &ToolExecutionContext::default())
            .await
            .unwrap();
        assert_eq!(result, serde_json::json!([]));
    }
}
