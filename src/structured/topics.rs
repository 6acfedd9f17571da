use super::extract::clean_json_string;
use crate::error::Fault;
use crate::error_code::ErrorKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MAX_THEMES: usize = 3;

/// Inferred role of a searcher plus up to three themes they care about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSuggestion {
    pub role: String,
    pub themes: Vec<String>,
}

const TOPIC_PARSE_FAILURE: &str = "failed to parse topic suggestion";

/// Parse raw model text into a [`TopicSuggestion`].
///
/// Every failure is a `Parse` fault with the same message; the reason only goes to details.
pub fn parse_topic_suggestion(raw: &str) -> Result<TopicSuggestion, Fault> {
    let cleaned = clean_json_string(raw);
    let value: Value = serde_json::from_str(&cleaned).map_err(|e| parse_failure(e.to_string()))?;

    let role = value
        .get("role")
        .and_then(Value::as_str)
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| parse_failure("missing role"))?;

    let themes = value
        .get("themes")
        .and_then(Value::as_array)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| parse_failure("missing themes"))?;

    let themes = themes
        .iter()
        .take(MAX_THEMES)
        .map(|t| t.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| parse_failure("themes must be strings"))?;

    Ok(TopicSuggestion {
        role: role.to_string(),
        themes,
    })
}

fn parse_failure(details: impl Into<String>) -> Fault {
    Fault::domain_with_details(ErrorKind::Parse, TOPIC_PARSE_FAILURE, details)
}
