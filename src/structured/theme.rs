use super::extract::clean_json_string;
use crate::error::Fault;
use crate::error_code::ErrorKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MIN_STAGES: usize = 2;

/// One named stage of a content outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeTab {
    pub title: String,
}

impl ThemeTab {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Staged outline of a theme along one continuous dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeContent {
    pub dimension: String,
    pub tabs: Vec<ThemeTab>,
}

/// Why model output was rejected. Carried as the fault's details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageRejection {
    InvalidJson,
    MissingDimension,
    MissingStages,
    NoValidStages,
    InsufficientStages,
}

impl StageRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidJson => "invalid JSON",
            Self::MissingDimension => "missing dimension",
            Self::MissingStages => "missing stages",
            Self::NoValidStages => "no valid stages",
            Self::InsufficientStages => "insufficient stages",
        }
    }
}

const THEME_PARSE_FAILURE: &str = "failed to parse theme content";

/// Parse raw model text into [`ThemeContent`].
///
/// Checks run in order: dimension, stages, at least one non-blank stage, at least
/// [`MIN_STAGES`]. `relatedThemes` and `explanation` are accepted but not required.
pub fn parse_theme_content(raw: &str) -> Result<ThemeContent, Fault> {
    let cleaned = clean_json_string(raw);
    let value: Value = serde_json::from_str(&cleaned).map_err(|e| {
        rejected(
            StageRejection::InvalidJson,
            Some(format!("{}: {}", StageRejection::InvalidJson.as_str(), e)),
        )
    })?;

    let dimension = value
        .get("dimension")
        .and_then(Value::as_str)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| rejected(StageRejection::MissingDimension, None))?;

    let stages = value
        .get("stages")
        .and_then(Value::as_array)
        .and_then(|arr| arr.iter().map(Value::as_str).collect::<Option<Vec<_>>>())
        .ok_or_else(|| rejected(StageRejection::MissingStages, None))?;

    let stages: Vec<&str> = stages
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if stages.is_empty() {
        return Err(rejected(StageRejection::NoValidStages, None));
    }
    if stages.len() < MIN_STAGES {
        return Err(rejected(StageRejection::InsufficientStages, None));
    }

    Ok(ThemeContent {
        dimension: dimension.to_string(),
        tabs: stages.into_iter().map(ThemeTab::new).collect(),
    })
}

fn rejected(reason: StageRejection, details: Option<String>) -> Fault {
    Fault::domain_with_details(
        ErrorKind::Parse,
        THEME_PARSE_FAILURE,
        details.unwrap_or_else(|| reason.as_str().to_string()),
    )
}
