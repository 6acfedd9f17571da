//! Chat-completion request and response bodies.

use super::message::Message;
use serde::Serialize;
use serde_json::Value;

/// Per-call options. Unset fields fall back to the adapter configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChatOptions {
    /// Sampling randomness override (default 0.7)
    pub temperature: Option<f64>,
    /// Upper bound on generated tokens; only sent when set
    pub max_tokens: Option<u32>,
}

impl ChatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temperature(mut self, temp: f64) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
    pub top_p: f64,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Success body of a completion call.
///
/// Read leniently from a [`Value`]: a field with an unexpected type is treated as absent, so
/// only a missing `choices[0].message.content` makes the response unusable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    pub model: Option<String>,
    pub created: Option<u64>,
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

impl ChatCompletionResponse {
    pub fn from_value(value: &Value) -> Self {
        Self {
            id: string_field(value, "id"),
            model: string_field(value, "model"),
            created: value.get("created").and_then(Value::as_u64),
            choices: value
                .get("choices")
                .and_then(Value::as_array)
                .map(|choices| choices.iter().map(Choice::from_value).collect())
                .unwrap_or_default(),
            usage: value
                .get("usage")
                .filter(|u| u.is_object())
                .map(Usage::from_value),
        }
    }

    /// Text of the first completion, if present and non-empty.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Choice {
    pub index: u32,
    pub message: Option<ChoiceMessage>,
    pub finish_reason: Option<String>,
}

impl Choice {
    fn from_value(value: &Value) -> Self {
        Self {
            index: value
                .get("index")
                .and_then(Value::as_u64)
                .and_then(|i| u32::try_from(i).ok())
                .unwrap_or_default(),
            message: value
                .get("message")
                .filter(|m| m.is_object())
                .map(|m| ChoiceMessage {
                    role: string_field(m, "role"),
                    content: string_field(m, "content"),
                }),
            finish_reason: string_field(value, "finish_reason"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceMessage {
    pub role: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Usage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

impl Usage {
    fn from_value(value: &Value) -> Self {
        let count = |name: &str| value.get(name).and_then(Value::as_u64).unwrap_or_default();
        Self {
            prompt_tokens: count("prompt_tokens"),
            completion_tokens: count("completion_tokens"),
            total_tokens: count("total_tokens"),
        }
    }
}

fn string_field(value: &Value, name: &str) -> Option<String> {
    value.get(name).and_then(Value::as_str).map(str::to_string)
}
