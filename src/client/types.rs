use crate::types::Usage;

/// Per-call statistics for observability.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallStats {
    pub model: String,
    /// Attempts made, including the successful one
    pub attempts: u32,
    pub duration_ms: u128,
    /// `request_id` sent with the last attempt
    pub request_id: String,
    /// Upstream response id, when reported
    pub upstream_id: Option<String>,
    pub finish_reason: Option<String>,
    pub usage: Option<Usage>,
}
