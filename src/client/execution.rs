//! 请求执行逻辑：单次尝试（签名、发送、取出回复文本）。
//!
//! Single-attempt execution. Retrying lives in [`ChatAdapter::chat_with_stats`].

use crate::auth::generate_token;
use crate::error::Fault;
use crate::structured::extract_content;
use crate::types::{ChatCompletionRequest, ChatOptions, Message, Usage};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

use super::core::ChatAdapter;

pub(crate) struct AttemptOutcome {
    pub content: String,
    pub request_id: String,
    pub upstream_id: Option<String>,
    pub finish_reason: Option<String>,
    pub usage: Option<Usage>,
}

impl ChatAdapter {
    pub(crate) fn build_request(&self, prompt: &str, options: &ChatOptions) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![Message::user(prompt)],
            temperature: options.temperature.unwrap_or(self.config.temperature),
            top_p: self.config.top_p,
            request_id: format!("web_{}", epoch_millis()),
            max_tokens: options.max_tokens,
        }
    }

    pub(crate) async fn execute_once(
        &self,
        prompt: &str,
        options: &ChatOptions,
    ) -> Result<AttemptOutcome, Fault> {
        let token = generate_token(&self.api_key, self.clock.as_ref())?;
        let request = self.build_request(prompt, options);

        let response = self.transport.send(&request, token.as_str()).await?;

        let content = response
            .first_content()
            .ok_or_else(|| Fault::malformed_completion("response contained no completion text"))?;

        if let Some(usage) = &response.usage {
            debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "token usage"
            );
        }

        let first = response.choices.first();
        Ok(AttemptOutcome {
            content: extract_content(content),
            request_id: request.request_id,
            upstream_id: response.id.clone(),
            finish_reason: first.and_then(|c| c.finish_reason.clone()),
            usage: response.usage,
        })
    }
}

fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}
