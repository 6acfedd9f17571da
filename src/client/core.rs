use crate::auth::{ApiKeyMaterial, TokenClock};
use crate::classifier::ErrorClassifier;
use crate::client::policy::Decision;
use crate::client::types::CallStats;
use crate::config::AdapterConfig;
use crate::transport::ChatTransport;
use crate::types::ChatOptions;
use crate::Result;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Chat-completion adapter: signs, sends, retries and classifies.
///
/// Holds only immutable configuration; every call builds its own credential and request.
pub struct ChatAdapter {
    pub(crate) config: AdapterConfig,
    pub(crate) api_key: ApiKeyMaterial,
    pub(crate) classifier: ErrorClassifier,
    pub(crate) transport: Arc<dyn ChatTransport>,
    pub(crate) clock: Arc<dyn TokenClock>,
}

impl std::fmt::Debug for ChatAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatAdapter")
            .field("config", &self.config)
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}

impl ChatAdapter {
    /// Builder seeded with `classifier`.
    pub fn builder(classifier: ErrorClassifier) -> crate::client::builder::ChatAdapterBuilder {
        crate::client::builder::ChatAdapterBuilder::new(classifier)
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn classifier(&self) -> &ErrorClassifier {
        &self.classifier
    }

    /// Send `prompt` as a single user message and return the unfenced response text.
    pub async fn chat(&self, prompt: &str, options: ChatOptions) -> Result<String> {
        self.chat_with_stats(prompt, options)
            .await
            .map(|(content, _)| content)
    }

    /// Like [`chat`](Self::chat), also returning per-call statistics.
    ///
    /// Retryable failures are retried with a fresh credential until the retry policy gives
    /// up; the last classified error is returned.
    pub async fn chat_with_stats(
        &self,
        prompt: &str,
        options: ChatOptions,
    ) -> Result<(String, CallStats)> {
        let policy = self.config.retry;
        let start = Instant::now();
        let mut failed: u32 = 0;

        loop {
            match self.execute_once(prompt, &options).await {
                Ok(outcome) => {
                    let stats = CallStats {
                        model: self.config.model.clone(),
                        attempts: failed + 1,
                        duration_ms: start.elapsed().as_millis(),
                        request_id: outcome.request_id,
                        upstream_id: outcome.upstream_id,
                        finish_reason: outcome.finish_reason,
                        usage: outcome.usage,
                    };
                    debug!(
                        attempts = stats.attempts,
                        duration_ms = stats.duration_ms,
                        "chat completion succeeded"
                    );
                    return Ok((outcome.content, stats));
                }
                Err(fault) => {
                    failed += 1;
                    let err = self.classifier.classify(fault);
                    match policy.decide(&err, failed) {
                        Decision::Retry { delay } => {
                            warn!(
                                attempt = failed,
                                max_attempts = policy.max_attempts,
                                kind = %err.kind,
                                details = err.details.as_deref().unwrap_or(""),
                                delay_ms = delay.as_millis() as u64,
                                "chat completion attempt failed, retrying"
                            );
                            tokio::time::sleep(delay).await;
                        }
                        Decision::Fail => {
                            warn!(
                                attempt = failed,
                                max_attempts = policy.max_attempts,
                                kind = %err.kind,
                                retryable = err.retryable,
                                details = err.details.as_deref().unwrap_or(""),
                                "chat completion failed"
                            );
                            return Err(err);
                        }
                    }
                }
            }
        }
    }
}
