//! Mock HTTP server setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use std::time::Duration;
use zhipu_adapter::config::CHAT_COMPLETIONS_PATH;
use zhipu_adapter::{ChatAdapter, ErrorClassifier, Locale, RetryPolicy};

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Adapter pointed at the mock server, with millisecond backoff so retries stay fast.
    pub fn adapter(&self, max_attempts: u32) -> ChatAdapter {
        ChatAdapter::builder(ErrorClassifier::new(Locale::En))
            .api_key("mock-id.mock-secret")
            .base_url(&self.base_url)
            .retry_policy(fast_policy(max_attempts))
            .build()
            .expect("adapter builds")
    }

    /// Create a mock for a successful completion carrying `content`
    pub async fn mock_completion(&mut self, content: &str) -> Mock {
        let body = serde_json::json!({
            "id": "8311",
            "model": "glm-4-flash",
            "created": 1_700_000_000u64,
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 12, "completion_tokens": 7, "total_tokens": 19}
        });
        self.server
            .mock("POST", CHAT_COMPLETIONS_PATH)
            .match_header(
                "authorization",
                Matcher::Regex(r"^Bearer [A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$".into()),
            )
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(1)
            .create_async()
            .await
    }

    /// Create a mock answering `hits` times with `status` and a raw body
    pub async fn mock_status(&mut self, status: usize, body: &str, hits: usize) -> Mock {
        self.server
            .mock("POST", CHAT_COMPLETIONS_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(hits)
            .create_async()
            .await
    }
}

pub fn fast_policy(max_attempts: u32) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        base_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(5),
    }
}
