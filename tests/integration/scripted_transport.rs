//! In-process transport that replays a fixed script of outcomes.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;
use zhipu_adapter::transport::ChatTransport;
use zhipu_adapter::types::{ChatCompletionRequest, ChatCompletionResponse};
use zhipu_adapter::{
    ChatAdapter, ErrorClassifier, Fault, Locale, RetryPolicy, TransportCode,
};

pub enum Step {
    Reply(String),
    Fail(Fault),
}

impl Step {
    pub fn status(status: u16) -> Self {
        Step::Fail(Fault::http_status(status, format!("{{\"error\":{{\"code\":\"{status}\"}}}}")))
    }

    pub fn no_route() -> Self {
        Step::Fail(Fault::transport(TransportCode::NoRoute, "connection refused"))
    }

    pub fn deadline() -> Self {
        Step::Fail(Fault::transport(
            TransportCode::DeadlineExceeded,
            "operation timed out",
        ))
    }
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub at: Instant,
    pub bearer: String,
    pub request: ChatCompletionRequest,
}

#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Step>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new(steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(steps.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatTransport for ScriptedTransport {
    async fn send(
        &self,
        request: &ChatCompletionRequest,
        bearer: &str,
    ) -> Result<ChatCompletionResponse, Fault> {
        self.calls.lock().unwrap().push(RecordedCall {
            at: Instant::now(),
            bearer: bearer.to_string(),
            request: request.clone(),
        });
        let step = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("transport called more often than scripted");
        match step {
            Step::Reply(content) => Ok(completion(&content)),
            Step::Fail(fault) => Err(fault),
        }
    }
}

pub fn completion(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse::from_value(&serde_json::json!({
        "id": "resp-1",
        "model": "glm-4-flash",
        "created": 1_700_000_000u64,
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    }))
}

pub fn adapter_with(transport: Arc<ScriptedTransport>) -> ChatAdapter {
    adapter_with_key(transport, "test-id.test-secret")
}

pub fn adapter_with_key(transport: Arc<ScriptedTransport>, key: &str) -> ChatAdapter {
    ChatAdapter::builder(ErrorClassifier::new(Locale::En))
        .api_key(key)
        .retry_policy(RetryPolicy::default())
        .transport(transport)
        .build()
        .expect("adapter builds")
}
