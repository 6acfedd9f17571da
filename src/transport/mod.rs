//! 传输层：单次聊天补全请求的发送接口与基于 reqwest 的默认实现。
//!
//! Transport seam.
//!
//! A transport performs exactly one request and reports failures as raw [`Fault`]s; it never
//! retries and never classifies. Retrying and classification belong to the adapter.

mod http;

pub use http::HttpTransport;

use crate::error::Fault;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;

#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send one request authorized by `bearer`.
    async fn send(
        &self,
        request: &ChatCompletionRequest,
        bearer: &str,
    ) -> Result<ChatCompletionResponse, Fault>;
}
