use super::ChatTransport;
use crate::config::AdapterConfig;
use crate::error::{Fault, TransportCode};
use crate::error_code::ErrorKind;
use crate::structured::extract::truncate_for_log;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use reqwest::Proxy;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const BODY_PREVIEW_CHARS: usize = 200;

/// reqwest-backed transport posting to a single chat-completion URL.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &AdapterConfig) -> Result<Self, Fault> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Fault::domain_with_details(
                    ErrorKind::Validation,
                    "invalid proxy URL",
                    e.to_string(),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Fault::transport(TransportCode::Other, e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
        })
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(
        &self,
        request: &ChatCompletionRequest,
        bearer: &str,
    ) -> Result<ChatCompletionResponse, Fault> {
        debug!(
            endpoint = self.endpoint.as_str(),
            request_id = request.request_id.as_str(),
            "posting chat completion"
        );

        let resp = self
            .client
            .post(&self.endpoint)
            .bearer_auth(bearer)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = resp.status();
        let body = resp.text().await.map_err(map_reqwest_error)?;
        if !status.is_success() {
            return Err(Fault::http_status(status.as_u16(), body));
        }

        let value: Value = serde_json::from_str(&body).map_err(|e| {
            Fault::malformed_completion(format!(
                "success body is not JSON ({}): {}",
                e,
                truncate_for_log(&body, BODY_PREVIEW_CHARS)
            ))
        })?;
        Ok(ChatCompletionResponse::from_value(&value))
    }
}

/// Map a reqwest failure onto the transport conditions the classifier understands.
pub(crate) fn map_reqwest_error(e: reqwest::Error) -> Fault {
    let code = if e.is_timeout() {
        TransportCode::DeadlineExceeded
    } else if e.is_connect() {
        TransportCode::NoRoute
    } else {
        TransportCode::Other
    };
    match e.status() {
        Some(status) => Fault::Transport {
            code,
            status: Some(status.as_u16()),
            message: e.to_string(),
        },
        None => Fault::transport(code, e.to_string()),
    }
}
