use crate::auth::{ApiKeyMaterial, SystemClock, TokenClock};
use crate::classifier::ErrorClassifier;
use crate::client::core::ChatAdapter;
use crate::client::policy::RetryPolicy;
use crate::config::AdapterConfig;
use crate::error_code::ErrorKind;
use crate::transport::{ChatTransport, HttpTransport};
use crate::Result;
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`ChatAdapter`].
///
/// The classifier is required up front so the adapter never reaches for a global one.
pub struct ChatAdapterBuilder {
    classifier: ErrorClassifier,
    config: AdapterConfig,
    transport: Option<Arc<dyn ChatTransport>>,
    clock: Arc<dyn TokenClock>,
}

impl ChatAdapterBuilder {
    pub fn new(classifier: ErrorClassifier) -> Self {
        Self {
            classifier,
            config: AdapterConfig::default(),
            transport: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the whole configuration (e.g. with [`AdapterConfig::from_env`]).
    pub fn config(mut self, config: AdapterConfig) -> Self {
        self.config = config;
        self
    }

    /// Raw `id.secret` key material. Checked on every signing, not here.
    pub fn api_key(mut self, raw: impl Into<String>) -> Self {
        self.config.api_key = Some(ApiKeyMaterial::new(raw));
        self
    }

    /// Override the base URL (primarily for tests against a mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.config.retry = policy;
        self
    }

    /// Use a custom transport instead of the reqwest-backed default.
    pub fn transport(mut self, transport: Arc<dyn ChatTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Time source for token `timestamp`/`exp` claims. Defaults to [`SystemClock`].
    pub fn clock(mut self, clock: Arc<dyn TokenClock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the adapter. Fails with `Validation` when no key material is configured.
    pub fn build(self) -> Result<ChatAdapter> {
        let classifier = self.classifier;
        let api_key = self.config.api_key.clone().ok_or_else(|| {
            classifier.construct(
                ErrorKind::Validation,
                "no API key configured",
                Some(format!(
                    "set {} or pass the key to the builder",
                    crate::auth::API_KEY_ENV
                )),
            )
        })?;

        let transport = match self.transport {
            Some(t) => t,
            None => Arc::new(
                HttpTransport::new(&self.config).map_err(|f| classifier.classify(f))?,
            ),
        };

        Ok(ChatAdapter {
            config: self.config,
            api_key,
            classifier,
            transport,
            clock: self.clock,
        })
    }
}
