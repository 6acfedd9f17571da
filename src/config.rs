//! 配置：端点、模型、超时、重试策略与本地化设置，可由环境变量覆盖。
//!
//! Adapter configuration.
//!
//! Defaults match the production endpoint. Every knob can be overridden from the
//! environment with [`AdapterConfig::from_env`]:
//!
//! | Variable                  | Field          |
//! |---------------------------|----------------|
//! | `ZHIPU_API_KEY`           | `api_key`      |
//! | `ZHIPU_BASE_URL`          | `base_url`     |
//! | `ZHIPU_MODEL`             | `model`        |
//! | `ZHIPU_HTTP_TIMEOUT_SECS` | `timeout`      |
//! | `ZHIPU_PROXY_URL`         | `proxy_url`    |
//! | `ZHIPU_LOCALE`            | `locale`       |

use crate::auth::ApiKeyMaterial;
use crate::classifier::Locale;
use crate::client::RetryPolicy;
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://open.bigmodel.cn";
pub const CHAT_COMPLETIONS_PATH: &str = "/api/paas/v4/chat/completions";
pub const DEFAULT_MODEL: &str = "glm-4-flash";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TOP_P: f64 = 0.7;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct AdapterConfig {
    pub api_key: Option<ApiKeyMaterial>,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub top_p: f64,
    pub timeout: Duration,
    pub proxy_url: Option<String>,
    pub retry: RetryPolicy,
    pub locale: Locale,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            timeout: DEFAULT_TIMEOUT,
            proxy_url: None,
            retry: RetryPolicy::default(),
            locale: Locale::default(),
        }
    }
}

impl AdapterConfig {
    /// Defaults overridden by any `ZHIPU_*` variables that are set and parse.
    ///
    /// The key is looked up in the OS keyring before `ZHIPU_API_KEY`.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        cfg.api_key = ApiKeyMaterial::resolve();

        if let Some(url) = env_non_empty("ZHIPU_BASE_URL") {
            cfg.base_url = url;
        }
        if let Some(model) = env_non_empty("ZHIPU_MODEL") {
            cfg.model = model;
        }
        if let Some(secs) = env_non_empty("ZHIPU_HTTP_TIMEOUT_SECS").and_then(|s| s.parse::<u64>().ok())
        {
            cfg.timeout = Duration::from_secs(secs.max(1));
        }
        cfg.proxy_url = env_non_empty("ZHIPU_PROXY_URL");
        if let Some(locale) = env_non_empty("ZHIPU_LOCALE").and_then(|s| s.parse().ok()) {
            cfg.locale = locale;
        }
        cfg
    }

    /// Full chat-completion URL.
    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        )
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
