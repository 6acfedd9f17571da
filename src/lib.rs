//! # zhipu-adapter
//!
//! 智谱 GLM 聊天补全接口的客户端适配器：本地签名令牌、带退避的重试执行、从模型文本中提取结构化结果。
//!
//! Client-side adapter that turns the Zhipu GLM chat-completion API into three higher-level
//! operations: signed-token generation, resilient prompt execution with retry, and structured
//! extraction of typed results from free-form model text.
//!
//! ## Overview
//!
//! - **Per-call credentials**: every attempt signs a fresh HS256 token from `id.secret` key
//!   material; nothing is cached.
//! - **Retry with backoff**: up to 3 attempts, `min(1000 * 2^n, 5000)` ms apart, only for
//!   retryable failures.
//! - **Single classification point**: every failure becomes one [`ErrorRecord`] via the
//!   [`ErrorClassifier`], which alone interprets HTTP statuses.
//! - **Lenient extraction**: code fences and padding are stripped before shape-checked parsing.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use zhipu_adapter::{AdapterConfig, ChatAdapter, ErrorClassifier};
//!
//! #[tokio::main]
//! async fn main() -> zhipu_adapter::Result<()> {
//!     let config = AdapterConfig::from_env();
//!     let classifier = ErrorClassifier::new(config.locale);
//!     let adapter = ChatAdapter::builder(classifier).config(config).build()?;
//!
//!     let topics = adapter.search_topics("Rust 异步编程").await?;
//!     let outline = adapter
//!         .generate_theme_content(&topics.themes[0], false, None)
//!         .await?;
//!     println!("{} -> {:?}", outline.dimension, outline.tabs);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`auth`] | Key material and HS256 token signing |
//! | [`classifier`] | Fault to [`ErrorRecord`] mapping, localized messages |
//! | [`client`] | [`ChatAdapter`], its builder and retry policy |
//! | [`config`] | Endpoint, model, timeout and env overrides |
//! | [`structured`] | Fence stripping, prompts and shape-checked parsing |
//! | [`transport`] | Single-request transport seam and reqwest implementation |
//! | [`types`] | Wire types |

pub mod auth;
pub mod classifier;
pub mod client;
pub mod config;
pub mod error_code;
pub mod structured;
pub mod transport;
pub mod types;

pub mod error;

pub use classifier::{ErrorClassifier, Locale};
pub use client::{
    CallStats, ChatAdapter, ChatAdapterBuilder, RetryPolicy, THEME_CONTENT_TEMPERATURE,
};
pub use config::AdapterConfig;
pub use error::{ErrorRecord, Fault, TransportCode};
pub use error_code::ErrorKind;
pub use structured::{ThemeContent, ThemeTab, TopicSuggestion};
pub use types::ChatOptions;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, ErrorRecord>;
