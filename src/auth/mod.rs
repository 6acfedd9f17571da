//! 凭证签名：每次请求前由 `id.secret` 密钥本地生成短期 HS256 令牌。
//!
//! Per-request credential signing. No network round trip and no token cache: every call
//! mints a fresh token from the configured key material.

mod key;
mod token;

pub use key::{ApiKey, ApiKeyMaterial, API_KEY_ENV};
pub use token::{sign_token, SignedCredential, TOKEN_TTL_SECS};

use crate::error::Fault;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the `issued_at` second for each signed token.
pub trait TokenClock: Send + Sync {
    fn now_unix_secs(&self) -> Result<u64, Fault>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TokenClock for SystemClock {
    fn now_unix_secs(&self) -> Result<u64, Fault> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .map_err(|e| Fault::Other(format!("system clock before Unix epoch: {}", e)))
    }
}

/// Validate `material` and sign a token issued at `clock`'s current second.
pub fn generate_token(
    material: &ApiKeyMaterial,
    clock: &dyn TokenClock,
) -> Result<SignedCredential, Fault> {
    sign_token(material, clock.now_unix_secs()?)
}
