use crate::error::Fault;
use crate::error_code::ErrorKind;
use keyring::Entry;
use std::env;
use std::fmt;

pub(crate) const KEYRING_SERVICE: &str = "zhipu-adapter";
pub(crate) const KEYRING_USER: &str = "default";
pub const API_KEY_ENV: &str = "ZHIPU_API_KEY";

/// Raw `id.secret` key material as configured. Validated lazily, on every signing.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKeyMaterial(String);

impl ApiKeyMaterial {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Look the key up in the OS keyring first, then in `ZHIPU_API_KEY`.
    pub fn resolve() -> Option<Self> {
        if let Ok(entry) = Entry::new(KEYRING_SERVICE, KEYRING_USER) {
            if let Ok(key) = entry.get_password() {
                return Some(Self(key));
            }
        }
        env::var(API_KEY_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(Self)
    }

    /// Split into `(id, secret)`. Exactly two non-empty parts are required.
    pub fn split(&self) -> Result<ApiKey<'_>, Fault> {
        let mut parts = self.0.split('.');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(id), Some(secret), None) if !id.is_empty() && !secret.is_empty() => {
                Ok(ApiKey { id, secret })
            }
            _ => Err(Fault::domain_with_details(
                ErrorKind::Validation,
                "malformed API key",
                "expected key material of the form `id.secret`",
            )),
        }
    }
}

impl fmt::Debug for ApiKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKeyMaterial")
            .field(&format_args!("<{} chars redacted>", self.0.len()))
            .finish()
    }
}

/// Borrowed view of validated key material.
#[derive(Clone, Copy)]
pub struct ApiKey<'a> {
    pub id: &'a str,
    pub(crate) secret: &'a str,
}

impl fmt::Debug for ApiKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("id", &self.id)
            .field("secret", &"<redacted>")
            .finish()
    }
}
