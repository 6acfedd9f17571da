//! HS256 bearer token signing.

use super::key::ApiKeyMaterial;
use crate::error::Fault;
use crate::error_code::ErrorKind;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;
use std::fmt;

/// Validity window embedded in the `exp` claim.
pub const TOKEN_TTL_SECS: u64 = 3600;

type HmacSha256 = Hmac<Sha256>;

#[derive(Serialize)]
struct Header {
    alg: &'static str,
    sign_type: &'static str,
}

#[derive(Serialize)]
struct Claims<'a> {
    api_key: &'a str,
    exp: u64,
    timestamp: u64,
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Short-lived bearer token for a single call.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedCredential(String);

impl SignedCredential {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SignedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignedCredential(<{} chars>)", self.0.len())
    }
}

/// Sign a token for `material`, issued at `issued_at` (Unix seconds).
///
/// Pure: same inputs, same token. Malformed key material is a `Validation` fault.
pub fn sign_token(material: &ApiKeyMaterial, issued_at: u64) -> Result<SignedCredential, Fault> {
    let key = material.split()?;
    let exp = issued_at.checked_add(TOKEN_TTL_SECS).ok_or_else(|| {
        Fault::domain_with_details(
            ErrorKind::Validation,
            "token expiry out of range",
            format!("issued_at {} leaves no room for a {}s lifetime", issued_at, TOKEN_TTL_SECS),
        )
    })?;
    let header = Header {
        alg: "HS256",
        sign_type: "SIGN",
    };
    let claims = Claims {
        api_key: key.id,
        exp,
        timestamp: issued_at,
        kind: "public",
    };

    let signing_input = format!("{}.{}", encode_json(&header)?, encode_json(&claims)?);
    let signature = hmac_sha256(key.secret.as_bytes(), signing_input.as_bytes())?;
    Ok(SignedCredential(format!(
        "{}.{}",
        signing_input,
        URL_SAFE_NO_PAD.encode(signature)
    )))
}

fn encode_json<T: Serialize>(value: &T) -> Result<String, Fault> {
    Ok(URL_SAFE_NO_PAD.encode(serde_json::to_vec(value)?))
}

fn hmac_sha256(key: &[u8], message: &[u8]) -> Result<Vec<u8>, Fault> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|e| {
        Fault::domain_with_details(ErrorKind::Validation, "unusable API secret", e.to_string())
    })?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}
