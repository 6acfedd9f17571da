//! 错误种类：六类错误及其固定的重试语义。
//!
//! Error kinds.
//!
//! Every failure leaving the adapter is tagged with exactly one [`ErrorKind`]. The kind alone
//! decides the default retry behaviour:
//!
//! | Kind         | Code               | Retryable |
//! |--------------|--------------------|-----------|
//! | `Api`        | `API_ERROR`        | yes       |
//! | `Network`    | `NETWORK_ERROR`    | yes       |
//! | `Timeout`    | `TIMEOUT_ERROR`    | yes       |
//! | `Parse`      | `PARSE_ERROR`      | no        |
//! | `Validation` | `VALIDATION_ERROR` | no        |
//! | `Unknown`    | `UNKNOWN_ERROR`    | no        |
//!
//! ## Example
//!
//! ```rust
//! use zhipu_adapter::error_code::ErrorKind;
//!
//! let kind = ErrorKind::from_code("TIMEOUT_ERROR").unwrap();
//! assert_eq!(kind, ErrorKind::Timeout);
//! assert!(kind.retryable());
//! ```

use std::fmt;

/// Classification bucket for an [`ErrorRecord`](crate::ErrorRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Upstream service rejected or failed the request
    Api,
    /// Transport unreachable
    Network,
    /// Deadline exceeded
    Timeout,
    /// Response text is not valid or structurally complete JSON
    Parse,
    /// Caller-supplied input (e.g. key material) is invalid
    Validation,
    /// Could not be classified
    Unknown,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 6] = [
        Self::Api,
        Self::Network,
        Self::Timeout,
        Self::Parse,
        Self::Validation,
        Self::Unknown,
    ];

    /// Returns the canonical code string (e.g., `"API_ERROR"`).
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Api => "API_ERROR",
            Self::Network => "NETWORK_ERROR",
            Self::Timeout => "TIMEOUT_ERROR",
            Self::Parse => "PARSE_ERROR",
            Self::Validation => "VALIDATION_ERROR",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Whether a failure of this kind is worth another attempt.
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Api | Self::Network | Self::Timeout)
    }

    /// Maps a code string back to its kind.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
