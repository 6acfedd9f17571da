use crate::error_code::ErrorKind;
use std::time::SystemTime;
use thiserror::Error;

/// Transport-level condition reported alongside a [`Fault::Transport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportCode {
    /// The peer could not be reached at all (DNS, refused connection, no route)
    NoRoute,
    /// The request exceeded its deadline
    DeadlineExceeded,
    /// The server answered with a non-success HTTP status
    HttpStatus,
    /// Any other transport failure (connection reset, body read failure)
    Other,
}

/// A raw, not yet classified failure.
///
/// Components raise faults internally and hand them to the
/// [`ErrorClassifier`](crate::classifier::ErrorClassifier) exactly once, at the boundary where
/// they leave the component.
#[derive(Debug, Error)]
pub enum Fault {
    #[error("transport failure ({code:?}, status {status:?}): {message}")]
    Transport {
        code: TransportCode,
        status: Option<u16>,
        message: String,
    },

    #[error("malformed JSON: {message}")]
    Parse { message: String },

    #[error("{kind}: {message}")]
    Domain {
        kind: ErrorKind,
        message: String,
        details: Option<String>,
    },

    #[error("{0}")]
    Other(String),
}

impl Fault {
    pub fn transport(code: TransportCode, message: impl Into<String>) -> Self {
        Fault::Transport {
            code,
            status: None,
            message: message.into(),
        }
    }

    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Fault::Transport {
            code: TransportCode::HttpStatus,
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn domain(kind: ErrorKind, message: impl Into<String>) -> Self {
        Fault::Domain {
            kind,
            message: message.into(),
            details: None,
        }
    }

    pub fn domain_with_details(
        kind: ErrorKind,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Fault::Domain {
            kind,
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

impl Fault {
    /// A success response that carried no usable completion text. Retried like any API fault.
    pub fn malformed_completion(details: impl Into<String>) -> Self {
        Fault::domain_with_details(ErrorKind::Api, "malformed completion response", details)
    }
}

impl From<serde_json::Error> for Fault {
    fn from(e: serde_json::Error) -> Self {
        Fault::Parse {
            message: e.to_string(),
        }
    }
}

/// Uniform, classified error handed to callers.
///
/// Only [`message`](Self::message) is meant for display; [`details`](Self::details) keeps the
/// raw diagnostic for logs. Records are built by the
/// [`ErrorClassifier`](crate::classifier::ErrorClassifier) and read-only afterwards.
///
/// ```compile_fail
/// use zhipu_adapter::{ErrorClassifier, ErrorKind};
///
/// let mut rec = ErrorClassifier::default().construct(ErrorKind::Parse, "bad output", None);
/// rec.retryable = true;
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}{}", format_details(.details))]
pub struct ErrorRecord {
    pub(crate) kind: ErrorKind,
    pub(crate) message: String,
    pub(crate) details: Option<String>,
    pub(crate) timestamp: SystemTime,
    pub(crate) retryable: bool,
}

fn format_details(details: &Option<String>) -> String {
    match details {
        Some(d) if !d.is_empty() => format!(" ({})", d),
        _ => String::new(),
    }
}

impl ErrorRecord {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Localized, user-facing text.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    pub fn retryable(&self) -> bool {
        self.retryable
    }
}
