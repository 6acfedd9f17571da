//! 错误分类器：把任意故障映射为统一的错误记录（种类、本地化消息、是否可重试）。
//!
//! Error classification.
//!
//! [`ErrorClassifier::classify`] is the single place that interprets HTTP statuses and
//! transport conditions. The adapter never inspects a status code itself.
//!
//! | Fault                                   | Kind      | Retryable |
//! |-----------------------------------------|-----------|-----------|
//! | transport, no route                     | `Network` | yes       |
//! | transport, deadline exceeded            | `Timeout` | yes       |
//! | HTTP 401 / 403                          | `Api`     | yes       |
//! | HTTP 429                                | `Api`     | yes       |
//! | HTTP >= 500                             | `Api`     | yes       |
//! | any other HTTP status                   | `Api`     | no        |
//! | transport without status                | `Api`     | yes       |
//! | malformed JSON                          | `Parse`   | no        |
//! | domain fault                            | its kind  | by kind   |
//! | anything else                           | `Unknown` | no        |

mod messages;

pub use messages::{ApiReason, Locale};

use crate::error::{ErrorRecord, Fault, TransportCode};
use crate::error_code::ErrorKind;
use std::time::SystemTime;

/// Stateless fault-to-record mapper. Construct one at startup and hand it to the adapter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorClassifier {
    locale: Locale,
}

impl ErrorClassifier {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Build a record directly.
    ///
    /// `message` is replaced by the fixed message for `kind` (except for `Unknown`, which
    /// keeps a non-empty caller message). When `details` is absent the raw `message` is kept
    /// there instead, so the diagnostic survives for logging.
    pub fn construct(
        &self,
        kind: ErrorKind,
        message: impl Into<String>,
        details: Option<String>,
    ) -> ErrorRecord {
        let raw = message.into();
        let display = match kind {
            ErrorKind::Unknown if !raw.trim().is_empty() => raw.clone(),
            _ => messages::for_kind(self.locale, kind).to_string(),
        };
        self.record(kind, display, details.or_else(|| non_empty(raw)), kind.retryable())
    }

    /// Map any fault to its canonical record.
    pub fn classify(&self, fault: Fault) -> ErrorRecord {
        match fault {
            Fault::Transport {
                code: TransportCode::NoRoute,
                message,
                ..
            } => self.construct(ErrorKind::Network, message, None),
            Fault::Transport {
                code: TransportCode::DeadlineExceeded,
                message,
                ..
            } => self.construct(ErrorKind::Timeout, message, None),
            Fault::Transport {
                status: Some(status),
                message,
                ..
            } => self.classify_status(status, message),
            Fault::Transport {
                status: None,
                message,
                ..
            } => self.construct(ErrorKind::Api, message, None),
            Fault::Parse { message } => self.construct(ErrorKind::Parse, message, None),
            Fault::Domain {
                kind,
                message,
                details,
            } => self.construct(kind, message, details),
            Fault::Other(message) => self.construct(ErrorKind::Unknown, message, None),
        }
    }

    fn classify_status(&self, status: u16, body: String) -> ErrorRecord {
        let details = Some(format_status(status, &body));
        let reason = match status {
            401 | 403 => Some(ApiReason::Authentication),
            429 => Some(ApiReason::RateLimited),
            s if s >= 500 => Some(ApiReason::ServerUnavailable),
            _ => None,
        };
        match reason {
            Some(reason) => self.record(
                ErrorKind::Api,
                messages::for_api_reason(self.locale, reason).to_string(),
                details,
                true,
            ),
            // Client errors will fail the same way on every attempt.
            None => self.record(
                ErrorKind::Api,
                messages::for_kind(self.locale, ErrorKind::Api).to_string(),
                details,
                false,
            ),
        }
    }

    fn record(
        &self,
        kind: ErrorKind,
        message: String,
        details: Option<String>,
        retryable: bool,
    ) -> ErrorRecord {
        ErrorRecord {
            kind,
            message,
            details,
            timestamp: SystemTime::now(),
            retryable,
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

fn format_status(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> ErrorClassifier {
        ErrorClassifier::new(Locale::En)
    }

    #[test]
    fn construct_substitutes_kind_message_and_keeps_raw_as_details() {
        let rec = en().construct(ErrorKind::Validation, "key has no dot", None);
        assert_eq!(rec.kind, ErrorKind::Validation);
        assert_eq!(
            rec.message,
            "The input is not valid, please check it and retry"
        );
        assert_eq!(rec.details.as_deref(), Some("key has no dot"));
        assert!(!rec.retryable);
    }

    #[test]
    fn construct_prefers_explicit_details() {
        let rec = en().construct(
            ErrorKind::Parse,
            "bad output",
            Some("insufficient stages".into()),
        );
        assert_eq!(rec.details.as_deref(), Some("insufficient stages"));
    }

    #[test]
    fn unknown_keeps_caller_message() {
        let rec = en().construct(ErrorKind::Unknown, "widget exploded", None);
        assert_eq!(rec.message, "widget exploded");

        let rec = en().construct(ErrorKind::Unknown, "", None);
        assert_eq!(rec.message, "An unknown error occurred, please try again later");
        assert_eq!(rec.details, None);
    }

    #[test]
    fn status_less_transport_fault_is_retryable_api() {
        let rec = en().classify(Fault::transport(TransportCode::Other, "connection reset"));
        assert_eq!(rec.kind, ErrorKind::Api);
        assert!(rec.retryable);
    }

    #[test]
    fn other_fault_is_unknown() {
        let rec = en().classify(Fault::Other("boom".into()));
        assert_eq!(rec.kind, ErrorKind::Unknown);
        assert!(!rec.retryable);
    }

    #[test]
    fn default_locale_is_chinese() {
        let rec = ErrorClassifier::default().classify(Fault::http_status(429, ""));
        assert_eq!(rec.message, "API调用次数超限，请稍后重试");
        assert_eq!(rec.details.as_deref(), Some("HTTP 429"));
    }
}
