//! Fixed, user-facing messages per error kind and locale.

use crate::error_code::ErrorKind;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    ZhCn,
    En,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "zh" | "zh-cn" | "zh-hans" => Ok(Locale::ZhCn),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(format!("Unknown locale: {}", other)),
        }
    }
}

/// Finer reasons an upstream API failure can carry. Each gets its own message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiReason {
    Authentication,
    RateLimited,
    ServerUnavailable,
}

pub(crate) fn for_kind(locale: Locale, kind: ErrorKind) -> &'static str {
    match locale {
        Locale::ZhCn => match kind {
            ErrorKind::Api => "服务暂时不可用，请稍后重试",
            ErrorKind::Network => "网络连接不稳定，请检查网络后重试",
            ErrorKind::Timeout => "请求超时，请稍后重试",
            ErrorKind::Parse => "内容解析失败，请重试",
            ErrorKind::Validation => "输入格式不正确，请检查后重试",
            ErrorKind::Unknown => "发生未知错误，请稍后重试",
        },
        Locale::En => match kind {
            ErrorKind::Api => "The service is temporarily unavailable, please try again later",
            ErrorKind::Network => "The network connection is unstable, please check it and retry",
            ErrorKind::Timeout => "The request timed out, please try again later",
            ErrorKind::Parse => "Failed to read the response, please try again",
            ErrorKind::Validation => "The input is not valid, please check it and retry",
            ErrorKind::Unknown => "An unknown error occurred, please try again later",
        },
    }
}

pub(crate) fn for_api_reason(locale: Locale, reason: ApiReason) -> &'static str {
    match (locale, reason) {
        (Locale::ZhCn, ApiReason::Authentication) => "API认证失败，请检查密钥设置",
        (Locale::ZhCn, ApiReason::RateLimited) => "API调用次数超限，请稍后重试",
        (Locale::ZhCn, ApiReason::ServerUnavailable) => "服务器暂时不可用，请稍后重试",
        (Locale::En, ApiReason::Authentication) => {
            "API authentication failed, please check your key settings"
        }
        (Locale::En, ApiReason::RateLimited) => {
            "API rate limit exceeded, please try again later"
        }
        (Locale::En, ApiReason::ServerUnavailable) => {
            "The server is temporarily unavailable, please try again later"
        }
    }
}
