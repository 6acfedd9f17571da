//! Normalization of loosely formatted model text.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_JSON_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^```json\s*").unwrap());
static LEADING_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^```\s*").unwrap());
static TRAILING_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*```$").unwrap());
static LEADING_BRACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\{\s*").unwrap());
static TRAILING_BRACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\}\s*$").unwrap());

/// Strip an enclosing code fence (optionally tagged `json`) and surrounding whitespace.
///
/// ```
/// use zhipu_adapter::structured::extract_content;
///
/// assert_eq!(extract_content("```json\n{\"a\":1}\n```"), "{\"a\":1}");
/// assert_eq!(extract_content("  plain text \n"), "plain text");
/// ```
pub fn extract_content(content: &str) -> String {
    let s = LEADING_JSON_FENCE.replace(content, "");
    let s = LEADING_FENCE.replace(&s, "");
    let s = TRAILING_FENCE.replace(&s, "");
    s.trim().to_string()
}

/// [`extract_content`] plus collapsing whitespace just inside the outer braces.
pub fn clean_json_string(content: &str) -> String {
    let s = extract_content(content);
    let s = LEADING_BRACE.replace(&s, "{");
    let s = TRAILING_BRACE.replace(&s, "}");
    s.trim().to_string()
}

/// Shorten `s` to at most `max` characters for log fields.
pub(crate) fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", &s[..idx]),
        None => s.to_string(),
    }
}
