//! 结构化输出：从模型的松散文本中恢复 JSON，并校验为主题建议或分阶段内容。
//!
//! Structured extraction from free-form model text.
//!
//! The pipeline is: strip code fences and whitespace ([`extract_content`]), collapse
//! brace-adjacent whitespace ([`clean_json_string`]), parse, then apply shape checks. Shape
//! failures are `Parse` faults whose details name the rejected field.
//!
//! # Examples
//!
//! ```
//! use zhipu_adapter::structured::parse_theme_content;
//!
//! let content = parse_theme_content(
//!     r#"```json
//! {"dimension": "time", "stages": ["Week 1", "  ", "Week 2"]}
//! ```"#,
//! )
//! .unwrap();
//! assert_eq!(content.tabs.len(), 2);
//! ```

pub mod extract;
pub mod prompts;
pub mod theme;
pub mod topics;

pub use extract::{clean_json_string, extract_content};
pub use theme::{parse_theme_content, StageRejection, ThemeContent, ThemeTab};
pub use topics::{parse_topic_suggestion, TopicSuggestion};
