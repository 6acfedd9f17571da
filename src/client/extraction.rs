//! 主题推断与分阶段内容生成：在重试执行之上套用提示模板与结构化解析。
//!
//! Topic inference and staged-content generation.

use crate::error::Fault;
use crate::structured::extract::truncate_for_log;
use crate::structured::{
    parse_theme_content, parse_topic_suggestion, prompts, ThemeContent, ThemeTab, TopicSuggestion,
};
use crate::types::ChatOptions;
use crate::Result;
use tracing::{debug, error};

use super::core::ChatAdapter;

/// Lower variance for outline generation.
pub const THEME_CONTENT_TEMPERATURE: f64 = 0.5;

const LOG_PREVIEW_CHARS: usize = 200;

impl ChatAdapter {
    /// Infer the searcher's role and up to three related themes for `keyword`.
    pub async fn search_topics(&self, keyword: &str) -> Result<TopicSuggestion> {
        let prompt = prompts::topic_prompt(keyword);
        let content = self.chat(&prompt, ChatOptions::default()).await?;
        let suggestion = parse_topic_suggestion(&content)
            .map_err(|f| self.reject_output("topic suggestion", &content, f))?;
        debug!(
            role = suggestion.role.as_str(),
            themes = suggestion.themes.len(),
            "parsed topic suggestion"
        );
        Ok(suggestion)
    }

    /// Generate a staged outline of `theme`.
    ///
    /// With `finer_granularity` the model is asked to restage more finely, anchored on
    /// `current_tabs` when given.
    pub async fn generate_theme_content(
        &self,
        theme: &str,
        finer_granularity: bool,
        current_tabs: Option<&[ThemeTab]>,
    ) -> Result<ThemeContent> {
        let prompt = prompts::theme_content_prompt(theme, finer_granularity, current_tabs);
        let options = ChatOptions::new().temperature(THEME_CONTENT_TEMPERATURE);
        let content = self.chat(&prompt, options).await?;
        let parsed = parse_theme_content(&content)
            .map_err(|f| self.reject_output("theme content", &content, f))?;
        debug!(
            dimension = parsed.dimension.as_str(),
            stages = parsed.tabs.len(),
            "parsed theme content"
        );
        Ok(parsed)
    }

    fn reject_output(&self, what: &str, content: &str, fault: Fault) -> crate::ErrorRecord {
        let err = self.classifier.classify(fault);
        error!(
            target_type = what,
            details = err.details.as_deref().unwrap_or(""),
            raw = truncate_for_log(content, LOG_PREVIEW_CHARS).as_str(),
            "model output rejected"
        );
        err
    }
}
