//! Prompt templates for the two extraction pipelines.

use super::theme::ThemeTab;

const JSON_ONLY_RULES: &str = "要求：
1. 只返回合法的 JSON
2. 不要使用 markdown 代码块或任何其他格式标记
3. 直接输出 JSON 字符串本身";

/// Ask for the searcher's likely social role and three themes (keyword included).
pub fn topic_prompt(keyword: &str) -> String {
    format!(
        r#"用户搜索了主题"{keyword}"。请推测该用户最可能的社会角色，并给出这个角色最可能关心的 3 个主题，其中必须包含用户搜索的主题本身。
请按如下 JSON 格式返回：
{{
  "role": "角色名称",
  "themes": ["主题1", "主题2", "主题3"]
}}

{JSON_ONLY_RULES}"#
    )
}

/// Ask for a role, related themes, a continuous dimension and named stages for `theme`.
///
/// With `finer_granularity` an extra block requests a more granular restaging; if
/// `current_tabs` are given they are embedded as pretty JSON to anchor it.
pub fn theme_content_prompt(
    theme: &str,
    finer_granularity: bool,
    current_tabs: Option<&[ThemeTab]>,
) -> String {
    let finer = if finer_granularity {
        finer_granularity_block(current_tabs)
    } else {
        String::new()
    };

    format!(
        r#"请分析主题"{theme}"，并给出：
1. 与该主题最相关的角色
2. 3 个相关主题
3. 最适合组织内容的连续维度（维度取值必须连续）

{finer}

请按如下 JSON 格式返回：
{{
  "role": "角色名称",
  "relatedThemes": ["主题1", "主题2", "主题3"],
  "dimension": "维度名称",
  "explanation": "选择该维度的理由",
  "stages": ["阶段1", "阶段2", "阶段3"]
}}

{JSON_ONLY_RULES}
4. stages 中每个阶段都要用具体的名称描述，不要使用数字编号
5. 阶段名称简洁明了，不要包含特殊符号
6. dimension 必须是连续的维度，例如难度、时间、深度"#
    )
}

fn finer_granularity_block(current_tabs: Option<&[ThemeTab]>) -> String {
    let anchor = current_tabs
        .and_then(|tabs| serde_json::to_string_pretty(tabs).ok())
        .map(|json| format!("当前的标签页如下：\n{json}\n\n请在这些标签页的基础上进一步细分阶段。\n"))
        .unwrap_or_default();

    format!(
        "用户希望以更细的颗粒度获取详细知识。
{anchor}请给出比当前更细致的阶段划分，例如：
- 当前以\"月\"划分时，细分为\"周\"
- 当前以\"阶段\"划分时，细分为具体的时间点
- 当前以\"年\"划分时，细分为\"月\"或\"季度\"
新的阶段划分必须完整覆盖原有阶段的内容范围。"
    )
}
