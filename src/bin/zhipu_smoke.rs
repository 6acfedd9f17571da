//! zhipu-smoke: 对真实接口进行冒烟测试：主题推断 + 分阶段内容生成
//!
//! Usage:
//!   zhipu-smoke [keyword]            Run a topic search, then outline the first theme
//!   zhipu-smoke --finer [keyword]    Also request a finer restaging of that outline
//!
//! Requires `ZHIPU_API_KEY` (or a keyring entry). `RUST_LOG` controls log output.

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use zhipu_adapter::{AdapterConfig, ChatAdapter, ErrorClassifier, ErrorRecord};

const DEFAULT_KEYWORD: &str = "Vue 基础";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zhipu_adapter=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }
    let finer = args.iter().any(|a| a == "--finer");
    let keyword = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .cloned()
        .unwrap_or_else(|| DEFAULT_KEYWORD.to_string());

    let config = AdapterConfig::from_env();
    let classifier = ErrorClassifier::new(config.locale);
    let adapter = ChatAdapter::builder(classifier)
        .config(config)
        .build()
        .map_err(user_facing)
        .context("failed to build adapter")?;

    println!("== topic search: {keyword}");
    let topics = adapter.search_topics(&keyword).await.map_err(user_facing)?;
    println!("role:   {}", topics.role);
    println!("themes: {}", topics.themes.join(", "));

    let theme = topics.themes.first().cloned().unwrap_or(keyword);
    println!("\n== theme content: {theme}");
    let outline = adapter
        .generate_theme_content(&theme, false, None)
        .await
        .map_err(user_facing)?;
    print_outline(&outline);

    if finer {
        println!("\n== finer restaging: {theme}");
        let finer_outline = adapter
            .generate_theme_content(&theme, true, Some(&outline.tabs))
            .await
            .map_err(user_facing)?;
        print_outline(&finer_outline);
    }

    Ok(())
}

fn print_outline(outline: &zhipu_adapter::ThemeContent) {
    println!("dimension: {}", outline.dimension);
    for (i, tab) in outline.tabs.iter().enumerate() {
        println!("  {}. {}", i + 1, tab.title);
    }
}

fn user_facing(err: ErrorRecord) -> anyhow::Error {
    if let Some(details) = err.details() {
        tracing::debug!(kind = %err.kind(), details, "request failed");
    }
    anyhow::anyhow!("{} [{}]", err.message(), err.kind())
}

fn print_usage() {
    println!(
        r#"zhipu-smoke: live smoke test for the Zhipu chat adapter

USAGE:
    zhipu-smoke [--finer] [keyword]

ENVIRONMENT:
    ZHIPU_API_KEY               Key material of the form id.secret
    ZHIPU_BASE_URL              Override the API base URL
    ZHIPU_LOCALE                zh-CN (default) or en
    RUST_LOG                    Log filter, e.g. zhipu_adapter=debug"#
    );
}
