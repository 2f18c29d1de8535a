use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use crate::constants::STDIN_MARKER;
use crate::extract::{extract_parameters, extract_paths, scan_page};
use crate::http::{build_http_client, fetch_page};
use crate::output::{OutputTarget, RenderStyle, write_report};
use crate::types::{Cli, FetchResult, Findings, Modes, PageTokens};
use crate::utils::{DelayRange, apply_random_delay, apply_rate_limit, parse_delay_range};

/// Pacing and fan-out settings for page fetching
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    /// Maximum in-flight requests; 0 means one slot per URL.
    pub concurrency: usize,
    pub rate_limit: Option<u64>,
    pub random_delay: Option<DelayRange>,
}

impl FetchOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            concurrency: cli.concurrency,
            rate_limit: cli.rate_limit,
            random_delay: parse_delay_range(&cli.random_delay),
        }
    }
}

/// Keep trimmed, non-blank lines
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read the URL list from a file, or from stdin when `source` is "-"
pub fn read_urls(source: &str) -> Result<Vec<String>> {
    if source == STDIN_MARKER {
        let text = io::read_to_string(io::stdin()).context("failed to read URLs from stdin")?;
        return Ok(parse_url_list(&text));
    }
    let text = std::fs::read_to_string(source)
        .with_context(|| format!("failed to read URL list from {}", source))?;
    Ok(parse_url_list(&text))
}

/// Fetch every URL and merge the input names and script variables of the pages
/// that answered 200. Each fetch yields its own tokens; merging happens here only.
pub async fn collect_page_tokens(
    client: &Client,
    urls: &[String],
    options: &FetchOptions,
) -> PageTokens {
    let limit = if options.concurrency == 0 {
        urls.len().max(1)
    } else {
        options.concurrency
    };
    let last_request_time = Arc::new(Mutex::new(Instant::now()));

    stream::iter(urls)
        .map(|url| {
            let last_request_time = last_request_time.clone();
            async move {
                apply_random_delay(options.random_delay).await;
                apply_rate_limit(options.rate_limit, &last_request_time).await;
                match fetch_page(client, url).await {
                    FetchResult::Body(body) => scan_page(&body),
                    FetchResult::Unavailable => PageTokens::default(),
                }
            }
        })
        .buffer_unordered(limit)
        .fold(PageTokens::default(), |mut merged, page| async move {
            merged.merge(page);
            merged
        })
        .await
}

/// Run every extractor the modes ask for
pub async fn discover(
    urls: &[String],
    modes: Modes,
    client: &Client,
    options: &FetchOptions,
) -> Findings {
    let mut findings = Findings::default();

    if modes.parameters {
        findings.parameters = extract_parameters(urls);
        let pages = collect_page_tokens(client, urls, options).await;
        tracing::debug!(
            parameters = findings.parameters.len(),
            inputs = pages.inputs.len(),
            js_variables = pages.js_variables.len(),
            "parameter discovery finished"
        );
        findings.inputs = pages.inputs;
        findings.js_variables = pages.js_variables;
    }

    if modes.directories {
        findings.directories = extract_paths(urls);
        tracing::debug!(
            directories = findings.directories.len(),
            "directory discovery finished"
        );
    }

    findings
}

/// Read the URL list, discover tokens and write the report
pub async fn run(cli: &Cli, modes: Modes) -> Result<()> {
    let urls = read_urls(&cli.urls)?;
    tracing::debug!(count = urls.len(), source = %cli.urls, "loaded URLs");

    let client = build_http_client(cli)?;
    let options = FetchOptions::from_cli(cli);
    let findings = discover(&urls, modes, &client, &options).await;

    let target = OutputTarget::from_cli(cli);
    let style = RenderStyle {
        format: cli.format,
        info: cli.info,
        colored: target == OutputTarget::Stdout
            && !cli.no_color
            && io::stdout().is_terminal(),
    };
    write_report(&findings, modes, &target, &style).await
}
