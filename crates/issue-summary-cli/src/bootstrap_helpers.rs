use std::path::Path;

use anyhow::{bail, Context, Result};
use issue_summary::issue_event::GithubEvent;
use issue_summary_runtime::SummaryIssuesRuntimeConfig;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli_args::Cli;

pub(crate) fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

pub(crate) fn load_github_event(name: &str, path: &Path) -> Result<GithubEvent> {
    if name.trim().is_empty() {
        bail!("GITHUB_EVENT_NAME is not set");
    }
    if path.as_os_str().is_empty() {
        bail!("GITHUB_EVENT_PATH is not set");
    }
    let payload = std::fs::read_to_string(path)
        .with_context(|| format!("unable to read GitHub event json {}", path.display()))?;
    GithubEvent::from_payload(name, &payload)
        .with_context(|| format!("unable to decode GitHub event from {}", path.display()))
}

pub(crate) fn build_runtime_config(cli: &Cli) -> Result<SummaryIssuesRuntimeConfig> {
    let config = SummaryIssuesRuntimeConfig::new(
        &cli.github_repository,
        &cli.github_graphql_url,
        &cli.github_server_url,
        &cli.github_token,
        &cli.summary_comment_regex,
        cli.request_timeout_ms,
    )?;
    Ok(config)
}
