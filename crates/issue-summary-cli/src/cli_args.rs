use std::path::PathBuf;

use clap::Parser;
use issue_summary_runtime::summary_runtime_config::{
    DEFAULT_GITHUB_GRAPHQL_URL, DEFAULT_GITHUB_SERVER_URL, DEFAULT_REQUEST_TIMEOUT_MS,
};

fn parse_positive_u64(value: &str) -> Result<u64, String> {
    let parsed = value
        .parse::<u64>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

#[derive(Debug, Parser)]
#[command(
    name = "issue-summary",
    about = "Regenerate GitHub summary issues from the newest comments on issues sharing their labels",
    version
)]
/// Public struct `Cli` used by the summary binary.
pub struct Cli {
    #[arg(
        long = "summary-comment-regex",
        alias = "summaryCommentRegex",
        env = "SUMMARY_COMMENT_REGEX",
        default_value = "",
        help = "The newest comment on an issue that matches this regular expression is used in the summary. If not provided, the most recent comment is always used."
    )]
    pub summary_comment_regex: String,

    #[arg(
        long = "github-repository",
        env = "GITHUB_REPOSITORY",
        help = "Repository in owner/repo form; the owner scopes every issue search."
    )]
    pub github_repository: String,

    #[arg(
        long = "github-event-name",
        env = "GITHUB_EVENT_NAME",
        help = "Webhook event name that triggered this run (issues, issue_comment, schedule, ...)."
    )]
    pub github_event_name: String,

    #[arg(
        long = "github-event-path",
        env = "GITHUB_EVENT_PATH",
        help = "Path of the webhook event JSON payload."
    )]
    pub github_event_path: PathBuf,

    #[arg(
        long = "github-graphql-url",
        env = "GITHUB_GRAPHQL_URL",
        default_value = DEFAULT_GITHUB_GRAPHQL_URL,
        help = "GitHub GraphQL API endpoint."
    )]
    pub github_graphql_url: String,

    #[arg(
        long = "github-server-url",
        env = "GITHUB_SERVER_URL",
        default_value = DEFAULT_GITHUB_SERVER_URL,
        help = "GitHub web base URL used for search links in summary bodies."
    )]
    pub github_server_url: String,

    #[arg(
        long = "github-token",
        env = "GITHUB_TOKEN",
        default_value = "",
        hide_env_values = true,
        help = "Bearer token for the GitHub GraphQL API."
    )]
    pub github_token: String,

    #[arg(
        long = "request-timeout-ms",
        env = "SUMMARY_REQUEST_TIMEOUT_MS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_MS,
        value_parser = parse_positive_u64,
        help = "Timeout applied to each GitHub API request."
    )]
    pub request_timeout_ms: u64,
}
