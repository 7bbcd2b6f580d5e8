use issue_summary::issue_comment_selector::CommentSelector;

use crate::summary_error::{SummaryIssuesError, SummaryResult};

pub const DEFAULT_GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const DEFAULT_GITHUB_SERVER_URL: &str = "https://github.com";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Public struct `RepoRef` used across summary components.
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn parse(raw: &str) -> SummaryResult<Self> {
        let invalid = || {
            SummaryIssuesError::config(format!(
                "invalid value for GITHUB_REPOSITORY: {raw:?}, expected owner/repo"
            ))
        };
        let trimmed = raw.trim();
        let (owner, name) = trimmed.split_once('/').ok_or_else(invalid)?;
        let owner = owner.trim();
        let name = name.trim();
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn as_slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone)]
/// Settings for one summary run, resolved before any API call.
pub struct SummaryIssuesRuntimeConfig {
    pub repo: RepoRef,
    pub graphql_url: String,
    pub server_url: String,
    pub token: String,
    pub request_timeout_ms: u64,
    pub selector: CommentSelector,
}

impl SummaryIssuesRuntimeConfig {
    pub fn new(
        repo_slug: &str,
        graphql_url: &str,
        server_url: &str,
        token: &str,
        comment_pattern: &str,
        request_timeout_ms: u64,
    ) -> SummaryResult<Self> {
        let repo = RepoRef::parse(repo_slug)?;
        let selector = CommentSelector::new(comment_pattern).map_err(|error| {
            SummaryIssuesError::config(format!(
                "invalid summary comment regex {comment_pattern:?}: {error}"
            ))
        })?;
        let graphql_url = validate_http_url("graphql url", graphql_url)?;
        let server_url = validate_http_url("server url", server_url)?;
        if request_timeout_ms == 0 {
            return Err(SummaryIssuesError::config(
                "request timeout must be greater than 0",
            ));
        }
        Ok(Self {
            repo,
            graphql_url,
            server_url: server_url.trim_end_matches('/').to_string(),
            token: token.trim().to_string(),
            request_timeout_ms,
            selector,
        })
    }

    pub fn owner(&self) -> &str {
        &self.repo.owner
    }
}

fn validate_http_url(field: &str, raw: &str) -> SummaryResult<String> {
    let trimmed = raw.trim();
    let parsed = reqwest::Url::parse(trimmed).map_err(|error| {
        SummaryIssuesError::config(format!("invalid {field} {raw:?}: {error}"))
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SummaryIssuesError::config(format!(
            "invalid {field} {raw:?}: expected http or https"
        )));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{
        RepoRef, SummaryIssuesRuntimeConfig, DEFAULT_GITHUB_GRAPHQL_URL,
        DEFAULT_GITHUB_SERVER_URL,
    };

    #[test]
    fn unit_repo_ref_parse_accepts_owner_repo_shape() {
        let repo = RepoRef::parse("octo/widgets").expect("parse repo");
        assert_eq!(repo.owner, "octo");
        assert_eq!(repo.name, "widgets");
        assert_eq!(repo.as_slug(), "octo/widgets");
    }

    #[test]
    fn unit_repo_ref_parse_rejects_missing_owner() {
        for raw in ["", "widgets", "/widgets", "octo/", "octo/a/b"] {
            let error = RepoRef::parse(raw).expect_err("invalid repo should fail");
            assert!(error.is_config());
            assert!(error.to_string().contains("expected owner/repo"));
        }
    }

    #[test]
    fn functional_config_compiles_pattern_and_normalizes_urls() {
        let config = SummaryIssuesRuntimeConfig::new(
            "octo/widgets",
            DEFAULT_GITHUB_GRAPHQL_URL,
            "https://github.example.com/",
            " token ",
            "^Status:",
            1_000,
        )
        .expect("config");
        assert_eq!(config.owner(), "octo");
        assert_eq!(config.server_url, "https://github.example.com");
        assert_eq!(config.token, "token");
        assert_eq!(config.selector.pattern(), "^Status:");
    }

    #[test]
    fn regression_config_rejects_malformed_pattern_and_urls_up_front() {
        let bad_pattern = SummaryIssuesRuntimeConfig::new(
            "octo/widgets",
            DEFAULT_GITHUB_GRAPHQL_URL,
            DEFAULT_GITHUB_SERVER_URL,
            "token",
            "(unclosed",
            1_000,
        )
        .expect_err("pattern should fail");
        assert!(bad_pattern.to_string().contains("invalid summary comment regex"));

        let bad_url = SummaryIssuesRuntimeConfig::new(
            "octo/widgets",
            "ftp://example.com",
            DEFAULT_GITHUB_SERVER_URL,
            "token",
            "",
            1_000,
        )
        .expect_err("url should fail");
        assert!(bad_url.is_config());
    }
}
