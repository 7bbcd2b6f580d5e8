use std::time::Duration;

use async_trait::async_trait;
use issue_summary::issue_types::{
    tracked_issues_from_search, GraphqlIssue, GraphqlNodes, TrackedIssue,
};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::graphql_transport_helpers::{render_request_dump, render_response_dump};
use crate::summary_error::{SummaryIssuesError, SummaryResult};
use crate::summary_tracker::SummaryIssueTracker;

const SUMMARY_ISSUES_QUERY: &str = r#"query SummaryIssues($query: String!) {
  search(type: ISSUE, first: 100, query: $query) {
    nodes {
      ... on Issue {
        id
        url
        title
        body
        author { login }
        labels(first: 100) { nodes { name } }
      }
    }
  }
}"#;

const SEARCH_ISSUES_QUERY: &str = r#"query SearchIssues($query: String!) {
  search(type: ISSUE, first: 100, query: $query) {
    nodes {
      ... on Issue {
        id
        url
        title
        body
        author { login }
        comments(last: 100) {
          nodes {
            author { login }
            body
            updatedAt
          }
        }
      }
    }
  }
}"#;

const UPDATE_ISSUE_MUTATION: &str = r#"mutation UpdateIssue($id: ID!, $body: String!) {
  updateIssue(input: { id: $id, body: $body }) {
    clientMutationId
  }
}"#;

#[derive(Debug, Deserialize)]
struct SearchData {
    search: GraphqlNodes<Option<GraphqlIssue>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlErrorEntry {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Default, Deserialize)]
struct GraphqlErrorEnvelope {
    #[serde(default)]
    errors: Option<Vec<GraphqlErrorEntry>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlDataEnvelope<T> {
    data: Option<T>,
}

#[derive(Clone)]
/// GraphQL client for GitHub issue search and issue-body updates.
pub struct GithubGraphqlClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl GithubGraphqlClient {
    pub fn new(endpoint: &str, token: &str, request_timeout_ms: u64) -> SummaryResult<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("issue-summary"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(request_timeout_ms.max(1)))
            .build()
            .map_err(|error| {
                SummaryIssuesError::config(format!("failed to create graphql client: {error}"))
            })?;
        Ok(Self {
            http,
            endpoint: endpoint.trim().to_string(),
            token: token.trim().to_string(),
        })
    }

    async fn search(
        &self,
        operation: &'static str,
        document: &str,
        query: &str,
    ) -> SummaryResult<Vec<TrackedIssue>> {
        let data: SearchData = self
            .request_graphql(operation, document, json!({ "query": query }))
            .await?;
        Ok(tracked_issues_from_search(data.search.nodes))
    }

    async fn request_graphql<T>(
        &self,
        operation: &'static str,
        document: &str,
        variables: Value,
    ) -> SummaryResult<T>
    where
        T: DeserializeOwned,
    {
        if self.token.is_empty() {
            return Err(SummaryIssuesError::config("empty GITHUB_TOKEN"));
        }
        let payload = json!({
            "query": document,
            "variables": variables,
        })
        .to_string();
        let request = render_request_dump(&self.endpoint, &payload);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|source| SummaryIssuesError::Transport {
                operation,
                request: request.clone(),
                source,
            })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| SummaryIssuesError::Transport {
                operation,
                request: request.clone(),
                source,
            })?;
        if !status.is_success() {
            return Err(SummaryIssuesError::Status {
                operation,
                status: status.as_u16(),
                request,
                response: render_response_dump(status.as_u16(), &body),
            });
        }

        let decode_error = |source| SummaryIssuesError::Decode {
            operation,
            response: render_response_dump(status.as_u16(), &body),
            source,
        };
        let envelope: GraphqlErrorEnvelope = serde_json::from_str(&body).map_err(decode_error)?;
        if let Some(first) = envelope.errors.unwrap_or_default().into_iter().next() {
            return Err(SummaryIssuesError::Api {
                operation,
                message: first.message,
                request,
            });
        }
        let data: GraphqlDataEnvelope<T> = serde_json::from_str(&body).map_err(decode_error)?;
        data.data.ok_or_else(|| {
            decode_error(<serde_json::Error as serde::de::Error>::custom(
                "response carried neither data nor errors",
            ))
        })
    }
}

#[async_trait]
impl SummaryIssueTracker for GithubGraphqlClient {
    async fn search_summary_issues(&self, query: &str) -> SummaryResult<Vec<TrackedIssue>> {
        self.search("search summary issues", SUMMARY_ISSUES_QUERY, query)
            .await
    }

    async fn search_source_issues(&self, query: &str) -> SummaryResult<Vec<TrackedIssue>> {
        self.search("search issues", SEARCH_ISSUES_QUERY, query)
            .await
    }

    async fn update_issue_body(&self, issue_id: &str, body: &str) -> SummaryResult<()> {
        let _: IgnoredAny = self
            .request_graphql(
                "update issue",
                UPDATE_ISSUE_MUTATION,
                json!({ "id": issue_id, "body": body }),
            )
            .await?;
        Ok(())
    }
}
