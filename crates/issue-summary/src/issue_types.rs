//! Issue and comment shapes as delivered by the webhook payload and the
//! GraphQL search API, plus the canonical [`TrackedIssue`] both normalize into.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::issue_labels::{IssueLabel, LabelSet};

/// Login shown for content whose author account no longer exists.
pub const GHOST_LOGIN: &str = "ghost";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
/// Public struct `GithubUser` used across summary components.
pub struct GithubUser {
    pub login: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
/// Issue as embedded in an `issues` or `issue_comment` webhook payload.
pub struct WebhookIssue {
    #[serde(rename = "node_id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub user: Option<GithubUser>,
    #[serde(default)]
    pub labels: LabelSet,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
/// Comment as embedded in an `issue_comment` webhook payload.
pub struct WebhookComment {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub user: Option<GithubUser>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
/// GraphQL connection wrapper (`{ "nodes": [...] }`).
pub struct GraphqlNodes<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

impl<T> Default for GraphqlNodes<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
/// Comment node returned by the `SearchIssues` query.
pub struct GraphqlComment {
    #[serde(default)]
    pub author: Option<GithubUser>,
    #[serde(default)]
    pub body: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
/// Issue node returned by a GraphQL `search(type: ISSUE)` query.
///
/// Search results that are not issues arrive as empty objects and decode with
/// an empty `id`.
pub struct GraphqlIssue {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub author: Option<GithubUser>,
    #[serde(default)]
    pub labels: Option<GraphqlNodes<IssueLabel>>,
    #[serde(default)]
    pub comments: Option<GraphqlNodes<GraphqlComment>>,
}

impl GraphqlIssue {
    pub fn is_issue_node(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Public struct `IssueComment` used across summary components.
pub struct IssueComment {
    pub author_login: String,
    pub body: String,
    pub updated_at: DateTime<Utc>,
}

impl From<GraphqlComment> for IssueComment {
    fn from(comment: GraphqlComment) -> Self {
        Self {
            author_login: login_or_ghost(comment.author),
            body: comment.body,
            updated_at: comment.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Canonical issue shape consumed by matching and rendering.
///
/// `comments` is ordered oldest first.
pub struct TrackedIssue {
    pub id: String,
    pub title: String,
    pub url: String,
    pub body: String,
    pub author_login: String,
    pub labels: LabelSet,
    pub comments: Vec<IssueComment>,
}

impl TrackedIssue {
    pub fn is_summary_issue(&self) -> bool {
        self.labels.is_summary_issue()
    }
}

impl From<WebhookIssue> for TrackedIssue {
    fn from(issue: WebhookIssue) -> Self {
        Self {
            id: issue.id,
            title: issue.title,
            url: issue.html_url,
            body: issue.body.unwrap_or_default(),
            author_login: login_or_ghost(issue.user),
            labels: issue.labels,
            comments: Vec::new(),
        }
    }
}

impl From<GraphqlIssue> for TrackedIssue {
    fn from(issue: GraphqlIssue) -> Self {
        Self {
            id: issue.id,
            title: issue.title,
            url: issue.url,
            body: issue.body.unwrap_or_default(),
            author_login: login_or_ghost(issue.author),
            labels: issue
                .labels
                .map(|labels| LabelSet::new(labels.nodes))
                .unwrap_or_default(),
            comments: issue
                .comments
                .map(|comments| comments.nodes.into_iter().map(IssueComment::from).collect())
                .unwrap_or_default(),
        }
    }
}

/// Normalize GraphQL search nodes, dropping null and non-issue results.
///
/// The search connection's `nodes` list is nullable per item.
pub fn tracked_issues_from_search(nodes: Vec<Option<GraphqlIssue>>) -> Vec<TrackedIssue> {
    nodes
        .into_iter()
        .flatten()
        .filter(GraphqlIssue::is_issue_node)
        .map(TrackedIssue::from)
        .collect()
}

fn login_or_ghost(user: Option<GithubUser>) -> String {
    user.map(|user| user.login)
        .filter(|login| !login.trim().is_empty())
        .unwrap_or_else(|| GHOST_LOGIN.to_string())
}
