use serde::Deserialize;

use crate::issue_labels::IssueLabel;
use crate::issue_types::{WebhookComment, WebhookIssue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Enumerates supported `GithubEventKind` values.
pub enum GithubEventKind {
    Issues,
    IssueComment,
    Schedule,
    Other,
}

impl GithubEventKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "issues" => Self::Issues,
            "issue_comment" => Self::IssueComment,
            "schedule" => Self::Schedule,
            _ => Self::Other,
        }
    }
}

/// Decoded webhook event. Fields the summary pass never reads are ignored and
/// absent ones default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GithubEvent {
    #[serde(skip)]
    pub name: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub issue: Option<WebhookIssue>,
    #[serde(default)]
    pub label: Option<IssueLabel>,
    #[serde(default)]
    pub comment: Option<WebhookComment>,
}

impl GithubEvent {
    pub fn from_payload(name: &str, payload: &str) -> Result<Self, serde_json::Error> {
        let mut event: GithubEvent = serde_json::from_str(payload)?;
        event.name = name.trim().to_string();
        Ok(event)
    }

    pub fn kind(&self) -> GithubEventKind {
        GithubEventKind::from_name(&self.name)
    }
}
