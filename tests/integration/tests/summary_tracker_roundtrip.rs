use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use issue_summary::issue_event::GithubEvent;
use issue_summary::issue_labels::LabelSet;
use issue_summary::issue_types::{IssueComment, TrackedIssue};
use issue_summary_runtime::{
    SummaryIssueTracker, SummaryIssuesRuntime, SummaryIssuesRuntimeConfig, SummaryResult,
};
use serde_json::json;
use tokio::sync::Mutex as AsyncMutex;

/// Tracker that stores issue bodies and answers searches by label overlap.
struct InMemoryTracker {
    issues: AsyncMutex<Vec<TrackedIssue>>,
    writes: AsyncMutex<Vec<(String, String)>>,
}

impl InMemoryTracker {
    fn new(issues: Vec<TrackedIssue>) -> Self {
        Self {
            issues: AsyncMutex::new(issues),
            writes: AsyncMutex::new(Vec::new()),
        }
    }

    async fn body_of(&self, id: &str) -> String {
        self.issues
            .lock()
            .await
            .iter()
            .find(|issue| issue.id == id)
            .map(|issue| issue.body.clone())
            .unwrap_or_default()
    }

    async fn write_count(&self) -> usize {
        self.writes.lock().await.len()
    }

    async fn matching(&self, query: &str, summaries_only: bool) -> Vec<TrackedIssue> {
        let wanted = query_label_names(query);
        self.issues
            .lock()
            .await
            .iter()
            .filter(|issue| !summaries_only || issue.is_summary_issue())
            .filter(|issue| wanted.iter().any(|name| issue.labels.contains(name)))
            .cloned()
            .collect()
    }
}

fn query_label_names(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .filter_map(|term| term.strip_prefix("label:"))
        .filter(|term| term.starts_with('"'))
        .flat_map(|term| term.split(','))
        .map(|name| name.trim_matches('"').to_string())
        .collect()
}

#[async_trait]
impl SummaryIssueTracker for InMemoryTracker {
    async fn search_summary_issues(&self, query: &str) -> SummaryResult<Vec<TrackedIssue>> {
        Ok(self.matching(query, true).await)
    }

    async fn search_source_issues(&self, query: &str) -> SummaryResult<Vec<TrackedIssue>> {
        Ok(self.matching(query, false).await)
    }

    async fn update_issue_body(&self, issue_id: &str, body: &str) -> SummaryResult<()> {
        self.writes
            .lock()
            .await
            .push((issue_id.to_string(), body.to_string()));
        if let Some(issue) = self
            .issues
            .lock()
            .await
            .iter_mut()
            .find(|issue| issue.id == issue_id)
        {
            issue.body = body.to_string();
        }
        Ok(())
    }
}

fn issue(id: &str, labels: &[&str], comments: Vec<IssueComment>) -> TrackedIssue {
    TrackedIssue {
        id: id.to_string(),
        title: format!("Issue {id}"),
        url: format!("https://github.com/octo/widgets/issues/{id}"),
        body: String::new(),
        author_login: "alice".to_string(),
        labels: LabelSet::from_names(labels.iter().copied()),
        comments,
    }
}

fn comment(minute: u32, body: &str) -> IssueComment {
    IssueComment {
        author_login: "bob".to_string(),
        body: body.to_string(),
        updated_at: Utc
            .with_ymd_and_hms(2026, 7, 8, 9, minute, 0)
            .single()
            .expect("timestamp"),
    }
}

fn runtime(tracker: Arc<InMemoryTracker>) -> SummaryIssuesRuntime {
    let config = SummaryIssuesRuntimeConfig::new(
        "octo/widgets",
        "https://api.github.com/graphql",
        "https://github.com",
        "token",
        "",
        1_000,
    )
    .expect("config");
    SummaryIssuesRuntime::with_tracker(config, tracker)
}

#[tokio::test]
async fn integration_comment_event_regenerates_summary_idempotently() {
    let tracker = Arc::new(InMemoryTracker::new(vec![
        issue("S", &["summary", "team-a"], Vec::new()),
        issue("A", &["team-a"], vec![comment(1, "old"), comment(2, "## Latest\nall green")]),
        issue("B", &["team-b"], vec![comment(3, "unrelated")]),
    ]));
    let runtime = runtime(tracker.clone());
    let event = GithubEvent::from_payload(
        "issue_comment",
        &json!({
            "action": "created",
            "issue": {"node_id": "A", "title": "Issue A", "labels": [{"name": "team-a"}]}
        })
        .to_string(),
    )
    .expect("event");

    runtime.run_event(&event).await.expect("first run");
    let first = tracker.body_of("S").await;
    runtime.run_event(&event).await.expect("second run");
    let second = tracker.body_of("S").await;

    assert_eq!(first, second);
    assert_eq!(tracker.write_count().await, 2);
    assert!(first.contains("## [Issue A](https://github.com/octo/widgets/issues/A)"));
    assert!(first.contains("### Latest\nall green"));
    assert!(!first.contains("old"));
    assert!(!first.contains("Issue B"));
    assert!(!first.contains("## [Issue S]"));
}

#[tokio::test]
async fn integration_unlabeled_event_drops_issue_from_summary_sharing_removed_label() {
    let tracker = Arc::new(InMemoryTracker::new(vec![
        issue("S", &["summary", "team-a"], Vec::new()),
        issue("A", &[], vec![comment(1, "moved away")]),
    ]));
    let runtime = runtime(tracker.clone());
    let event = GithubEvent::from_payload(
        "issues",
        &json!({
            "action": "unlabeled",
            "label": {"name": "team-a"},
            "issue": {"node_id": "A", "title": "Issue A", "labels": []}
        })
        .to_string(),
    )
    .expect("event");

    let report = runtime.run_event(&event).await.expect("run");
    assert_eq!(report.updated, vec!["S".to_string()]);
    assert!(tracker.body_of("S").await.ends_with("\nNo matching issues.\n"));
}
