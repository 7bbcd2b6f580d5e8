use async_trait::async_trait;
use issue_summary::issue_types::TrackedIssue;

use crate::summary_error::SummaryResult;

/// Read/write access to the issue tracker needed by one summary pass.
///
/// Each call is a single bounded request; implementations do not retry.
#[async_trait]
pub trait SummaryIssueTracker: Send + Sync {
    /// Issues matching `query` with their labels (comments are not fetched).
    async fn search_summary_issues(&self, query: &str) -> SummaryResult<Vec<TrackedIssue>>;

    /// Issues matching `query` with their newest comments, oldest first.
    async fn search_source_issues(&self, query: &str) -> SummaryResult<Vec<TrackedIssue>>;

    /// Replace the body of issue `issue_id`.
    async fn update_issue_body(&self, issue_id: &str, body: &str) -> SummaryResult<()>;
}
