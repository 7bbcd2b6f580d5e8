//! Update orchestration: one webhook event in, regenerated summary issues out.

use std::sync::Arc;

use issue_summary::issue_event::GithubEvent;
use issue_summary::issue_labels::LabelSet;
use issue_summary::issue_query::{source_issue_query, summary_issue_query};
use issue_summary::issue_types::TrackedIssue;
use issue_summary::summary_render::{render_summary_body, RenderedSummary, SummaryRenderContext};
use issue_summary::summary_update_plan::plan_summary_updates;
use tracing::{debug, info, warn};

use crate::graphql_client::GithubGraphqlClient;
use crate::summary_error::SummaryResult;
use crate::summary_runtime_config::SummaryIssuesRuntimeConfig;
use crate::summary_tracker::SummaryIssueTracker;


#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Outcome of one summary run.
pub struct SummaryRunReport {
    pub event_name: String,
    /// Summary issue ids rewritten, in write order.
    pub updated: Vec<String>,
    /// Cascade matches already rewritten earlier in the same run.
    pub repeated: Vec<String>,
    pub skip_reason: Option<&'static str>,
    /// The payload lacked a field its action requires and was tolerated.
    pub malformed_payload: bool,
}

impl SummaryRunReport {
    pub fn is_noop(&self) -> bool {
        self.updated.is_empty()
    }
}

/// Drives plan, search, render and write-back for a single event.
///
/// Calls are issued one at a time; the first failure aborts the run and leaves
/// earlier writes in place.
pub struct SummaryIssuesRuntime {
    config: SummaryIssuesRuntimeConfig,
    tracker: Arc<dyn SummaryIssueTracker>,
}

impl SummaryIssuesRuntime {
    pub fn new(config: SummaryIssuesRuntimeConfig) -> SummaryResult<Self> {
        let client = GithubGraphqlClient::new(
            &config.graphql_url,
            &config.token,
            config.request_timeout_ms,
        )?;
        Ok(Self::with_tracker(config, Arc::new(client)))
    }

    pub fn with_tracker(
        config: SummaryIssuesRuntimeConfig,
        tracker: Arc<dyn SummaryIssueTracker>,
    ) -> Self {
        Self { config, tracker }
    }

    pub fn config(&self) -> &SummaryIssuesRuntimeConfig {
        &self.config
    }

    pub async fn run_event(&self, event: &GithubEvent) -> SummaryResult<SummaryRunReport> {
        info!(event = %event.name, action = %event.action, "handling event");
        let plan = plan_summary_updates(event);
        let mut report = SummaryRunReport {
            event_name: event.name.clone(),
            skip_reason: plan.skip_reason,
            malformed_payload: plan.malformed_payload,
            ..SummaryRunReport::default()
        };

        if let Some(summary) = plan.direct.as_ref() {
            self.update_summary_issue(summary).await?;
            report.updated.push(summary.id.clone());
        }

        match plan.cascade.as_ref() {
            Some(changed) => self.update_matching_summary_issues(changed, &mut report).await?,
            None => match plan.skip_reason {
                Some(reason) if plan.malformed_payload => {
                    warn!(
                        event = %event.name,
                        action = %event.action,
                        reason,
                        "tolerating malformed event payload"
                    );
                }
                Some(reason) => info!(reason, "no summary cascade"),
                None => {}
            },
        }
        Ok(report)
    }

    /// Regenerate every open summary issue sharing a label with `changed`.
    ///
    /// Each match is rendered from its own full label set, not from `changed`.
    pub async fn update_matching_summary_issues(
        &self,
        changed: &LabelSet,
        report: &mut SummaryRunReport,
    ) -> SummaryResult<()> {
        let query = summary_issue_query(self.config.owner(), changed);
        info!(%query, "searching summary issues");
        let summaries = self.tracker.search_summary_issues(&query).await?;
        for summary in summaries {
            if report.updated.contains(&summary.id) {
                debug!(id = %summary.id, "summary issue already updated in this run");
                report.repeated.push(summary.id);
                continue;
            }
            self.update_summary_issue(&summary).await?;
            report.updated.push(summary.id);
        }
        Ok(())
    }

    pub async fn render_summary_issue(
        &self,
        summary: &TrackedIssue,
    ) -> SummaryResult<RenderedSummary> {
        let sources = match source_issue_query(self.config.owner(), &summary.labels) {
            Some(query) => {
                info!(%query, "searching issues");
                self.tracker.search_source_issues(&query).await?
            }
            None => Vec::new(),
        };
        let context = SummaryRenderContext {
            owner: self.config.owner(),
            server_url: &self.config.server_url,
            selector: &self.config.selector,
        };
        Ok(render_summary_body(&context, summary, &sources))
    }

    pub async fn update_summary_issue(&self, summary: &TrackedIssue) -> SummaryResult<()> {
        info!(title = %summary.title, id = %summary.id, "updating summary issue");
        let rendered = self.render_summary_issue(summary).await?;
        debug!(
            sections = rendered.sections,
            bytes = rendered.body.len(),
            skipped_self_reference = rendered.skipped_self_reference,
            "rendered summary body"
        );
        self.tracker
            .update_issue_body(&summary.id, &rendered.body)
            .await
    }
}
