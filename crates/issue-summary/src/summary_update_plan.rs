//! Classification of one inbound event into the summary issues it affects.

use crate::issue_event::{GithubEvent, GithubEventKind};
use crate::issue_labels::LabelSet;
use crate::issue_types::TrackedIssue;

const DIRECT_UPDATE_ACTIONS: [&str; 4] = ["edited", "labeled", "unlabeled", "opened"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// What a single event requires of the summary pass.
///
/// `direct` is regenerated first, then every summary issue found through
/// `cascade`. `skip_reason` explains an absent cascade; `malformed_payload`
/// marks a skip caused by a payload missing a field its action requires.
pub struct SummaryUpdatePlan {
    pub direct: Option<TrackedIssue>,
    pub cascade: Option<LabelSet>,
    pub skip_reason: Option<&'static str>,
    pub malformed_payload: bool,
}

impl SummaryUpdatePlan {
    fn skip(reason: &'static str) -> Self {
        Self {
            skip_reason: Some(reason),
            ..Self::default()
        }
    }

    fn malformed(reason: &'static str) -> Self {
        Self {
            malformed_payload: true,
            ..Self::skip(reason)
        }
    }

    pub fn is_noop(&self) -> bool {
        self.direct.is_none() && self.cascade.is_none()
    }
}

pub fn plan_summary_updates(event: &GithubEvent) -> SummaryUpdatePlan {
    match event.kind() {
        GithubEventKind::Issues => plan_issues_event(event),
        GithubEventKind::IssueComment => {
            let Some(issue) = event.issue.as_ref() else {
                return SummaryUpdatePlan::malformed("comment event without issue");
            };
            cascade_for_labels(&issue.labels)
        }
        GithubEventKind::Schedule | GithubEventKind::Other => {
            SummaryUpdatePlan::skip("nothing to update")
        }
    }
}

fn plan_issues_event(event: &GithubEvent) -> SummaryUpdatePlan {
    let Some(issue) = event.issue.as_ref() else {
        return SummaryUpdatePlan::malformed("issues event without issue");
    };
    let action = event.action.as_str();
    let direct = (issue.labels.is_summary_issue() && DIRECT_UPDATE_ACTIONS.contains(&action))
        .then(|| TrackedIssue::from(issue.clone()));

    let mut plan = match action {
        "labeled" | "unlabeled" => match event.label.as_ref() {
            None => SummaryUpdatePlan::malformed("label event without label"),
            Some(label) if label.is_summary() => SummaryUpdatePlan::skip("summary label changed"),
            Some(label) => SummaryUpdatePlan {
                cascade: Some(LabelSet::new(vec![label.clone()])),
                ..SummaryUpdatePlan::default()
            },
        },
        "opened" => cascade_for_labels(&issue.labels),
        _ => SummaryUpdatePlan::skip("issue action does not affect other summaries"),
    };
    plan.direct = direct;
    plan
}

fn cascade_for_labels(labels: &LabelSet) -> SummaryUpdatePlan {
    let labels = labels.non_summary_labels();
    if labels.is_empty() {
        return SummaryUpdatePlan::skip("no non-summary labels");
    }
    SummaryUpdatePlan {
        cascade: Some(labels),
        ..SummaryUpdatePlan::default()
    }
}
