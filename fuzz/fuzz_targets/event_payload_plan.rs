#![no_main]

use issue_summary::issue_event::GithubEvent;
use issue_summary::issue_labels::SUMMARY_LABEL;
use issue_summary::summary_update_plan::plan_summary_updates;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    for name in ["issues", "issue_comment", "schedule"] {
        let Ok(event) = GithubEvent::from_payload(name, &raw) else {
            continue;
        };
        let plan = plan_summary_updates(&event);
        if let Some(direct) = plan.direct.as_ref() {
            assert!(direct.is_summary_issue());
        }
        if let Some(cascade) = plan.cascade.as_ref() {
            assert!(!cascade.is_empty());
            assert!(!cascade.contains(SUMMARY_LABEL));
            assert!(cascade.query_filter().starts_with("label:"));
        }
        if plan.malformed_payload {
            assert!(plan.cascade.is_none());
            assert!(plan.skip_reason.is_some());
        }
        if plan.is_noop() {
            assert!(plan.skip_reason.is_some());
        }
    }
});
