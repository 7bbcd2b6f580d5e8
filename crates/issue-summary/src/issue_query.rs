//! Search-query construction for locating summary issues and the source
//! issues they aggregate.

use crate::issue_labels::{LabelSet, SUMMARY_LABEL};

/// Query for open summary issues sharing at least one label in `changed`.
///
/// `changed` carries only the labels that triggered the cascade (or the full
/// label set of a newly opened or commented issue).
pub fn summary_issue_query(owner: &str, changed: &LabelSet) -> String {
    let query = format!(
        "is:open user:{owner} label:{SUMMARY_LABEL} {}",
        changed.query_filter()
    );
    query.trim_end().to_string()
}

/// Query for every issue sharing a non-summary label with a summary issue.
///
/// Returns `None` when the summary issue has no non-summary labels; such a
/// summary matches nothing.
pub fn source_issue_query(owner: &str, summary_labels: &LabelSet) -> Option<String> {
    let filter = summary_labels.query_filter();
    if filter.is_empty() {
        return None;
    }
    Some(format!("user:{owner} {filter}"))
}

/// Query behind the human-facing "issues with matching labels" link.
pub fn search_link_query(owner: &str, summary_labels: &LabelSet) -> Option<String> {
    let filter = summary_labels.query_filter();
    if filter.is_empty() {
        return None;
    }
    Some(format!("type:issue user:{owner} {filter}"))
}

/// Web search URL for `query` on the tracker at `server_url`.
///
/// Returns `None` when `server_url` is not an absolute URL.
pub fn search_url(server_url: &str, query: &str) -> Option<String> {
    let base = format!("{}/search", server_url.trim_end_matches('/'));
    let mut url = reqwest::Url::parse(&base).ok()?;
    url.query_pairs_mut().append_pair("q", query);
    Some(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::{search_link_query, search_url, source_issue_query, summary_issue_query};
    use crate::issue_labels::LabelSet;

    #[test]
    fn unit_summary_issue_query_scopes_open_summary_issues_for_owner() {
        let changed = LabelSet::from_names(["bug"]);
        assert_eq!(
            summary_issue_query("octo", &changed),
            r#"is:open user:octo label:summary label:"bug""#
        );
    }

    #[test]
    fn functional_summary_issue_query_ignores_summary_marker_in_changed_labels() {
        let changed = LabelSet::from_names(["summary", "team-a", "team-b"]);
        assert_eq!(
            summary_issue_query("octo", &changed),
            r#"is:open user:octo label:summary label:"team-a","team-b""#
        );
    }

    #[test]
    fn functional_source_issue_query_has_no_open_state_restriction() {
        let labels = LabelSet::from_names(["summary", "team-a"]);
        assert_eq!(
            source_issue_query("octo", &labels).as_deref(),
            Some(r#"user:octo label:"team-a""#)
        );
        assert_eq!(
            source_issue_query("octo", &LabelSet::from_names(["summary"])),
            None
        );
    }

    #[test]
    fn integration_search_link_encodes_query_for_web_search() {
        let labels = LabelSet::from_names(["summary", "team-a"]);
        let query = search_link_query("octo", &labels).expect("query");
        assert_eq!(query, r#"type:issue user:octo label:"team-a""#);
        assert_eq!(
            search_url("https://github.com/", &query).as_deref(),
            Some("https://github.com/search?q=type%3Aissue+user%3Aocto+label%3A%22team-a%22")
        );
    }

    #[test]
    fn regression_search_link_is_absent_without_filter() {
        assert_eq!(search_link_query("octo", &LabelSet::default()), None);
    }

    #[test]
    fn regression_search_url_is_absent_for_relative_server_url() {
        assert_eq!(search_url("github.com", r#"label:"a b""#), None);
        assert_eq!(search_url("", "user:octo"), None);
    }
}
