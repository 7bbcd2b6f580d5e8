use crate::issue_comment_selector::CommentSelector;
use crate::issue_heading::demote_headings;
use crate::issue_labels::LabelSet;
use crate::issue_query::{search_link_query, search_url};
use crate::issue_types::{IssueComment, TrackedIssue};

const MATCHING_ISSUES_TEXT: &str = "issues with matching labels";
const NO_UPDATE_LINE: &str = "_No update_";
const NO_MATCHING_ISSUES_LINE: &str = "No matching issues.";
const UPDATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Inputs shared by every summary rendered in one run.
#[derive(Debug, Clone, Copy)]
pub struct SummaryRenderContext<'a> {
    pub owner: &'a str,
    pub server_url: &'a str,
    pub selector: &'a CommentSelector,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Public struct `RenderedSummary` used across summary components.
pub struct RenderedSummary {
    pub body: String,
    pub sections: usize,
    pub skipped_self_reference: bool,
}

/// First line of every summary body: how comments are chosen and where the
/// matching issues can be browsed.
pub fn render_summary_preamble(context: &SummaryRenderContext<'_>, labels: &LabelSet) -> String {
    let target = match search_link_query(context.owner, labels)
        .and_then(|query| search_url(context.server_url, &query))
    {
        Some(url) => format!("[{MATCHING_ISSUES_TEXT}]({url})"),
        None => MATCHING_ISSUES_TEXT.to_string(),
    };
    let pattern = context.selector.pattern();
    if pattern.is_empty() {
        format!("_This is generated from the newest comment on {target}._")
    } else {
        format!(
            "_This is generated from the newest comment that matches the regular expression `{pattern}` on {target}._"
        )
    }
}

/// Render the full body of `summary` from `sources` in the order given.
///
/// `summary` itself is skipped if it appears among the sources.
pub fn render_summary_body(
    context: &SummaryRenderContext<'_>,
    summary: &TrackedIssue,
    sources: &[TrackedIssue],
) -> RenderedSummary {
    let mut body = render_summary_preamble(context, &summary.labels);
    body.push('\n');

    let mut sections = 0_usize;
    let mut skipped_self_reference = false;
    for source in sources {
        if source.id == summary.id {
            skipped_self_reference = true;
            continue;
        }
        sections = sections.saturating_add(1);
        body.push_str(&format!("## [{}]({})\n", source.title, source.url));
        match context.selector.select(&source.comments) {
            Some(comment) => body.push_str(&render_comment_section(comment)),
            None => {
                body.push_str(NO_UPDATE_LINE);
                body.push('\n');
            }
        }
    }

    if sections == 0 {
        body.push('\n');
        body.push_str(NO_MATCHING_ISSUES_LINE);
        body.push('\n');
    }

    RenderedSummary {
        body,
        sections,
        skipped_self_reference,
    }
}

fn render_comment_section(comment: &IssueComment) -> String {
    format!(
        "{}\n\n\n_Updated {} by @{}_\n\n",
        demote_headings(&comment.body),
        comment.updated_at.format(UPDATED_AT_FORMAT),
        comment.author_login
    )
}
