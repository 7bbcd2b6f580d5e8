use regex::Regex;

use crate::issue_types::IssueComment;

/// Picks the comment surfaced for a source issue.
///
/// An empty pattern matches every comment.
#[derive(Debug, Clone, Default)]
pub struct CommentSelector {
    pattern: Option<Regex>,
}

impl CommentSelector {
    pub fn match_all() -> Self {
        Self { pattern: None }
    }

    pub fn new(raw_pattern: &str) -> Result<Self, regex::Error> {
        if raw_pattern.is_empty() {
            return Ok(Self::match_all());
        }
        Ok(Self {
            pattern: Some(Regex::new(raw_pattern)?),
        })
    }

    /// Source text of the configured pattern, empty when matching everything.
    pub fn pattern(&self) -> &str {
        self.pattern.as_ref().map(Regex::as_str).unwrap_or_default()
    }

    pub fn matches(&self, body: &str) -> bool {
        self.pattern
            .as_ref()
            .map(|pattern| pattern.is_match(body))
            .unwrap_or(true)
    }

    /// Newest comment whose body matches, scanning `comments` (oldest first)
    /// from the end.
    pub fn select<'a>(&self, comments: &'a [IssueComment]) -> Option<&'a IssueComment> {
        comments
            .iter()
            .rev()
            .find(|comment| self.matches(&comment.body))
    }
}
