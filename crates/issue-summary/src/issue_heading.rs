use std::sync::OnceLock;

use regex::Regex;

fn level_two_heading() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?m)^##([^#\n]*)$").expect("valid h2 pattern"))
}

fn level_one_heading() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?m)^#([^#\n]*)$").expect("valid h1 pattern"))
}

/// Demote `#` and `##` heading lines to `###` so embedded comments nest under
/// the per-issue `##` heading of a summary body.
///
/// Level-2 lines are rewritten first; the level-1 pattern cannot match their
/// `###` result.
pub fn demote_headings(text: &str) -> String {
    let demoted = level_two_heading().replace_all(text, "###$1");
    level_one_heading()
        .replace_all(&demoted, "###$1")
        .into_owned()
}
