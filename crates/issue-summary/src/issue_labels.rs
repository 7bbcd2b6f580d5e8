use serde::{Deserialize, Serialize};

/// Reserved label marking an issue whose body is regenerated from its peers.
pub const SUMMARY_LABEL: &str = "summary";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
/// Public struct `IssueLabel` used across summary components.
pub struct IssueLabel {
    pub name: String,
}

impl IssueLabel {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn is_summary(&self) -> bool {
        self.name == SUMMARY_LABEL
    }
}

/// Labels attached to one issue, in tracker order.
///
/// Names compare case-sensitively. Duplicates are kept; they only repeat a
/// clause in the rendered filter and never change what it matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct LabelSet(Vec<IssueLabel>);

impl LabelSet {
    pub fn new(labels: Vec<IssueLabel>) -> Self {
        Self(labels)
    }

    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self(names.into_iter().map(IssueLabel::new).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IssueLabel> {
        self.0.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|label| label.name == name)
    }

    pub fn is_summary_issue(&self) -> bool {
        self.contains(SUMMARY_LABEL)
    }

    pub fn non_summary_labels(&self) -> LabelSet {
        LabelSet(
            self.0
                .iter()
                .filter(|label| !label.is_summary())
                .cloned()
                .collect(),
        )
    }

    /// Render the `label:"a","b"` search clause for the non-summary labels.
    ///
    /// Returns an empty string when nothing but the summary marker is present.
    pub fn query_filter(&self) -> String {
        let quoted = self
            .0
            .iter()
            .filter(|label| !label.is_summary())
            .map(|label| quote_label_name(&label.name))
            .collect::<Vec<_>>();
        if quoted.is_empty() {
            return String::new();
        }
        format!("label:{}", quoted.join(","))
    }
}

/// Double-quote a label name for a search clause.
///
/// Quotes and backslashes are backslash-escaped; control characters use the
/// `\n`/`\t` short forms where one exists, else `\xNN` or `\uNNNN`.
fn quote_label_name(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('"');
    for ch in name.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\u{07}' => quoted.push_str("\\a"),
            '\u{08}' => quoted.push_str("\\b"),
            '\u{0c}' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{0b}' => quoted.push_str("\\v"),
            ch if (ch as u32) < 0x20 || ch == '\u{7f}' => {
                quoted.push_str(&format!("\\x{:02x}", ch as u32));
            }
            ch if ch.is_control() => quoted.push_str(&format!("\\u{:04x}", ch as u32)),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
