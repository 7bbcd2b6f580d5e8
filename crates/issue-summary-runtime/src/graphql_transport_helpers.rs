/// Maximum characters of a response body kept in error messages.
pub(crate) const ERROR_BODY_MAX_CHARS: usize = 800;

pub(crate) fn truncate_for_error(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated = text.chars().take(max_chars).collect::<String>();
    truncated.push_str("...");
    truncated
}

/// Diagnostic rendering of an outgoing request. The credential is never part
/// of the dump.
pub(crate) fn render_request_dump(endpoint: &str, payload: &str) -> String {
    format!("POST {endpoint}\ncontent-type: application/json\n\n{payload}")
}

pub(crate) fn render_response_dump(status: u16, body: &str) -> String {
    format!(
        "HTTP {status}\n\n{}",
        truncate_for_error(body, ERROR_BODY_MAX_CHARS)
    )
}

#[cfg(test)]
mod tests {
    use super::{render_request_dump, render_response_dump, truncate_for_error};

    #[test]
    fn unit_truncate_for_error_preserves_unicode_boundaries() {
        assert_eq!(truncate_for_error("né🌊x", 3), "né🌊...");
        assert_eq!(truncate_for_error("short", 10), "short");
    }

    #[test]
    fn functional_request_dump_names_endpoint_and_payload() {
        let dump = render_request_dump("https://api.github.com/graphql", r#"{"query":"q"}"#);
        assert!(dump.starts_with("POST https://api.github.com/graphql\n"));
        assert!(dump.ends_with(r#"{"query":"q"}"#));
        assert!(!dump.to_ascii_lowercase().contains("authorization"));
    }

    #[test]
    fn regression_response_dump_truncates_large_bodies() {
        let body = "x".repeat(2_000);
        let dump = render_response_dump(502, &body);
        assert!(dump.starts_with("HTTP 502\n\n"));
        assert!(dump.ends_with("..."));
        assert!(dump.len() < 900);
    }
}
