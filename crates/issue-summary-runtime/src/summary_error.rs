use thiserror::Error;

#[derive(Debug, Error)]
/// Enumerates failures that abort a summary run.
pub enum SummaryIssuesError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("github graphql {operation} request failed: {source}\nrequest:\n{request}")]
    Transport {
        operation: &'static str,
        request: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("github graphql {operation} returned non-success status {status}:\n{response}\n\nrequest:\n{request}")]
    Status {
        operation: &'static str,
        status: u16,
        request: String,
        response: String,
    },
    #[error("failed to decode github graphql {operation} response: {source}\n{response}")]
    Decode {
        operation: &'static str,
        response: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("graphql error: {message}\nrequest:\n{request}")]
    Api {
        operation: &'static str,
        message: String,
        request: String,
    },
}

impl SummaryIssuesError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

pub type SummaryResult<T> = Result<T, SummaryIssuesError>;
