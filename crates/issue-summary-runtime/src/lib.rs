//! Runtime for regenerating summary issues from GitHub webhook events.
//!
//! Wraps the pure `issue-summary` core with a GraphQL tracker client, the
//! run configuration, and the update orchestrator.

mod graphql_transport_helpers;

pub mod graphql_client;
pub mod summary_error;
pub mod summary_runtime;
pub mod summary_runtime_config;
pub mod summary_tracker;

pub use graphql_client::GithubGraphqlClient;
pub use summary_error::{SummaryIssuesError, SummaryResult};
pub use summary_runtime::{SummaryIssuesRuntime, SummaryRunReport};
pub use summary_runtime_config::{RepoRef, SummaryIssuesRuntimeConfig};
pub use summary_tracker::SummaryIssueTracker;
