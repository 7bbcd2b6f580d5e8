//! Summary-issue synthesis for GitHub issue trackers.
//!
//! Pure building blocks consumed by the runtime crate: label filtering,
//! search-query construction, comment selection, heading demotion, summary
//! body rendering, and classification of webhook events into update plans.

pub mod issue_comment_selector;
pub mod issue_event;
pub mod issue_heading;
pub mod issue_labels;
pub mod issue_query;
pub mod issue_types;
pub mod summary_render;
pub mod summary_update_plan;
