use anyhow::Result;
use issue_summary_runtime::{SummaryIssuesRuntime, SummaryRunReport};
use tracing::info;

use crate::bootstrap_helpers::{build_runtime_config, load_github_event};
use crate::cli_args::Cli;

/// Resolve configuration, load the triggering event and run one summary pass.
pub(crate) async fn run_cli(cli: Cli) -> Result<SummaryRunReport> {
    let config = build_runtime_config(&cli)?;
    let event = load_github_event(&cli.github_event_name, &cli.github_event_path)?;
    let runtime = SummaryIssuesRuntime::new(config)?;
    info!(
        repository = %runtime.config().repo.as_slug(),
        event = %event.name,
        "starting summary run"
    );
    let report = runtime.run_event(&event).await?;
    if report.is_noop() {
        info!(reason = report.skip_reason.unwrap_or("nothing to update"), "nothing to update");
    } else {
        info!(
            updated = report.updated.len(),
            repeated = report.repeated.len(),
            "summary issues updated"
        );
    }
    Ok(report)
}
