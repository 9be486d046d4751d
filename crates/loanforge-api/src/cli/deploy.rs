//! `loanforge deploy`: one generate + compile + migrate cycle from the shell.

use anyhow::{Context, Result};
use console::style;

use loanforge_types::deploy::DeploymentOutcome;

use crate::state::AppState;

/// Run a deploy for the configured loan and print the outcome as JSON.
///
/// Styled progress goes to stderr so stdout stays machine-readable.
pub async fn run_deploy(state: &AppState) -> Result<()> {
    eprintln!(
        "  {} Generating {} ...",
        style("⚡").bold(),
        style(&state.loan.contract_name).cyan()
    );

    let report = state
        .pipeline
        .deploy(&state.loan)
        .await
        .context("Deployment failed")?;

    eprintln!(
        "  {} {}",
        style("→").dim(),
        style(report.artifact.source_path.display()).dim()
    );
    match &report.outcome {
        DeploymentOutcome::Confirmed { contract_address } => eprintln!(
            "  {} Deployed {} at {}",
            style("✓").green(),
            style(&report.artifact.qualified_name).bold(),
            style(contract_address).yellow()
        ),
        DeploymentOutcome::Unconfirmed { info, .. } => {
            eprintln!("  {} {}", style("!").yellow(), info)
        }
    }

    println!("{}", serde_json::to_string_pretty(&report.outcome)?);
    Ok(())
}
