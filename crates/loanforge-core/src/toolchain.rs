//! Toolchain port and output scraping.
//!
//! The external build/deploy CLI is opaque: the pipeline only knows how to
//! start it (through [`ToolchainRunner`]) and how to read a contract address
//! out of what it prints.

use std::sync::LazyLock;

use regex::Regex;

use loanforge_types::deploy::{DeploymentOutcome, ToolchainOutput};
use loanforge_types::error::DeployError;

/// Runs the compile + migrate steps of the external toolchain.
///
/// Implementations live in loanforge-infra (e.g., `ProcessToolchainRunner`).
/// A non-zero exit, spawn failure, or timeout is an error; only a clean exit
/// yields [`ToolchainOutput`].
pub trait ToolchainRunner: Send + Sync {
    fn run(&self) -> impl std::future::Future<Output = Result<ToolchainOutput, DeployError>> + Send;
}

static CONTRACT_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"contract address:\s*(0x[0-9a-fA-F]+)").expect("address pattern is valid")
});

/// Find the deployed contract address in toolchain stdout.
///
/// Migrations run in file-name order and the newest migration is the one
/// just written, so when several addresses are printed the last one wins.
pub fn extract_contract_address(stdout: &str) -> Option<String> {
    CONTRACT_ADDRESS
        .captures_iter(stdout)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Classify a successful run by whether its address could be scraped.
pub fn outcome_from_output(output: &ToolchainOutput) -> DeploymentOutcome {
    match extract_contract_address(&output.stdout) {
        Some(address) => DeploymentOutcome::confirmed(address),
        None => DeploymentOutcome::unconfirmed(),
    }
}
