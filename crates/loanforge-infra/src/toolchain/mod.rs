//! Subprocess adapter for the external build/deploy toolchain.
//!
//! Implements [`ToolchainRunner`] by running each configured step as a child
//! process in the toolchain root. Steps run in order and stop at the first
//! failure. The whole run shares one timeout, and every child is spawned with
//! `kill_on_drop` so a timeout or a dropped request kills it.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use loanforge_core::toolchain::ToolchainRunner;
use loanforge_types::config::ToolchainSettings;
use loanforge_types::deploy::ToolchainOutput;
use loanforge_types::error::DeployError;

/// Runs toolchain steps (e.g. `truffle compile`, `truffle migrate ...`) as
/// child processes.
#[derive(Debug, Clone)]
pub struct ProcessToolchainRunner {
    program: String,
    root: PathBuf,
    steps: Vec<Vec<String>>,
    timeout: Duration,
}

impl ProcessToolchainRunner {
    pub fn new(
        program: impl Into<String>,
        root: impl Into<PathBuf>,
        steps: Vec<Vec<String>>,
        timeout: Duration,
    ) -> Self {
        Self {
            program: program.into(),
            root: root.into(),
            steps,
            timeout,
        }
    }

    /// Compile then migrate with the configured program, network, and root.
    pub fn from_settings(settings: &ToolchainSettings) -> Self {
        Self::new(
            settings.program.clone(),
            settings.root.clone(),
            settings.steps(),
            Duration::from_secs(settings.timeout_secs),
        )
    }

    async fn run_steps(&self) -> Result<ToolchainOutput, DeployError> {
        let mut combined = ToolchainOutput::default();

        for args in &self.steps {
            let command = format!("{} {}", self.program, args.join(" "));
            tracing::info!(
                command = %command,
                root = %self.root.display(),
                "Running toolchain step"
            );

            let child = tokio::process::Command::new(&self.program)
                .args(args)
                .current_dir(&self.root)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true)
                .spawn()
                .map_err(|source| DeployError::Spawn {
                    program: self.program.clone(),
                    source,
                })?;

            let output = child
                .wait_with_output()
                .await
                .map_err(|source| DeployError::Spawn {
                    program: self.program.clone(),
                    source,
                })?;

            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);

            if !output.status.success() {
                return Err(DeployError::Failed {
                    command,
                    status: output.status.to_string(),
                    stdout: stdout.into_owned(),
                    stderr: stderr.into_owned(),
                });
            }

            tracing::debug!(
                command = %command,
                stdout_bytes = stdout.len(),
                "Toolchain step finished"
            );
            combined.stdout.push_str(&stdout);
            combined.stderr.push_str(&stderr);
        }

        Ok(combined)
    }
}

impl ToolchainRunner for ProcessToolchainRunner {
    async fn run(&self) -> Result<ToolchainOutput, DeployError> {
        tokio::time::timeout(self.timeout, self.run_steps())
            .await
            .map_err(|_| DeployError::TimedOut(self.timeout.as_secs()))?
    }
}
