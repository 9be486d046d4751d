use std::path::PathBuf;

use thiserror::Error;

use crate::llm::LlmError;

/// Errors from writing generated source and migration files.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from running the external build/deploy toolchain.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' exited with {status}")]
    Failed {
        command: String,
        status: String,
        stdout: String,
        stderr: String,
    },

    #[error("toolchain did not finish within {0}s")]
    TimedOut(u64),
}

impl DeployError {
    /// Captured stderr, when the process got far enough to produce any.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            DeployError::Failed { stderr, .. } => Some(stderr.as_str()),
            _ => None,
        }
    }
}

/// Errors from the prompt-to-deployment pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error(transparent)]
    Deploy(#[from] DeployError),
}
