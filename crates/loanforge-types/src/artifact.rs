//! Files produced for a single deploy attempt.

use std::path::PathBuf;

use serde::Serialize;

/// A generated contract source file plus its migration script.
///
/// Created once per deploy and never touched again. Both files share
/// `qualified_name`, which is what lets the toolchain resolve the artifact.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedArtifact {
    /// Contract name before qualification (e.g. "CustomMortgageLoan").
    pub base_name: String,
    /// Milliseconds since the Unix epoch when the artifact was written.
    pub timestamp_ms: i64,
    /// `<base_name>_<timestamp_ms>`.
    pub qualified_name: String,
    /// Source text after fence stripping and contract renaming.
    pub source: String,
    pub source_path: PathBuf,
    pub migration: MigrationScript,
}

/// Deployment script instructing the toolchain to deploy one artifact.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationScript {
    /// `<timestamp>_deploy_<qualified_name>.<ext>`.
    pub file_name: String,
    pub path: PathBuf,
    pub content: String,
}

/// Build the qualified artifact name for a base contract name.
pub fn qualified_name(base_name: &str, timestamp_ms: i64) -> String {
    format!("{base_name}_{timestamp_ms}")
}

/// Build the migration script file name for a qualified artifact name.
pub fn migration_file_name(timestamp_ms: i64, qualified_name: &str, extension: &str) -> String {
    format!("{timestamp_ms}_deploy_{qualified_name}.{extension}")
}
