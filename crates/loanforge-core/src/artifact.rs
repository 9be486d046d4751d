//! Artifact writer.
//!
//! Turns cleaned completion text into the two files the toolchain consumes:
//! `<contracts>/<Name>_<ts>.<ext>` and `<migrations>/<ts>_deploy_<Name>_<ts>.<ext>`.
//! The writes are not atomic; if the migration write fails, the source file
//! stays on disk.

use std::path::{Path, PathBuf};

use loanforge_types::artifact::{self, GeneratedArtifact, MigrationScript};
use loanforge_types::config::ToolchainSettings;
use loanforge_types::error::ArtifactError;

use crate::codegen::{qualify_contract_name, render_migration_script};
use crate::fs::FileSystem;

/// Writes generated sources and their migration scripts.
///
/// Generic over [`FileSystem`] so tests can run against memory.
pub struct ArtifactWriter<F: FileSystem> {
    fs: F,
    contracts_dir: PathBuf,
    migrations_dir: PathBuf,
    source_extension: String,
    script_extension: String,
}

impl<F: FileSystem> ArtifactWriter<F> {
    pub fn new(fs: F, settings: &ToolchainSettings) -> Self {
        Self {
            fs,
            contracts_dir: settings.contracts_path(),
            migrations_dir: settings.migrations_path(),
            source_extension: settings.source_extension.clone(),
            script_extension: settings.script_extension.clone(),
        }
    }

    /// Write the artifact pair, qualified with the current time.
    pub async fn write(
        &self,
        source: &str,
        base_name: &str,
    ) -> Result<GeneratedArtifact, ArtifactError> {
        let timestamp_ms = chrono::Utc::now().timestamp_millis();
        self.write_at(source, base_name, timestamp_ms).await
    }

    /// Write the artifact pair, qualified with an explicit timestamp.
    pub async fn write_at(
        &self,
        source: &str,
        base_name: &str,
        timestamp_ms: i64,
    ) -> Result<GeneratedArtifact, ArtifactError> {
        let qualified_name = artifact::qualified_name(base_name, timestamp_ms);
        let source = qualify_contract_name(source, base_name, &qualified_name);

        self.ensure_dir(&self.contracts_dir).await?;
        let source_path = self
            .contracts_dir
            .join(format!("{qualified_name}.{}", self.source_extension));
        self.write_file(&source_path, &source).await?;

        self.ensure_dir(&self.migrations_dir).await?;
        let file_name =
            artifact::migration_file_name(timestamp_ms, &qualified_name, &self.script_extension);
        let migration_path = self.migrations_dir.join(&file_name);
        let content = render_migration_script(&qualified_name);
        self.write_file(&migration_path, &content).await?;

        tracing::info!(
            qualified_name = %qualified_name,
            source = %source_path.display(),
            migration = %migration_path.display(),
            "Wrote contract artifact"
        );

        Ok(GeneratedArtifact {
            base_name: base_name.to_string(),
            timestamp_ms,
            qualified_name,
            source,
            source_path,
            migration: MigrationScript {
                file_name,
                path: migration_path,
                content,
            },
        })
    }

    async fn ensure_dir(&self, path: &Path) -> Result<(), ArtifactError> {
        self.fs
            .create_dir_all(path)
            .await
            .map_err(|source| ArtifactError::CreateDir {
                path: path.to_path_buf(),
                source,
            })
    }

    async fn write_file(&self, path: &Path, content: &str) -> Result<(), ArtifactError> {
        self.fs
            .write_file(path, content)
            .await
            .map_err(|source| ArtifactError::WriteFile {
                path: path.to_path_buf(),
                source,
            })
    }
}
