//! Application state wiring the pipeline to its concrete adapters.
//!
//! `ContractPipeline` is generic over the filesystem and toolchain ports;
//! AppState pins it to the infra implementations.

use std::sync::Arc;

use secrecy::SecretString;

use loanforge_core::artifact::ArtifactWriter;
use loanforge_core::pipeline::ContractPipeline;
use loanforge_infra::filesystem::LocalFileSystem;
use loanforge_infra::llm::create_provider;
use loanforge_infra::toolchain::ProcessToolchainRunner;
use loanforge_types::config::ForgeConfig;
use loanforge_types::loan::LoanRecord;

/// Pipeline generics pinned to infra implementations.
pub type ConcretePipeline = ContractPipeline<LocalFileSystem, ProcessToolchainRunner>;

/// Shared application state, used by both CLI commands and HTTP handlers.
///
/// The loan record is read-only for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ConcretePipeline>,
    pub loan: Arc<LoanRecord>,
}

impl AppState {
    pub fn new(pipeline: ConcretePipeline, loan: LoanRecord) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            loan: Arc::new(loan),
        }
    }

    /// Build the provider, writer, and runner from config.
    pub fn init(config: &ForgeConfig, api_key: &SecretString) -> anyhow::Result<Self> {
        let provider = create_provider(&config.llm, api_key)?;
        let writer = ArtifactWriter::new(LocalFileSystem::new(), &config.toolchain);
        let runner = ProcessToolchainRunner::from_settings(&config.toolchain);

        tracing::info!(
            provider = provider.name(),
            model = %config.llm.model,
            toolchain = %config.toolchain.program,
            root = %config.toolchain.root.display(),
            contract = %config.loan.contract_name,
            "Pipeline ready"
        );

        let pipeline = ContractPipeline::new(provider, writer, runner, &config.llm);
        Ok(Self::new(pipeline, config.loan.clone()))
    }
}
