//! Contract generation pipeline.
//!
//! Two flows share one provider:
//! - preview: permissive prompt -> completion at provider temperature -> raw text
//! - deploy: strict prompt -> completion at temperature 0 -> strip fences ->
//!   write artifact pair -> run toolchain -> scrape address
//!
//! Deploys hold an async lock from the artifact write through the end of the
//! toolchain run, so two requests never drive the same toolchain directory at
//! once. Completion calls are not serialized.

use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

use loanforge_types::artifact::GeneratedArtifact;
use loanforge_types::config::LlmSettings;
use loanforge_types::deploy::{DeploymentOutcome, PromptPreview};
use loanforge_types::error::PipelineError;
use loanforge_types::llm::{CompletionRequest, LlmError, Message};
use loanforge_types::loan::LoanRecord;

use crate::artifact::ArtifactWriter;
use crate::codegen::strip_code_fences;
use crate::fs::FileSystem;
use crate::llm::box_provider::BoxLlmProvider;
use crate::prompt::{PromptStyle, build_prompt};
use crate::toolchain::{ToolchainRunner, outcome_from_output};

/// Temperature for the deploy flow; generated code should be reproducible.
const DEPLOY_TEMPERATURE: f64 = 0.0;

/// Everything produced by one deploy run.
#[derive(Debug, Clone)]
pub struct DeployReport {
    pub run_id: Uuid,
    pub artifact: GeneratedArtifact,
    pub outcome: DeploymentOutcome,
}

/// Drives prompt building, completion, artifact writing, and deployment.
pub struct ContractPipeline<F: FileSystem, R: ToolchainRunner> {
    provider: BoxLlmProvider,
    writer: ArtifactWriter<F>,
    runner: R,
    model: String,
    max_tokens: Option<u32>,
    completion_timeout: Duration,
    deploy_lock: Mutex<()>,
}

impl<F: FileSystem, R: ToolchainRunner> ContractPipeline<F, R> {
    pub fn new(
        provider: BoxLlmProvider,
        writer: ArtifactWriter<F>,
        runner: R,
        settings: &LlmSettings,
    ) -> Self {
        Self {
            provider,
            writer,
            runner,
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            completion_timeout: Duration::from_secs(settings.request_timeout_secs),
            deploy_lock: Mutex::new(()),
        }
    }

    /// Override the completion timeout taken from settings.
    pub fn with_completion_timeout(mut self, timeout: Duration) -> Self {
        self.completion_timeout = timeout;
        self
    }

    /// Generate code for `loan` without touching disk or the toolchain.
    pub async fn preview(&self, loan: &LoanRecord) -> Result<PromptPreview, PipelineError> {
        let prompt = build_prompt(loan, PromptStyle::Preview);
        let generated_code = self.complete(&prompt, None).await?;
        Ok(PromptPreview {
            prompt,
            generated_code,
        })
    }

    /// Generate, write, and deploy a contract for `loan`.
    pub async fn deploy(&self, loan: &LoanRecord) -> Result<DeployReport, PipelineError> {
        let run_id = Uuid::now_v7();
        let span = info_span!(
            "deploy",
            run_id = %run_id,
            contract = %loan.contract_name,
        );

        self.run_deploy(loan, run_id).instrument(span).await
    }

    async fn run_deploy(
        &self,
        loan: &LoanRecord,
        run_id: Uuid,
    ) -> Result<DeployReport, PipelineError> {
        let prompt = build_prompt(loan, PromptStyle::Deploy);
        let raw = self.complete(&prompt, Some(DEPLOY_TEMPERATURE)).await?;
        let code = strip_code_fences(&raw);
        if code.is_empty() {
            warn!("Completion was empty after stripping code fences");
        }

        let _guard = self.deploy_lock.lock().await;

        let artifact = self.writer.write(&code, &loan.contract_name).await?;

        let output = match self.runner.run().await {
            Ok(output) => output,
            Err(err) => {
                error!(
                    qualified_name = %artifact.qualified_name,
                    stderr = err.stderr().unwrap_or_default(),
                    "Toolchain run failed: {err}"
                );
                return Err(err.into());
            }
        };

        let outcome = outcome_from_output(&output);
        match &outcome {
            DeploymentOutcome::Confirmed { contract_address } => info!(
                qualified_name = %artifact.qualified_name,
                contract_address = %contract_address,
                "Contract deployed"
            ),
            DeploymentOutcome::Unconfirmed { .. } => warn!(
                qualified_name = %artifact.qualified_name,
                "Toolchain succeeded but printed no contract address"
            ),
        }

        Ok(DeployReport {
            run_id,
            artifact,
            outcome,
        })
    }

    /// One completion call bounded by the configured timeout.
    async fn complete(&self, prompt: &str, temperature: Option<f64>) -> Result<String, LlmError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![Message::user(prompt)],
            max_tokens: self.max_tokens,
            temperature,
        };

        let span = info_span!(
            "gen_ai.complete",
            gen_ai.system = self.provider.name(),
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = ?request.max_tokens,
            gen_ai.request.temperature = ?request.temperature,
        );

        let response = tokio::time::timeout(
            self.completion_timeout,
            self.provider.complete(&request).instrument(span),
        )
        .await
        .map_err(|_| LlmError::Timeout(self.completion_timeout.as_secs()))??;

        tracing::debug!(
            response_id = %response.id,
            stop_reason = %response.stop_reason,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "Completion received"
        );

        Ok(response.content)
    }
}
