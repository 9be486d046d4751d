//! Shared fixtures for handler tests: a canned provider and an app state
//! whose toolchain is a list of `sh -c` scripts run in a temp directory.

use std::time::Duration;

use tempfile::TempDir;

use loanforge_core::artifact::ArtifactWriter;
use loanforge_core::llm::box_provider::BoxLlmProvider;
use loanforge_core::llm::provider::LlmProvider;
use loanforge_core::pipeline::ContractPipeline;
use loanforge_infra::filesystem::LocalFileSystem;
use loanforge_infra::toolchain::ProcessToolchainRunner;
use loanforge_types::config::{LlmSettings, ToolchainSettings};
use loanforge_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};
use loanforge_types::loan::LoanRecord;

use crate::state::AppState;

pub(crate) struct StubProvider {
    reply: Result<String, fn() -> LlmError>,
}

impl StubProvider {
    pub(crate) fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
        }
    }

    pub(crate) fn failing(error: fn() -> LlmError) -> Self {
        Self { reply: Err(error) }
    }
}

impl LlmProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    async fn complete(&self, _request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        match &self.reply {
            Ok(text) => Ok(CompletionResponse {
                id: "resp-stub".to_string(),
                content: text.clone(),
                model: "stub-model".to_string(),
                stop_reason: StopReason::EndTurn,
                usage: Usage::default(),
            }),
            Err(make) => Err(make()),
        }
    }
}

/// App state over a fresh temp directory; each script is one toolchain step.
pub(crate) fn state_with_toolchain(
    provider: StubProvider,
    scripts: &[&str],
) -> (TempDir, AppState) {
    let tmp = TempDir::new().unwrap();
    let settings = ToolchainSettings {
        root: tmp.path().to_path_buf(),
        ..Default::default()
    };
    let steps = scripts
        .iter()
        .map(|script| vec!["-c".to_string(), script.to_string()])
        .collect();
    let runner = ProcessToolchainRunner::new("sh", tmp.path(), steps, Duration::from_secs(10));
    let pipeline = ContractPipeline::new(
        BoxLlmProvider::new(provider),
        ArtifactWriter::new(LocalFileSystem::new(), &settings),
        runner,
        &LlmSettings::default(),
    );
    (tmp, AppState::new(pipeline, LoanRecord::default()))
}

/// Read a response body as JSON.
pub(crate) async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
