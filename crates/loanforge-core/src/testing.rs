//! In-memory test doubles for the core ports.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use loanforge_types::deploy::ToolchainOutput;
use loanforge_types::error::DeployError;
use loanforge_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};

use crate::fs::FileSystem;
use crate::llm::provider::LlmProvider;
use crate::toolchain::ToolchainRunner;

// --- Filesystem ---

#[derive(Default)]
struct MemoryState {
    files: HashMap<PathBuf, String>,
    dirs: HashSet<PathBuf>,
    failing_prefix: Option<PathBuf>,
}

/// Shared in-memory filesystem; clones see the same files.
#[derive(Clone, Default)]
pub struct MemoryFileSystem {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &Path) -> Option<String> {
        self.state.lock().unwrap().files.get(path).cloned()
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.state.lock().unwrap().dirs.contains(path)
    }

    pub fn file_count(&self) -> usize {
        self.state.lock().unwrap().files.len()
    }

    /// Make every write under `prefix` fail with `PermissionDenied`.
    pub fn fail_writes_under(&self, prefix: impl Into<PathBuf>) {
        self.state.lock().unwrap().failing_prefix = Some(prefix.into());
    }
}

impl FileSystem for MemoryFileSystem {
    async fn write_file(&self, path: &Path, content: &str) -> Result<(), std::io::Error> {
        let mut state = self.state.lock().unwrap();
        if let Some(prefix) = &state.failing_prefix {
            if path.starts_with(prefix) {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only",
                ));
            }
        }
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    async fn read_file(&self, path: &Path) -> Result<String, std::io::Error> {
        self.get(path)
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
    }

    async fn create_dir_all(&self, path: &Path) -> Result<(), std::io::Error> {
        self.state.lock().unwrap().dirs.insert(path.to_path_buf());
        Ok(())
    }

    async fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }
}

// --- LLM provider ---

enum MockReply {
    Text(String),
    Error(fn() -> LlmError),
}

/// Provider returning a fixed reply and recording every request.
pub struct MockProvider {
    reply: MockReply,
    delay: Duration,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockProvider {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: MockReply::Text(text.to_string()),
            delay: Duration::ZERO,
            requests: Arc::default(),
        }
    }

    pub fn failing(error: fn() -> LlmError) -> Self {
        Self {
            reply: MockReply::Error(error),
            delay: Duration::ZERO,
            requests: Arc::default(),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.reply {
            MockReply::Text(text) => Ok(CompletionResponse {
                id: "resp-mock".to_string(),
                content: text.clone(),
                model: "mock-model".to_string(),
                stop_reason: StopReason::EndTurn,
                usage: Usage {
                    input_tokens: 10,
                    output_tokens: 20,
                },
            }),
            MockReply::Error(make) => Err(make()),
        }
    }
}

// --- Toolchain runner ---

enum MockRun {
    Success(String),
    Exit { stdout: String, stderr: String },
}

/// Runner with a canned result that tracks how many runs overlap.
#[derive(Clone)]
pub struct MockRunner {
    result: Arc<MockRun>,
    delay: Duration,
    pub calls: Arc<AtomicUsize>,
    active: Arc<AtomicUsize>,
    pub max_active: Arc<AtomicUsize>,
}

impl MockRunner {
    fn with_result(result: MockRun) -> Self {
        Self {
            result: Arc::new(result),
            delay: Duration::ZERO,
            calls: Arc::default(),
            active: Arc::default(),
            max_active: Arc::default(),
        }
    }

    pub fn succeeding(stdout: &str) -> Self {
        Self::with_result(MockRun::Success(stdout.to_string()))
    }

    pub fn exiting_nonzero(stdout: &str, stderr: &str) -> Self {
        Self::with_result(MockRun::Exit {
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        })
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl ToolchainRunner for MockRunner {
    async fn run(&self) -> Result<ToolchainOutput, DeployError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now_active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(now_active, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.active.fetch_sub(1, Ordering::SeqCst);

        match self.result.as_ref() {
            MockRun::Success(stdout) => Ok(ToolchainOutput {
                stdout: stdout.clone(),
                stderr: String::new(),
            }),
            MockRun::Exit { stdout, stderr } => Err(DeployError::Failed {
                command: "truffle migrate".to_string(),
                status: "exit status: 1".to_string(),
                stdout: stdout.clone(),
                stderr: stderr.clone(),
            }),
        }
    }
}
