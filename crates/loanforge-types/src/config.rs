//! Configuration types for loanforge.
//!
//! `ForgeConfig` represents the top-level `loanforge.toml` that controls the
//! completion provider, the external toolchain, and the loan being encoded.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::loan::LoanRecord;

/// Top-level configuration. Every table and field has a default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    pub llm: LlmSettings,
    pub toolchain: ToolchainSettings,
    pub loan: LoanRecord,
}

/// Completion provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Provider name ("openai", or any OpenAI-compatible vendor with `base_url`).
    pub provider: String,
    /// Override the provider's default base URL.
    pub base_url: Option<String>,
    pub model: String,
    pub max_tokens: Option<u32>,
    /// Upper bound on a single completion call.
    pub request_timeout_secs: u64,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            base_url: None,
            model: "gpt-4o".to_string(),
            max_tokens: None,
            request_timeout_secs: 120,
        }
    }
}

/// External build/deploy toolchain settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainSettings {
    /// Executable invoked for both steps (`compile`, `migrate`).
    pub program: String,
    /// Network name passed to `migrate --network`.
    pub network: String,
    /// Project root; the subprocess working directory.
    pub root: PathBuf,
    /// Generated sources, relative to `root`.
    pub contracts_dir: PathBuf,
    /// Generated migration scripts, relative to `root`.
    pub migrations_dir: PathBuf,
    pub source_extension: String,
    pub script_extension: String,
    /// Upper bound on the whole compile + migrate run.
    pub timeout_secs: u64,
}

impl ToolchainSettings {
    pub fn contracts_path(&self) -> PathBuf {
        self.root.join(&self.contracts_dir)
    }

    pub fn migrations_path(&self) -> PathBuf {
        self.root.join(&self.migrations_dir)
    }

    /// Argument lists for each toolchain step, in execution order.
    pub fn steps(&self) -> Vec<Vec<String>> {
        vec![
            vec!["compile".to_string()],
            vec![
                "migrate".to_string(),
                "--reset".to_string(),
                "--network".to_string(),
                self.network.clone(),
            ],
        ]
    }
}

impl Default for ToolchainSettings {
    fn default() -> Self {
        Self {
            program: "truffle".to_string(),
            network: "development".to_string(),
            root: PathBuf::from("."),
            contracts_dir: PathBuf::from("contracts"),
            migrations_dir: PathBuf::from("migrations"),
            source_extension: "sol".to_string(),
            script_extension: "js".to_string(),
            timeout_secs: 300,
        }
    }
}
