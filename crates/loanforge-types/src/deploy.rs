//! Deployment results and toolchain output.

use serde::{Deserialize, Serialize};

/// Address reported when the toolchain succeeded but printed no address.
pub const PLACEHOLDER_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Message attached to an unconfirmed deployment.
pub const UNCONFIRMED_INFO: &str =
    "Deployment finished but no contract address was found in the toolchain output";

/// Result of a successful toolchain run.
///
/// Serializes with a `status` tag so clients can tell a confirmed address
/// apart from the placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DeploymentOutcome {
    /// The toolchain printed the deployed contract address.
    #[serde(rename_all = "camelCase")]
    Confirmed { contract_address: String },

    /// The toolchain exited cleanly but the address could not be scraped.
    #[serde(rename_all = "camelCase")]
    Unconfirmed { contract_address: String, info: String },
}

impl DeploymentOutcome {
    pub fn confirmed(contract_address: impl Into<String>) -> Self {
        Self::Confirmed {
            contract_address: contract_address.into(),
        }
    }

    pub fn unconfirmed() -> Self {
        Self::Unconfirmed {
            contract_address: PLACEHOLDER_ADDRESS.to_string(),
            info: UNCONFIRMED_INFO.to_string(),
        }
    }

    /// The reported address (the placeholder when unconfirmed).
    pub fn contract_address(&self) -> &str {
        match self {
            Self::Confirmed { contract_address } | Self::Unconfirmed { contract_address, .. } => {
                contract_address
            }
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }
}

/// Captured output of a toolchain run that exited successfully.
#[derive(Debug, Clone, Default)]
pub struct ToolchainOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Prompt and raw completion returned by the preview flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptPreview {
    pub prompt: String,
    pub generated_code: String,
}
