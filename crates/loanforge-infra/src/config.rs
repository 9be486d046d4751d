//! Configuration loader for loanforge.
//!
//! Reads `loanforge.toml` and deserializes it into [`ForgeConfig`]. Falls back
//! to defaults when the file is missing or malformed, so the server always
//! starts with the sample loan and a local `truffle` toolchain.

use std::path::Path;

use loanforge_types::config::ForgeConfig;

/// Load configuration from `path`.
///
/// - If the file does not exist, returns [`ForgeConfig::default()`].
/// - If the file cannot be read or parsed, logs a warning and returns the default.
/// - Otherwise returns the parsed config; omitted tables and fields keep their defaults.
pub async fn load_config(path: &Path) -> ForgeConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return ForgeConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ForgeConfig::default();
        }
    };

    match toml::from_str::<ForgeConfig>(&content) {
        Ok(config) => {
            tracing::debug!(
                contract = %config.loan.contract_name,
                model = %config.llm.model,
                toolchain = %config.toolchain.program,
                "Loaded config from {}",
                path.display()
            );
            config
        }
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            ForgeConfig::default()
        }
    }
}
