//! Completion provider implementations.
//!
//! Contains the concrete implementation of the [`LlmProvider`] trait defined
//! in `loanforge-core`, plus a factory ([`create_provider`]) that builds it
//! from [`LlmSettings`].
//!
//! [`LlmProvider`]: loanforge_core::llm::provider::LlmProvider

pub mod openai_compat;

use secrecy::{ExposeSecret, SecretString};

use loanforge_core::llm::box_provider::BoxLlmProvider;
use loanforge_types::config::LlmSettings;
use loanforge_types::llm::LlmError;

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::{OPENAI_BASE_URL, OpenAiCompatConfig, known_base_url};

/// Create a [`BoxLlmProvider`] from [`LlmSettings`].
///
/// The base URL is the configured override if present, otherwise the
/// provider's well-known URL, otherwise OpenAI's.
///
/// # Errors
///
/// Returns [`LlmError::AuthenticationFailed`] if the API key is empty.
pub fn create_provider(
    settings: &LlmSettings,
    api_key: &SecretString,
) -> Result<BoxLlmProvider, LlmError> {
    if api_key.expose_secret().trim().is_empty() {
        return Err(LlmError::AuthenticationFailed);
    }

    let base_url = match settings.base_url.as_deref() {
        Some(url) => url.to_string(),
        None => match known_base_url(&settings.provider) {
            Some(url) => url.to_string(),
            None => {
                tracing::warn!(
                    provider = %settings.provider,
                    "Unknown provider without base_url, using OpenAI endpoint"
                );
                OPENAI_BASE_URL.to_string()
            }
        },
    };

    tracing::debug!(
        provider = %settings.provider,
        model = %settings.model,
        base_url = %base_url,
        "Creating completion provider"
    );

    let provider = OpenAiCompatibleProvider::new(OpenAiCompatConfig {
        provider_name: settings.provider.clone(),
        base_url,
        api_key: SecretString::from(api_key.expose_secret().to_string()),
        model: settings.model.clone(),
    });
    Ok(BoxLlmProvider::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_openai_provider() {
        let key = SecretString::from("sk-test".to_string());
        let provider = create_provider(&LlmSettings::default(), &key).unwrap();
        assert_eq!(provider.name(), "openai");
        assert_eq!(provider.default_model(), "gpt-4o");
    }

    #[test]
    fn test_create_provider_with_base_url_override() {
        let settings = LlmSettings {
            provider: "local-proxy".to_string(),
            base_url: Some("http://localhost:8080/v1".to_string()),
            model: "llama-3.1-70b".to_string(),
            ..Default::default()
        };
        let key = SecretString::from("dummy".to_string());
        let provider = create_provider(&settings, &key).unwrap();
        assert_eq!(provider.name(), "local-proxy");
        assert_eq!(provider.default_model(), "llama-3.1-70b");
    }

    #[test]
    fn test_create_provider_rejects_empty_key() {
        let key = SecretString::from("  ".to_string());
        let result = create_provider(&LlmSettings::default(), &key);
        assert!(matches!(result, Err(LlmError::AuthenticationFailed)));
    }
}
