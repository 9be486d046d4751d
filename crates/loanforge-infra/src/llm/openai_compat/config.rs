//! Configuration and well-known base URLs for OpenAI-compatible providers.

use secrecy::SecretString;

/// Base URL used when neither the provider name nor settings supply one.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for an [`super::OpenAiCompatibleProvider`].
///
/// Does not derive Debug; the API key must never reach logs.
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai", "mistral").
    pub provider_name: String,
    /// Chat completions base URL (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    pub api_key: SecretString,
    /// Model used when a request leaves `model` empty.
    pub model: String,
}

/// Base URL for vendors that speak the OpenAI chat completions protocol.
///
/// Unknown names return `None`; callers fall back to [`OPENAI_BASE_URL`]
/// unless a base URL override is configured.
pub fn known_base_url(provider_name: &str) -> Option<&'static str> {
    match provider_name {
        "openai" => Some(OPENAI_BASE_URL),
        "gemini" => Some("https://generativelanguage.googleapis.com/v1beta/openai"),
        "mistral" => Some("https://api.mistral.ai/v1"),
        "glm" => Some("https://api.z.ai/api/paas/v4"),
        _ => None,
    }
}

/// OpenAI default configuration.
pub fn openai_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: OPENAI_BASE_URL.into(),
        api_key,
        model: model.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_base_urls() {
        assert_eq!(known_base_url("openai"), Some(OPENAI_BASE_URL));
        assert_eq!(known_base_url("mistral"), Some("https://api.mistral.ai/v1"));
        assert!(known_base_url("gemini").unwrap().contains("googleapis"));
        assert_eq!(known_base_url("local-llama"), None);
    }

    #[test]
    fn test_openai_defaults() {
        let config = openai_defaults(SecretString::from("sk-test".to_string()), "gpt-4o");
        assert_eq!(config.provider_name, "openai");
        assert_eq!(config.base_url, OPENAI_BASE_URL);
        assert_eq!(config.model, "gpt-4o");
    }
}
