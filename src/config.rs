/// Settings model for the panel's LLM connection
use serde::{Deserialize, Serialize};

/// Supported LLM backends.
///
/// `OpenAi` and `Anthropic` use fixed vendor endpoints; `Custom` sends the
/// OpenAI-style envelope to whatever endpoint the user configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    OpenAi,
    Anthropic,
    Custom,
}

impl Provider {
    /// Endpoint pre-filled in the settings form for this provider.
    /// Only authoritative for `Custom`; the fixed providers always dispatch
    /// to their vendor endpoint regardless of what the form holds.
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Provider::OpenAi => "https://api.openai.com/v1/chat/completions",
            Provider::Anthropic => "https://api.anthropic.com/v1/messages",
            Provider::Custom => "",
        }
    }

    /// Model pre-filled in the settings form for this provider.
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::OpenAi => "gpt-4",
            Provider::Anthropic => "claude-2",
            Provider::Custom => "",
        }
    }
}

/// Connection settings for a single LLM backend.
///
/// Treated as a value type: built by the host's settings form, passed into
/// each call, never mutated by the adapter. An empty `api_key` means "not
/// configured yet" and short-circuits any request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmSettings {
    pub provider: Provider,

    /// Opaque credential; empty string is the "not configured" sentinel.
    #[serde(rename = "apiKey")]
    pub api_key: String,

    /// Request target when `provider` is `Custom`; informational otherwise.
    pub endpoint: String,

    /// Vendor-specific model identifier.
    pub model: String,
}

impl LlmSettings {
    /// Create settings for a fixed provider, pre-filled with its defaults.
    pub fn new(provider: Provider, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            endpoint: provider.default_endpoint().to_string(),
            model: provider.default_model().to_string(),
        }
    }

    /// Create settings for a custom OpenAI-compatible endpoint.
    pub fn custom(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            provider: Provider::Custom,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    /// Override the model variant.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self::new(Provider::OpenAi, "")
    }
}

/// Source of the panel's current settings.
///
/// The host environment owns persistence (the original stores them under a
/// `llmSettings` storage key); the controller only ever asks for the
/// current value.
pub trait SettingsSource: Send + Sync {
    fn current(&self) -> LlmSettings;
}

impl SettingsSource for LlmSettings {
    fn current(&self) -> LlmSettings {
        self.clone()
    }
}
