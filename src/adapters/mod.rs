/// Provider adapters for OpenAI, Anthropic, and custom OpenAI-compatible
/// backends.
///
/// Each provider module knows how to build its vendor's request envelope and
/// how to pull the generated code back out of its response shape. The
/// `ProviderAdapter` front end dispatches on the configured provider tag,
/// issues exactly one POST per call, and reduces every vendor response to a
/// single fence-stripped code string.

pub mod anthropic;
pub mod custom;
pub mod openai;

pub use anthropic::AnthropicExtractor;
pub use custom::CustomExtractor;
pub use openai::OpenAiExtractor;

use crate::config::{LlmSettings, Provider};
use crate::error::{Error, Result};
use crate::prompt;
use serde_json::Value;

/// Sampling temperature used in every provider envelope. Low on purpose:
/// page edits should be predictable, not creative.
pub const TEMPERATURE: f32 = 0.3;

/// A fully rendered vendor request, ready to dispatch.
///
/// Kept separate from the HTTP call so request construction stays pure:
/// tests assert on the exact URL, headers, and body without a live server.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Value,
}

/// Per-provider response normalization.
///
/// One implementation per provider tag; each knows where its vendor puts the
/// generated text inside the response JSON.
pub trait CodeExtractor: Send + Sync {
    fn extract(&self, body: &Value) -> Result<String>;
}

/// Look up the extractor for a provider tag.
pub fn extractor_for(provider: Provider) -> &'static dyn CodeExtractor {
    match provider {
        Provider::OpenAi => &OpenAiExtractor,
        Provider::Anthropic => &AnthropicExtractor,
        Provider::Custom => &CustomExtractor,
    }
}

/// Remove markdown code-fence markers (``` with an optional `javascript` or
/// `js` tag) and surrounding whitespace from generated text.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```javascript", "")
        .replace("```js", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Stateless front end over the three provider backends.
///
/// Holds only the HTTP client; every call is independent, so concurrent
/// calls share nothing and switching providers between calls leaves no
/// residual state.
pub struct ProviderAdapter {
    client: reqwest::Client,
}

impl Default for ProviderAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderAdapter {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Build the vendor request for one generation call.
    ///
    /// Fails with `NotConfigured` before anything else when the credential
    /// is missing, so callers can open the settings form without having
    /// attempted any I/O.
    pub fn prepare(
        &self,
        settings: &LlmSettings,
        query: &str,
        html: &str,
    ) -> Result<PreparedRequest> {
        if !settings.is_configured() {
            return Err(Error::NotConfigured);
        }

        let user_prompt = prompt::build_prompt(query, html);
        match settings.provider {
            Provider::OpenAi => openai::prepare(settings, &user_prompt),
            Provider::Anthropic => anthropic::prepare(settings, &user_prompt),
            Provider::Custom => custom::prepare(settings, &user_prompt),
        }
    }

    /// Generate page-editing code for a user query against a page snapshot.
    ///
    /// Issues exactly one POST; no retries, no timeout beyond the transport
    /// default. Non-2xx statuses become `Error::Api`, network and JSON
    /// failures become `Error::Transport`, and on success the vendor
    /// response is normalized to a fence-stripped code string.
    pub async fn generate(
        &self,
        settings: &LlmSettings,
        query: &str,
        html: &str,
    ) -> Result<String> {
        let request = self.prepare(settings, query, html)?;
        log::debug!(
            "dispatching generation request to {} ({:?})",
            request.url,
            settings.provider
        );

        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }

        let response = builder
            .json(&request.body)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            log::error!("provider returned status {}", status);
            return Err(Error::Api {
                status: status.as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::Transport(format!("failed to read response body: {}", e)))?;

        let code = extractor_for(settings.provider).extract(&body)?;
        Ok(strip_code_fences(&code))
    }
}
