/// Custom-endpoint adapter for OpenAI-compatible backends.
///
/// Sends the OpenAI envelope to the user-configured endpoint. Custom
/// backends are unconstrained, so extraction probes the known response
/// shapes and otherwise hands back the serialized body wholesale. That
/// fallback is intentional leniency, not a bug: it can surface non-code
/// text to the page executor, and callers are expected to show the result
/// before running it.

use crate::adapters::openai::ChatRequest;
use crate::adapters::{AnthropicExtractor, CodeExtractor, OpenAiExtractor, PreparedRequest};
use crate::config::LlmSettings;
use crate::error::Result;
use serde_json::Value;

/// Build the request for one generation call against the configured
/// endpoint. Envelope and auth header match the OpenAI adapter; only the
/// target URL differs.
pub fn prepare(settings: &LlmSettings, user_prompt: &str) -> Result<PreparedRequest> {
    let request = ChatRequest::for_prompt(&settings.model, user_prompt);
    Ok(PreparedRequest {
        url: settings.endpoint.clone(),
        headers: vec![
            ("Content-Type", "application/json".to_string()),
            ("Authorization", format!("Bearer {}", settings.api_key)),
        ],
        body: serde_json::to_value(&request)?,
    })
}

/// Best-effort extraction for unconstrained backends: OpenAI shape first,
/// then Anthropic shape, then the whole body serialized as a string.
pub struct CustomExtractor;

impl CodeExtractor for CustomExtractor {
    fn extract(&self, body: &Value) -> Result<String> {
        if body.get("choices").is_some() {
            return OpenAiExtractor.extract(body);
        }
        if body.get("content").is_some() {
            return AnthropicExtractor.extract(body);
        }
        Ok(serde_json::to_string(body)?)
    }
}
