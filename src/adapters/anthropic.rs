/// Anthropic Claude adapter.

use crate::adapters::{CodeExtractor, PreparedRequest, TEMPERATURE};
use crate::config::LlmSettings;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed vendor endpoint; ignores whatever the settings form holds.
pub const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";

/// Vendor API version header value.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Response length cap for generated scripts.
pub const MAX_TOKENS: i32 = 2000;

/// Message in the Anthropic request envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageParam {
    pub role: String,
    pub content: String,
}

/// Anthropic messages request body. Unlike the OpenAI envelope there is no
/// system message; the whole instruction travels as a single user turn.
#[derive(Debug, Serialize)]
pub struct MessagesRequest {
    pub model: String,
    pub messages: Vec<MessageParam>,
    pub temperature: f32,
    pub max_tokens: i32,
}

/// Subset of the messages response we consume.
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: String,
}

/// Build the Anthropic request for one generation call.
pub fn prepare(settings: &LlmSettings, user_prompt: &str) -> Result<PreparedRequest> {
    let request = MessagesRequest {
        model: settings.model.clone(),
        messages: vec![MessageParam {
            role: "user".to_string(),
            content: user_prompt.to_string(),
        }],
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    };
    Ok(PreparedRequest {
        url: MESSAGES_URL.to_string(),
        headers: vec![
            ("Content-Type", "application/json".to_string()),
            ("x-api-key", settings.api_key.clone()),
            ("anthropic-version", ANTHROPIC_VERSION.to_string()),
        ],
        body: serde_json::to_value(&request)?,
    })
}

/// Pulls `content[0].text` out of a messages response.
pub struct AnthropicExtractor;

impl CodeExtractor for AnthropicExtractor {
    fn extract(&self, body: &Value) -> Result<String> {
        let response: MessagesResponse = serde_json::from_value(body.clone())
            .map_err(|e| Error::Transport(format!("Failed to parse Anthropic response: {}", e)))?;
        response
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or_else(|| {
                Error::Transport("Anthropic response contained no content blocks".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Provider;
    use serde_json::json;

    #[test]
    fn test_prepare_sets_vendor_headers_and_envelope() {
        let settings = LlmSettings::new(Provider::Anthropic, "sk-ant-test");
        let prepared = prepare(&settings, "prompt text").unwrap();

        assert_eq!(prepared.url, MESSAGES_URL);
        assert!(prepared
            .headers
            .contains(&("x-api-key", "sk-ant-test".to_string())));
        assert!(prepared
            .headers
            .contains(&("anthropic-version", "2023-06-01".to_string())));

        assert_eq!(prepared.body["model"], "claude-2");
        assert_eq!(prepared.body["max_tokens"], json!(2000));
        let messages = prepared.body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[0]["content"], "prompt text");
    }

    #[test]
    fn test_extract_first_content_block() {
        let body = json!({"content": [{"text": "document.title='x'"}]});
        assert_eq!(
            AnthropicExtractor.extract(&body).unwrap(),
            "document.title='x'"
        );
    }

    #[test]
    fn test_extract_rejects_missing_content() {
        let body = json!({"id": "msg_1"});
        assert!(matches!(
            AnthropicExtractor.extract(&body),
            Err(Error::Transport(_))
        ));
    }
}
