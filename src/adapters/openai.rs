/// OpenAI chat-completions adapter.

use crate::adapters::{CodeExtractor, PreparedRequest, TEMPERATURE};
use crate::config::LlmSettings;
use crate::error::{Error, Result};
use crate::prompt::SYSTEM_PROMPT;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fixed vendor endpoint; ignores whatever the settings form holds.
pub const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Chat message in the OpenAI request envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// OpenAI chat-completions request body.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl ChatRequest {
    /// Standard envelope for a page-edit prompt: fixed system directive
    /// plus the rendered user prompt. Shared with the custom provider.
    pub fn for_prompt(model: &str, user_prompt: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(user_prompt),
            ],
            temperature: TEMPERATURE,
        }
    }
}

/// Subset of the chat-completions response we consume.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Build the OpenAI request for one generation call.
pub fn prepare(settings: &LlmSettings, user_prompt: &str) -> Result<PreparedRequest> {
    let request = ChatRequest::for_prompt(&settings.model, user_prompt);
    Ok(PreparedRequest {
        url: CHAT_COMPLETIONS_URL.to_string(),
        headers: vec![
            ("Content-Type", "application/json".to_string()),
            ("Authorization", format!("Bearer {}", settings.api_key)),
        ],
        body: serde_json::to_value(&request)?,
    })
}

/// Pulls `choices[0].message.content` out of a chat-completions response.
pub struct OpenAiExtractor;

impl CodeExtractor for OpenAiExtractor {
    fn extract(&self, body: &Value) -> Result<String> {
        let response: ChatResponse = serde_json::from_value(body.clone())
            .map_err(|e| Error::Transport(format!("Failed to parse OpenAI response: {}", e)))?;
        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::Transport("OpenAI response contained no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Provider;
    use serde_json::json;

    #[test]
    fn test_prepare_targets_vendor_endpoint_with_bearer_auth() {
        let settings = LlmSettings::new(Provider::OpenAi, "sk-test");
        let prepared = prepare(&settings, "prompt text").unwrap();

        assert_eq!(prepared.url, CHAT_COMPLETIONS_URL);
        assert!(prepared
            .headers
            .contains(&("Authorization", "Bearer sk-test".to_string())));
        assert_eq!(prepared.body["model"], "gpt-4");
        let temperature = prepared.body["temperature"].as_f64().unwrap();
        assert!((temperature - 0.3).abs() < 1e-6);
        assert_eq!(prepared.body["messages"][0]["role"], "system");
        assert_eq!(prepared.body["messages"][1]["content"], "prompt text");
    }

    #[test]
    fn test_extract_first_choice_content() {
        let body = json!({
            "choices": [{"message": {"content": "```js\nalert(1)\n```"}}]
        });
        assert_eq!(
            OpenAiExtractor.extract(&body).unwrap(),
            "```js\nalert(1)\n```"
        );
    }

    #[test]
    fn test_extract_rejects_empty_choices() {
        let body = json!({"choices": []});
        assert!(matches!(
            OpenAiExtractor.extract(&body),
            Err(Error::Transport(_))
        ));
    }
}
