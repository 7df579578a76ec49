use crate::adapters::ProviderAdapter;
use crate::config::SettingsSource;
use crate::error::{Error, Result};
use crate::executor::{self, PageExecutor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Arc;
use uuid::Uuid;

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
    /// Generated script awaiting user-approved execution.
    Code,
}

/// One entry in the panel's chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Sender::Bot, text)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(Sender::Code, text)
    }
}

/// Panel state across one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Idle,
    Requesting,
    Succeeded,
    Failed,
}

/// Greeting shown when the panel opens.
pub const WELCOME_MESSAGE: &str = "Welcome to ScriptBob! I can help you edit the HTML of this \
                                   page using natural language commands. Please type your request below.";

/// Chat controller driving the panel: snapshots the inspected page, asks
/// the provider adapter for code, and records everything in a transcript
/// for the host UI to render.
///
/// The adapter itself is stateless; all cross-call state (the transcript,
/// the last panel state) lives here.
pub struct ChatController {
    settings: Arc<dyn SettingsSource>,
    adapter: ProviderAdapter,
    executor: Arc<dyn PageExecutor>,
    state: PanelState,
    transcript: VecDeque<ChatMessage>,
}

impl ChatController {
    pub fn new(settings: Arc<dyn SettingsSource>, executor: Arc<dyn PageExecutor>) -> Self {
        let mut transcript = VecDeque::new();
        transcript.push_back(ChatMessage::bot(WELCOME_MESSAGE));
        Self {
            settings,
            adapter: ProviderAdapter::new(),
            executor,
            state: PanelState::Idle,
            transcript,
        }
    }

    /// Handle one user request end to end: snapshot the page, generate
    /// code, and record it as a `Code` transcript entry. Returns the
    /// generated code so the host can offer an "execute" affordance.
    ///
    /// Failures are recorded in the transcript in user-facing terms and
    /// also returned, so the host can react (e.g. open the settings form
    /// on `NotConfigured`).
    pub async fn handle_message(&mut self, query: impl Into<String>) -> Result<String> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(Error::InvalidRequest("empty query".to_string()));
        }

        self.transcript.push_back(ChatMessage::user(query.clone()));
        self.transcript.push_back(ChatMessage::bot("Analyzing page..."));

        let html = executor::page_html(self.executor.as_ref()).await;
        if html.is_empty() {
            self.state = PanelState::Failed;
            self.transcript.push_back(ChatMessage::bot(
                "Failed to get page HTML. Make sure you are on a valid webpage.",
            ));
            return Err(Error::Exec("page markup unavailable".to_string()));
        }

        self.transcript
            .push_back(ChatMessage::bot("Generating solution..."));
        self.state = PanelState::Requesting;

        let settings = self.settings.current();
        match self.adapter.generate(&settings, &query, &html).await {
            Ok(code) => {
                self.state = PanelState::Succeeded;
                self.transcript.push_back(ChatMessage::bot(
                    "Solution generated. Here is the code that will be executed:",
                ));
                self.transcript.push_back(ChatMessage::code(code.clone()));
                Ok(code)
            }
            Err(err) => {
                self.state = PanelState::Failed;
                let notice = if err.needs_settings() {
                    "Please configure your API settings first.".to_string()
                } else {
                    format!("Error: {}", err)
                };
                self.transcript.push_back(ChatMessage::bot(notice));
                Err(err)
            }
        }
    }

    /// Run a generated snippet in the inspected page and record the
    /// outcome. Execution is always user-initiated; nothing runs
    /// automatically after generation.
    pub async fn execute(&mut self, code: &str) -> Result<Value> {
        match self.executor.eval(code).await {
            Ok(value) => {
                self.transcript
                    .push_back(ChatMessage::bot("Code executed successfully!"));
                Ok(value)
            }
            Err(err) => {
                self.transcript
                    .push_back(ChatMessage::bot(format!("Error executing code: {}", err)));
                Err(err)
            }
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.iter().cloned().collect()
    }

    /// Reset the transcript to the fresh-open state: cleared, then
    /// re-greeted, the same as when the panel first loads.
    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
        self.transcript.push_back(ChatMessage::bot(WELCOME_MESSAGE));
        self.state = PanelState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LlmSettings, Provider};
    use crate::executor::StaticPageExecutor;

    fn controller_with(settings: LlmSettings, html: &str) -> ChatController {
        ChatController::new(
            Arc::new(settings),
            Arc::new(StaticPageExecutor::new(html)),
        )
    }

    #[test]
    fn test_controller_starts_idle_with_welcome() {
        let controller = controller_with(LlmSettings::default(), "<html></html>");
        assert_eq!(controller.state(), PanelState::Idle);

        let transcript = controller.transcript();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].sender, Sender::Bot);
        assert!(transcript[0].text.starts_with("Welcome to ScriptBob!"));
    }

    #[tokio::test]
    async fn test_unconfigured_settings_prompt_for_setup_without_io() {
        let mut controller = controller_with(
            LlmSettings::new(Provider::OpenAi, ""),
            "<html><body></body></html>",
        );

        let err = controller.handle_message("make it red").await.unwrap_err();
        assert!(err.needs_settings());
        assert_eq!(controller.state(), PanelState::Failed);

        let last = controller.transcript().last().unwrap().clone();
        assert_eq!(last.text, "Please configure your API settings first.");
    }

    #[tokio::test]
    async fn test_unavailable_page_fails_before_any_llm_call() {
        // Even with no credentials, the page snapshot failure wins: no
        // settings prompt should appear.
        let mut controller = controller_with(LlmSettings::new(Provider::OpenAi, ""), "");

        let err = controller.handle_message("make it red").await.unwrap_err();
        assert!(matches!(err, Error::Exec(_)));

        let last = controller.transcript().last().unwrap().clone();
        assert!(last.text.starts_with("Failed to get page HTML."));
    }

    #[tokio::test]
    async fn test_empty_query_is_ignored() {
        let mut controller = controller_with(LlmSettings::default(), "<html></html>");
        assert!(controller.handle_message("   ").await.is_err());
        // Nothing beyond the welcome message was recorded.
        assert_eq!(controller.transcript().len(), 1);
    }

    #[tokio::test]
    async fn test_execute_records_outcome() {
        let mut controller = controller_with(LlmSettings::default(), "<html></html>");
        let value = controller.execute("document.title = 'x'").await.unwrap();
        assert_eq!(value, Value::Null);

        let last = controller.transcript().last().unwrap().clone();
        assert_eq!(last.text, "Code executed successfully!");
    }

    #[tokio::test]
    async fn test_clear_transcript_restores_fresh_open_state() {
        let mut controller = controller_with(LlmSettings::new(Provider::OpenAi, ""), "<html></html>");
        let _ = controller.handle_message("make it red").await;
        assert!(controller.transcript().len() > 1);

        controller.clear_transcript();

        assert_eq!(controller.state(), PanelState::Idle);
        let transcript = controller.transcript();
        assert_eq!(transcript.len(), 1);
        assert!(transcript[0].text.starts_with("Welcome to ScriptBob!"));
    }

    #[test]
    fn test_chat_message_serializes_sender_tag() {
        let msg = ChatMessage::code("alert(1)");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["sender"], "code");
        assert_eq!(json["text"], "alert(1)");
    }
}
