//! ScriptBob - natural-language page editing for devtools panels
//!
//! This library backs a browser-devtools panel: the user describes a change
//! to the inspected page in plain language, the crate forwards that request
//! plus the page's current markup to a configurable LLM provider, and the
//! generated script is offered back for execution in the page.
//!
//! ## Features
//! - Provider-abstracted request/response adapter (OpenAI, Anthropic,
//!   custom OpenAI-compatible endpoints)
//! - Deterministic prompt construction with a code-only directive
//! - Response normalization to a single fence-stripped code string
//! - Chat controller with transcript and page-executor seam
//! - Structured error taxonomy (not-configured / API / transport)
//! - .env file support for configuration

/// Load environment variables from .env file
/// Call this in your main() function before building settings
pub fn load_env() {
    dotenv::dotenv().ok();
}

pub mod adapters;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod panel;
pub mod prompt;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::adapters::{CodeExtractor, PreparedRequest, ProviderAdapter};
    pub use crate::config::{LlmSettings, Provider, SettingsSource};
    pub use crate::error::{Error, Result};
    pub use crate::executor::{PageExecutor, StaticPageExecutor};
    pub use crate::panel::{ChatController, ChatMessage, PanelState, Sender};
}
