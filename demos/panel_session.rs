//! Example: full panel session against a canned page
//!
//! Drives the ChatController the way a devtools panel host would: a
//! StaticPageExecutor stands in for the inspected page, the controller
//! snapshots its markup, asks the provider for code, and "executes" the
//! result. The transcript is printed at the end.
//!
//! Requires OPENAI_API_KEY to be set in .env or the environment.
//!
//! Run with:
//! ```bash
//! cargo run --example panel_session
//! ```

use scriptbob::prelude::*;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    scriptbob::load_env();
    scriptbob::logging::init_logging(scriptbob::logging::LogLevel::Info);

    let settings = LlmSettings::new(
        Provider::OpenAi,
        std::env::var("OPENAI_API_KEY").unwrap_or_default(),
    );

    let page = StaticPageExecutor::new(
        r#"<html><body><h1 id="title">Store</h1><ul id="items"><li>apples</li></ul></body></html>"#,
    );

    let mut controller = ChatController::new(Arc::new(settings), Arc::new(page));

    println!("🤖 ScriptBob panel session\n");

    match controller
        .handle_message("add a list item that says 'oranges'")
        .await
    {
        Ok(code) => {
            println!("Generated code, executing in page...\n");
            if let Err(e) = controller.execute(&code).await {
                eprintln!("execution failed: {}", e);
            }
        }
        Err(e) if e.needs_settings() => {
            eprintln!("❌ Configure an API key first (OPENAI_API_KEY).");
        }
        Err(e) => eprintln!("❌ {}", e),
    }

    println!("\n📜 Transcript:");
    for message in controller.transcript() {
        println!("[{:?}] {}", message.sender, message.text);
    }

    Ok(())
}
