//! Example: direct ProviderAdapter use
//!
//! Sends one page-edit request straight to the configured provider and
//! prints the generated code without executing anything.
//!
//! Requires OPENAI_API_KEY (or ANTHROPIC_API_KEY with --anthropic) to be
//! set in .env or the environment.
//!
//! Run with:
//! ```bash
//! cargo run --example generate_code
//! ```

use scriptbob::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    scriptbob::load_env();
    scriptbob::logging::init_logging(scriptbob::logging::LogLevel::Info);

    let anthropic = std::env::args().any(|a| a == "--anthropic");
    let settings = if anthropic {
        LlmSettings::new(
            Provider::Anthropic,
            std::env::var("ANTHROPIC_API_KEY").unwrap_or_default(),
        )
    } else {
        LlmSettings::new(
            Provider::OpenAi,
            std::env::var("OPENAI_API_KEY").unwrap_or_default(),
        )
    };

    let html = r#"<html><body><h1 id="title">Hello</h1><p>Welcome.</p></body></html>"#;
    let query = "make the heading text red and twice as large";

    println!("🔧 Provider: {:?}", settings.provider);
    println!("📝 Request: {}\n", query);

    let adapter = ProviderAdapter::new();
    match adapter.generate(&settings, query, html).await {
        Ok(code) => {
            println!("✅ Generated code:\n");
            println!("{}", code);
        }
        Err(e) if e.needs_settings() => {
            eprintln!("❌ No API key configured. Set OPENAI_API_KEY or ANTHROPIC_API_KEY.");
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
        }
    }

    Ok(())
}
