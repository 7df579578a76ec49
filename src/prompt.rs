/// Prompt construction for page-editing requests.
///
/// Pure string rendering, no I/O. The directive wording is a contract the
/// panel's tests assert on verbatim: the model must answer with executable
/// JavaScript only, no prose.

/// System role content sent to chat-completions style providers.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful web development assistant that writes JavaScript to modify HTML.";

/// Closing directive embedded in every user prompt.
pub const CODE_ONLY_DIRECTIVE: &str =
    "Analyze the HTML and provide JavaScript code that will make the requested changes.\n\
     Your response should be valid JavaScript that can be executed in the browser console to modify the DOM.\n\
     Use document.querySelector and similar DOM APIs to select and modify elements.\n\
     DO NOT include explanations, just return the JavaScript code to execute.";

/// Render the single instruction string for one generation call: the page
/// markup verbatim inside a fenced block, the user's literal request, and
/// the fixed code-only directive.
pub fn build_prompt(query: &str, html: &str) -> String {
    format!(
        "You are a helpful assistant that can modify HTML based on natural language requests.\n\
         The current HTML document is:\n\
         ```html\n\
         {html}\n\
         ```\n\
         \n\
         The user wants to: \"{query}\"\n\
         \n\
         {CODE_ONLY_DIRECTIVE}"
    )
}
