/// Page-executor capability.
///
/// The host environment (a devtools panel) owns the actual mechanism for
/// evaluating script in the inspected page; this crate only sees it as an
/// async capability. The provider adapter never touches it — only the
/// panel controller does.

use crate::error::Result;
use serde_json::Value;

/// Expression evaluated to snapshot the inspected document's markup.
pub const PAGE_HTML_EXPR: &str = "document.documentElement.outerHTML";

/// Capability to evaluate script in the inspected page.
#[async_trait::async_trait]
pub trait PageExecutor: Send + Sync {
    /// Evaluate `code` in the inspected page and return its result value.
    /// Exceptions raised by the page surface as `Error::Exec`.
    async fn eval(&self, code: &str) -> Result<Value>;
}

/// Snapshot the inspected document's markup. Returns an empty string when
/// the page is unavailable; callers treat that as "no page to edit".
pub async fn page_html(executor: &dyn PageExecutor) -> String {
    match executor.eval(PAGE_HTML_EXPR).await {
        Ok(Value::String(html)) => html,
        Ok(_) | Err(_) => String::new(),
    }
}

/// Executor stub serving a fixed document (for demos and tests).
pub struct StaticPageExecutor {
    html: String,
}

impl StaticPageExecutor {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

#[async_trait::async_trait]
impl PageExecutor for StaticPageExecutor {
    async fn eval(&self, code: &str) -> Result<Value> {
        if code == PAGE_HTML_EXPR {
            return Ok(Value::String(self.html.clone()));
        }
        // Any other script "runs" successfully with no result.
        Ok(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    struct FailingExecutor;

    #[async_trait::async_trait]
    impl PageExecutor for FailingExecutor {
        async fn eval(&self, _code: &str) -> Result<Value> {
            Err(Error::Exec("page is not available".to_string()))
        }
    }

    #[tokio::test]
    async fn test_page_html_snapshots_markup() {
        let executor = StaticPageExecutor::new("<html><body></body></html>");
        assert_eq!(page_html(&executor).await, "<html><body></body></html>");
    }

    #[tokio::test]
    async fn test_page_html_empty_when_eval_fails() {
        assert_eq!(page_html(&FailingExecutor).await, "");
    }

    #[tokio::test]
    async fn test_static_executor_runs_arbitrary_code() {
        let executor = StaticPageExecutor::new("<html></html>");
        let result = executor.eval("document.title = 'x'").await.unwrap();
        assert_eq!(result, Value::Null);
    }
}
