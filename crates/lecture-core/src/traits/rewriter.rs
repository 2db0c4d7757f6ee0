//! Rewrite collaborator (port)
//!
//! The language model that proposes new section text lives outside the core.
//! It receives the current text and the aggregated feedback and returns
//! replacement text, or fails.

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::FeedbackSummary;

/// Failures of the rewrite collaborator
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("Rewrite request timed out")]
    Timeout,

    #[error("Malformed rewrite response: {0}")]
    MalformedResponse(String),

    #[error("Rewrite quota exceeded")]
    QuotaExceeded,

    #[error("Rewrite service unavailable: {0}")]
    Unavailable(String),
}

/// Produces a rewritten section from its text and student feedback
#[async_trait]
pub trait SectionRewriter: Send + Sync {
    async fn rewrite(
        &self,
        original_text: &str,
        feedback: &FeedbackSummary,
    ) -> Result<String, RewriteError>;
}

/// Build the instruction prompt for a language-model backed rewriter
pub fn build_rewrite_prompt(original_text: &str, feedback: &FeedbackSummary) -> String {
    let feedback_json =
        serde_json::to_string_pretty(feedback).unwrap_or_else(|_| "{}".to_string());

    format!(
        "You are helping a professor improve lecture notes.\n\
         \n\
         Original section:\n\
         \"\"\"\n\
         {original_text}\n\
         \"\"\"\n\
         \n\
         Student feedback:\n\
         {feedback_json}\n\
         \n\
         Rewrite ONLY this section to reduce confusion while preserving technical accuracy.\n\
         Return ONLY the new text.\n"
    )
}
