//! Test fixtures and fake rewriters
//!
//! Provides reusable rewrite collaborators and request builders.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use lecture_core::{build_rewrite_prompt, FeedbackSummary, LectureStore, RewriteError, SectionRewriter};
use lecture_service::dto::CreateReactionRequest;
use parking_lot::Mutex;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Reaction request from a fresh student
pub fn reaction(lecture_id: &str, section_id: &str, kind: &str) -> CreateReactionRequest {
    CreateReactionRequest::new(
        lecture_id,
        section_id,
        format!("student-{}", unique_suffix()),
        kind,
    )
}

// ============================================================================
// Rewriters
// ============================================================================

/// Answers every call with the same text
pub struct FixedRewriter {
    text: String,
}

impl FixedRewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl SectionRewriter for FixedRewriter {
    async fn rewrite(&self, _: &str, _: &FeedbackSummary) -> Result<String, RewriteError> {
        Ok(self.text.clone())
    }
}

/// Replays a queue of outcomes, one per call
#[derive(Default)]
pub struct ScriptedRewriter {
    script: Mutex<VecDeque<Result<String, RewriteError>>>,
}

impl ScriptedRewriter {
    pub fn new(script: impl IntoIterator<Item = Result<String, RewriteError>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
        }
    }
}

#[async_trait]
impl SectionRewriter for ScriptedRewriter {
    async fn rewrite(&self, _: &str, _: &FeedbackSummary) -> Result<String, RewriteError> {
        self.script
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(RewriteError::Unavailable("script exhausted".to_string())))
    }
}

/// One call observed by `RecordingRewriter`
#[derive(Debug, Clone)]
pub struct RewriteCall {
    pub original_text: String,
    pub feedback: FeedbackSummary,
    pub prompt: String,
}

/// Records every call and answers with an upper-cased copy of the input
#[derive(Default)]
pub struct RecordingRewriter {
    calls: Mutex<Vec<RewriteCall>>,
}

impl RecordingRewriter {
    pub fn calls(&self) -> Vec<RewriteCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl SectionRewriter for RecordingRewriter {
    async fn rewrite(
        &self,
        original_text: &str,
        feedback: &FeedbackSummary,
    ) -> Result<String, RewriteError> {
        self.calls.lock().push(RewriteCall {
            original_text: original_text.to_string(),
            feedback: feedback.clone(),
            prompt: build_rewrite_prompt(original_text, feedback),
        });
        Ok(format!("\n{}  ", original_text.to_uppercase()))
    }
}

/// Edits the section through the store while the rewrite is in flight
pub struct EditingRewriter {
    store: Arc<dyn LectureStore>,
    lecture_id: String,
    section_id: String,
    edited_text: String,
}

impl EditingRewriter {
    pub fn new(
        store: Arc<dyn LectureStore>,
        lecture_id: &str,
        section_id: &str,
        edited_text: &str,
    ) -> Self {
        Self {
            store,
            lecture_id: lecture_id.to_string(),
            section_id: section_id.to_string(),
            edited_text: edited_text.to_string(),
        }
    }
}

#[async_trait]
impl SectionRewriter for EditingRewriter {
    async fn rewrite(&self, _: &str, _: &FeedbackSummary) -> Result<String, RewriteError> {
        self.store
            .update_section_text(&self.lecture_id, &self.section_id, &self.edited_text)
            .await
            .map_err(|e| RewriteError::Unavailable(e.to_string()))?;
        Ok("Rewritten while the section changed".to_string())
    }
}
