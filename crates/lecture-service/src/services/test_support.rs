//! Shared fakes for service unit tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use lecture_core::traits::{LectureStore, SectionRewriter};
use lecture_core::{FeedbackSummary, RewriteError, SuggestionPolicy};
use lecture_store::InMemoryLectureStore;

use super::ServiceContext;

/// Rewriter that prefixes the original text and counts its calls
#[derive(Default)]
pub(crate) struct EchoRewriter {
    pub calls: AtomicUsize,
}

#[async_trait]
impl SectionRewriter for EchoRewriter {
    async fn rewrite(
        &self,
        original_text: &str,
        _feedback: &FeedbackSummary,
    ) -> Result<String, RewriteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("  Clearer: {original_text}\n"))
    }
}

/// Rewriter that always times out
pub(crate) struct TimeoutRewriter;

#[async_trait]
impl SectionRewriter for TimeoutRewriter {
    async fn rewrite(&self, _: &str, _: &FeedbackSummary) -> Result<String, RewriteError> {
        Err(RewriteError::Timeout)
    }
}

/// Rewriter that answers with whitespace only
pub(crate) struct BlankRewriter;

#[async_trait]
impl SectionRewriter for BlankRewriter {
    async fn rewrite(&self, _: &str, _: &FeedbackSummary) -> Result<String, RewriteError> {
        Ok(" \n\t ".to_string())
    }
}

pub(crate) fn demo_context(rewriter: Arc<dyn SectionRewriter>) -> (ServiceContext, Arc<InMemoryLectureStore>) {
    let store = Arc::new(InMemoryLectureStore::with_demo_content());
    let ctx = ServiceContext::new(
        store.clone() as Arc<dyn LectureStore>,
        rewriter,
        SuggestionPolicy::default(),
    );
    (ctx, store)
}
