//! Service context - dependency container for services
//!
//! Holds the content store, the rewrite collaborator, and the gating policy.

use std::sync::Arc;

use lecture_core::traits::{LectureStore, SectionRewriter};
use lecture_core::SuggestionPolicy;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every service borrows it for the duration of a call.
#[derive(Clone)]
pub struct ServiceContext {
    store: Arc<dyn LectureStore>,
    rewriter: Arc<dyn SectionRewriter>,
    policy: SuggestionPolicy,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(
        store: Arc<dyn LectureStore>,
        rewriter: Arc<dyn SectionRewriter>,
        policy: SuggestionPolicy,
    ) -> Self {
        Self {
            store,
            rewriter,
            policy,
        }
    }

    /// Start a builder
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    /// Get the lecture store
    pub fn store(&self) -> &dyn LectureStore {
        self.store.as_ref()
    }

    /// Get the rewrite collaborator
    pub fn rewriter(&self) -> &dyn SectionRewriter {
        self.rewriter.as_ref()
    }

    /// Get the suggestion gating policy
    pub fn policy(&self) -> &SuggestionPolicy {
        &self.policy
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("store", &"LectureStore")
            .field("rewriter", &"SectionRewriter")
            .field("policy", &self.policy)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    store: Option<Arc<dyn LectureStore>>,
    rewriter: Option<Arc<dyn SectionRewriter>>,
    policy: Option<SuggestionPolicy>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(mut self, store: Arc<dyn LectureStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn rewriter(mut self, rewriter: Arc<dyn SectionRewriter>) -> Self {
        self.rewriter = Some(rewriter);
        self
    }

    pub fn policy(mut self, policy: SuggestionPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Build the ServiceContext; the policy falls back to its defaults
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the store or rewriter is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.store
                .ok_or_else(|| ServiceError::validation("store is required"))?,
            self.rewriter
                .ok_or_else(|| ServiceError::validation("rewriter is required"))?,
            self.policy.unwrap_or_default(),
        ))
    }
}
