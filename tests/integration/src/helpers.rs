//! Test helpers for integration tests
//!
//! Wires a `ServiceContext` over a fresh in-memory store and exposes
//! shortcuts for the steps every scenario repeats.

use std::sync::Arc;

use anyhow::Result;
use lecture_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use lecture_core::{Decision, LectureStore, SectionRewriter, SuggestionPolicy};
use lecture_service::dto::{GenerationResponse, LectureResponse, SectionResponse};
use lecture_service::{LectureService, ReactionService, ServiceContext, SuggestionService};
use lecture_store::InMemoryLectureStore;
use tracing::Level;

use crate::fixtures::reaction;

/// Service context plus direct access to the backing store
pub struct TestApp {
    pub ctx: ServiceContext,
    pub store: Arc<InMemoryLectureStore>,
}

impl TestApp {
    /// Demo lectures, default policy
    pub fn new(rewriter: Arc<dyn SectionRewriter>) -> Self {
        Self::with_store(
            Arc::new(InMemoryLectureStore::with_demo_content()),
            rewriter,
            SuggestionPolicy::default(),
        )
    }

    /// Custom store and policy
    pub fn with_store(
        store: Arc<InMemoryLectureStore>,
        rewriter: Arc<dyn SectionRewriter>,
        policy: SuggestionPolicy,
    ) -> Self {
        init_test_tracing();
        let ctx = ServiceContext::builder()
            .store(store.clone() as Arc<dyn LectureStore>)
            .rewriter(rewriter)
            .policy(policy)
            .build()
            .expect("store and rewriter are set");
        Self { ctx, store }
    }

    /// Build the app the way a binary would, from configuration
    pub fn from_config(config: &AppConfig, rewriter: Arc<dyn SectionRewriter>) -> Self {
        let store = if config.store.seed_demo_content {
            InMemoryLectureStore::with_demo_content()
        } else {
            InMemoryLectureStore::new()
        };
        Self::with_store(Arc::new(store), rewriter, config.suggestion_policy())
    }

    pub fn lectures(&self) -> LectureService<'_> {
        LectureService::new(&self.ctx)
    }

    pub fn reactions(&self) -> ReactionService<'_> {
        ReactionService::new(&self.ctx)
    }

    pub fn suggestions(&self) -> SuggestionService<'_> {
        SuggestionService::new(&self.ctx)
    }

    /// Record `count` reactions of one kind on a section
    pub async fn react(&self, lecture_id: &str, section_id: &str, kind: &str, count: usize) -> Result<()> {
        for _ in 0..count {
            self.reactions()
                .create_reaction(reaction(lecture_id, section_id, kind))
                .await?;
        }
        Ok(())
    }

    /// Seed a section's decision history directly through the store
    pub async fn seed_stats(
        &self,
        lecture_id: &str,
        section_id: &str,
        accepted: u32,
        rejected: u32,
    ) -> Result<()> {
        for _ in 0..accepted {
            self.store.update_stats(lecture_id, section_id, Decision::Accepted).await?;
        }
        for _ in 0..rejected {
            self.store.update_stats(lecture_id, section_id, Decision::Rejected).await?;
        }
        Ok(())
    }

    pub async fn generate(&self, lecture_id: &str) -> Result<GenerationResponse> {
        Ok(self.suggestions().generate_for_lecture(lecture_id).await?)
    }

    pub async fn lecture(&self, lecture_id: &str) -> Result<LectureResponse> {
        Ok(self.lectures().get_lecture(lecture_id).await?)
    }

    /// Current state of one section
    pub async fn section(&self, lecture_id: &str, section_id: &str) -> Result<SectionResponse> {
        self.lecture(lecture_id)
            .await?
            .sections
            .into_iter()
            .find(|section| section.id == section_id)
            .ok_or_else(|| anyhow::anyhow!("section {section_id} missing from {lecture_id}"))
    }
}

/// Install a quiet subscriber once per test binary
pub fn init_test_tracing() {
    let config = TracingConfig {
        level: Level::WARN,
        ..TracingConfig::default()
    };
    // Later calls in the same binary report AlreadyInitialized
    let _ = try_init_tracing_with_config(&config);
}
