//! Store trait (port) - defines the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Services only ever talk to `LectureStore`,
//! so the persistence backend is swappable and testable with an in-memory fake.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Decision, Lecture, Reaction, Section, SectionStats, Suggestion};
use crate::error::DomainError;

/// Result type for store operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait LectureStore: Send + Sync {
    // ========================================================================
    // Content
    // ========================================================================

    /// Find lecture by ID, sections in display order
    async fn get_lecture(&self, lecture_id: &str) -> RepoResult<Option<Lecture>>;

    /// Find a section within a lecture
    async fn get_section(&self, lecture_id: &str, section_id: &str)
        -> RepoResult<Option<Section>>;

    /// Overwrite a section's text
    ///
    /// Fails with `LectureNotFound` or `SectionNotFound`.
    async fn update_section_text(
        &self,
        lecture_id: &str,
        section_id: &str,
        text: &str,
    ) -> RepoResult<Section>;

    /// Set the lecture's publication timestamp
    async fn set_published(&self, lecture_id: &str, at: DateTime<Utc>) -> RepoResult<Lecture>;

    // ========================================================================
    // Reactions
    // ========================================================================

    /// List a lecture's reactions in the order they were appended
    async fn list_reactions(&self, lecture_id: &str) -> RepoResult<Vec<Reaction>>;

    /// Append a reaction to the ledger
    async fn append_reaction(&self, reaction: &Reaction) -> RepoResult<()>;

    // ========================================================================
    // Suggestions
    // ========================================================================

    /// List a lecture's suggestions in the order they were appended
    async fn list_suggestions(&self, lecture_id: &str) -> RepoResult<Vec<Suggestion>>;

    /// Find suggestion by ID
    async fn get_suggestion(&self, suggestion_id: &str) -> RepoResult<Option<Suggestion>>;

    /// Append a new suggestion
    async fn append_suggestion(&self, suggestion: &Suggestion) -> RepoResult<()>;

    /// Move a pending suggestion to a terminal status
    ///
    /// Fails with `SuggestionNotFound`, or `SuggestionAlreadyResolved` when
    /// the stored suggestion is no longer pending.
    async fn update_suggestion_status(
        &self,
        suggestion_id: &str,
        decision: Decision,
    ) -> RepoResult<Suggestion>;

    // ========================================================================
    // Section statistics
    // ========================================================================

    /// Get the decision statistics of a section (zeroed if none recorded)
    async fn get_stats(&self, lecture_id: &str, section_id: &str) -> RepoResult<SectionStats>;

    /// Count one decision for a section and return the updated statistics
    async fn update_stats(
        &self,
        lecture_id: &str,
        section_id: &str,
        decision: Decision,
    ) -> RepoResult<SectionStats>;
}
