//! Suggestion service
//!
//! Turns aggregated student feedback into rewrite suggestions and applies
//! the instructor's accept/reject decisions.

use lecture_common::AppError;
use lecture_core::entities::{Decision, FeedbackSummary, Suggestion};
use lecture_core::{generate_id, DomainError, GenerationDecision, RewriteError, SUGGESTION_ID_PREFIX};
use tracing::{debug, info, instrument, warn};

use crate::dto::{
    AcceptSuggestionResponse, AcceptedSuggestion, GenerationResponse, GenerationResult,
    RejectSuggestionResponse, SectionStatsResponse, SectionStatsWithId, SuggestionResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::lecture::LectureService;

/// Suggestion service
pub struct SuggestionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SuggestionService<'a> {
    /// Create a new SuggestionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run one generation pass over a lecture
    ///
    /// Sections are visited in display order. Each one is gated by the
    /// configured `SuggestionPolicy`; sections that pass are sent to the
    /// rewriter one at a time. A failing rewrite is logged and skipped.
    #[instrument(skip(self))]
    pub async fn generate_for_lecture(&self, lecture_id: &str) -> ServiceResult<GenerationResponse> {
        let store = self.ctx.store();
        let policy = self.ctx.policy();

        let lecture = LectureService::new(self.ctx)
            .get_lecture_entity(lecture_id)
            .await?;
        let reactions = store.list_reactions(lecture_id).await?;
        let mut feedback_by_section = FeedbackSummary::group_by_section(&reactions);

        let mut result = GenerationResult::default();

        for section in &lecture.sections {
            let feedback = feedback_by_section.remove(&section.id).unwrap_or_default();
            let stats = store.get_stats(lecture_id, &section.id).await?;

            if let GenerationDecision::Skip(reason) = policy.evaluate(&feedback, &stats) {
                debug!(section_id = %section.id, reason = reason.as_str(), "Section skipped");
                continue;
            }

            // Re-read so the snapshot is as fresh as possible. The live text can
            // still change while the rewrite is in flight (direct edit, or an
            // accept of an older suggestion), so `original_text` may differ from
            // the stored text by the time the suggestion is appended.
            let Some(current) = store.get_section(lecture_id, &section.id).await? else {
                continue;
            };

            let rewritten = self
                .ctx
                .rewriter()
                .rewrite(&current.text, &feedback)
                .await
                .and_then(|text| non_blank(&text));
            let suggested_text = match rewritten {
                Ok(text) => text,
                Err(error) => {
                    let error = AppError::from(error);
                    warn!(
                        section_id = %current.id,
                        code = error.error_code(),
                        error = %error,
                        "Rewrite failed"
                    );
                    continue;
                }
            };

            let suggestion = Suggestion::new(
                generate_id(SUGGESTION_ID_PREFIX),
                lecture_id.to_string(),
                current.id,
                current.text,
                suggested_text,
            );
            store.append_suggestion(&suggestion).await?;

            info!(
                suggestion_id = %suggestion.id,
                section_id = %suggestion.section_id,
                confusion_score = feedback.confusion_score(),
                "Suggestion generated"
            );

            result.generated_suggestion_ids.push(suggestion.id);
        }

        info!(
            lecture_id = %lecture_id,
            generated = result.generated_count(),
            "Generation pass finished"
        );

        Ok(result.into())
    }

    /// List all suggestions of a lecture in creation order
    #[instrument(skip(self))]
    pub async fn list_suggestions(&self, lecture_id: &str) -> ServiceResult<Vec<SuggestionResponse>> {
        LectureService::new(self.ctx)
            .get_lecture_entity(lecture_id)
            .await?;

        let suggestions = self.ctx.store().list_suggestions(lecture_id).await?;
        Ok(suggestions.iter().map(SuggestionResponse::from).collect())
    }

    /// Accept a pending suggestion and apply its text to the section
    #[instrument(skip(self))]
    pub async fn accept(&self, suggestion_id: &str) -> ServiceResult<AcceptSuggestionResponse> {
        let store = self.ctx.store();
        let pending = self.get_pending(suggestion_id).await?;

        let lecture = LectureService::new(self.ctx)
            .get_lecture_entity(&pending.lecture_id)
            .await?;
        if lecture.section(&pending.section_id).is_none() {
            return Err(ServiceError::not_found("Section", pending.section_id));
        }

        let suggestion = store
            .update_suggestion_status(suggestion_id, Decision::Accepted)
            .await?;
        let updated_section = store
            .update_section_text(
                &suggestion.lecture_id,
                &suggestion.section_id,
                &suggestion.suggested_text,
            )
            .await?;
        let stats = store
            .update_stats(&suggestion.lecture_id, &suggestion.section_id, Decision::Accepted)
            .await?;

        info!(
            suggestion_id = %suggestion.id,
            section_id = %suggestion.section_id,
            total = stats.total(),
            accepted = stats.accepted(),
            "Suggestion accepted"
        );

        Ok(AcceptedSuggestion {
            suggestion,
            updated_section,
        }
        .into())
    }

    /// Reject a pending suggestion; the section text is left alone
    #[instrument(skip(self))]
    pub async fn reject(&self, suggestion_id: &str) -> ServiceResult<RejectSuggestionResponse> {
        let store = self.ctx.store();
        self.get_pending(suggestion_id).await?;

        let suggestion = store
            .update_suggestion_status(suggestion_id, Decision::Rejected)
            .await?;
        let stats = store
            .update_stats(&suggestion.lecture_id, &suggestion.section_id, Decision::Rejected)
            .await?;

        info!(
            suggestion_id = %suggestion.id,
            section_id = %suggestion.section_id,
            total = stats.total(),
            rejected = stats.rejected(),
            "Suggestion rejected"
        );

        Ok(suggestion.into())
    }

    /// Get the accept/reject history of a section
    #[instrument(skip(self))]
    pub async fn get_section_stats(
        &self,
        lecture_id: &str,
        section_id: &str,
    ) -> ServiceResult<SectionStatsResponse> {
        let lecture = LectureService::new(self.ctx)
            .get_lecture_entity(lecture_id)
            .await?;
        if lecture.section(section_id).is_none() {
            return Err(ServiceError::not_found("Section", section_id));
        }

        let stats = self.ctx.store().get_stats(lecture_id, section_id).await?;
        Ok(SectionStatsWithId {
            section_id: section_id.to_string(),
            stats,
        }
        .into())
    }

    async fn get_pending(&self, suggestion_id: &str) -> ServiceResult<Suggestion> {
        let suggestion = self
            .ctx
            .store()
            .get_suggestion(suggestion_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Suggestion", suggestion_id))?;

        if !suggestion.is_pending() {
            return Err(DomainError::SuggestionAlreadyResolved {
                id: suggestion.id,
                status: suggestion.status,
            }
            .into());
        }

        Ok(suggestion)
    }
}

/// Trimmed rewrite output, or a malformed-response error when nothing is left
fn non_blank(text: &str) -> Result<String, RewriteError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RewriteError::MalformedResponse(
            "rewriter returned no text".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
