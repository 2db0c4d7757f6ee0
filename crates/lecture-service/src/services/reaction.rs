//! Reaction service
//!
//! Records student reactions on lecture sections and lists them back.

use lecture_core::entities::Reaction;
use lecture_core::{generate_id, ReactionType, REACTION_ID_PREFIX};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateReactionRequest, ReactionResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::lecture::LectureService;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a reaction
    ///
    /// Required fields are checked first, then the lecture and section, and
    /// only then the reaction type. Nothing is stored on failure.
    #[instrument(skip(self, request))]
    pub async fn create_reaction(
        &self,
        request: CreateReactionRequest,
    ) -> ServiceResult<ReactionResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let lecture = LectureService::new(self.ctx)
            .get_lecture_entity(&request.lecture_id)
            .await?;
        if lecture.section(&request.section_id).is_none() {
            return Err(ServiceError::not_found("Section", request.section_id));
        }

        let reaction_type: ReactionType = request
            .reaction_type
            .parse()
            .map_err(|_| ServiceError::validation("Invalid reaction type"))?;

        let reaction = Reaction::new(
            generate_id(REACTION_ID_PREFIX),
            request.lecture_id,
            request.section_id,
            request.user_id,
            reaction_type,
            request.comment,
        );

        self.ctx.store().append_reaction(&reaction).await?;

        info!(
            reaction_id = %reaction.id,
            lecture_id = %reaction.lecture_id,
            section_id = %reaction.section_id,
            reaction_type = %reaction.reaction_type,
            "Reaction recorded"
        );

        Ok(ReactionResponse::from(reaction))
    }

    /// List all reactions of a lecture in arrival order
    #[instrument(skip(self))]
    pub async fn list_reactions(&self, lecture_id: &str) -> ServiceResult<Vec<ReactionResponse>> {
        LectureService::new(self.ctx)
            .get_lecture_entity(lecture_id)
            .await?;

        let reactions = self.ctx.store().list_reactions(lecture_id).await?;
        Ok(reactions.iter().map(ReactionResponse::from).collect())
    }
}
