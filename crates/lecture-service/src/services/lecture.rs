//! Lecture service
//!
//! Handles lecture retrieval, direct section edits, and publication.

use chrono::Utc;
use lecture_core::entities::Lecture;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{LecturePublishedResponse, LectureResponse, SectionUpdatedResponse, UpdateSectionRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Lecture service
pub struct LectureService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LectureService<'a> {
    /// Create a new LectureService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get lecture by ID
    #[instrument(skip(self))]
    pub async fn get_lecture(&self, lecture_id: &str) -> ServiceResult<LectureResponse> {
        let lecture = self.get_lecture_entity(lecture_id).await?;
        Ok(LectureResponse::from(lecture))
    }

    /// Get lecture entity (internal use)
    pub async fn get_lecture_entity(&self, lecture_id: &str) -> ServiceResult<Lecture> {
        self.ctx
            .store()
            .get_lecture(lecture_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Lecture", lecture_id))
    }

    /// Overwrite a section's text
    ///
    /// Edits are unconditional and do not touch pending suggestions.
    #[instrument(skip(self, request))]
    pub async fn edit_section(
        &self,
        lecture_id: &str,
        section_id: &str,
        request: UpdateSectionRequest,
    ) -> ServiceResult<SectionUpdatedResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        let Some(text) = request.text else {
            return Err(ServiceError::validation("New text is required"));
        };

        let lecture = self.get_lecture_entity(lecture_id).await?;
        if lecture.section(section_id).is_none() {
            return Err(ServiceError::not_found("Section", section_id));
        }

        let section = self
            .ctx
            .store()
            .update_section_text(lecture_id, section_id, &text)
            .await?;

        info!(lecture_id = %lecture_id, section_id = %section_id, "Section edited");

        Ok(section.into())
    }

    /// Publish a lecture
    ///
    /// Publishing again moves the timestamp forward.
    #[instrument(skip(self))]
    pub async fn publish(&self, lecture_id: &str) -> ServiceResult<LecturePublishedResponse> {
        let lecture = self
            .ctx
            .store()
            .set_published(lecture_id, Utc::now())
            .await?;

        info!(lecture_id = %lecture_id, "Lecture published");

        Ok(lecture.into())
    }
}
