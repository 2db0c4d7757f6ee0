//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Reaction Requests
// ============================================================================

/// Create reaction request
///
/// Missing fields deserialize as empty strings so they are reported by
/// validation rather than by the decoder.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateReactionRequest {
    #[validate(length(min = 1, message = "lectureId is required"))]
    pub lecture_id: String,

    #[validate(length(min = 1, message = "sectionId is required"))]
    pub section_id: String,

    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    /// Raw reaction type, parsed by the service
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type is required"))]
    pub reaction_type: String,

    pub comment: Option<String>,
}

impl CreateReactionRequest {
    pub fn new(
        lecture_id: impl Into<String>,
        section_id: impl Into<String>,
        user_id: impl Into<String>,
        reaction_type: impl Into<String>,
    ) -> Self {
        Self {
            lecture_id: lecture_id.into(),
            section_id: section_id.into(),
            user_id: user_id.into(),
            reaction_type: reaction_type.into(),
            comment: None,
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

// ============================================================================
// Lecture Requests
// ============================================================================

/// Direct section edit request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSectionRequest {
    #[validate(
        required(message = "New text is required"),
        length(min = 1, message = "New text is required")
    )]
    pub text: Option<String>,
}

impl UpdateSectionRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}
