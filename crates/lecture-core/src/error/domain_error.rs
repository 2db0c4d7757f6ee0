//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::SuggestionStatus;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Lecture not found: {0}")]
    LectureNotFound(String),

    #[error("Section not found: {section_id} in lecture {lecture_id}")]
    SectionNotFound {
        lecture_id: String,
        section_id: String,
    },

    #[error("Suggestion not found: {0}")]
    SuggestionNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid reaction type: {0}")]
    InvalidReactionType(String),

    #[error("Duplicate section order {order} in lecture {lecture_id}")]
    DuplicateSectionOrder { lecture_id: String, order: u32 },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Suggestion {id} already {status}")]
    SuggestionAlreadyResolved {
        id: String,
        status: SuggestionStatus,
    },

    #[error("Lecture already exists: {0}")]
    LectureAlreadyExists(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::LectureNotFound(_) => "UNKNOWN_LECTURE",
            Self::SectionNotFound { .. } => "UNKNOWN_SECTION",
            Self::SuggestionNotFound(_) => "UNKNOWN_SUGGESTION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidReactionType(_) => "INVALID_REACTION_TYPE",
            Self::DuplicateSectionOrder { .. } => "DUPLICATE_SECTION_ORDER",

            // Conflict
            Self::SuggestionAlreadyResolved { .. } => "SUGGESTION_ALREADY_RESOLVED",
            Self::LectureAlreadyExists(_) => "LECTURE_ALREADY_EXISTS",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::LectureNotFound(_) | Self::SectionNotFound { .. } | Self::SuggestionNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidReactionType(_)
                | Self::DuplicateSectionOrder { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::SuggestionAlreadyResolved { .. } | Self::LectureAlreadyExists(_)
        )
    }

    /// Shorthand for a missing section
    pub fn section_not_found(lecture_id: impl Into<String>, section_id: impl Into<String>) -> Self {
        Self::SectionNotFound {
            lecture_id: lecture_id.into(),
            section_id: section_id.into(),
        }
    }
}
