//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use lecture_core::entities::{Lecture, Reaction, Section, SectionStats, Suggestion};

use super::responses::{
    AcceptSuggestionResponse, GenerationResponse, LecturePublishedResponse, LectureResponse,
    ReactionResponse, RejectSuggestionResponse, SectionResponse, SectionStatsResponse,
    SectionUpdatedResponse, SuggestionResponse,
};

pub(crate) const GENERATED_MESSAGE: &str = "Generated AI suggestions";
pub(crate) const ACCEPTED_MESSAGE: &str = "Suggestion accepted and lecture updated";
pub(crate) const REJECTED_MESSAGE: &str = "Suggestion rejected";
pub(crate) const SECTION_UPDATED_MESSAGE: &str = "Section updated";
pub(crate) const PUBLISHED_MESSAGE: &str = "Lecture published";

// ============================================================================
// Lecture Mappers
// ============================================================================

impl From<&Section> for SectionResponse {
    fn from(section: &Section) -> Self {
        Self {
            id: section.id.clone(),
            order: section.order,
            text: section.text.clone(),
        }
    }
}

impl From<Section> for SectionResponse {
    fn from(section: Section) -> Self {
        Self {
            id: section.id,
            order: section.order,
            text: section.text,
        }
    }
}

impl From<&Lecture> for LectureResponse {
    fn from(lecture: &Lecture) -> Self {
        Self {
            id: lecture.id.clone(),
            title: lecture.title.clone(),
            sections: lecture.sections.iter().map(SectionResponse::from).collect(),
            published_at: lecture.published_at,
        }
    }
}

impl From<Lecture> for LectureResponse {
    fn from(lecture: Lecture) -> Self {
        Self::from(&lecture)
    }
}

impl From<Section> for SectionUpdatedResponse {
    fn from(section: Section) -> Self {
        Self {
            message: SECTION_UPDATED_MESSAGE,
            section: section.into(),
        }
    }
}

impl From<Lecture> for LecturePublishedResponse {
    fn from(lecture: Lecture) -> Self {
        Self {
            message: PUBLISHED_MESSAGE,
            lecture: lecture.into(),
        }
    }
}

// ============================================================================
// Reaction Mappers
// ============================================================================

impl From<&Reaction> for ReactionResponse {
    fn from(reaction: &Reaction) -> Self {
        Self {
            id: reaction.id.clone(),
            lecture_id: reaction.lecture_id.clone(),
            section_id: reaction.section_id.clone(),
            user_id: reaction.user_id.clone(),
            reaction_type: reaction.reaction_type,
            comment: reaction.comment.clone(),
            created_at: reaction.created_at,
        }
    }
}

impl From<Reaction> for ReactionResponse {
    fn from(reaction: Reaction) -> Self {
        Self::from(&reaction)
    }
}

// ============================================================================
// Suggestion Mappers
// ============================================================================

impl From<&Suggestion> for SuggestionResponse {
    fn from(suggestion: &Suggestion) -> Self {
        Self {
            id: suggestion.id.clone(),
            lecture_id: suggestion.lecture_id.clone(),
            section_id: suggestion.section_id.clone(),
            original_text: suggestion.original_text.clone(),
            suggested_text: suggestion.suggested_text.clone(),
            status: suggestion.status,
            created_at: suggestion.created_at,
        }
    }
}

impl From<Suggestion> for SuggestionResponse {
    fn from(suggestion: Suggestion) -> Self {
        Self::from(&suggestion)
    }
}

impl From<Suggestion> for RejectSuggestionResponse {
    fn from(suggestion: Suggestion) -> Self {
        Self {
            message: REJECTED_MESSAGE,
            suggestion: suggestion.into(),
        }
    }
}

/// Suggestions created by one generation pass
#[derive(Debug, Clone, Default)]
pub struct GenerationResult {
    pub generated_suggestion_ids: Vec<String>,
}

impl GenerationResult {
    pub fn generated_count(&self) -> usize {
        self.generated_suggestion_ids.len()
    }
}

impl From<GenerationResult> for GenerationResponse {
    fn from(result: GenerationResult) -> Self {
        Self {
            message: GENERATED_MESSAGE,
            generated_count: result.generated_count(),
            generated_suggestion_ids: result.generated_suggestion_ids,
        }
    }
}

/// Accepted suggestion along with the section it rewrote
#[derive(Debug, Clone)]
pub struct AcceptedSuggestion {
    pub suggestion: Suggestion,
    pub updated_section: Section,
}

impl From<AcceptedSuggestion> for AcceptSuggestionResponse {
    fn from(accepted: AcceptedSuggestion) -> Self {
        Self {
            message: ACCEPTED_MESSAGE,
            suggestion: accepted.suggestion.into(),
            updated_section: accepted.updated_section.into(),
        }
    }
}

/// Section stats keyed by their section
#[derive(Debug, Clone)]
pub struct SectionStatsWithId {
    pub section_id: String,
    pub stats: SectionStats,
}

impl From<SectionStatsWithId> for SectionStatsResponse {
    fn from(value: SectionStatsWithId) -> Self {
        Self {
            section_id: value.section_id,
            total: value.stats.total(),
            accepted: value.stats.accepted(),
            rejected: value.stats.rejected(),
        }
    }
}
