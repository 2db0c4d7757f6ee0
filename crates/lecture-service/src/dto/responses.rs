//! Response DTOs
//!
//! All response DTOs implement `Serialize` and use camelCase field names.

use chrono::{DateTime, Utc};
use lecture_core::{ReactionType, SuggestionStatus};
use serde::Serialize;

// ============================================================================
// Lecture Responses
// ============================================================================

/// Section response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResponse {
    pub id: String,
    pub order: u32,
    pub text: String,
}

/// Lecture response, sections in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LectureResponse {
    pub id: String,
    pub title: String,
    pub sections: Vec<SectionResponse>,
    /// Serialized as `null` while the lecture is a draft
    pub published_at: Option<DateTime<Utc>>,
}

/// Result of a direct section edit
#[derive(Debug, Clone, Serialize)]
pub struct SectionUpdatedResponse {
    pub message: &'static str,
    pub section: SectionResponse,
}

/// Result of publishing a lecture
#[derive(Debug, Clone, Serialize)]
pub struct LecturePublishedResponse {
    pub message: &'static str,
    pub lecture: LectureResponse,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Reaction response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionResponse {
    pub id: String,
    pub lecture_id: String,
    pub section_id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub reaction_type: ReactionType,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Suggestion Responses
// ============================================================================

/// Suggestion response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    pub id: String,
    pub lecture_id: String,
    pub section_id: String,
    pub original_text: String,
    pub suggested_text: String,
    pub status: SuggestionStatus,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a generation pass over a lecture
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub message: &'static str,
    pub generated_count: usize,
    /// IDs of the created suggestions, in section order
    pub generated_suggestion_ids: Vec<String>,
}

/// Result of accepting a suggestion
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptSuggestionResponse {
    pub message: &'static str,
    pub suggestion: SuggestionResponse,
    pub updated_section: SectionResponse,
}

/// Result of rejecting a suggestion
#[derive(Debug, Clone, Serialize)]
pub struct RejectSuggestionResponse {
    pub message: &'static str,
    pub suggestion: SuggestionResponse,
}

/// Decision history of one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStatsResponse {
    pub section_id: String,
    pub total: u32,
    pub accepted: u32,
    pub rejected: u32,
}
