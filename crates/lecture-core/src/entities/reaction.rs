//! Reaction entity - a student's signal on a lecture section

use chrono::{DateTime, Utc};

use crate::value_objects::ReactionType;

/// Reaction entity
///
/// Reactions are immutable once created; the ledger only ever appends them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: String,
    pub lecture_id: String,
    pub section_id: String,
    pub user_id: String,
    pub reaction_type: ReactionType,
    /// Free-form comment, empty when none was given
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(
        id: String,
        lecture_id: String,
        section_id: String,
        user_id: String,
        reaction_type: ReactionType,
        comment: Option<String>,
    ) -> Self {
        Self {
            id,
            lecture_id,
            section_id,
            user_id,
            reaction_type,
            comment: comment.unwrap_or_default(),
            created_at: Utc::now(),
        }
    }

    /// The trimmed comment, if it has any content
    pub fn trimmed_comment(&self) -> Option<&str> {
        let trimmed = self.comment.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Check if the reaction targets the given section
    #[inline]
    pub fn is_for_section(&self, section_id: &str) -> bool {
        self.section_id == section_id
    }
}
