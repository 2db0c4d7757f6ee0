//! Suggestion entity - a proposed rewrite of a section awaiting instructor review

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::section_stats::Decision;
use crate::error::DomainError;

/// Suggestion lifecycle status
///
/// `Pending` moves exactly once to one of the terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl SuggestionStatus {
    /// Get the wire name of the status
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Check if no further transition is possible
    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for SuggestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Decision> for SuggestionStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Accepted => Self::Accepted,
            Decision::Rejected => Self::Rejected,
        }
    }
}

/// Suggestion entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub id: String,
    pub lecture_id: String,
    pub section_id: String,
    /// Section text captured when the rewrite was requested
    pub original_text: String,
    pub suggested_text: String,
    pub status: SuggestionStatus,
    pub created_at: DateTime<Utc>,
}

impl Suggestion {
    /// Create a new pending Suggestion
    pub fn new(
        id: String,
        lecture_id: String,
        section_id: String,
        original_text: String,
        suggested_text: String,
    ) -> Self {
        Self {
            id,
            lecture_id,
            section_id,
            original_text,
            suggested_text,
            status: SuggestionStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Check if the suggestion still awaits a decision
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == SuggestionStatus::Pending
    }

    /// Apply an instructor decision
    ///
    /// # Errors
    /// Returns `DomainError::SuggestionAlreadyResolved` if the suggestion is
    /// no longer pending; the status is left untouched in that case.
    pub fn resolve(&mut self, decision: Decision) -> Result<(), DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::SuggestionAlreadyResolved {
                id: self.id.clone(),
                status: self.status,
            });
        }
        self.status = decision.into();
        Ok(())
    }
}
