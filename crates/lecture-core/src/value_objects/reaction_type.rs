//! Reaction type - the closed set of student signals

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Kind of reaction a student can leave on a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionType {
    Like,
    Confused,
    Dislike,
}

impl ReactionType {
    /// Every accepted reaction type
    pub const ALL: [Self; 3] = [Self::Like, Self::Confused, Self::Dislike];

    /// Get the wire name of the reaction type
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Confused => "confused",
            Self::Dislike => "dislike",
        }
    }

    /// Check if the reaction counts towards the confusion score
    #[inline]
    #[must_use]
    pub fn signals_confusion(self) -> bool {
        matches!(self, Self::Confused | Self::Dislike)
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::InvalidReactionType(s.to_string()))
    }
}
