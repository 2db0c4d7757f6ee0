//! Aggregated student feedback for a single section

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::reaction::Reaction;
use crate::value_objects::ReactionType;

/// Reaction counts plus non-empty comments for one section
///
/// This is also the payload handed to the rewrite collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSummary {
    pub like_count: u32,
    pub confused_count: u32,
    pub dislike_count: u32,
    /// Trimmed, non-empty comments in reaction order
    pub comments: Vec<String>,
}

impl FeedbackSummary {
    /// Aggregate a sequence of reactions
    pub fn from_reactions<'a>(reactions: impl IntoIterator<Item = &'a Reaction>) -> Self {
        let mut summary = Self::default();
        for reaction in reactions {
            summary.record(reaction);
        }
        summary
    }

    /// Group a lecture's reactions by section ID
    pub fn group_by_section(reactions: &[Reaction]) -> HashMap<String, FeedbackSummary> {
        let mut by_section: HashMap<String, FeedbackSummary> = HashMap::new();
        for reaction in reactions {
            by_section
                .entry(reaction.section_id.clone())
                .or_default()
                .record(reaction);
        }
        by_section
    }

    /// Fold one reaction into the summary
    pub fn record(&mut self, reaction: &Reaction) {
        match reaction.reaction_type {
            ReactionType::Like => self.like_count += 1,
            ReactionType::Confused => self.confused_count += 1,
            ReactionType::Dislike => self.dislike_count += 1,
        }
        if let Some(comment) = reaction.trimmed_comment() {
            self.comments.push(comment.to_string());
        }
    }

    /// Total number of reactions aggregated
    pub fn reaction_count(&self) -> u32 {
        self.like_count + self.confused_count + self.dislike_count
    }

    /// Check if no reaction has been aggregated
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.reaction_count() == 0
    }

    /// Confused plus dislike reactions, the primary rewrite trigger
    #[inline]
    pub fn confusion_score(&self) -> u32 {
        self.confused_count + self.dislike_count
    }
}
