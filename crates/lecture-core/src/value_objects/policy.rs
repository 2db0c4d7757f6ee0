//! Suggestion gating policy
//!
//! Decides, from a section's aggregated feedback and its decision history,
//! whether a rewrite should be requested.

use crate::entities::{FeedbackSummary, SectionStats};

/// Minimum confusion score that justifies a rewrite request
pub const DEFAULT_CONFUSION_THRESHOLD: u32 = 2;

/// Rejection ratio above which a section stops receiving suggestions
pub const DEFAULT_AVERSION_RATIO: f64 = 0.7;

/// Why a section was skipped during generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Nobody reacted to the section
    NoReactions,
    /// The instructor rejects most suggestions for this section
    LearnedAversion,
    /// Confusion score below the threshold
    InsufficientSignal,
}

impl SkipReason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoReactions => "no_reactions",
            Self::LearnedAversion => "learned_aversion",
            Self::InsufficientSignal => "insufficient_signal",
        }
    }
}

/// Outcome of evaluating one section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationDecision {
    Generate,
    Skip(SkipReason),
}

impl GenerationDecision {
    #[inline]
    pub fn should_generate(self) -> bool {
        matches!(self, Self::Generate)
    }
}

/// Thresholds used to gate rewrite requests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestionPolicy {
    pub confusion_threshold: u32,
    pub aversion_ratio: f64,
}

impl Default for SuggestionPolicy {
    fn default() -> Self {
        Self {
            confusion_threshold: DEFAULT_CONFUSION_THRESHOLD,
            aversion_ratio: DEFAULT_AVERSION_RATIO,
        }
    }
}

impl SuggestionPolicy {
    /// Create a policy with custom thresholds
    pub fn new(confusion_threshold: u32, aversion_ratio: f64) -> Self {
        Self {
            confusion_threshold,
            aversion_ratio,
        }
    }

    /// Check the learned aversion gate
    ///
    /// Stats never decrease, so once a section trips this gate it stays
    /// suppressed until enough acceptances pull the ratio back down.
    pub fn is_averse(&self, stats: &SectionStats) -> bool {
        stats
            .rejection_ratio()
            .is_some_and(|ratio| ratio > self.aversion_ratio)
    }

    /// Decide whether a section warrants a rewrite request
    ///
    /// The aversion gate is checked before the confusion threshold.
    pub fn evaluate(&self, feedback: &FeedbackSummary, stats: &SectionStats) -> GenerationDecision {
        if feedback.is_empty() {
            return GenerationDecision::Skip(SkipReason::NoReactions);
        }
        if self.is_averse(stats) {
            return GenerationDecision::Skip(SkipReason::LearnedAversion);
        }
        if feedback.confusion_score() < self.confusion_threshold {
            return GenerationDecision::Skip(SkipReason::InsufficientSignal);
        }
        GenerationDecision::Generate
    }
}
