//! # lecture-core
//!
//! Domain layer containing lecture entities, value objects, the store and
//! rewriter traits, and domain errors.
//! This crate has zero dependencies on infrastructure (storage engine, language model, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Decision, FeedbackSummary, Lecture, Reaction, Section, SectionStats, Suggestion,
    SuggestionStatus,
};
pub use error::DomainError;
pub use traits::{build_rewrite_prompt, LectureStore, RepoResult, RewriteError, SectionRewriter};
pub use value_objects::{
    generate_id, GenerationDecision, ReactionType, SkipReason, SuggestionPolicy,
    REACTION_ID_PREFIX, SUGGESTION_ID_PREFIX,
};
