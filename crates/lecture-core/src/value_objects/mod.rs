//! Value objects - immutable types that represent domain concepts

mod ids;
mod policy;
mod reaction_type;

pub use ids::{generate_id, REACTION_ID_PREFIX, SUGGESTION_ID_PREFIX};
pub use policy::{
    GenerationDecision, SkipReason, SuggestionPolicy, DEFAULT_AVERSION_RATIO,
    DEFAULT_CONFUSION_THRESHOLD,
};
pub use reaction_type::ReactionType;
