//! Domain entities - core business objects

mod feedback;
mod lecture;
mod reaction;
mod section_stats;
mod suggestion;

pub use feedback::FeedbackSummary;
pub use lecture::{Lecture, Section};
pub use reaction::Reaction;
pub use section_stats::{Decision, SectionStats};
pub use suggestion::{Suggestion, SuggestionStatus};
