//! Business logic services
//!
//! Each service borrows the shared `ServiceContext` and orchestrates store
//! reads and writes for one part of the feedback loop.

pub mod context;
pub mod error;
pub mod lecture;
pub mod reaction;
pub mod suggestion;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use lecture::LectureService;
pub use reaction::ReactionService;
pub use suggestion::SuggestionService;

#[cfg(test)]
pub(crate) mod test_support;
