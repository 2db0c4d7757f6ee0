//! Data transfer objects for requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for inputs
//! - Response DTOs for serializing outputs (camelCase wire names)
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{CreateReactionRequest, UpdateSectionRequest};

pub use responses::{
    AcceptSuggestionResponse, GenerationResponse, LecturePublishedResponse, LectureResponse,
    ReactionResponse, RejectSuggestionResponse, SectionResponse, SectionStatsResponse,
    SectionUpdatedResponse, SuggestionResponse,
};

pub use mappers::{AcceptedSuggestion, GenerationResult, SectionStatsWithId};
