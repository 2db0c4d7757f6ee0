//! # lecture-service
//!
//! Application layer containing the feedback loop use cases, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    LectureService, ReactionService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, SuggestionService,
};
