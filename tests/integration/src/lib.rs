//! Integration test utilities for the lecture feedback loop
//!
//! This crate provides scripted rewriters and a wired-up service context for
//! running end-to-end scenarios against the in-memory store.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
