//! # lecture-store
//!
//! Store layer implementing `LectureStore` over shared in-memory tables,
//! plus the bundled demo lectures.

pub mod memory;
pub mod seed;

pub use memory::InMemoryLectureStore;
pub use seed::demo_lectures;
