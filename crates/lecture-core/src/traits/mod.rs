//! Ports - interfaces the domain needs from the outside world

mod repositories;
mod rewriter;

pub use repositories::{LectureStore, RepoResult};
pub use rewriter::{build_rewrite_prompt, RewriteError, SectionRewriter};
