//! Identifier generation for ledger entries

use uuid::Uuid;

/// Prefix for reaction IDs
pub const REACTION_ID_PREFIX: &str = "reaction";

/// Prefix for suggestion IDs
pub const SUGGESTION_ID_PREFIX: &str = "sugg";

/// Generate a unique, prefixed identifier such as `sugg-3f2a...`
pub fn generate_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}
