//! Per-section running statistics of instructor decisions

use serde::Serialize;

/// Instructor decision on a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Accepted,
    Rejected,
}

/// Accepted/rejected counters for one section
///
/// Counters only grow and `total` always equals `accepted + rejected`.
/// Only `record` mutates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SectionStats {
    total: u32,
    accepted: u32,
    rejected: u32,
}

impl SectionStats {
    /// Build stats from known decision counts
    pub fn from_counts(accepted: u32, rejected: u32) -> Self {
        Self {
            total: accepted + rejected,
            accepted,
            rejected,
        }
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[inline]
    pub fn accepted(&self) -> u32 {
        self.accepted
    }

    #[inline]
    pub fn rejected(&self) -> u32 {
        self.rejected
    }

    /// Count one decision
    pub fn record(&mut self, decision: Decision) {
        self.total += 1;
        match decision {
            Decision::Accepted => self.accepted += 1,
            Decision::Rejected => self.rejected += 1,
        }
    }

    /// Share of suggestions that were rejected, `None` before any decision
    pub fn rejection_ratio(&self) -> Option<f64> {
        (self.total > 0).then(|| f64::from(self.rejected) / f64::from(self.total))
    }
}
