//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one decision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Search calls made, root included.
    pub nodes: u32,

    /// Nodes answered by the one-ply heuristic fallback.
    pub leaf_evaluations: u32,

    /// Nodes that hit total defeat or total victory.
    pub terminal_hits: u32,

    /// Times a candidate loop stopped early on `beta <= alpha`.
    pub cutoffs: u32,

    /// Depth the search started from.
    pub depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            f64::from(self.nodes) / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of visited nodes that triggered a cutoff.
    #[must_use]
    pub fn cutoff_rate(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            f64::from(self.cutoffs) / f64::from(self.nodes)
        }
    }
}
