//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

use super::tree::TreeStats;

/// Statistics accumulated over every decision a search policy makes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Decisions made.
    pub searches: u32,

    /// Nodes created, root included.
    pub nodes_expanded: u64,

    /// Leaves evaluated.
    pub leaves_evaluated: u64,

    /// Deepest node built in any search.
    pub max_depth: u16,

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

    /// Fold one finished tree into the totals.
    pub fn record(&mut self, tree: &TreeStats, time_us: u64) {
        self.searches += 1;
        self.nodes_expanded += tree.node_count as u64;
        self.leaves_evaluated += tree.leaf_count as u64;
        self.max_depth = self.max_depth.max(tree.max_depth);
        self.time_us += time_us;
    }

    /// Average tree size per decision.
    #[must_use]
    pub fn avg_nodes_per_search(&self) -> f64 {
        if self.searches == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / self.searches as f64
        }
    }

    /// Calculate nodes built per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
