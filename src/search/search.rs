//! Lookahead search policy.
//!
//! Builds a `SearchTree` for every decision, takes the root child with the
//! best guaranteed floor, and throws the tree away.

use std::time::Instant;

use log::{debug, trace};

use super::config::SearchConfig;
use super::stats::SearchStats;
use super::tree::SearchTree;
use crate::core::{BoardState, GameError, Move};
use crate::policy::Policy;

/// Fixed-depth pessimistic lookahead.
///
/// The infection draw inside each branch is sampled once, not averaged, and
/// the minimum over children treats that single draw as if it were hostile.
#[derive(Clone, Debug, Default)]
pub struct TreeSearchPolicy {
    /// Search configuration.
    config: SearchConfig,

    /// Totals across all decisions.
    stats: SearchStats,
}

impl TreeSearchPolicy {
    /// Create a search policy.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
        }
    }

    /// Search `max_depth` plies ahead.
    pub fn with_depth(max_depth: u32) -> Self {
        Self::new(SearchConfig::default().with_max_depth(max_depth))
    }

    /// Build the tree for `state` without choosing a move.
    pub fn build_tree(&self, state: &BoardState) -> Result<SearchTree, GameError> {
        if let Some(result) = state.result() {
            return Err(GameError::GameOver { result });
        }
        SearchTree::build(state, self.config.max_depth)
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

impl Policy for TreeSearchPolicy {
    fn get_move(&mut self, state: &BoardState) -> Result<Move, GameError> {
        let start = Instant::now();
        let tree = self.build_tree(state)?;

        let tree_stats = tree.stats();
        self.stats
            .record(&tree_stats, start.elapsed().as_micros() as u64);

        for (mv, value) in tree.root_values() {
            trace!("candidate {} floor {:.2}", mv, value);
        }

        let best = tree.best_child().ok_or(GameError::EmptySearch {
            depth: self.config.max_depth,
        })?;
        debug!(
            "search chose {:?} (floor {:.2}, {} nodes)",
            best.precursor, best.floor_value, tree_stats.node_count
        );

        best.precursor.ok_or(GameError::EmptySearch {
            depth: self.config.max_depth,
        })
    }

    fn name(&self) -> &'static str {
        "tree"
    }
}
