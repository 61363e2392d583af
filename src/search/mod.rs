//! Fixed-depth lookahead search.
//!
//! ## Overview
//!
//! Every decision builds a fresh tree of board states:
//!
//! - **Exhaustive**: every valid move is expanded at every level
//! - **Sampled chance**: each child forks its parent's RNG, so each branch
//!   sees one concrete infection draw
//! - **Pessimistic backup**: leaves score with `BoardState::evaluate`,
//!   internal nodes take the minimum of their children
//! - **Tie-breaking**: the first root child with the greatest floor wins
//!
//! ## Usage
//!
//! ```rust
//! use outbreak::core::BoardState;
//! use outbreak::policy::Policy;
//! use outbreak::search::TreeSearchPolicy;
//!
//! let state = BoardState::new(42);
//! let mut search = TreeSearchPolicy::with_depth(2);
//!
//! let mv = search.get_move(&state).unwrap();
//! assert!(state.is_valid_move(mv));
//! ```

pub mod config;
pub mod node;
pub mod search;
pub mod stats;
pub mod tree;

pub use config::SearchConfig;
pub use node::{NodeId, SearchNode};
pub use search::TreeSearchPolicy;
pub use stats::SearchStats;
pub use tree::{SearchTree, TreeStats};
