//! Move-selection policies.
//!
//! A policy looks at a `BoardState` and names one of its valid moves. It may
//! keep internal state (an RNG, statistics) but never mutates the board.
//!
//! - `CurePolicy`: cure when possible, otherwise wander
//! - `RandomPolicy`: uniform over moves with curing weighted up
//! - `TreeSearchPolicy` (in `crate::search`): fixed-depth pessimistic lookahead

mod reactive;

pub use reactive::{CurePolicy, RandomPolicy};

use serde::{Deserialize, Serialize};

use crate::core::{BoardState, GameError, Move};
use crate::search::{SearchConfig, TreeSearchPolicy};

/// Single-method move selection capability.
pub trait Policy {
    /// Choose a move for the active pawn.
    ///
    /// The returned move should be a member of `state.valid_moves()`; the
    /// board rejects anything else when it is applied.
    fn get_move(&mut self, state: &BoardState) -> Result<Move, GameError>;

    /// Short identifier for logs and reports.
    fn name(&self) -> &'static str;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn get_move(&mut self, state: &BoardState) -> Result<Move, GameError> {
        (**self).get_move(state)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Available strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Fixed-depth lookahead.
    #[default]
    Tree,
    /// Cure if possible, otherwise move randomly.
    Cure,
    /// Random move, curing as likely as moving.
    Random,
}

impl PolicyKind {
    /// Instantiate the strategy. `seed` feeds the reactive policies' RNG.
    #[must_use]
    pub fn build(self, search: &SearchConfig, seed: u64) -> Box<dyn Policy> {
        match self {
            PolicyKind::Tree => Box::new(TreeSearchPolicy::new(search.clone())),
            PolicyKind::Cure => Box::new(CurePolicy::new(seed)),
            PolicyKind::Random => Box::new(RandomPolicy::new(seed)),
        }
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolicyKind::Tree => write!(f, "tree"),
            PolicyKind::Cure => write!(f, "cure"),
            PolicyKind::Random => write!(f, "random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_names() {
        let search = SearchConfig::default();
        for kind in [PolicyKind::Tree, PolicyKind::Cure, PolicyKind::Random] {
            let policy = kind.build(&search, 1);
            assert_eq!(policy.name(), kind.to_string());
        }
    }

    #[test]
    fn test_boxed_policy_returns_valid_move() {
        let state = BoardState::new(9);
        let mut policy = PolicyKind::Cure.build(&SearchConfig::default(), 9);

        let mv = policy.get_move(&state).unwrap();
        assert!(state.is_valid_move(mv));
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&PolicyKind::Random).unwrap();
        assert_eq!(json, "\"random\"");
        let deserialized: PolicyKind = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, PolicyKind::Random);
    }
}
