//! Move representation.
//!
//! A pawn does exactly one thing per sub-turn: remove one infection from the
//! city it stands on, or step to an adjacent city. The set is closed; policies
//! pick from `BoardState::valid_moves` and the board consumes the choice.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::city::City;

/// A single pawn action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Remove one infection from the active pawn's city.
    Cure,
    /// Step the active pawn to a neighboring city.
    Travel(City),
}

impl Move {
    /// Check if this is a cure.
    #[must_use]
    pub fn is_cure(self) -> bool {
        matches!(self, Move::Cure)
    }

    /// Destination of a travel move.
    #[must_use]
    pub fn destination(self) -> Option<City> {
        match self {
            Move::Travel(city) => Some(city),
            Move::Cure => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Cure => write!(f, "Cure"),
            Move::Travel(city) => write!(f, "Travel({})", city),
        }
    }
}

/// Legal moves at a decision point.
///
/// The busiest city has five neighbors, so every list fits inline.
pub type MoveList = SmallVec<[Move; 6]>;
