//! Static evaluation used at search leaves.
//!
//! Higher is better for the team. Terminal states are pinned to the extremes;
//! everything else trades progress toward the turn limit against outbreaks
//! and infection pressure:
//!
//! ```text
//! progress = (turn - 1) * SUBTURNS + (player 2 to act ? 1 : 0)
//! pressure = sum of level^2 over all cities
//! cover    = sum of levels at the cities the pawns stand on
//!
//! score = 2 * progress - 10 * outbreaks - pressure + 0.5 * cover
//! ```
//!
//! Squaring the levels makes a cube on a nearly saturated city cost more than
//! the same cube on a clean one, so curing a level L city always gains at
//! least `2L - 1 - 0.5`. Cover rewards standing where the next cure is.

use super::engine::SUBTURNS;
use crate::core::{BoardState, PlayerId};

/// Score of any won state.
pub const WIN_SCORE: f64 = 1000.0;

/// Score of any lost state.
pub const LOSS_SCORE: f64 = -1000.0;

const PROGRESS_WEIGHT: f64 = 2.0;
const OUTBREAK_WEIGHT: f64 = 10.0;
const COVER_WEIGHT: f64 = 0.5;

impl BoardState {
    /// Heuristic value of this state for the team.
    #[must_use]
    pub fn evaluate(&self) -> f64 {
        if self.is_lost() {
            return LOSS_SCORE;
        }
        if self.is_won() {
            return WIN_SCORE;
        }

        let second_half = u32::from(self.active_player == PlayerId::TWO);
        let progress = (self.turn_number - 1) * SUBTURNS + second_half;

        let pressure: u32 = self
            .infections
            .iter()
            .map(|(_, level)| u32::from(level) * u32::from(level))
            .sum();

        let (a, b) = (self.pawns[PlayerId::ONE], self.pawns[PlayerId::TWO]);
        let mut cover = u32::from(self.infections.level(a));
        if b != a {
            cover += u32::from(self.infections.level(b));
        }

        PROGRESS_WEIGHT * f64::from(progress) - OUTBREAK_WEIGHT * f64::from(self.outbreak_count)
            - f64::from(pressure)
            + COVER_WEIGHT * f64::from(cover)
    }
}
