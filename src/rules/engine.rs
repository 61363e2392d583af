//! The state transition: move, sub-turn advance, infection draw.

use log::debug;
use serde::{Deserialize, Serialize};

use super::outbreak::OutbreakChain;
use crate::core::{BoardState, City, GameError, Move};

/// The team wins on reaching this turn.
pub const MAX_TURNS: u32 = 15;

/// Sub-turn cycle length.
pub const SUBTURNS: u32 = 2;

/// The team loses on reaching this many outbreaks.
pub const MAX_OUTBREAKS: u32 = 3;

/// A city already holding this many infections outbreaks instead of
/// taking another.
pub const OUTBREAK_THRESHOLD: u8 = 3;

/// Random infections placed when a game starts.
pub const SEED_INFECTIONS: usize = 4;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Reached the turn limit.
    Won,
    /// Reached the outbreak limit.
    Lost,
}

impl GameResult {
    #[must_use]
    pub fn is_win(self) -> bool {
        matches!(self, GameResult::Won)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Won => write!(f, "won"),
            GameResult::Lost => write!(f, "lost"),
        }
    }
}

/// What the infection step did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Infection {
    /// The drawn city took one more infection.
    Spread(City),
    /// The drawn city was saturated and set off a chain.
    Outbreak(OutbreakChain),
}

impl Infection {
    /// The city drawn for this infection step.
    #[must_use]
    pub fn origin(&self) -> City {
        match self {
            Infection::Spread(city) => *city,
            Infection::Outbreak(chain) => chain.origin(),
        }
    }

    /// Outbreaks caused by this step.
    #[must_use]
    pub fn outbreaks(&self) -> u32 {
        match self {
            Infection::Spread(_) => 0,
            Infection::Outbreak(chain) => chain.outbreaks(),
        }
    }
}

impl BoardState {
    /// Apply a move for the active pawn, then advance turns and infect.
    ///
    /// Fails without touching the state if the game is over or the move is
    /// not in `valid_moves()`.
    pub fn apply(&mut self, mv: Move) -> Result<Infection, GameError> {
        if let Some(result) = self.result() {
            return Err(GameError::GameOver { result });
        }

        let player = self.active_player;
        if !self.is_valid_move(mv) {
            return Err(GameError::IllegalMove { mv, player });
        }

        match mv {
            Move::Cure => {
                let here = self.pawns[player];
                self.infections.decrement(here);
            }
            Move::Travel(destination) => {
                self.pawns[player] = destination;
            }
        }

        self.advance_subturn();

        let city = self.draw_city();
        Ok(self.infect(city))
    }

    /// Infect one specific city.
    ///
    /// This is the deterministic half of the infection step; `apply` draws
    /// the city uniformly and then calls this.
    pub fn infect(&mut self, city: City) -> Infection {
        debug!("infecting: {}", city);

        if self.infections.level(city) < OUTBREAK_THRESHOLD {
            self.infections.increment(city);
            return Infection::Spread(city);
        }

        let chain = OutbreakChain::resolve(&mut self.infections, city);
        self.outbreak_count += chain.outbreaks();
        debug!(
            "outbreak at {} spread through {} cities (total outbreaks {})",
            city,
            chain.outbreaks(),
            self.outbreak_count
        );
        Infection::Outbreak(chain)
    }

    /// Pick a city uniformly at random from the board.
    pub(crate) fn draw_city(&mut self) -> City {
        City::ALL[self.rng.gen_range_usize(0..City::COUNT)]
    }

    fn advance_subturn(&mut self) {
        self.subturn_number += 1;
        if self.subturn_number == SUBTURNS {
            self.subturn_number = 1;
            self.active_player = self.active_player.other();
            if self.active_player == crate::core::PlayerId::ONE {
                self.turn_number += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardStateBuilder, InfectionMap, PlayerId};

    fn clean_board() -> BoardState {
        BoardStateBuilder::new().seed_infections(0).build(42)
    }

    #[test]
    fn test_game_result() {
        assert!(GameResult::Won.is_win());
        assert!(!GameResult::Lost.is_win());
        assert_eq!(GameResult::Lost.to_string(), "lost");
    }

    #[test]
    fn test_travel_moves_active_pawn() {
        let mut state = clean_board();

        state.apply(Move::Travel(City::Napa)).unwrap();

        assert_eq!(state.pawn(PlayerId::ONE), City::Napa);
        assert_eq!(state.pawn(PlayerId::TWO), City::SanFrancisco);
        assert_eq!(state.active_player(), PlayerId::TWO);
    }

    #[test]
    fn test_cure_decrements_before_infection() {
        let mut state = BoardStateBuilder::new()
            .seed_infections(0)
            .infection(City::SanFrancisco, 2)
            .build(42);

        let infection = state.apply(Move::Cure).unwrap();

        // Cure removed one, the draw added one somewhere.
        let expected_sf = if infection.origin() == City::SanFrancisco { 2 } else { 1 };
        assert_eq!(state.infections().level(City::SanFrancisco), expected_sf);
        assert_eq!(state.infections().total(), 2);
    }

    #[test]
    fn test_turn_counters_advance_every_round() {
        let mut state = clean_board();

        state.apply(Move::Travel(City::Napa)).unwrap();
        assert_eq!(state.turn_number(), 1);
        assert_eq!(state.active_player(), PlayerId::TWO);
        assert_eq!(state.subturn_number(), 1);

        state.apply(Move::Travel(City::Sausalito)).unwrap();
        assert_eq!(state.turn_number(), 2);
        assert_eq!(state.active_player(), PlayerId::ONE);
    }

    #[test]
    fn test_twenty_eight_clean_moves_win() {
        let mut state = clean_board();

        for played in 1..=28u32 {
            assert!(!state.is_terminal());
            let mv = state.valid_moves()[0];
            state.apply(mv).unwrap();
            // Wipe the draw so no city can ever reach the threshold.
            state.infections = InfectionMap::new();

            assert!(!state.is_lost());
            assert_eq!(state.outbreak_count(), 0);
            assert_eq!(state.turn_number(), 1 + played / 2);
        }

        assert!(state.is_won());
        assert_eq!(state.turn_number(), MAX_TURNS);
        assert_eq!(state.result(), Some(GameResult::Won));
        assert_eq!(
            state.apply(Move::Travel(City::SanMateo)),
            Err(GameError::GameOver { result: GameResult::Won })
        );
    }

    #[test]
    fn test_illegal_travel_rejected() {
        let mut state = clean_board();
        let before = state.clone();

        let err = state.apply(Move::Travel(City::SanJose)).unwrap_err();

        assert_eq!(
            err,
            GameError::IllegalMove {
                mv: Move::Travel(City::SanJose),
                player: PlayerId::ONE,
            }
        );
        assert_eq!(state.infections(), before.infections());
        assert_eq!(state.pawns(), before.pawns());
    }

    #[test]
    fn test_cure_on_clean_city_rejected() {
        let mut state = clean_board();
        let err = state.apply(Move::Cure).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { mv: Move::Cure, .. }));
    }

    #[test]
    fn test_apply_on_terminal_state_rejected() {
        let mut state = BoardStateBuilder::new().outbreak_count(MAX_OUTBREAKS).build(42);
        let err = state.apply(Move::Travel(City::Napa)).unwrap_err();
        assert_eq!(err, GameError::GameOver { result: GameResult::Lost });
    }

    #[test]
    fn test_infect_below_threshold_spreads() {
        let mut state = clean_board();

        let infection = state.infect(City::Oakland);

        assert_eq!(infection, Infection::Spread(City::Oakland));
        assert_eq!(infection.outbreaks(), 0);
        assert_eq!(state.infections().level(City::Oakland), 1);
    }

    #[test]
    fn test_infect_saturated_city_outbreaks() {
        let mut state = BoardStateBuilder::new()
            .seed_infections(0)
            .infection(City::Sonoma, OUTBREAK_THRESHOLD)
            .build(42);

        let infection = state.infect(City::Sonoma);

        assert_eq!(infection.outbreaks(), 1);
        assert_eq!(state.outbreak_count(), 1);
        assert_eq!(state.infections().level(City::Sonoma), OUTBREAK_THRESHOLD);
        assert_eq!(state.infections().level(City::Berkeley), 1);
        assert_eq!(state.infections().level(City::Napa), 1);
    }

    #[test]
    fn test_apply_is_deterministic_for_seed() {
        let mut a = BoardState::new(99);
        let mut b = BoardState::new(99);

        for _ in 0..10 {
            if a.is_terminal() {
                break;
            }
            let mv = a.valid_moves()[0];
            assert_eq!(a.apply(mv).unwrap(), b.apply(mv).unwrap());
        }
        assert_eq!(a.infections(), b.infections());
    }
}
