//! Errors raised by the transition model and the policies that drive it.
//!
//! None of these are transient. Repeating the same call fails the same way.

use thiserror::Error;

use super::action::Move;
use super::player::PlayerId;
use crate::rules::GameResult;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move {mv} for {player}")]
    IllegalMove { mv: Move, player: PlayerId },

    #[error("game is already over ({result})")]
    GameOver { result: GameResult },

    #[error("no valid moves for {player}")]
    NoValidMoves { player: PlayerId },

    #[error("search at depth {depth} produced no candidate moves")]
    EmptySearch { depth: u32 },
}
