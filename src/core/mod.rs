//! Core board types: cities, players, moves, RNG, board state, errors.
//!
//! Everything the transition model and the policies share lives here. The
//! rules that mutate a `BoardState` are in `crate::rules`.

pub mod action;
pub mod city;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, MoveList};
pub use city::City;
pub use error::GameError;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use state::{BoardState, BoardStateBuilder, InfectionMap};
