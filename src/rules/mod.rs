//! Game rules: the transition model.
//!
//! `BoardState::apply` is the only way a game moves forward:
//! - Resolve the move (cure or travel)
//! - Advance the sub-turn and turn counters
//! - Draw one city and infect it, outbreaking if it is saturated
//!
//! Outbreak chain reactions live in `outbreak`; the search heuristic in
//! `evaluation`.

pub mod engine;
pub mod evaluation;
pub mod outbreak;

pub use engine::{
    GameResult, Infection, MAX_OUTBREAKS, MAX_TURNS, OUTBREAK_THRESHOLD, SEED_INFECTIONS, SUBTURNS,
};
pub use evaluation::{LOSS_SCORE, WIN_SCORE};
pub use outbreak::OutbreakChain;
