//! # outbreak
//!
//! A small cooperative disease-containment game with lookahead AI.
//!
//! Two pawns move around a fixed map of 13 Bay Area cities. After every
//! move one city is drawn at random and infected; a city that is already
//! at the threshold outbreaks into its neighbors instead. The pawns win by
//! surviving 15 turns and lose at the third outbreak.
//!
//! ## Design Principles
//!
//! 1. **Value-Type State**: `BoardState` is a few fixed-size arrays plus an
//!    RNG. Search branches clone it outright.
//!
//! 2. **Seeded Chance**: every random draw comes from a forked ChaCha8
//!    `GameRng`, so any game or search is reproducible from one seed.
//!
//! 3. **Closed Move Set**: a move is either `Cure` or `Travel(City)`.
//!
//! ## Modules
//!
//! - `core`: Cities, players, moves, RNG, board state, errors
//! - `rules`: Transition model, outbreak chains, evaluation heuristic
//! - `search`: Fixed-depth pessimistic lookahead tree
//! - `policy`: `Policy` trait and the reactive policies
//! - `simulation`: Game loop and multi-game sessions

pub mod core;
pub mod policy;
pub mod rules;
pub mod search;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{
    BoardState, BoardStateBuilder, City, GameError, GameRng, InfectionMap, Move, MoveList,
    PlayerId, PlayerMap,
};

pub use crate::rules::{GameResult, Infection, OutbreakChain};

pub use crate::search::{SearchConfig, SearchStats, SearchTree, TreeSearchPolicy, TreeStats};

pub use crate::policy::{CurePolicy, Policy, PolicyKind, RandomPolicy};

pub use crate::simulation::{play_game, run_session, GameOutcome, SessionConfig, SessionReport};
