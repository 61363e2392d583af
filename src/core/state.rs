//! Board state: pawns, infections, turn counters.
//!
//! ## InfectionMap
//!
//! Per-city infection levels in a fixed array indexed by `City`.
//!
//! ## BoardState
//!
//! The single mutable entity of a game:
//! - Pawn location per player
//! - Infection levels
//! - Active player, turn and sub-turn counters
//! - Outbreak count
//! - RNG for infection draws
//!
//! Move enumeration and terminal checks live here. The transition itself
//! (`BoardState::apply`) and the evaluation heuristic are in `crate::rules`.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::action::{Move, MoveList};
use super::city::City;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::rules::{GameResult, MAX_OUTBREAKS, MAX_TURNS, OUTBREAK_THRESHOLD, SEED_INFECTIONS};

/// Infection level of every city.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InfectionMap {
    levels: [u8; City::COUNT],
}

impl InfectionMap {
    /// All cities clean.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Level of one city.
    #[inline]
    #[must_use]
    pub fn level(&self, city: City) -> u8 {
        self.levels[city.index()]
    }

    /// Overwrite the level of one city.
    pub fn set(&mut self, city: City, level: u8) {
        self.levels[city.index()] = level;
    }

    /// Add one infection to a city.
    pub fn increment(&mut self, city: City) {
        self.levels[city.index()] += 1;
    }

    /// Remove one infection from a city. Returns false if it was already clean.
    pub fn decrement(&mut self, city: City) -> bool {
        let level = &mut self.levels[city.index()];
        if *level == 0 {
            return false;
        }
        *level -= 1;
        true
    }

    /// Sum of all levels.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.levels.iter().map(|&l| u32::from(l)).sum()
    }

    /// Highest level on the board.
    #[must_use]
    pub fn max_level(&self) -> u8 {
        self.levels.iter().copied().max().unwrap_or(0)
    }

    /// Iterate over (City, level) pairs in city order.
    pub fn iter(&self) -> impl Iterator<Item = (City, u8)> + '_ {
        City::ALL.iter().map(move |&c| (c, self.level(c)))
    }

    /// Iterate over infected cities only.
    pub fn infected(&self) -> impl Iterator<Item = (City, u8)> + '_ {
        self.iter().filter(|&(_, level)| level > 0)
    }
}

impl Index<City> for InfectionMap {
    type Output = u8;

    fn index(&self, city: City) -> &Self::Output {
        &self.levels[city.index()]
    }
}

/// Complete game state.
///
/// `Clone` copies the RNG verbatim, so a plain clone replays the same
/// infection draws. Use `clone_state` for an independent branch.
#[derive(Clone, Debug)]
pub struct BoardState {
    /// Pawn location per player.
    pub(crate) pawns: PlayerMap<City>,

    /// Infection level per city.
    pub(crate) infections: InfectionMap,

    /// Whose pawn acts next.
    pub(crate) active_player: PlayerId,

    /// Completed rounds + 1.
    pub(crate) turn_number: u32,

    /// Position within the sub-turn cycle (1-based).
    pub(crate) subturn_number: u32,

    /// Outbreaks so far. Never decreases.
    pub(crate) outbreak_count: u32,

    /// Deterministic RNG for infection draws.
    pub(crate) rng: GameRng,
}

impl BoardState {
    /// Start a new game: both pawns at the start city, four random seed
    /// infections.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        BoardStateBuilder::new().build(seed)
    }

    /// Location of a player's pawn.
    #[must_use]
    pub fn pawn(&self, player: PlayerId) -> City {
        self.pawns[player]
    }

    /// Both pawn locations.
    #[must_use]
    pub fn pawns(&self) -> &PlayerMap<City> {
        &self.pawns
    }

    /// Location of the pawn about to act.
    #[must_use]
    pub fn current_location(&self) -> City {
        self.pawns[self.active_player]
    }

    /// Infection levels.
    #[must_use]
    pub fn infections(&self) -> &InfectionMap {
        &self.infections
    }

    /// Whose pawn acts next.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn subturn_number(&self) -> u32 {
        self.subturn_number
    }

    #[must_use]
    pub fn outbreak_count(&self) -> u32 {
        self.outbreak_count
    }

    /// Legal moves for the active pawn.
    ///
    /// One `Travel` per neighbor in board order, then `Cure` if the pawn's
    /// city is infected. Never empty.
    #[must_use]
    pub fn valid_moves(&self) -> MoveList {
        let here = self.current_location();
        let mut moves: MoveList = here.neighbors().iter().map(|&c| Move::Travel(c)).collect();
        if self.infections.level(here) > 0 {
            moves.push(Move::Cure);
        }
        moves
    }

    /// Check whether a move is legal right now.
    #[must_use]
    pub fn is_valid_move(&self, mv: Move) -> bool {
        let here = self.current_location();
        match mv {
            Move::Cure => self.infections.level(here) > 0,
            Move::Travel(dest) => here.is_adjacent(dest),
        }
    }

    /// The team survived to the turn limit.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.turn_number >= MAX_TURNS
    }

    /// Too many outbreaks.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.outbreak_count >= MAX_OUTBREAKS
    }

    /// No further moves are taken.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// Outcome of a finished game, `None` while play continues.
    ///
    /// A loss takes precedence if both limits are somehow reached together.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.is_lost() {
            Some(GameResult::Lost)
        } else if self.is_won() {
            Some(GameResult::Won)
        } else {
            None
        }
    }

    // === Cloning ===

    /// Clone the state for a search branch.
    ///
    /// Takes `&mut self` because forking the RNG advances the fork counter.
    /// Each branch therefore draws its own, reproducible, infections.
    #[must_use]
    pub fn clone_state(&mut self) -> Self {
        Self {
            pawns: self.pawns,
            infections: self.infections,
            active_player: self.active_player,
            turn_number: self.turn_number,
            subturn_number: self.subturn_number,
            outbreak_count: self.outbreak_count,
            rng: self.rng.fork(),
        }
    }
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "Player turn: {}", self.active_player.number())?;
        writeln!(f, "Subturn: {}", self.subturn_number)?;
        writeln!(f, "Turn: {}", self.turn_number)?;
        writeln!(f, "Outbreak count: {}", self.outbreak_count)?;
        for (player, city) in self.pawns.iter() {
            writeln!(f, "Player {} location: {}", player.number(), city)?;
        }
        for (city, level) in self.infections.infected() {
            writeln!(f)?;
            write!(f, "{}: {}", city, level)?;
        }
        Ok(())
    }
}

/// Builder for a `BoardState`.
///
/// The default builds the standard opening. Tests and tooling use the setters
/// to start from an arbitrary mid-game position.
#[derive(Clone, Debug)]
pub struct BoardStateBuilder {
    pawns: PlayerMap<City>,
    infections: InfectionMap,
    seed_infections: usize,
    active_player: PlayerId,
    turn_number: u32,
    outbreak_count: u32,
}

impl Default for BoardStateBuilder {
    fn default() -> Self {
        Self {
            pawns: PlayerMap::with_value(City::START),
            infections: InfectionMap::new(),
            seed_infections: SEED_INFECTIONS,
            active_player: PlayerId::ONE,
            turn_number: 1,
            outbreak_count: 0,
        }
    }
}

impl BoardStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a pawn.
    pub fn pawn(mut self, player: PlayerId, city: City) -> Self {
        self.pawns[player] = city;
        self
    }

    /// Set a city's starting level. Applied before the random seed infections.
    ///
    /// Levels above the outbreak threshold are clamped to it.
    pub fn infection(mut self, city: City, level: u8) -> Self {
        self.infections.set(city, level.min(OUTBREAK_THRESHOLD));
        self
    }

    /// Number of random infections added at build time (default 4).
    pub fn seed_infections(mut self, count: usize) -> Self {
        self.seed_infections = count;
        self
    }

    pub fn active_player(mut self, player: PlayerId) -> Self {
        self.active_player = player;
        self
    }

    /// Set the turn. Turns start at 1; a 0 is raised to 1.
    pub fn turn_number(mut self, turn: u32) -> Self {
        self.turn_number = turn.max(1);
        self
    }

    pub fn outbreak_count(mut self, count: u32) -> Self {
        self.outbreak_count = count;
        self
    }

    /// Build the state, drawing seed infections from an RNG seeded with `seed`.
    ///
    /// Seed infections stop at the outbreak threshold.
    pub fn build(self, seed: u64) -> BoardState {
        let mut state = BoardState {
            pawns: self.pawns,
            infections: self.infections,
            active_player: self.active_player,
            turn_number: self.turn_number,
            subturn_number: 1,
            outbreak_count: self.outbreak_count,
            rng: GameRng::new(seed),
        };

        for _ in 0..self.seed_infections {
            let city = state.draw_city();
            log::debug!("infecting: {}", city);
            // Seeding never outbreaks; a full city just stays full.
            if state.infections.level(city) < OUTBREAK_THRESHOLD {
                state.infections.increment(city);
            }
        }

        state
    }
}
