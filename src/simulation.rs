//! Game loop and multi-game sessions.
//!
//! `play_game` drives one board to a terminal state with a policy.
//! `run_session` plays many seeded games and folds the outcomes into a
//! `SessionReport`.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{BoardState, GameError, GameRng};
use crate::policy::{Policy, PolicyKind};
use crate::rules::GameResult;
use crate::search::SearchConfig;

/// How a single game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// True if the game reached the turn limit without losing.
    pub won: bool,

    /// Final result.
    pub result: GameResult,

    /// Turn number at the end of the game.
    pub turns: u32,

    /// Outbreaks over the whole game.
    pub outbreaks: u32,

    /// Moves applied.
    pub moves: u32,
}

/// Play one game from the standard opening until it is won or lost.
pub fn play_game(policy: &mut dyn Policy, seed: u64) -> Result<GameOutcome, GameError> {
    play_from(policy, BoardState::new(seed))
}

/// Play an already-built board to the end.
pub fn play_from(policy: &mut dyn Policy, mut state: BoardState) -> Result<GameOutcome, GameError> {
    debug!("{}", state);
    let mut moves = 0;

    let result = loop {
        if let Some(result) = state.result() {
            break result;
        }

        let mv = policy.get_move(&state)?;
        debug!("{} plays {}", state.active_player(), mv);
        state.apply(mv)?;
        moves += 1;
        debug!("{}", state);
    };

    match result {
        GameResult::Won => info!("You won!"),
        GameResult::Lost => info!("You lost :("),
    }

    Ok(GameOutcome {
        won: result.is_win(),
        result,
        turns: state.turn_number(),
        outbreaks: state.outbreak_count(),
        moves,
    })
}

/// Configuration for a batch of games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of games to play (default: 100).
    pub games: u32,

    /// Session seed; every game and policy seed is derived from it.
    pub seed: u64,

    /// Strategy to play with.
    pub policy: PolicyKind,

    /// Search settings for the tree policy.
    pub search: SearchConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: 42,
            policy: PolicyKind::Tree,
            search: SearchConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Create a session config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set the session seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the strategy.
    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    /// Set the tree search settings.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}

/// Aggregate results of a session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub policy: String,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
    pub mean_turns: f64,
    pub mean_outbreaks: f64,
}

impl SessionReport {
    /// Summarize a list of outcomes.
    pub fn from_outcomes(policy: &str, outcomes: &[GameOutcome]) -> Self {
        let games = outcomes.len() as u32;
        let wins = outcomes.iter().filter(|o| o.won).count() as u32;

        let mean = |f: fn(&GameOutcome) -> u32| {
            if games == 0 {
                0.0
            } else {
                outcomes.iter().map(|o| f(o) as f64).sum::<f64>() / games as f64
            }
        };

        Self {
            policy: policy.to_string(),
            games,
            wins,
            losses: games - wins,
            win_rate: if games == 0 { 0.0 } else { wins as f64 / games as f64 },
            mean_turns: mean(|o| o.turns),
            mean_outbreaks: mean(|o| o.outbreaks),
        }
    }
}

impl std::fmt::Display for SessionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "You won {} out of {}.", self.wins, self.games)?;
        writeln!(f, "policy:         {}", self.policy)?;
        writeln!(f, "win rate:       {:.1}%", self.win_rate * 100.0)?;
        writeln!(f, "mean turns:     {:.2}", self.mean_turns)?;
        write!(f, "mean outbreaks: {:.2}", self.mean_outbreaks)
    }
}

/// Play `config.games` games and report the tally.
///
/// Each game gets a fresh board and a fresh policy, both seeded from the
/// session RNG, so a session is reproducible from its seed alone.
pub fn run_session(config: &SessionConfig) -> Result<SessionReport, GameError> {
    let mut rng = GameRng::new(config.seed);
    let mut outcomes = Vec::with_capacity(config.games as usize);

    for game in 0..config.games {
        let game_seed = rng.next_seed();
        let mut policy = config.policy.build(&config.search, rng.next_seed());
        debug!("game {} seed {}", game + 1, game_seed);

        outcomes.push(play_game(&mut policy, game_seed)?);
    }

    let report = SessionReport::from_outcomes(&config.policy.to_string(), &outcomes);
    info!("You won {} out of {}.", report.wins, report.games);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardStateBuilder;
    use crate::policy::CurePolicy;
    use crate::rules::MAX_TURNS;

    #[test]
    fn test_play_game_reaches_terminal() {
        let mut policy = CurePolicy::new(1);
        let outcome = play_game(&mut policy, 1).unwrap();

        assert_eq!(outcome.won, outcome.result.is_win());
        if outcome.won {
            assert_eq!(outcome.turns, MAX_TURNS);
            assert_eq!(outcome.moves, 28);
        } else {
            assert!(outcome.outbreaks >= 3);
            assert!(outcome.moves <= 28);
        }
    }

    #[test]
    fn test_play_from_terminal_board() {
        let state = BoardStateBuilder::new().turn_number(MAX_TURNS).build(1);
        let mut policy = CurePolicy::new(1);

        let outcome = play_from(&mut policy, state).unwrap();

        assert!(outcome.won);
        assert_eq!(outcome.moves, 0);
    }

    #[test]
    fn test_report_from_outcomes() {
        let won = GameOutcome {
            won: true,
            result: GameResult::Won,
            turns: 15,
            outbreaks: 1,
            moves: 28,
        };
        let lost = GameOutcome {
            won: false,
            result: GameResult::Lost,
            turns: 7,
            outbreaks: 3,
            moves: 12,
        };

        let report = SessionReport::from_outcomes("cure", &[won, lost]);

        assert_eq!(report.games, 2);
        assert_eq!(report.wins, 1);
        assert_eq!(report.losses, 1);
        assert_eq!(report.win_rate, 0.5);
        assert_eq!(report.mean_turns, 11.0);
        assert_eq!(report.mean_outbreaks, 2.0);
        assert!(report.to_string().starts_with("You won 1 out of 2."));
    }

    #[test]
    fn test_empty_report() {
        let report = SessionReport::from_outcomes("tree", &[]);
        assert_eq!(report.games, 0);
        assert_eq!(report.win_rate, 0.0);
    }

    #[test]
    fn test_session_config_builders() {
        let config = SessionConfig::new()
            .with_games(5)
            .with_seed(9)
            .with_policy(PolicyKind::Random)
            .with_search(SearchConfig::default().with_max_depth(1));

        assert_eq!(config.games, 5);
        assert_eq!(config.seed, 9);
        assert_eq!(config.policy, PolicyKind::Random);
        assert_eq!(config.search.max_depth, 1);
    }

    #[test]
    fn test_session_config_serialization() {
        let config = SessionConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
