//! One-step reactive policies: no lookahead, no tree.

use super::Policy;
use crate::core::{BoardState, GameError, GameRng, Move};

/// Cure whenever the active pawn's city is infected, otherwise move to a
/// random neighbor.
#[derive(Clone, Debug)]
pub struct CurePolicy {
    rng: GameRng,
}

impl CurePolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Policy for CurePolicy {
    fn get_move(&mut self, state: &BoardState) -> Result<Move, GameError> {
        let moves = state.valid_moves();
        if moves.contains(&Move::Cure) {
            return Ok(Move::Cure);
        }
        pick_uniform(&mut self.rng, &moves, state)
    }

    fn name(&self) -> &'static str {
        "cure"
    }
}

/// Random valid move. When a cure is available it carries as much weight as
/// all travel moves together.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn get_move(&mut self, state: &BoardState) -> Result<Move, GameError> {
        let moves = state.valid_moves();
        let travels = moves.iter().filter(|m| !m.is_cure()).count() as f32;
        let weights: Vec<f32> = moves
            .iter()
            .map(|m| if m.is_cure() { travels } else { 1.0 })
            .collect();

        match self.rng.choose_weighted(&weights) {
            Some(idx) => Ok(moves[idx]),
            None => pick_uniform(&mut self.rng, &moves, state),
        }
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

fn pick_uniform(rng: &mut GameRng, moves: &[Move], state: &BoardState) -> Result<Move, GameError> {
    rng.choose(moves).copied().ok_or(GameError::NoValidMoves {
        player: state.active_player(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardStateBuilder, City, PlayerId};

    #[test]
    fn test_cure_policy_cures_when_possible() {
        let state = BoardStateBuilder::new()
            .seed_infections(0)
            .infection(City::SanFrancisco, 1)
            .build(1);
        let mut policy = CurePolicy::new(1);

        for _ in 0..10 {
            assert_eq!(policy.get_move(&state), Ok(Move::Cure));
        }
    }

    #[test]
    fn test_cure_policy_travels_otherwise() {
        let state = BoardStateBuilder::new().seed_infections(0).build(1);
        let mut policy = CurePolicy::new(1);

        for _ in 0..10 {
            let mv = policy.get_move(&state).unwrap();
            assert!(!mv.is_cure());
            assert!(state.is_valid_move(mv));
        }
    }

    #[test]
    fn test_empty_move_list_is_reported() {
        let state = BoardState::new(1);
        let mut rng = GameRng::new(1);

        assert_eq!(
            pick_uniform(&mut rng, &[], &state),
            Err(GameError::NoValidMoves { player: PlayerId::ONE })
        );
    }

    #[test]
    fn test_random_policy_returns_valid_moves() {
        let state = BoardState::new(3);
        let mut policy = RandomPolicy::new(3);

        for _ in 0..50 {
            let mv = policy.get_move(&state).unwrap();
            assert!(state.is_valid_move(mv));
        }
    }

    #[test]
    fn test_random_policy_cures_about_half_the_time() {
        let state = BoardStateBuilder::new()
            .seed_infections(0)
            .infection(City::SanFrancisco, 1)
            .build(1);
        let mut policy = RandomPolicy::new(11);

        let cures = (0..2000)
            .filter(|_| policy.get_move(&state) == Ok(Move::Cure))
            .count();

        assert!((800..1200).contains(&cures), "cured {} of 2000", cures);
    }

    #[test]
    fn test_random_policy_is_deterministic() {
        let state = BoardState::new(3);
        let mut a = RandomPolicy::new(5);
        let mut b = RandomPolicy::new(5);

        for _ in 0..20 {
            assert_eq!(a.get_move(&state), b.get_move(&state));
        }
    }
}
