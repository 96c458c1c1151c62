//! Per-turn action selection.
//!
//! The engine asks the acting player's `Agent` for one `TurnAction` each
//! turn. Agents see the full state and the engine (for legal actions);
//! they never mutate the state themselves.

use std::collections::VecDeque;

use crate::core::{GameRng, GameState, PlayerId, TurnAction};
use crate::rules::RulesEngine;

/// Chooses the action for a player's turn.
pub trait Agent<E: RulesEngine> {
    fn choose_action(&mut self, engine: &E, state: &GameState, player: PlayerId) -> TurnAction;
}

/// Always attacks with the active Pokémon's first move.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstMoveAgent;

impl<E: RulesEngine> Agent<E> for FirstMoveAgent {
    fn choose_action(&mut self, _engine: &E, _state: &GameState, _player: PlayerId) -> TurnAction {
        TurnAction::UseMove { move_index: 0 }
    }
}

/// Selects uniformly from legal actions.
///
/// With no legal action available it still attacks with move 0, which the
/// engine rejects and logs.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl<E: RulesEngine> Agent<E> for RandomAgent {
    fn choose_action(&mut self, engine: &E, state: &GameState, player: PlayerId) -> TurnAction {
        let actions = engine.legal_actions(state, player);
        self.rng
            .choose(&actions)
            .copied()
            .unwrap_or(TurnAction::UseMove { move_index: 0 })
    }
}

/// Replays a fixed list of actions, then falls back to move 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedAgent {
    script: VecDeque<TurnAction>,
}

impl ScriptedAgent {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = TurnAction>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl<E: RulesEngine> Agent<E> for ScriptedAgent {
    fn choose_action(&mut self, _engine: &E, _state: &GameState, _player: PlayerId) -> TurnAction {
        self.script
            .pop_front()
            .unwrap_or(TurnAction::UseMove { move_index: 0 })
    }
}
