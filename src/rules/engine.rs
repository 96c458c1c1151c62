//! The engine seam between the turn loop and a concrete rule set.
//!
//! `PokemonGame` is the one implementation; agents are written against
//! the trait so they only see legal actions and the state.

use serde::{Deserialize, Serialize};

use crate::core::action::TurnAction;
use crate::core::config::GameConfig;
use crate::core::event::GameEvent;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Both sides ran out of Pokémon together, or the turn limit was hit.
    Draw,
}

impl GameResult {
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }

    #[must_use]
    pub fn loser(&self) -> Option<PlayerId> {
        self.winner().map(PlayerId::opponent)
    }
}

/// Everything one `apply_action` call did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub player: PlayerId,
    pub action: TurnAction,
    pub turn: u32,
    /// Events in the order they happened.
    pub events: Vec<GameEvent>,
    /// Set if this turn ended the game.
    pub result: Option<GameResult>,
}

impl TurnReport {
    /// False if the action was rejected.
    #[must_use]
    pub fn applied(&self) -> bool {
        !self
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::Rejected { .. }))
    }
}

/// Turn resolution for a two-player game.
///
/// `legal_actions` is empty for a player who is not on turn. Given the
/// same state (including its RNG), `apply_action` must produce the same
/// report.
pub trait RulesEngine {
    fn config(&self) -> &GameConfig;

    /// Actions that would not be rejected if played now.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<TurnAction>;

    /// Resolve one turn for `player`.
    ///
    /// Illegal actions are not errors: they are recorded as rejected and
    /// still consume the turn.
    fn apply_action(
        &mut self,
        state: &mut GameState,
        player: PlayerId,
        action: TurnAction,
    ) -> TurnReport;

    /// The final result, once the game has ended.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;
}
