//! Turn actions.
//!
//! On each turn the acting player takes exactly one action: use a move of
//! the active Pokémon, or use a trainer card from the hand. A selection
//! that names neither still consumes the turn.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Console menu code for "use move".
pub const MENU_USE_MOVE: i64 = 0;

/// Console menu code for "use trainer card".
pub const MENU_USE_TRAINER: i64 = 1;

/// A complete turn action.
///
/// ```
/// use pokemon_tcg::core::TurnAction;
///
/// assert_eq!(TurnAction::from_menu(0, 1), TurnAction::UseMove { move_index: 1 });
/// assert_eq!(TurnAction::from_menu(1, 4), TurnAction::UseTrainer { hand_index: 4 });
/// assert_eq!(TurnAction::from_menu(7, 0), TurnAction::Invalid);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    /// Attack the opponent's active Pokémon with a move.
    UseMove { move_index: usize },
    /// Use the trainer card at a hand index.
    UseTrainer { hand_index: usize },
    /// Unrecognized selection.
    Invalid,
}

impl TurnAction {
    /// Map a menu choice and its sub-selection to an action.
    ///
    /// Negative sub-selections can never index anything and map to
    /// `usize::MAX` so they are rejected as out of range.
    #[must_use]
    pub fn from_menu(choice: i64, selection: i64) -> Self {
        let index = usize::try_from(selection).unwrap_or(usize::MAX);
        match choice {
            MENU_USE_MOVE => TurnAction::UseMove { move_index: index },
            MENU_USE_TRAINER => TurnAction::UseTrainer { hand_index: index },
            _ => TurnAction::Invalid,
        }
    }
}

impl std::fmt::Display for TurnAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnAction::UseMove { move_index } => write!(f, "use move {}", move_index),
            TurnAction::UseTrainer { hand_index } => write!(f, "use trainer {}", hand_index),
            TurnAction::Invalid => write!(f, "invalid action"),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: TurnAction,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Whether the action took effect (false if it was rejected).
    pub applied: bool,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: TurnAction, turn: u32, applied: bool) -> Self {
        Self {
            player,
            action,
            turn,
            applied,
        }
    }
}
