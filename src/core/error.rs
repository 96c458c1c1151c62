//! Error and fault types.
//!
//! Two kinds of failure exist:
//!
//! - `TurnFault`: a soft game condition (bad selection, empty deck, ...).
//!   The turn is consumed, the fault is logged, and play continues.
//! - `ConfigError` / `DeckError` / `SetupError`: construction-time
//!   failures that prevent a session from starting.

use serde::{Deserialize, Serialize};

/// A game-state condition that voids an action without ending the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnFault {
    /// Hand index out of range.
    InvalidSelection { index: usize, hand_size: usize },
    /// The selected hand card cannot be used as a trainer.
    NotATrainer { index: usize, card: String },
    /// The acting player has no active Pokémon (move or heal).
    NoActivePokemon,
    /// The opponent has no active Pokémon to hit.
    NoTarget,
    /// Move index out of range for the active Pokémon.
    InvalidMove { index: usize, available: usize },
    /// The deck holds fewer cards than a draw requires.
    NotEnoughCards { requested: u32, available: usize },
    /// The menu selection did not name an action.
    InvalidAction,
    /// Acting out of turn.
    NotYourTurn,
    /// The game has already ended.
    GameOver,
}

impl std::fmt::Display for TurnFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnFault::InvalidSelection { index, hand_size } => {
                write!(f, "Invalid card selection {} (hand has {} cards)", index, hand_size)
            }
            TurnFault::NotATrainer { card, .. } => {
                write!(f, "Selected card {} is not a Trainer card", card)
            }
            TurnFault::NoActivePokemon => write!(f, "No active Pokémon"),
            TurnFault::NoTarget => write!(f, "Opponent has no active Pokémon to target"),
            TurnFault::InvalidMove { index, available } => {
                write!(f, "Invalid move selection {} ({} moves available)", index, available)
            }
            TurnFault::NotEnoughCards { requested, available } => write!(
                f,
                "Not enough cards in the deck to draw ({} requested, {} left)",
                requested, available
            ),
            TurnFault::InvalidAction => write!(f, "Invalid action selection"),
            TurnFault::NotYourTurn => write!(f, "It is not this player's turn"),
            TurnFault::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for TurnFault {}

/// Invalid `GameConfig` values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    TooManyPokemon { requested: usize, deck_size: usize },
    ZeroTrainerValue(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::TooManyPokemon { requested, deck_size } => write!(
                f,
                "{} Pokémon requested but the deck only holds {} cards",
                requested, deck_size
            ),
            ConfigError::ZeroTrainerValue(field) => {
                write!(f, "{} must be greater than zero", field)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Deck construction failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeckError {
    Config(ConfigError),
    /// Existing cards plus the requested Pokémon exceed the deck size.
    Overfull {
        existing: usize,
        pokemon_count: usize,
        deck_size: usize,
    },
}

impl From<ConfigError> for DeckError {
    fn from(err: ConfigError) -> Self {
        DeckError::Config(err)
    }
}

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckError::Config(err) => write!(f, "Cannot fill deck: {}", err),
            DeckError::Overfull {
                existing,
                pokemon_count,
                deck_size,
            } => write!(
                f,
                "Cannot fill deck: {} cards already in it plus {} Pokémon exceed {} cards",
                existing, pokemon_count, deck_size
            ),
        }
    }
}

impl std::error::Error for DeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeckError::Config(err) => Some(err),
            DeckError::Overfull { .. } => None,
        }
    }
}

/// Failures that abort a session before the first turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    Config(ConfigError),
    Deck(DeckError),
    /// No cards to deal; no game can start.
    EmptyDeck,
    /// Hands were already dealt for this state.
    AlreadyStarted,
}

impl From<ConfigError> for SetupError {
    fn from(err: ConfigError) -> Self {
        SetupError::Config(err)
    }
}

impl From<DeckError> for SetupError {
    fn from(err: DeckError) -> Self {
        SetupError::Deck(err)
    }
}

impl std::fmt::Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::Config(err) => write!(f, "Invalid configuration: {}", err),
            SetupError::Deck(err) => write!(f, "{}", err),
            SetupError::EmptyDeck => write!(f, "The deck is empty! Cannot start the game."),
            SetupError::AlreadyStarted => write!(f, "The game has already started."),
        }
    }
}

impl std::error::Error for SetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SetupError::Config(err) => Some(err),
            SetupError::Deck(err) => Some(err),
            SetupError::EmptyDeck | SetupError::AlreadyStarted => None,
        }
    }
}
