//! # pokemon-tcg
//!
//! A two-player Pokémon trading card game engine.
//!
//! ## Design Principles
//!
//! 1. **Closed Card Taxonomy**: A card is exactly one of Pokémon, Energy or
//!    Trainer (`Card` enum). The active slot holds a `PokemonCard`, so a
//!    non-Pokémon can never be active.
//!
//! 2. **Explicit State Machine**: `GameState` moves through
//!    `Setup -> Turn(player) -> GameOver(result)`. No action is accepted
//!    after the game ends.
//!
//! 3. **Soft Faults Never Unwind**: Bad selections become `TurnFault`s,
//!    are logged as events and consume the turn.
//!
//! 4. **Reproducible**: All randomness flows through a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, players, state, actions, events, RNG, configuration, errors
//! - `cards`: Card taxonomy, moves and Pokémon presets
//! - `zones`: The shared deck
//! - `rules`: RulesEngine trait and game results
//! - `agents`: Per-turn action selection
//! - `games`: The Pokémon engine and opening-hand simulation

pub mod core;
pub mod zones;
pub mod cards;
pub mod rules;
pub mod agents;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    EntityId, PlayerId, PlayerMap, Player,
    GameRng,
    FillerPolicy, GameConfig,
    TurnAction, ActionRecord, GameEvent,
    ConfigError, DeckError, SetupError, TurnFault,
    GameState, Phase,
};

pub use crate::zones::{CardCategory, Deck};

pub use crate::cards::{Card, EnergyCard, Move, PokemonCard, Species, TrainerCard, TrainerEffect};

pub use crate::rules::{GameResult, RulesEngine, TurnReport};

pub use crate::agents::{Agent, FirstMoveAgent, RandomAgent, ScriptedAgent};

pub use crate::games::pokemon::{PokemonGame, PokemonGameBuilder};
