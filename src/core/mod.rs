//! Core engine types: entities, players, state, actions, events, RNG,
//! configuration and errors.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod event;
pub mod error;
pub mod state;

pub use entity::{EntityAllocator, EntityId};
pub use player::{AppliedEffect, Player, PlayerId, PlayerMap, TrainerOutcome, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{FillerPolicy, GameConfig, DEFAULT_DECK_SIZE, DEFAULT_HAND_SIZE};
pub use action::{ActionRecord, TurnAction, MENU_USE_MOVE, MENU_USE_TRAINER};
pub use event::GameEvent;
pub use error::{ConfigError, DeckError, SetupError, TurnFault};
pub use state::{GameState, Phase};
