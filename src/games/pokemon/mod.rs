//! Two-player Pokémon card game.
//!
//! - Each player is dealt 7 random cards from one shared 60-card deck
//! - The first Pokémon in each hand becomes the active Pokémon
//! - On your turn: attack with a move OR play a trainer card
//! - A player with no Pokémon left (active or in hand) loses

mod game;
pub mod simulation;

pub use game::{PokemonGame, PokemonGameBuilder};
pub use simulation::{opening_hand_rate, opening_hand_sweep, SweepPoint};
