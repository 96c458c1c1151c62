//! Card locations outside of players.
//!
//! ## Key Types
//!
//! - `Deck`: Ordered draw pile shared by both players (top = end)
//! - `CardCategory`: Coarse category used in composition summaries
//!
//! Hands and active slots belong to `core::Player`; fainted Pokémon and
//! spent trainers go to the discard pile kept in `GameState`.

pub mod deck;

pub use deck::{CardCategory, Deck};
