//! Card system: the closed card taxonomy and Pokémon presets.
//!
//! ## Key Types
//!
//! - `Card`: Tagged union over Pokémon, Energy and Trainer cards
//! - `PokemonCard` / `Move`: Mutable hit points, fixed move list
//! - `TrainerCard` / `TrainerEffect`: One-shot draw or heal effects
//! - `Species`: The four fixed-stat Pokémon a deck is filled from

pub mod card;
pub mod pokemon;

pub use card::{Card, EnergyCard, TrainerCard, TrainerEffect};
pub use pokemon::{Move, MoveList, PokemonCard, Species};
