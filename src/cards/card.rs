//! The closed set of card kinds.
//!
//! Every card has an `EntityId` and a display name. Kind-specific data
//! lives in the variant payload, and callers dispatch with a single
//! `match` instead of runtime type checks.

use serde::{Deserialize, Serialize};

use super::pokemon::PokemonCard;
use crate::core::entity::EntityId;

/// An inert energy card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnergyCard {
    pub id: EntityId,
    pub name: String,
}

impl EnergyCard {
    #[must_use]
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One-shot effect of a trainer card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainerEffect {
    /// Draw this many cards from the top of the deck.
    Draw { cards: u32 },
    /// Heal the active Pokémon by this many hit points.
    Heal { amount: u32 },
}

/// A trainer card: discarded after its effect is applied.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrainerCard {
    pub id: EntityId,
    pub name: String,
    pub effect: TrainerEffect,
}

impl TrainerCard {
    /// Create a draw trainer.
    ///
    /// Panics if `cards` is zero.
    #[must_use]
    pub fn draw(id: EntityId, name: impl Into<String>, cards: u32) -> Self {
        assert!(cards > 0, "Draw trainer must draw at least one card");
        Self {
            id,
            name: name.into(),
            effect: TrainerEffect::Draw { cards },
        }
    }

    /// Create a heal trainer.
    ///
    /// Panics if `amount` is zero.
    #[must_use]
    pub fn heal(id: EntityId, name: impl Into<String>, amount: u32) -> Self {
        assert!(amount > 0, "Heal trainer must heal a positive amount");
        Self {
            id,
            name: name.into(),
            effect: TrainerEffect::Heal { amount },
        }
    }
}

/// A card in a deck, a hand, or the discard pile.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Pokemon(PokemonCard),
    Energy(EnergyCard),
    Trainer(TrainerCard),
}

impl Card {
    #[must_use]
    pub fn id(&self) -> EntityId {
        match self {
            Card::Pokemon(p) => p.id,
            Card::Energy(e) => e.id,
            Card::Trainer(t) => t.id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Card::Pokemon(p) => &p.name,
            Card::Energy(e) => &e.name,
            Card::Trainer(t) => &t.name,
        }
    }

    #[must_use]
    pub fn is_pokemon(&self) -> bool {
        matches!(self, Card::Pokemon(_))
    }

    #[must_use]
    pub fn is_trainer(&self) -> bool {
        matches!(self, Card::Trainer(_))
    }

    #[must_use]
    pub fn as_pokemon(&self) -> Option<&PokemonCard> {
        match self {
            Card::Pokemon(p) => Some(p),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_trainer(&self) -> Option<&TrainerCard> {
        match self {
            Card::Trainer(t) => Some(t),
            _ => None,
        }
    }
}

impl From<PokemonCard> for Card {
    fn from(card: PokemonCard) -> Self {
        Card::Pokemon(card)
    }
}

impl From<EnergyCard> for Card {
    fn from(card: EnergyCard) -> Self {
        Card::Energy(card)
    }
}

impl From<TrainerCard> for Card {
    fn from(card: TrainerCard) -> Self {
        Card::Trainer(card)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Pokemon(p) => write!(f, "{}", p),
            Card::Energy(e) => write!(f, "Energy: {}", e.name),
            Card::Trainer(t) => match t.effect {
                TrainerEffect::Draw { cards } => {
                    write!(f, "Draw Trainer: {} (Draws {})", t.name, cards)
                }
                TrainerEffect::Heal { amount } => {
                    write!(f, "Heal Trainer: {} (Heals {})", t.name, amount)
                }
            },
        }
    }
}
