//! Game configuration.
//!
//! A `GameConfig` fixes the deck composition and the trainer presets for
//! a session. Defaults reproduce the classic 60-card game with a
//! 7-card opening hand.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Cards in a full deck.
pub const DEFAULT_DECK_SIZE: usize = 60;

/// Cards dealt to each player at setup.
pub const DEFAULT_HAND_SIZE: usize = 7;

/// How filler (non-Pokémon) slots are picked during `Deck::fill`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillerPolicy {
    /// Uniform three-way pick among Energy, Draw Trainer and Heal Trainer.
    /// The deck always reaches `deck_size`.
    #[default]
    Uniform,
    /// Four-way pick where the fourth outcome adds nothing, so roughly a
    /// quarter of filler slots stay empty and decks come up short.
    Legacy,
}

/// Complete game configuration.
///
/// ```
/// use pokemon_tcg::core::{FillerPolicy, GameConfig};
///
/// let config = GameConfig::default()
///     .with_pokemon_count(12)
///     .with_filler_policy(FillerPolicy::Legacy);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.filler_count(), 48);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Target deck size for `Deck::fill`.
    pub deck_size: usize,

    /// Pokémon entries put into the deck.
    pub pokemon_count: usize,

    /// Opening hand size per player.
    pub hand_size: usize,

    /// Cards drawn by each filler Draw Trainer.
    pub draw_trainer_cards: u32,

    /// Hit points restored by each filler Heal Trainer.
    pub heal_trainer_amount: u32,

    /// Filler slot policy.
    pub filler_policy: FillerPolicy,

    /// Ends the game as a draw once this many turns have been played.
    /// `None` lets turns alternate indefinitely.
    pub max_turns: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            deck_size: DEFAULT_DECK_SIZE,
            pokemon_count: 10,
            hand_size: DEFAULT_HAND_SIZE,
            draw_trainer_cards: 1,
            heal_trainer_amount: 20,
            filler_policy: FillerPolicy::Uniform,
            max_turns: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    #[must_use]
    pub fn with_pokemon_count(mut self, count: usize) -> Self {
        self.pokemon_count = count;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    #[must_use]
    pub fn with_draw_trainer_cards(mut self, cards: u32) -> Self {
        self.draw_trainer_cards = cards;
        self
    }

    #[must_use]
    pub fn with_heal_trainer_amount(mut self, amount: u32) -> Self {
        self.heal_trainer_amount = amount;
        self
    }

    #[must_use]
    pub fn with_filler_policy(mut self, policy: FillerPolicy) -> Self {
        self.filler_policy = policy;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    /// Filler slots left after the Pokémon entries.
    ///
    /// Saturates at zero; `validate` reports the overflow case.
    #[must_use]
    pub fn filler_count(&self) -> usize {
        self.deck_size.saturating_sub(self.pokemon_count)
    }

    /// Check the configuration for values no game can be built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pokemon_count > self.deck_size {
            return Err(ConfigError::TooManyPokemon {
                requested: self.pokemon_count,
                deck_size: self.deck_size,
            });
        }
        if self.draw_trainer_cards == 0 {
            return Err(ConfigError::ZeroTrainerValue("draw_trainer_cards"));
        }
        if self.heal_trainer_amount == 0 {
            return Err(ConfigError::ZeroTrainerValue("heal_trainer_amount"));
        }
        Ok(())
    }
}
