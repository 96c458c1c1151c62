//! The shared draw deck.
//!
//! The deck is an ordered sequence of cards. Index 0 is the bottom,
//! the last element is the top, matching how `Vec::pop` draws.
//!
//! ## Usage
//!
//! ```
//! use pokemon_tcg::zones::Deck;
//! use pokemon_tcg::core::{GameConfig, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let mut deck = Deck::new();
//! deck.fill(&GameConfig::default().with_pokemon_count(8), &mut rng).unwrap();
//! deck.shuffle(&mut rng);
//!
//! assert_eq!(deck.len(), 60);
//! assert_eq!(deck.pokemon_count(), 8);
//! assert!(deck.draw_card().is_some());
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, EnergyCard, Species, TrainerCard};
use crate::core::config::{FillerPolicy, GameConfig};
use crate::core::entity::EntityAllocator;
use crate::core::error::DeckError;
use crate::core::rng::GameRng;

/// Coarse card category, used for composition summaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardCategory {
    Pokemon,
    Energy,
    DrawTrainer,
    HealTrainer,
}

impl CardCategory {
    #[must_use]
    pub fn of(card: &Card) -> Self {
        use crate::cards::TrainerEffect;

        match card {
            Card::Pokemon(_) => CardCategory::Pokemon,
            Card::Energy(_) => CardCategory::Energy,
            Card::Trainer(t) => match t.effect {
                TrainerEffect::Draw { .. } => CardCategory::DrawTrainer,
                TrainerEffect::Heal { .. } => CardCategory::HealTrainer,
            },
        }
    }
}

/// Ordered, shuffleable deck of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    ids: EntityAllocator,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck from explicit cards (bottom first).
    ///
    /// New cards added by `fill` get IDs above the highest one given here.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let next = cards.iter().map(|c| c.id().raw() + 1).max().unwrap_or(0);
        Self {
            cards,
            ids: EntityAllocator::starting_at(next),
        }
    }

    /// The fixed 60-card deck: one of each species, 15 energy, and 41
    /// trainers alternating heal and draw.
    #[must_use]
    pub fn standard() -> Self {
        let mut deck = Self::new();

        for species in [
            Species::Pikachu,
            Species::Charmander,
            Species::Bulbasaur,
            Species::Squirtle,
        ] {
            let id = deck.ids.alloc();
            deck.cards.push(species.card(id).into());
        }

        for i in 0..15 {
            let id = deck.ids.alloc();
            deck.cards
                .push(EnergyCard::new(id, format!("Basic Energy {}", i + 1)).into());
        }

        for i in 0..41 {
            let id = deck.ids.alloc();
            let trainer = if i % 2 == 0 {
                TrainerCard::heal(id, format!("Heal Trainer {}", i + 1), 20)
            } else {
                TrainerCard::draw(id, format!("Draw Trainer {}", i + 1), 1)
            };
            deck.cards.push(trainer.into());
        }

        deck
    }

    /// Add `pokemon_count` random Pokémon and pad the deck up to
    /// `deck_size` with random filler cards.
    ///
    /// Cards already in the deck count towards `deck_size`. Each Pokémon is
    /// a uniform pick among the four species. Filler slots follow
    /// `config.filler_policy`; with `FillerPolicy::Legacy` some slots stay
    /// empty. Returns the number of cards added.
    pub fn fill(&mut self, config: &GameConfig, rng: &mut GameRng) -> Result<usize, DeckError> {
        config.validate()?;
        let before = self.cards.len();
        if before + config.pokemon_count > config.deck_size {
            return Err(DeckError::Overfull {
                existing: before,
                pokemon_count: config.pokemon_count,
                deck_size: config.deck_size,
            });
        }
        let filler_count = config.filler_count() - before;

        for _ in 0..config.pokemon_count {
            let species = Species::ALL[rng.gen_range_usize(0..Species::ALL.len())];
            let id = self.ids.alloc();
            self.cards.push(species.card(id).into());
        }

        let outcomes = match config.filler_policy {
            FillerPolicy::Uniform => 3,
            FillerPolicy::Legacy => 4,
        };

        for slot in 0..filler_count {
            let number = slot + 1;
            let card: Card = match rng.gen_range_usize(0..outcomes) {
                0 => EnergyCard::new(self.ids.alloc(), format!("Energy Card {}", number)).into(),
                1 => TrainerCard::draw(
                    self.ids.alloc(),
                    format!("Draw Trainer {}", number),
                    config.draw_trainer_cards,
                )
                .into(),
                2 => TrainerCard::heal(
                    self.ids.alloc(),
                    format!("Heal Trainer {}", number),
                    config.heal_trainer_amount,
                )
                .into(),
                _ => continue,
            };
            self.cards.push(card);
        }

        Ok(self.cards.len() - before)
    }

    /// Uniformly permute the deck.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card, or `None` if the deck is empty.
    pub fn draw_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove and return a card from a uniformly random position.
    ///
    /// Returns `None` if the deck is empty.
    pub fn draw_random(&mut self, rng: &mut GameRng) -> Option<Card> {
        let index = rng.gen_index(self.cards.len())?;
        Some(self.cards.remove(index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Top card without drawing it.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    #[must_use]
    pub fn pokemon_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_pokemon()).count()
    }

    /// Card count per category.
    #[must_use]
    pub fn composition(&self) -> FxHashMap<CardCategory, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(CardCategory::of(card)).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntityId;

    #[test]
    fn test_fill_reaches_deck_size() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::new();
        let config = GameConfig::default().with_pokemon_count(20);

        let added = deck.fill(&config, &mut rng).unwrap();

        assert_eq!(added, 60);
        assert_eq!(deck.len(), 60);
        assert_eq!(deck.pokemon_count(), 20);
    }

    #[test]
    fn test_fill_zero_and_all_pokemon() {
        let mut rng = GameRng::new(1);

        let mut none = Deck::new();
        none.fill(&GameConfig::default().with_pokemon_count(0), &mut rng).unwrap();
        assert_eq!(none.pokemon_count(), 0);
        assert_eq!(none.len(), 60);

        let mut all = Deck::new();
        all.fill(&GameConfig::default().with_pokemon_count(60), &mut rng).unwrap();
        assert_eq!(all.pokemon_count(), 60);
        assert_eq!(all.len(), 60);
    }

    #[test]
    fn test_fill_rejects_too_many_pokemon() {
        let mut rng = GameRng::new(1);
        let mut deck = Deck::new();

        let result = deck.fill(&GameConfig::default().with_pokemon_count(61), &mut rng);

        assert!(result.is_err());
        assert!(deck.is_empty());
    }

    #[test]
    fn test_legacy_filler_comes_up_short() {
        let mut rng = GameRng::new(42);
        let mut deck = Deck::new();
        let config = GameConfig::default()
            .with_pokemon_count(0)
            .with_filler_policy(FillerPolicy::Legacy);

        let added = deck.fill(&config, &mut rng).unwrap();

        // 60 draws with a 1/4 chance of skipping each; a full deck is
        // vanishingly unlikely.
        assert!(added < 60);
        assert!(added > 20);
    }

    #[test]
    fn test_filler_uses_configured_trainer_values() {
        use crate::cards::TrainerEffect;

        let mut rng = GameRng::new(3);
        let mut deck = Deck::new();
        let config = GameConfig::default()
            .with_pokemon_count(0)
            .with_draw_trainer_cards(3)
            .with_heal_trainer_amount(40);
        deck.fill(&config, &mut rng).unwrap();

        for trainer in deck.cards().iter().filter_map(Card::as_trainer) {
            match trainer.effect {
                TrainerEffect::Draw { cards } => assert_eq!(cards, 3),
                TrainerEffect::Heal { amount } => assert_eq!(amount, 40),
            }
        }
    }

    #[test]
    fn test_fill_counts_existing_cards() {
        let mut rng = GameRng::new(5);
        let mut deck = Deck::from_cards(vec![Species::Pikachu.card(EntityId(0)).into()]);

        let added = deck.fill(&GameConfig::default().with_pokemon_count(4), &mut rng).unwrap();

        assert_eq!(added, 59);
        assert_eq!(deck.len(), 60);
        assert_eq!(deck.pokemon_count(), 5);

        let mut ids: Vec<_> = deck.cards().iter().map(Card::id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 60);
    }

    #[test]
    fn test_fill_rejects_overfull_deck() {
        let mut rng = GameRng::new(5);
        let mut deck = Deck::new();
        deck.fill(&GameConfig::default(), &mut rng).unwrap();

        let err = deck
            .fill(&GameConfig::default().with_pokemon_count(1), &mut rng)
            .unwrap_err();

        assert_eq!(
            err,
            DeckError::Overfull {
                existing: 60,
                pokemon_count: 1,
                deck_size: 60,
            }
        );
        assert_eq!(deck.len(), 60);

        // A full deck with nothing more requested is left as is.
        assert_eq!(deck.fill(&GameConfig::default().with_pokemon_count(0), &mut rng), Ok(0));
    }

    #[test]
    fn test_standard_deck() {
        let deck = Deck::standard();
        let composition = deck.composition();

        assert_eq!(deck.len(), 60);
        assert_eq!(composition[&CardCategory::Pokemon], 4);
        assert_eq!(composition[&CardCategory::Energy], 15);
        assert_eq!(composition[&CardCategory::HealTrainer], 21);
        assert_eq!(composition[&CardCategory::DrawTrainer], 20);

        let names: Vec<_> = deck
            .cards()
            .iter()
            .filter(|c| c.is_pokemon())
            .map(Card::name)
            .collect();
        assert_eq!(names, ["Pikachu", "Charmander", "Bulbasaur", "Squirtle"]);
    }

    #[test]
    fn test_draw_card_from_top() {
        let mut deck = Deck::standard();

        let top = deck.draw_card().unwrap();
        assert_eq!(top.name(), "Heal Trainer 41");
        assert_eq!(deck.len(), 59);
    }

    #[test]
    fn test_draw_from_empty_deck() {
        let mut rng = GameRng::new(0);
        let mut deck = Deck::new();

        assert!(deck.draw_card().is_none());
        assert!(deck.draw_random(&mut rng).is_none());
        assert!(deck.top_card().is_none());
    }

    #[test]
    fn test_draw_random_removes_one() {
        let mut rng = GameRng::new(9);
        let mut deck = Deck::standard();

        let drawn = deck.draw_random(&mut rng).unwrap();

        assert_eq!(deck.len(), 59);
        assert!(deck.cards().iter().all(|c| c.id() != drawn.id()));
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let mut a = Deck::standard();
        let mut b = Deck::standard();

        a.shuffle(&mut GameRng::new(11));
        b.shuffle(&mut GameRng::new(11));

        assert_eq!(a, b);
        assert_ne!(a.cards(), Deck::standard().cards());
    }

    #[test]
    fn test_from_cards_allocates_above_existing_ids() {
        let mut rng = GameRng::new(2);
        let mut deck = Deck::from_cards(vec![Species::Pikachu.card(EntityId(41)).into()]);

        deck.fill(&GameConfig::default().with_deck_size(1).with_pokemon_count(0), &mut rng)
            .unwrap();

        assert!(deck.cards()[1..].iter().all(|c| c.id().raw() >= 42));
    }
}
