//! Players: seat identifiers, per-seat storage, and the player's side of
//! the table (hand and active Pokémon).
//!
//! ## PlayerId
//!
//! Type-safe seat identifier for the two-player game.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! A hand of cards plus at most one active Pokémon. The deck is never
//! stored here; operations that draw take it by reference.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::entity::EntityId;
use super::error::TurnFault;
use crate::cards::{Card, PokemonCard, TrainerEffect};
use crate::zones::Deck;

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Player seat. The first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub const FIRST: PlayerId = PlayerId(0);
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Both seats in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage.
///
/// ```
/// use pokemon_tcg::core::{PlayerId, PlayerMap};
///
/// let mut damage: PlayerMap<u32> = PlayerMap::with_default();
/// damage[PlayerId::SECOND] += 20;
/// assert_eq!(damage[PlayerId::FIRST], 0);
/// assert_eq!(damage[PlayerId::SECOND], 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create from values in seat order.
    pub fn from_array(data: [T; PLAYER_COUNT]) -> Self {
        Self { data }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Mutable access to a player and their opponent at the same time.
    pub fn pair_mut(&mut self, player: PlayerId) -> (&mut T, &mut T) {
        let [first, second] = &mut self.data;
        if player == PlayerId::FIRST {
            (first, second)
        } else {
            (second, first)
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// What a trainer card did when it was used.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppliedEffect {
    Healed {
        pokemon: String,
        amount: u32,
        hit_points: u32,
    },
    Drew {
        cards: Vec<String>,
    },
}

/// A successfully used trainer card and its effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainerOutcome {
    /// The spent trainer, already removed from the hand.
    pub card: Card,
    pub effect: AppliedEffect,
}

/// One side of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    active: Option<PokemonCard>,
}

impl Player {
    /// Create a player with an empty hand and no active Pokémon.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            active: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hand contents. Order is stable between mutations.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn active_pokemon(&self) -> Option<&PokemonCard> {
        self.active.as_ref()
    }

    pub fn active_pokemon_mut(&mut self) -> Option<&mut PokemonCard> {
        self.active.as_mut()
    }

    /// Add a card to the hand.
    pub fn draw_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Remove and return the card at `index`.
    ///
    /// Panics if `index` is out of range: callers must only pass indices
    /// they obtained from this hand.
    pub fn play_card(&mut self, index: usize) -> Card {
        assert!(
            index < self.hand.len(),
            "Invalid card index {} for a hand of {} cards",
            index,
            self.hand.len()
        );
        self.hand.remove(index)
    }

    /// Promote the first Pokémon in the hand to the empty active slot.
    ///
    /// Returns the new active Pokémon, or `None` (changing nothing) if the
    /// slot is already occupied or the hand holds no Pokémon. A fainted
    /// Pokémon must be taken out with `discard_fainted` first.
    pub fn draw_pokemon(&mut self) -> Option<&PokemonCard> {
        if self.active.is_some() {
            return None;
        }
        let index = self.hand.iter().position(Card::is_pokemon)?;
        match self.hand.remove(index) {
            Card::Pokemon(pokemon) => {
                self.active = Some(pokemon);
                self.active.as_ref()
            }
            other => {
                self.hand.insert(index, other);
                None
            }
        }
    }

    #[must_use]
    pub fn has_pokemon_in_hand(&self) -> bool {
        self.hand.iter().any(Card::is_pokemon)
    }

    /// True if an active Pokémon is set and still has hit points.
    #[must_use]
    pub fn has_active_pokemon(&self) -> bool {
        self.active.as_ref().is_some_and(|p| !p.is_fainted())
    }

    /// True if the player has no usable Pokémon anywhere.
    #[must_use]
    pub fn is_out_of_pokemon(&self) -> bool {
        !self.has_active_pokemon() && !self.has_pokemon_in_hand()
    }

    /// Hand indices of trainer cards.
    #[must_use]
    pub fn trainer_indices(&self) -> Vec<usize> {
        self.hand
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_trainer())
            .map(|(i, _)| i)
            .collect()
    }

    /// Clear a fainted active Pokémon and hand it back for discarding.
    pub fn discard_fainted(&mut self) -> Option<PokemonCard> {
        if self.active.as_ref().is_some_and(PokemonCard::is_fainted) {
            self.active.take()
        } else {
            None
        }
    }

    /// Use the trainer card at `index`.
    ///
    /// - Heal trainers heal the active Pokémon.
    /// - Draw trainers draw from the top of `deck` into the hand.
    ///
    /// On success the trainer is removed from the hand and returned in the
    /// outcome. On any fault the player and the deck are left unchanged.
    pub fn use_trainer_card(
        &mut self,
        index: usize,
        deck: &mut Deck,
    ) -> Result<TrainerOutcome, TurnFault> {
        let effect = match self.hand.get(index) {
            None => {
                return Err(TurnFault::InvalidSelection {
                    index,
                    hand_size: self.hand.len(),
                })
            }
            Some(Card::Trainer(trainer)) => trainer.effect,
            Some(other) => {
                return Err(TurnFault::NotATrainer {
                    index,
                    card: other.to_string(),
                })
            }
        };

        let applied = match effect {
            TrainerEffect::Heal { amount } => {
                let pokemon = self.active.as_mut().ok_or(TurnFault::NoActivePokemon)?;
                pokemon.heal(amount);
                AppliedEffect::Healed {
                    pokemon: pokemon.name.clone(),
                    amount,
                    hit_points: pokemon.hit_points(),
                }
            }
            TrainerEffect::Draw { cards } => {
                if deck.len() < cards as usize {
                    return Err(TurnFault::NotEnoughCards {
                        requested: cards,
                        available: deck.len(),
                    });
                }
                let mut drawn = Vec::with_capacity(cards as usize);
                while drawn.len() < cards as usize {
                    let Some(card) = deck.draw_card() else { break };
                    drawn.push(card.to_string());
                    self.hand.push(card);
                }
                AppliedEffect::Drew { cards: drawn }
            }
        };

        // Drawn cards were appended, so `index` still points at the trainer.
        let card = self.hand.remove(index);
        Ok(TrainerOutcome {
            card,
            effect: applied,
        })
    }

    /// IDs of every card this player holds (hand and active slot).
    pub fn card_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.hand
            .iter()
            .map(Card::id)
            .chain(self.active.as_ref().map(|p| p.id))
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}'s Hand:", self.name)?;
        for card in &self.hand {
            write!(f, "{} | ", card)?;
        }
        writeln!(f)?;
        match &self.active {
            Some(pokemon) => write!(f, "Active Pokémon: {}", pokemon),
            None => write!(f, "Active Pokémon: None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{EnergyCard, Species, TrainerCard};

    fn energy(id: u32) -> Card {
        EnergyCard::new(EntityId(id), format!("Energy Card {}", id)).into()
    }

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::FIRST.index(), 0);
        assert_eq!(PlayerId::FIRST.opponent(), PlayerId::SECOND);
        assert_eq!(PlayerId::SECOND.opponent(), PlayerId::FIRST);
        assert_eq!(format!("{}", PlayerId::FIRST), "Player 1");
        assert_eq!(PlayerId::all().count(), 2);
    }

    #[test]
    fn test_opponent_of_out_of_range_seat_does_not_underflow() {
        let seat: PlayerId = serde_json::from_str("2").unwrap();

        assert_eq!(seat.opponent(), PlayerId(3));
        assert_eq!(seat.opponent().opponent(), seat);
    }

    #[test]
    fn test_player_map_pair_mut() {
        let mut map: PlayerMap<i32> = PlayerMap::from_array([1, 2]);

        let (me, them) = map.pair_mut(PlayerId::SECOND);
        *me += 10;
        *them += 100;

        assert_eq!(map[PlayerId::FIRST], 101);
        assert_eq!(map[PlayerId::SECOND], 12);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::new(|p| p.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    fn test_draw_pokemon_takes_first_in_hand() {
        let mut player = Player::new("Ash");
        player.draw_card(energy(0));
        player.draw_card(Species::Squirtle.card(EntityId(1)).into());
        player.draw_card(Species::Pikachu.card(EntityId(2)).into());

        let active = player.draw_pokemon().map(|p| p.name.clone());

        assert_eq!(active.as_deref(), Some("Squirtle"));
        assert_eq!(player.hand().len(), 2);
        assert!(player.has_active_pokemon());
        assert!(player.has_pokemon_in_hand());
    }

    #[test]
    fn test_draw_pokemon_keeps_occupied_slot() {
        let mut player = Player::new("Ash");
        player.draw_card(Species::Pikachu.card(EntityId(0)).into());
        player.draw_card(Species::Squirtle.card(EntityId(1)).into());

        player.draw_pokemon();
        assert!(player.draw_pokemon().is_none());

        let mut ids: Vec<_> = player.card_ids().collect();
        ids.sort();
        assert_eq!(ids, vec![EntityId(0), EntityId(1)]);
        assert_eq!(player.active_pokemon().map(|p| p.id), Some(EntityId(0)));

        // A fainted Pokémon stays until it is discarded.
        player.active_pokemon_mut().unwrap().take_damage(60);
        assert!(player.draw_pokemon().is_none());
        assert_eq!(player.card_ids().count(), 2);

        player.discard_fainted();
        assert_eq!(player.draw_pokemon().map(|p| p.id), Some(EntityId(1)));
    }

    #[test]
    fn test_draw_pokemon_without_pokemon_is_noop() {
        let mut player = Player::new("Misty");
        player.draw_card(energy(0));

        assert!(player.draw_pokemon().is_none());
        assert!(player.active_pokemon().is_none());
        assert_eq!(player.hand().len(), 1);
        assert!(player.is_out_of_pokemon());
    }

    #[test]
    fn test_fainted_active_is_not_active() {
        let mut player = Player::new("Brock");
        player.draw_card(Species::Bulbasaur.card(EntityId(0)).into());
        player.draw_pokemon();

        player.active_pokemon_mut().unwrap().take_damage(60);

        assert!(!player.has_active_pokemon());
        let fainted = player.discard_fainted().unwrap();
        assert_eq!(fainted.hit_points(), 0);
        assert!(player.active_pokemon().is_none());
        assert!(player.discard_fainted().is_none());
    }

    #[test]
    fn test_heal_trainer() {
        let mut deck = Deck::new();
        let mut player = Player::new("Ash");
        player.draw_card(Species::Pikachu.card(EntityId(0)).into());
        player.draw_pokemon();
        player.active_pokemon_mut().unwrap().take_damage(30);
        player.draw_card(TrainerCard::heal(EntityId(1), "Heal Trainer 1", 20).into());

        let outcome = player.use_trainer_card(0, &mut deck).unwrap();

        assert_eq!(outcome.card.id(), EntityId(1));
        assert_eq!(
            outcome.effect,
            AppliedEffect::Healed {
                pokemon: "Pikachu".to_string(),
                amount: 20,
                hit_points: 50,
            }
        );
        assert!(player.hand().is_empty());
    }

    #[test]
    fn test_heal_trainer_without_active_is_noop() {
        let mut deck = Deck::new();
        let mut player = Player::new("Ash");
        player.draw_card(TrainerCard::heal(EntityId(1), "Heal Trainer 1", 20).into());
        let before = player.clone();

        let result = player.use_trainer_card(0, &mut deck);

        assert_eq!(result, Err(TurnFault::NoActivePokemon));
        assert_eq!(player, before);
    }

    #[test]
    fn test_draw_trainer_draws_from_top() {
        let mut deck = Deck::standard();
        let mut player = Player::new("Ash");
        player.draw_card(energy(100));
        player.draw_card(TrainerCard::draw(EntityId(101), "Draw Trainer 1", 2).into());

        let outcome = player.use_trainer_card(1, &mut deck).unwrap();

        assert_eq!(outcome.card.name(), "Draw Trainer 1");
        assert_eq!(deck.len(), 58);
        let names: Vec<_> = player.hand().iter().map(Card::name).collect();
        assert_eq!(names, ["Energy Card 100", "Heal Trainer 41", "Draw Trainer 40"]);
    }

    #[test]
    fn test_draw_trainer_with_short_deck_is_noop() {
        let mut deck = Deck::from_cards(vec![energy(0)]);
        let mut player = Player::new("Ash");
        player.draw_card(TrainerCard::draw(EntityId(1), "Draw Trainer 1", 2).into());

        let result = player.use_trainer_card(0, &mut deck);

        assert_eq!(
            result,
            Err(TurnFault::NotEnoughCards {
                requested: 2,
                available: 1
            })
        );
        assert_eq!(player.hand().len(), 1);
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_use_non_trainer_is_rejected() {
        let mut deck = Deck::new();
        let mut player = Player::new("Ash");
        player.draw_card(energy(0));

        let result = player.use_trainer_card(0, &mut deck);

        assert!(matches!(result, Err(TurnFault::NotATrainer { index: 0, .. })));
        assert_eq!(player.hand().len(), 1);
    }

    #[test]
    fn test_use_out_of_range_is_rejected() {
        let mut deck = Deck::new();
        let mut player = Player::new("Ash");

        let result = player.use_trainer_card(3, &mut deck);

        assert_eq!(
            result,
            Err(TurnFault::InvalidSelection {
                index: 3,
                hand_size: 0
            })
        );
    }

    #[test]
    #[should_panic(expected = "Invalid card index")]
    fn test_play_card_out_of_range_panics() {
        let mut player = Player::new("Ash");
        player.play_card(0);
    }

    #[test]
    fn test_trainer_indices_and_card_ids() {
        let mut player = Player::new("Ash");
        player.draw_card(energy(0));
        player.draw_card(TrainerCard::heal(EntityId(1), "Heal Trainer 1", 20).into());
        player.draw_card(Species::Pikachu.card(EntityId(2)).into());
        player.draw_card(TrainerCard::draw(EntityId(3), "Draw Trainer 2", 1).into());
        player.draw_pokemon();

        assert_eq!(player.trainer_indices(), vec![1, 2]);
        let mut ids: Vec<_> = player.card_ids().collect();
        ids.sort();
        assert_eq!(ids, vec![EntityId(0), EntityId(1), EntityId(2), EntityId(3)]);
    }

    #[test]
    fn test_display() {
        let mut player = Player::new("Ash");
        player.draw_card(energy(0));

        assert_eq!(
            player.to_string(),
            "Ash's Hand:\nEnergy: Energy Card 0 | \nActive Pokémon: None"
        );
    }
}
